//! Viewport — window rectangle the camera renders into.
//!
//! Recorded by `Camera::resize_window()` so the renderer can read back the
//! size the projection was built for.

/// Viewport rectangle and depth range, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-window viewport anchored at the origin with a [0, 1] depth range.
    pub fn from_window_size(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    /// Width / height. Infinite or NaN for a zero-height viewport.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}
