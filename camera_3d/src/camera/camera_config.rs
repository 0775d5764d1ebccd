/// Camera construction parameters.
///
/// Mirrors the way the renderer is configured: a plain struct with a
/// `Default` implementation, tweaked field by field by the caller and
/// handed to `Camera::with_config()`.

use glam::Vec3;

/// Clip-space depth convention used when building projection matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthRange {
    /// OpenGL convention: NDC z in [-1, 1]
    #[default]
    NegativeOneToOne,
    /// Vulkan / wgpu / Direct3D convention: NDC z in [0, 1]
    ZeroToOne,
}

/// Initial camera parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Distance to the near clip plane
    pub near_plane: f32,
    /// Distance to the far clip plane
    pub far_plane: f32,
    /// Vertical field of view in radians (perspective mode)
    pub fov_radians: f32,
    /// Width / height of the render target
    pub aspect_ratio: f32,
    /// World units visible vertically in orthographic mode
    pub ortho_vertical_scale: f32,
    /// Start in orthographic mode
    pub ortho_enabled: bool,
    /// World-space position
    pub position: Vec3,
    /// Facing direction (normalized on construction)
    pub forward: Vec3,
    /// Up reference (normalized on construction)
    pub up: Vec3,
    /// Clip-space depth convention
    pub depth_range: DepthRange,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            near_plane: 0.1,
            far_plane: 1000.0,
            fov_radians: 90.0_f32.to_radians(),
            aspect_ratio: 1.0,
            ortho_vertical_scale: 1.0,
            ortho_enabled: false,
            position: Vec3::ZERO,
            forward: Vec3::Z,
            up: Vec3::Y,
            depth_range: DepthRange::NegativeOneToOne,
        }
    }
}
