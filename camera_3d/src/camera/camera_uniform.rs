/// CameraUniform — GPU-ready snapshot of a camera.
///
/// Laid out for direct upload into a uniform buffer (std140 compatible:
/// three column-major mat4 followed by a vec4).

use bytemuck::{Pod, Zeroable};
use super::camera::Camera;

/// Camera matrices packed for a uniform buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    /// World → view, column-major
    pub view: [[f32; 4]; 4],
    /// View → clip, column-major
    pub projection: [[f32; 4]; 4],
    /// projection * view, column-major
    pub view_projection: [[f32; 4]; 4],
    /// Camera world position, w = 1
    pub position: [f32; 4],
}

impl CameraUniform {
    /// Capture the camera's current matrices.
    ///
    /// Reading the view-projection refreshes the camera's cache if needed.
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view().to_cols_array_2d(),
            projection: camera.projection().to_cols_array_2d(),
            view_projection: camera.view_projection().to_cols_array_2d(),
            position: camera.position().extend(1.0).to_array(),
        }
    }

    /// Raw bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "camera_uniform_tests.rs"]
mod tests;
