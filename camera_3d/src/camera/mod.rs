//! Camera module — camera, projection settings, and culling helpers.
//!
//! The camera is owned and driven by the caller (renderer, game logic).
//! It is mutated in place, typically once per frame or on window resize,
//! and read back as view / projection / view-projection matrices.

mod aabb;
mod camera;
mod camera_config;
mod camera_uniform;
mod frustum;
mod viewport;

pub use aabb::AABB;
pub use camera::{Camera, CameraRef};
pub use camera_config::{CameraConfig, DepthRange};
pub use camera_uniform::CameraUniform;
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use viewport::Viewport;
