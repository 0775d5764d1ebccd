/// Camera — position, orientation and projection for a renderer.
///
/// The camera keeps its view and projection matrices eagerly in sync with
/// its parameters: every mutator rebuilds the matrix it affects. The
/// combined view-projection matrix is the one lazily computed value, cached
/// behind a dirty flag and refreshed on read.
///
/// Regular mutators never fail and never branch on their input: zero-length
/// vectors, parallel forward/up or a zero window height produce NaN/inf
/// matrices. The `try_*` variants validate first and leave the camera
/// untouched on rejection.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use super::camera_config::{CameraConfig, DepthRange};
use super::camera_uniform::CameraUniform;
use super::frustum::Frustum;
use super::viewport::Viewport;

const LOG_SOURCE: &str = "camera3d::Camera";

/// Squared length under which a direction is treated as zero
const MIN_LENGTH_SQUARED: f32 = 1e-12;

/// Shared, reference-counted camera handle.
///
/// Lifetime is that of the longest holder (renderer, scene, game logic...).
pub type CameraRef = Rc<RefCell<Camera>>;

/// Perspective / orthographic camera
#[derive(Debug, Clone)]
pub struct Camera {
    near_plane: f32,
    far_plane: f32,
    fov_radians: f32,
    aspect_ratio: f32,
    ortho_vertical_scale: f32,
    ortho_enabled: bool,
    depth_range: DepthRange,

    position: Vec3,
    forward: Vec3,
    up: Vec3,

    viewport: Option<Viewport>,

    view: Mat4,
    projection: Mat4,

    // Refreshed lazily by view_projection()
    view_projection: Cell<Mat4>,
    dirty: Cell<bool>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::with_config(CameraConfig::default())
    }
}

impl Camera {
    /// Create a camera with default parameters
    /// (perspective, 90° vertical FOV, looking down +Z from the origin).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared camera handle with default parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use camera_3d::camera3d::Camera;
    /// use camera_3d::glam::Vec3;
    ///
    /// let camera = Camera::create();
    /// let renderer_handle = camera.clone();
    ///
    /// camera.borrow_mut().set_position(Vec3::new(0.0, 2.0, 5.0));
    /// assert_eq!(renderer_handle.borrow().position(), Vec3::new(0.0, 2.0, 5.0));
    /// ```
    pub fn create() -> CameraRef {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Create a camera from explicit parameters.
    ///
    /// `forward` and `up` are normalized; both matrices are built immediately.
    pub fn with_config(config: CameraConfig) -> Self {
        let mut camera = Self {
            near_plane: config.near_plane,
            far_plane: config.far_plane,
            fov_radians: config.fov_radians,
            aspect_ratio: config.aspect_ratio,
            ortho_vertical_scale: config.ortho_vertical_scale,
            ortho_enabled: config.ortho_enabled,
            depth_range: config.depth_range,
            position: config.position,
            forward: config.forward.normalize(),
            up: config.up.normalize(),
            viewport: None,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view_projection: Cell::new(Mat4::IDENTITY),
            dirty: Cell::new(true),
        };
        camera.recalculate_view();
        camera.recalculate_projection();
        camera
    }

    // ===== ORIENTATION =====

    /// Set the camera's position in world space.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.recalculate_view();
    }

    /// Set the direction the camera faces. Stored normalized.
    pub fn set_forward(&mut self, forward: Vec3) {
        self.forward = forward.normalize();
        self.recalculate_view();
    }

    /// Set the camera's up reference. Stored normalized.
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up.normalize();
        self.recalculate_view();
    }

    /// Face the given world-space point.
    ///
    /// The current up vector is kept as-is; the view matrix construction
    /// orthogonalizes against it. `point` must differ from the position.
    pub fn look_at(&mut self, point: Vec3) {
        self.forward = (point - self.position).normalize();
        self.recalculate_view();
    }

    // ===== PROJECTION =====

    /// Notify the camera that the window was resized.
    ///
    /// Aspect ratio becomes `width / height`; `height` must be non-zero.
    pub fn resize_window(&mut self, width: u32, height: u32) {
        let viewport = Viewport::from_window_size(width, height);
        self.aspect_ratio = viewport.aspect_ratio();
        self.viewport = Some(viewport);
        crate::camera_debug!(LOG_SOURCE, "Window resized to {}x{} (aspect {})", width, height, self.aspect_ratio);
        self.recalculate_projection();
    }

    /// Switch between orthographic (`true`) and perspective (`false`) projection.
    pub fn set_ortho_enabled(&mut self, enabled: bool) {
        if enabled != self.ortho_enabled {
            crate::camera_debug!(
                LOG_SOURCE,
                "Projection mode: {}",
                if enabled { "orthographic" } else { "perspective" }
            );
        }
        self.ortho_enabled = enabled;
        self.recalculate_projection();
    }

    /// Set the vertical field of view in radians.
    ///
    /// Stored in orthographic mode too, used once perspective is re-enabled.
    pub fn set_fov_radians(&mut self, fov: f32) {
        self.fov_radians = fov;
        self.recalculate_projection();
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fov_degrees(&mut self, fov: f32) {
        self.set_fov_radians(fov.to_radians());
    }

    /// Set how many world units fit vertically in orthographic mode.
    ///
    /// For 1 unit = 1 pixel, pass the window height.
    pub fn set_ortho_vertical_scale(&mut self, scale: f32) {
        self.ortho_vertical_scale = scale;
        self.recalculate_projection();
    }

    /// Set the near and far clip plane distances.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near_plane = near;
        self.far_plane = far;
        self.recalculate_projection();
    }

    /// Select the clip-space depth convention of the projection matrix.
    pub fn set_depth_range(&mut self, depth_range: DepthRange) {
        self.depth_range = depth_range;
        self.recalculate_projection();
    }

    // ===== VALIDATED MUTATORS =====

    /// `set_forward()` rejecting zero-length, non-finite or up-parallel directions.
    pub fn try_set_forward(&mut self, forward: Vec3) -> Result<()> {
        let forward = checked_direction("forward", forward)?;
        check_not_parallel(forward, self.up)?;
        self.forward = forward;
        self.recalculate_view();
        Ok(())
    }

    /// `set_up()` rejecting zero-length, non-finite or forward-parallel directions.
    pub fn try_set_up(&mut self, up: Vec3) -> Result<()> {
        let up = checked_direction("up", up)?;
        check_not_parallel(self.forward, up)?;
        self.up = up;
        self.recalculate_view();
        Ok(())
    }

    /// `look_at()` rejecting a target at the camera position or straight
    /// along the up vector.
    pub fn try_look_at(&mut self, point: Vec3) -> Result<()> {
        if !point.is_finite() {
            return Err(reject(format!("look-at target {} is not finite", point)));
        }
        let forward = checked_direction("look-at direction", point - self.position)?;
        check_not_parallel(forward, self.up)?;
        self.forward = forward;
        self.recalculate_view();
        Ok(())
    }

    /// `resize_window()` rejecting empty windows.
    pub fn try_resize_window(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(reject(format!("window size {}x{} is empty", width, height)));
        }
        self.resize_window(width, height);
        Ok(())
    }

    /// `set_clip_planes()` requiring finite planes with `far > near`,
    /// and `near > 0` while in perspective mode.
    pub fn try_set_clip_planes(&mut self, near: f32, far: f32) -> Result<()> {
        if !near.is_finite() || !far.is_finite() {
            return Err(reject(format!("clip planes ({}, {}) are not finite", near, far)));
        }
        if far <= near {
            return Err(reject(format!("far plane {} is not beyond near plane {}", far, near)));
        }
        if !self.ortho_enabled && near <= 0.0 {
            return Err(reject(format!("perspective near plane {} must be positive", near)));
        }
        self.set_clip_planes(near, far);
        Ok(())
    }

    // ===== GETTERS =====

    /// Position in world space
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit direction the camera faces
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Unit up reference
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right direction (forward × up)
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up).normalize()
    }

    /// World units visible vertically in orthographic mode
    pub fn ortho_vertical_scale(&self) -> f32 {
        self.ortho_vertical_scale
    }

    /// Whether the projection is orthographic
    pub fn ortho_enabled(&self) -> bool {
        self.ortho_enabled
    }

    pub fn fov_radians(&self) -> f32 {
        self.fov_radians
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_radians.to_degrees()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }

    /// Viewport from the last `resize_window()`, if any.
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// View matrix (world → camera space).
    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    /// Projection matrix (camera → clip space).
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Combined view-projection matrix (projection * view).
    ///
    /// Recomputed here only if a mutator ran since the last read.
    pub fn view_projection(&self) -> Mat4 {
        if self.dirty.get() {
            self.view_projection.set(self.projection * self.view);
            self.dirty.set(false);
        }
        self.view_projection.get()
    }

    /// Frustum planes of the current view-projection, for culling.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection_with_depth(&self.view_projection(), self.depth_range)
    }

    /// GPU-uploadable snapshot of the camera matrices.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(self)
    }

    // ===== INTERNAL =====

    fn recalculate_view(&mut self) {
        self.view = Mat4::look_at_rh(self.position, self.position + self.forward, self.up);
        self.dirty.set(true);
    }

    fn recalculate_projection(&mut self) {
        let (near, far) = (self.near_plane, self.far_plane);

        self.projection = if self.ortho_enabled {
            let half_height = self.ortho_vertical_scale * 0.5;
            let half_width = half_height * self.aspect_ratio;
            match self.depth_range {
                DepthRange::NegativeOneToOne => {
                    Mat4::orthographic_rh_gl(-half_width, half_width, -half_height, half_height, near, far)
                }
                DepthRange::ZeroToOne => {
                    Mat4::orthographic_rh(-half_width, half_width, -half_height, half_height, near, far)
                }
            }
        } else {
            match self.depth_range {
                DepthRange::NegativeOneToOne => {
                    Mat4::perspective_rh_gl(self.fov_radians, self.aspect_ratio, near, far)
                }
                DepthRange::ZeroToOne => {
                    Mat4::perspective_rh(self.fov_radians, self.aspect_ratio, near, far)
                }
            }
        };
        self.dirty.set(true);
    }
}

/// Log a rejected argument and turn it into an error
fn reject(message: String) -> Error {
    crate::camera_error!(LOG_SOURCE, "Rejected argument: {}", message);
    Error::InvalidArgument(message)
}

/// Normalized `direction`, or an error if it is not finite or has no length
fn checked_direction(name: &str, direction: Vec3) -> Result<Vec3> {
    if !direction.is_finite() {
        return Err(reject(format!("{} vector {} is not finite", name, direction)));
    }
    if direction.length_squared() <= MIN_LENGTH_SQUARED {
        return Err(reject(format!("{} vector has zero length", name)));
    }
    Ok(direction.normalize())
}

/// Both inputs must already be unit length
fn check_not_parallel(forward: Vec3, up: Vec3) -> Result<()> {
    if forward.cross(up).length_squared() <= MIN_LENGTH_SQUARED {
        return Err(reject(format!("forward {} is parallel to up {}", forward, up)));
    }
    Ok(())
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
