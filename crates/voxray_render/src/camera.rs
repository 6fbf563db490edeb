//! First-person camera
//!
//! The camera has a 3D position and a yaw/pitch orientation. It supports:
//! - Mouse-look style rotation with a pitch limit
//! - Movement in camera-local axes
//! - Building the view and projection matrices for the uniform block

use std::f32::consts::FRAC_PI_2;

use voxray_math::{Mat4, Quat, Vec3};

/// Pitch is clamped to this magnitude (radians) to keep the view from flipping
pub const PITCH_LIMIT: f32 = 1.54;

/// Camera for viewing the scene
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// World-space eye position
    pub position: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,

    yaw: f32,   // about +Y
    pitch: f32, // about camera +X
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera in front of the demo chunk, looking down -Z at its center
    pub fn new() -> Self {
        Self {
            position: Vec3::new(16.0, 16.0, 60.0),
            fov_y: FRAC_PI_2,
            near: 0.1,
            far: 1000.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the projection parameters; `fov_y` in radians
    pub fn with_projection(mut self, fov_y: f32, near: f32, far: f32) -> Self {
        self.fov_y = fov_y;
        self.near = near;
        self.far = far;
        self
    }

    pub fn with_orientation(mut self, yaw: f32, pitch: f32) -> Self {
        self.set_orientation(yaw, pitch);
        self
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Mouse look
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.set_orientation(self.yaw + delta_yaw, self.pitch + delta_pitch);
    }

    /// Move along camera-local axes (right, up, back); forward is `-z`
    pub fn move_local(&mut self, delta: Vec3) {
        self.position += self.rotation() * delta;
    }

    /// Orientation only: yaw applied after pitch
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    /// Camera-to-world transform
    pub fn world_from_view(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position)
    }

    /// Projection for a viewport with the given aspect ratio
    pub fn clip_from_view(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    /// Get the forward direction vector
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Get the right direction vector
    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }
}
