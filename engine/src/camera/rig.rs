//! First-Person Camera Rig
//!
//! The camera hangs off the character body in two levels:
//!
//! ```text
//! body (position, yaw)
//!  └─ holder      local offset: eye height, lowered while crouched
//!      └─ camera  local position: head-bob offset
//!                 local rotation: pitch (or a look-at from head-bob)
//!                 lens field of view
//! ```
//!
//! The holder never rotates on its own, so the camera's world rotation is
//! body yaw followed by the camera's local rotation.
//!
//! # Coordinate System
//! - +X = right
//! - +Y = up
//! - -Z = forward
//!
//! Pitch is in degrees and positive pitch looks **down**, so mouse-up input
//! (positive look y) lowers the pitch value.

use glam::{Mat4, Quat, Vec3};

use crate::physics::yaw_rotation;

/// Default eye height of the holder above the body position (meters)
pub const DEFAULT_HOLDER_HEIGHT: f32 = 0.6;

/// Default lens field of view (degrees)
pub const DEFAULT_FOV: f32 = 60.0;

/// Camera rig attached to a character body.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    /// Holder position relative to the body (eye height lives in `y`)
    pub holder_offset: Vec3,
    /// Camera position relative to the holder (head-bob lives here)
    pub local_position: Vec3,
    /// Camera rotation relative to the body
    pub local_rotation: Quat,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Viewport width / height
    pub aspect: f32,
    /// Near clip plane distance
    pub z_near: f32,
    /// Far clip plane distance
    pub z_far: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            holder_offset: Vec3::new(0.0, DEFAULT_HOLDER_HEIGHT, 0.0),
            local_position: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
            fov: DEFAULT_FOV,
            aspect: 16.0 / 9.0,
            z_near: 0.05,
            z_far: 1000.0,
        }
    }
}

impl CameraRig {
    /// Create a rig with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rig with the holder at a custom eye height
    pub fn with_holder_height(height: f32) -> Self {
        Self {
            holder_offset: Vec3::new(0.0, height, 0.0),
            ..Default::default()
        }
    }

    /// Set the starting field of view (degrees)
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set the aspect ratio from a viewport size
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Set the local rotation from a pitch angle in degrees (positive = down)
    ///
    /// No roll, no yaw, no smoothing.
    #[inline]
    pub fn set_pitch(&mut self, pitch_degrees: f32) {
        self.local_rotation = Quat::from_rotation_x(-pitch_degrees.to_radians());
    }

    /// Pitch of the current local rotation in degrees (positive = down)
    pub fn local_pitch(&self) -> f32 {
        let forward = self.local_rotation * Vec3::NEG_Z;
        -forward.y.clamp(-1.0, 1.0).asin().to_degrees()
    }

    /// World position of the holder
    #[inline]
    pub fn holder_world_position(&self, body_position: Vec3, body_yaw: f32) -> Vec3 {
        body_position + yaw_rotation(body_yaw) * self.holder_offset
    }

    /// World position of the camera
    #[inline]
    pub fn world_position(&self, body_position: Vec3, body_yaw: f32) -> Vec3 {
        body_position + yaw_rotation(body_yaw) * (self.holder_offset + self.local_position)
    }

    /// World rotation of the camera
    #[inline]
    pub fn world_rotation(&self, body_yaw: f32) -> Quat {
        yaw_rotation(body_yaw) * self.local_rotation
    }

    /// World forward direction of the camera (normalized)
    #[inline]
    pub fn forward(&self, body_yaw: f32) -> Vec3 {
        (self.world_rotation(body_yaw) * Vec3::NEG_Z).normalize()
    }

    /// World up direction of the camera (normalized)
    #[inline]
    pub fn up(&self, body_yaw: f32) -> Vec3 {
        (self.world_rotation(body_yaw) * Vec3::Y).normalize()
    }

    /// Point the camera at a world-space target
    ///
    /// Rewrites the local rotation so the camera's forward axis passes
    /// through `target`, keeping world up (no roll). Does nothing when the
    /// target sits on top of the camera.
    pub fn look_at(&mut self, body_position: Vec3, body_yaw: f32, target: Vec3) {
        let to_target = target - self.world_position(body_position, body_yaw);
        if to_target.length_squared() < 1e-6 {
            return;
        }

        let local = (yaw_rotation(body_yaw).inverse() * to_target).normalize();
        let yaw = local.x.atan2(-local.z);
        let pitch_up = local.y.clamp(-1.0, 1.0).asin();

        self.local_rotation = Quat::from_rotation_y(-yaw) * Quat::from_rotation_x(pitch_up);
    }

    /// View matrix for rendering
    pub fn view_matrix(&self, body_position: Vec3, body_yaw: f32) -> Mat4 {
        Mat4::look_to_rh(
            self.world_position(body_position, body_yaw),
            self.forward(body_yaw),
            self.up(body_yaw),
        )
    }

    /// Perspective projection matrix for rendering
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.z_near, self.z_far)
    }
}
