//! Head Bob
//!
//! Cosmetic camera sway while walking. Runs after movement each frame:
//!
//! 1. If the body is grounded and moving at least `toggle_speed` on the
//!    ground plane, add a small offset to the camera's local position
//!    (vertical at `frequency`, sideways at half of it with twice the
//!    amplitude).
//! 2. Ease the camera back toward its rest position.
//! 3. Point the camera at a focus point ahead of the holder so the view
//!    stays steady while the camera itself moves.
//!
//! The sway only depends on the elapsed time, so starting to move again
//! resumes on the same phase without any ramp.

use glam::Vec3;

use crate::camera::CameraRig;
use crate::config::{FocusMode, HeadBobConfig};
use crate::physics::CharacterBody;

/// Squared distance at which the camera counts as back at rest
const REST_EPSILON_SQ: f32 = 1e-10;

/// Procedural head-bob applied to a [`CameraRig`].
#[derive(Debug, Clone)]
pub struct HeadBob {
    config: HeadBobConfig,
    /// Camera local position when the rig was attached
    rest_position: Vec3,
}

impl HeadBob {
    /// Create a head-bob, recording the rig's current camera position as rest.
    pub fn new(config: HeadBobConfig, rig: &CameraRig) -> Self {
        Self {
            config,
            rest_position: rig.local_position,
        }
    }

    pub fn config(&self) -> &HeadBobConfig {
        &self.config
    }

    pub fn rest_position(&self) -> Vec3 {
        self.rest_position
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Sway offset at elapsed time `t` (seconds).
    pub fn motion(&self, t: f32) -> Vec3 {
        let c = &self.config;
        Vec3::new(
            (t * c.frequency * 0.5).cos() * c.amplitude * 2.0,
            (t * c.frequency).sin() * c.amplitude,
            0.0,
        )
    }

    /// Whether the body is moving fast enough on the ground to sway.
    pub fn should_bob<B: CharacterBody>(&self, body: &B) -> bool {
        let velocity = body.velocity();
        let planar_speed = Vec3::new(velocity.x, 0.0, velocity.z).length();
        planar_speed >= self.config.toggle_speed && body.is_grounded()
    }

    /// World-space point the camera looks at this frame.
    pub fn focus_target<B: CharacterBody>(&self, body: &B, rig: &CameraRig) -> Vec3 {
        let distance = self.config.focus_distance;
        match self.config.focus_mode {
            FocusMode::Level => {
                let holder = body.position() + Vec3::new(0.0, rig.holder_offset.y, 0.0);
                holder + body.forward() * distance
            }
            FocusMode::Pitched => {
                rig.holder_world_position(body.position(), body.yaw())
                    + rig.forward(body.yaw()) * distance
            }
        }
    }

    /// Run one frame. Returns true if a sway offset was added.
    ///
    /// `elapsed` is the total running time, `dt` the frame time after `clamp_delta`.
    pub fn update<B: CharacterBody>(
        &self,
        body: &B,
        rig: &mut CameraRig,
        elapsed: f32,
        dt: f32,
    ) -> bool {
        if !self.config.enabled {
            return false;
        }

        let bobbing = self.should_bob(body);
        if bobbing {
            rig.local_position += self.motion(elapsed);
        }

        self.reset_position(rig, dt);

        let target = self.focus_target(body, rig);
        rig.look_at(body.position(), body.yaw(), target);

        bobbing
    }

    fn reset_position(&self, rig: &mut CameraRig, dt: f32) {
        if rig.local_position.distance_squared(self.rest_position) < REST_EPSILON_SQ {
            return;
        }
        let t = (self.config.reset_rate * dt).clamp(0.0, 1.0);
        rig.local_position = rig.local_position.lerp(self.rest_position, t);
    }
}
