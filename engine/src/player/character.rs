//! First-Person Character
//!
//! Owns everything one first-person character needs and runs the per-frame
//! stages in a fixed order:
//!
//! 1. [`MovementController`] - move, look, crouch, camera height, FOV
//! 2. [`HeadBob`] - sway, reset, focus (reads the velocity from stage 1)
//!
//! Input arrives through [`InputTarget`], normally from an
//! [`InputRelay`](crate::input::InputRelay).
//!
//! # Usage
//!
//! ```rust,ignore
//! use fps_locomotion_engine::config::ControllerConfig;
//! use fps_locomotion_engine::physics::{CollisionWorld, FlatGroundBody};
//! use fps_locomotion_engine::player::FirstPersonCharacter;
//!
//! let body = FlatGroundBody::standing_at(Vec3::ZERO, 0.0);
//! let mut player = FirstPersonCharacter::new(body, CameraRig::new(), ControllerConfig::default());
//!
//! // Each frame, after feeding input events:
//! player.update(delta_time, &world);
//! let view = player.view_matrix();
//! ```

use glam::{Mat4, Vec2, Vec3};

use crate::camera::CameraRig;
use crate::config::ControllerConfig;
use crate::input::{InputTarget, MovementInput};
use crate::physics::{CharacterBody, OverlapQuery};

use super::head_bob::HeadBob;
use super::movement_controller::{MovementController, MovementState, clamp_delta};

/// A character body with a first-person camera, movement and head-bob.
#[derive(Debug, Clone)]
pub struct FirstPersonCharacter<B: CharacterBody> {
    body: B,
    rig: CameraRig,
    controller: MovementController,
    head_bob: HeadBob,
    state: MovementState,
    input: MovementInput,
    /// Total simulated time (seconds), drives the head-bob phase
    elapsed: f32,
}

impl<B: CharacterBody> FirstPersonCharacter<B> {
    /// Create a character, capturing rest heights and positions from `body`
    /// and `rig` as they are now.
    pub fn new(body: B, mut rig: CameraRig, config: ControllerConfig) -> Self {
        rig.fov = config.movement.normal_fov;
        let controller = MovementController::new(config.movement, &body, &rig);
        let head_bob = HeadBob::new(config.head_bob, &rig);

        Self {
            body,
            rig,
            controller,
            head_bob,
            state: MovementState::default(),
            input: MovementInput::default(),
            elapsed: 0.0,
        }
    }

    /// Run one frame: movement, then head-bob.
    ///
    /// The look delta is consumed; move, sprint and crouch persist until
    /// the next input event changes them.
    pub fn update<W: OverlapQuery + ?Sized>(&mut self, dt: f32, world: &W) {
        let dt = clamp_delta(dt, self.controller.config().max_delta_time);

        self.state = self.controller.update(
            self.state,
            &self.input,
            &mut self.body,
            world,
            &mut self.rig,
            dt,
        );

        self.elapsed += dt;
        self.head_bob
            .update(&self.body, &mut self.rig, self.elapsed, dt);

        self.input.look_delta = Vec2::ZERO;
    }

    /// Attempt to jump. Returns true if the body was grounded.
    pub fn try_jump(&mut self) -> bool {
        self.controller.try_jump(&mut self.state, &self.body)
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    pub fn controller(&self) -> &MovementController {
        &self.controller
    }

    pub fn head_bob(&self) -> &HeadBob {
        &self.head_bob
    }

    pub fn head_bob_mut(&mut self) -> &mut HeadBob {
        &mut self.head_bob
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn input(&self) -> &MovementInput {
        &self.input
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// World position of the camera.
    pub fn camera_position(&self) -> Vec3 {
        self.rig
            .world_position(self.body.position(), self.body.yaw())
    }

    /// World forward direction of the camera.
    pub fn camera_forward(&self) -> Vec3 {
        self.rig.forward(self.body.yaw())
    }

    /// View matrix of the camera.
    pub fn view_matrix(&self) -> Mat4 {
        self.rig
            .view_matrix(self.body.position(), self.body.yaw())
    }
}

impl<B: CharacterBody> InputTarget for FirstPersonCharacter<B> {
    fn input_mut(&mut self) -> &mut MovementInput {
        &mut self.input
    }

    fn try_jump(&mut self) -> bool {
        self.controller.try_jump(&mut self.state, &self.body)
    }
}
