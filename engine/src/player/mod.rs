//! Player Module
//!
//! First-person character movement and camera effects.
//!
//! # Components
//!
//! - [`MovementController`] - Walking, sprinting, crouching, jumping, mouse-look and FOV
//! - [`HeadBob`] - Cosmetic camera sway while walking on the ground
//! - [`FirstPersonCharacter`] - Owns body, camera and state; runs movement then head-bob

pub mod character;
pub mod head_bob;
pub mod movement_controller;

pub use character::FirstPersonCharacter;
pub use head_bob::HeadBob;
pub use movement_controller::{
    MovementController, MovementState,
    GROUND_STICK_VELOCITY, GROUNDED_EPSILON, SPRINT_SPEED_THRESHOLD, MOVE_INPUT_DEADZONE,
    clamp_delta, lerp, move_towards,
};
