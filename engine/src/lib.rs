//! FPS Locomotion Engine Library
//!
//! First-person character movement: walking, sprinting, crouching under
//! ceilings, jumping, mouse-look, sprint FOV and head-bob. The library does
//! no rendering and no collision resolution of its own; it drives a host
//! collision primitive through [`physics::CharacterBody`] and a camera rig.
//!
//! # Modules
//!
//! - [`input`] - Input events, the relay, key bindings, cursor capture
//! - [`player`] - Movement controller, head-bob and the per-frame pipeline
//! - [`camera`] - Camera rig (holder, local pose, lens)
//! - [`physics`] - Body and overlap traits with reference implementations
//! - [`config`] - Serializable tuning values
//!
//! # Example
//!
//! ```ignore
//! use fps_locomotion_engine::{
//!     CameraRig, ControllerConfig, FirstPersonCharacter, InputEvent, InputRelay,
//! };
//! use fps_locomotion_engine::physics::{CollisionWorld, FlatGroundBody};
//!
//! let world = CollisionWorld::new();
//! let body = FlatGroundBody::standing_at(Vec3::ZERO, 0.0);
//! let mut player = FirstPersonCharacter::new(body, CameraRig::new(), ControllerConfig::default());
//!
//! let mut relay = InputRelay::new();
//! relay.initialize();
//! relay.handle(InputEvent::Move(Vec2::new(0.0, 1.0)), &mut player);
//!
//! player.update(1.0 / 60.0, &world);
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;

// Re-export the types a host needs for a basic setup
pub use camera::CameraRig;
pub use config::{ConfigError, ControllerConfig, FocusMode, HeadBobConfig, MovementConfig};
pub use input::{InputEvent, InputRelay, InputTarget, MovementInput};
pub use physics::{CharacterBody, LayerMask, OverlapQuery};
pub use player::{FirstPersonCharacter, HeadBob, MovementController, MovementState};
