//! Camera Module
//!
//! First-person camera rig: holder offset, camera local pose and lens.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod rig;

pub use rig::{CameraRig, DEFAULT_FOV, DEFAULT_HOLDER_HEIGHT};
