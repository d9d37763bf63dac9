//! Movement configuration
//!
//! Every tunable of the movement controller, grouped in one serializable
//! struct. Angles are in degrees, distances in meters, times in seconds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics::LayerMask;

/// Configuration for locomotion, crouching, look and field of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    // ========================================================================
    // Locomotion
    // ========================================================================
    /// Horizontal acceleration toward the target velocity (m/s^2).
    /// Also used to slow down when there is no input.
    pub acceleration: f32,

    /// Walking speed (m/s).
    pub walk_speed: f32,

    /// Sprinting speed (m/s).
    pub sprint_speed: f32,

    /// Crouched speed (m/s).
    pub crouch_speed: f32,

    // ========================================================================
    // Crouching
    // ========================================================================
    /// When `false` the crouch input is ignored entirely.
    pub crouch_enabled: bool,

    /// Capsule height while crouched (m).
    pub crouch_height: f32,

    /// Layers that block standing back up.
    pub ceiling_layers: LayerMask,

    /// Height of the ceiling probe sphere above the body position (m).
    pub ceiling_probe_offset: f32,

    /// Rate at which the camera holder eases toward its crouch/stand height (1/s).
    pub camera_height_rate: f32,

    // ========================================================================
    // Jumping and gravity
    // ========================================================================
    /// Apex height of a jump (m).
    pub jump_height: f32,

    /// Multiplier applied to standard gravity.
    pub gravity_scale: f32,

    // ========================================================================
    // Look
    // ========================================================================
    /// Degrees of rotation per unit of look input (x = yaw, y = pitch).
    pub look_sensitivity: Vec2,

    /// Maximum pitch up or down (degrees).
    pub pitch_limit: f32,

    // ========================================================================
    // Field of view
    // ========================================================================
    /// Field of view when not sprinting (degrees).
    pub normal_fov: f32,

    /// Field of view at full sprint speed (degrees).
    pub sprint_fov: f32,

    /// Rate at which the field of view eases toward its target (1/s).
    pub fov_smoothing: f32,

    // ========================================================================
    // Frame timing
    // ========================================================================
    /// Optional cap on the frame time integrated in one step (s).
    /// `None` integrates the full elapsed time.
    pub max_delta_time: Option<f32>,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            acceleration: 15.0,
            walk_speed: 4.0,
            sprint_speed: 6.0,
            crouch_speed: 2.0,

            crouch_enabled: true,
            crouch_height: 1.5,
            ceiling_layers: LayerMask::CEILING,
            ceiling_probe_offset: 0.5,
            camera_height_rate: 6.0,

            jump_height: 2.0,
            gravity_scale: 3.0,

            look_sensitivity: Vec2::new(0.1, 0.1),
            pitch_limit: 85.0,

            normal_fov: 60.0,
            sprint_fov: 90.0,
            fov_smoothing: 1.0,

            max_delta_time: None,
        }
    }
}

impl MovementConfig {
    /// Configuration with crouching switched off.
    pub fn without_crouch() -> Self {
        Self {
            crouch_enabled: false,
            ..Default::default()
        }
    }
}
