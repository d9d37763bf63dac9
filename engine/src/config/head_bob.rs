//! Head-bob configuration

use serde::{Deserialize, Serialize};

/// Where the camera looks after the head-bob offset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMode {
    /// Look at a point straight ahead of the camera holder at holder height.
    ///
    /// This replaces whatever pitch the movement controller set this frame,
    /// so vertical mouse-look has no visible effect while head-bob runs.
    Level,
    /// Look at a point along the pitched view direction.
    ///
    /// The bob still steers the view toward a fixed focus point, but the
    /// pitch from mouse-look is kept.
    #[default]
    Pitched,
}

/// Configuration for the procedural head-bob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadBobConfig {
    /// Master switch.
    pub enabled: bool,

    /// Vertical bob amplitude (m). Sideways amplitude is twice this.
    pub amplitude: f32,

    /// Vertical bob frequency (rad/s). Sideways sway runs at half this.
    pub frequency: f32,

    /// Planar speed below which no bob is added (m/s).
    pub toggle_speed: f32,

    /// Rate at which the camera eases back to rest (1/s).
    pub reset_rate: f32,

    /// Distance of the focus point ahead of the camera holder (m).
    pub focus_distance: f32,

    /// How the focus point is placed.
    pub focus_mode: FocusMode,
}

impl Default for HeadBobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            amplitude: 0.002,
            frequency: 10.0,
            toggle_speed: 3.0,
            reset_rate: 1.0,
            focus_distance: 15.0,
            focus_mode: FocusMode::Pitched,
        }
    }
}
