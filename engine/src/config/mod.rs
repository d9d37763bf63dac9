//! Config Module
//!
//! Centralized, serializable configuration for the character controller.
//! Every field has a default, so a JSON file only needs the values it changes:
//!
//! ```json
//! {
//!   "movement": { "walk_speed": 5.0, "pitch_limit": 80.0 },
//!   "head_bob": { "enabled": false }
//! }
//! ```

pub mod head_bob;
pub mod movement;

use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use head_bob::{FocusMode, HeadBobConfig};
pub use movement::MovementConfig;

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Complete controller configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub movement: MovementConfig,
    pub head_bob: HeadBobConfig,
}

impl ControllerConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ControllerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        info!("loaded controller config from {}", path.display());
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        non_negative("movement.acceleration", m.acceleration)?;
        non_negative("movement.walk_speed", m.walk_speed)?;
        positive("movement.sprint_speed", m.sprint_speed)?;
        non_negative("movement.crouch_speed", m.crouch_speed)?;
        positive("movement.crouch_height", m.crouch_height)?;
        non_negative("movement.ceiling_probe_offset", m.ceiling_probe_offset)?;
        non_negative("movement.camera_height_rate", m.camera_height_rate)?;
        non_negative("movement.jump_height", m.jump_height)?;
        non_negative("movement.gravity_scale", m.gravity_scale)?;
        finite("movement.look_sensitivity.x", m.look_sensitivity.x)?;
        finite("movement.look_sensitivity.y", m.look_sensitivity.y)?;
        in_range("movement.pitch_limit", m.pitch_limit, 0.0, 90.0)?;
        in_range("movement.normal_fov", m.normal_fov, 1.0, 179.0)?;
        in_range("movement.sprint_fov", m.sprint_fov, 1.0, 179.0)?;
        non_negative("movement.fov_smoothing", m.fov_smoothing)?;
        if let Some(max_delta_time) = m.max_delta_time {
            positive("movement.max_delta_time", max_delta_time)?;
        }

        let b = &self.head_bob;
        non_negative("head_bob.amplitude", b.amplitude)?;
        finite("head_bob.frequency", b.frequency)?;
        non_negative("head_bob.toggle_speed", b.toggle_speed)?;
        non_negative("head_bob.reset_rate", b.reset_rate)?;
        positive("head_bob.focus_distance", b.focus_distance)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is not a finite number"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must not be negative"),
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be greater than zero"),
        })
    }
}

fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is outside {min}..={max}"),
        })
    }
}
