//! Movement domain: controller configuration and its validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the dash cooldown compares against the time since the last dash ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum CooldownBoundary {
    /// A dash is accepted once `time_since_dash_ended >= dash_cooldown`.
    #[default]
    Inclusive,
    /// A dash is accepted only once `time_since_dash_ended > dash_cooldown`.
    Exclusive,
}

impl CooldownBoundary {
    pub fn elapsed(self, since: f32, cooldown: f32) -> bool {
        match self {
            CooldownBoundary::Inclusive => since >= cooldown,
            CooldownBoundary::Exclusive => since > cooldown,
        }
    }
}

/// Tuning for the player controller. Times are in seconds, distances in world units.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementConfig {
    pub speed: f32,
    pub jump_impulse: f32,
    pub wall_slide_speed: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    /// Distance the footprint is cast downward for ground checks
    pub ground_margin: f32,
    /// Distance the footprint is cast sideways for wall checks
    pub wall_margin: f32,
    /// Vertical shrink applied to each end of the footprint for wall checks,
    /// so floor and ceiling corners do not read as walls
    pub wall_inset: f32,
    pub cooldown_boundary: CooldownBoundary,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 320.0,
            jump_impulse: 680.0,
            wall_slide_speed: 100.0,
            dash_speed: 900.0,
            dash_duration: 0.16,
            dash_cooldown: 0.35,
            ground_margin: 2.0,
            wall_margin: 2.0,
            wall_inset: 4.0,
            cooldown_boundary: CooldownBoundary::Inclusive,
        }
    }
}

/// Rejected configuration. Fatal: the controller is never built from it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

impl MovementConfig {
    /// Check every magnitude, returning the config unchanged if it is usable.
    pub fn validated(self) -> Result<Self, ConfigError> {
        // (name, value, zero allowed)
        let fields = [
            ("speed", self.speed, false),
            ("jump_impulse", self.jump_impulse, false),
            ("wall_slide_speed", self.wall_slide_speed, true),
            ("dash_speed", self.dash_speed, false),
            ("dash_duration", self.dash_duration, false),
            ("dash_cooldown", self.dash_cooldown, true),
            ("ground_margin", self.ground_margin, false),
            ("wall_margin", self.wall_margin, false),
            ("wall_inset", self.wall_inset, true),
        ];

        for (field, value, zero_ok) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
            if value == 0.0 && !zero_ok {
                return Err(ConfigError::Zero { field });
            }
        }

        Ok(self)
    }
}
