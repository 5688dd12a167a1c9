//! Data definitions for the RON tuning file.
//!
//! Mirrors the structure of assets/data/gameplay_defaults.ron. Every section
//! falls back to its defaults when omitted.

use serde::{Deserialize, Serialize};

use crate::camera::CameraTuning;
use crate::combat::HealthTuning;
use crate::movement::MovementConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub movement: MovementConfig,
    pub camera: CameraTuning,
    pub health: HealthTuning,
}
