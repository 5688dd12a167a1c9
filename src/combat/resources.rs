//! Combat domain: tuning resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthTuning {
    pub max_health: f32,
}

impl Default for HealthTuning {
    fn default() -> Self {
        Self { max_health: 10.0 }
    }
}
