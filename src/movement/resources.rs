//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::movement::MovementConfig;

/// Validated movement configuration shared by spawning and sensing.
#[derive(Resource, Debug, Clone, Default)]
pub struct MovementTuning(pub MovementConfig);

/// Last horizontal axis forwarded to the controller, so only changes are sent.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub last_axis: f32,
}
