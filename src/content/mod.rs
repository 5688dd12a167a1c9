//! Content domain: data-driven tuning loaded from assets/data.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::GameplayDefaults;
pub use loader::{ContentLoadError, load_gameplay_defaults, parse_gameplay_defaults};

use bevy::prelude::*;
use std::path::Path;

use crate::camera::CameraTuning;
use crate::combat::HealthTuning;
use crate::movement::MovementTuning;

pub const GAMEPLAY_DEFAULTS_PATH: &str = "assets/data/gameplay_defaults.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_tuning);
    }
}

/// Load tuning into resources before anything spawns. Falls back to defaults
/// so a broken file never blocks the game from starting.
fn load_tuning(mut commands: Commands) {
    let defaults = match load_gameplay_defaults(Path::new(GAMEPLAY_DEFAULTS_PATH)) {
        Ok(defaults) => {
            info!(
                "Loaded {} (schema v{})",
                GAMEPLAY_DEFAULTS_PATH, defaults.schema_version
            );
            defaults
        }
        Err(e @ ContentLoadError::Io { .. }) => {
            warn!("{}; using built-in defaults", e);
            GameplayDefaults::default()
        }
        Err(e) => {
            error!("{}; using built-in defaults", e);
            GameplayDefaults::default()
        }
    };

    commands.insert_resource(MovementTuning(defaults.movement));
    commands.insert_resource(defaults.camera);
    commands.insert_resource(defaults.health);
}
