//! Combat domain: health, enemy contact damage, and death.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{ContactDamage, Enemy, Health};
pub use events::{DamageEvent, PlayerDiedEvent};
pub use resources::HealthTuning;

use bevy::prelude::*;

use crate::combat::systems::{apply_damage, detect_contact_damage};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HealthTuning>()
            .add_message::<DamageEvent>()
            .add_message::<PlayerDiedEvent>()
            .add_systems(Update, (detect_contact_damage, apply_damage).chain());
    }
}
