//! Movement domain: contact sensing, the player state machine, and plugin wiring.

mod bootstrap;
mod components;
mod config;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod sensor;
mod systems;


pub use components::{AnimationFlags, Contacts, Facing, GameLayer, Player, StoredGravity};
pub use config::{ConfigError, CooldownBoundary, MovementConfig};
pub use controller::{AbilityState, MovementController, MovementDecision};
pub use events::{InputEvent, MovementEvent, MovementEvents, PlayerMovementEvent};
pub use resources::{MovementInput, MovementTuning};
pub use sensor::{ContactSensor, ContactState, ShapeCaster, SpatialCaster, Surface, WallSide};

pub(crate) use systems::apply_gravity_channel;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{detect_contacts, drive_movement, read_input, update_presentation};

/// Systems that must finish before anything reads this step's movement.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<PlayerMovementEvent>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, (read_input, update_presentation))
            .add_systems(
                FixedUpdate,
                (detect_contacts, drive_movement).chain().in_set(MovementSet),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}
