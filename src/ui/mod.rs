//! UI domain: in-run HUD elements.

mod hud_player;

use bevy::prelude::*;

use crate::ui::hud_player::{spawn_player_healthbar_ui, update_player_healthbar};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player_healthbar_ui)
            .add_systems(Update, update_player_healthbar);
    }
}
