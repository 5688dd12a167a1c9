//! Camera domain: player follow camera and look controls.

mod controls;
mod follow;


pub use controls::look_offset;
pub use follow::{CameraFollow, CameraTuning, desired_position, smooth_toward};

use bevy::prelude::*;

use crate::camera::controls::read_look_input;
use crate::camera::follow::{follow_player, spawn_camera};
use crate::movement::MovementSet;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, read_look_input)
            .add_systems(FixedUpdate, follow_player.after(MovementSet));
    }
}
