//! Camera domain: look up/down controls.

use bevy::prelude::*;

use crate::camera::{CameraFollow, CameraTuning};

/// Offset while a look key is held; released (or both held) recenters.
pub fn look_offset(up: bool, down: bool, tuning: &CameraTuning) -> f32 {
    match (up, down) {
        (true, false) => tuning.look_up_distance,
        (false, true) => -tuning.look_down_distance,
        _ => 0.0,
    }
}

pub(crate) fn read_look_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<CameraTuning>,
    mut query: Query<&mut CameraFollow>,
) {
    let up = keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp);
    let down = keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);
    let offset = look_offset(up, down, &tuning);

    for mut follow in &mut query {
        follow.look_offset = offset;
    }
}
