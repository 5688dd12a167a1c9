//! Movement domain: keyboard sampling into controller input events.

use bevy::prelude::*;

use crate::movement::{InputEvent, MovementController, MovementInput, Player};

const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const DASH_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<MovementInput>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    let Ok(mut controller) = query.single_mut() else {
        return;
    };

    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    if axis != input.last_axis {
        input.last_axis = axis;
        controller.on_input(InputEvent::MoveAxisChanged(axis));
    }

    if keyboard.any_just_pressed(JUMP_KEYS) {
        controller.on_input(InputEvent::JumpPressed);
    }
    if keyboard.any_just_released(JUMP_KEYS) {
        controller.on_input(InputEvent::JumpReleased);
    }
    if keyboard.any_just_pressed(DASH_KEYS) {
        controller.on_input(InputEvent::DashPressed);
    }
}
