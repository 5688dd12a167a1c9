//! Camera domain: smoothed follow with a facing lead and look offset.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{AnimationFlags, Player};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Fraction of the remaining horizontal distance closed each fixed step
    pub horizontal_smoothing: f32,
    /// Fraction of the remaining vertical distance closed each fixed step
    pub vertical_smoothing: f32,
    pub offset: [f32; 2],
    /// How far ahead of the player, in the facing direction, the camera sits
    pub lead_distance: f32,
    pub look_up_distance: f32,
    pub look_down_distance: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            horizontal_smoothing: 0.08,
            vertical_smoothing: 0.05,
            offset: [0.0, 40.0],
            lead_distance: 60.0,
            look_up_distance: 120.0,
            look_down_distance: 150.0,
        }
    }
}

#[derive(Component, Debug, Default)]
pub struct CameraFollow {
    /// Vertical offset from the look up/down controls
    pub look_offset: f32,
}

pub fn desired_position(
    target: Vec2,
    facing_sign: f32,
    look_offset: f32,
    tuning: &CameraTuning,
) -> Vec2 {
    target
        + Vec2::from(tuning.offset)
        + Vec2::new(tuning.lead_distance * facing_sign, look_offset)
}

/// Move each axis a fixed fraction of the way toward `desired`.
pub fn smooth_toward(current: Vec2, desired: Vec2, tuning: &CameraTuning) -> Vec2 {
    Vec2::new(
        current.x + (desired.x - current.x) * tuning.horizontal_smoothing,
        current.y + (desired.y - current.y) * tuning.vertical_smoothing,
    )
}

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, CameraFollow::default()));
}

pub(crate) fn follow_player(
    tuning: Res<CameraTuning>,
    player_query: Query<(&Transform, Option<&AnimationFlags>), (With<Player>, Without<CameraFollow>)>,
    mut camera_query: Query<(&mut Transform, &CameraFollow)>,
) {
    let Ok((player_transform, flags)) = player_query.single() else {
        return;
    };
    let facing_sign = flags.map(|f| f.facing.sign()).unwrap_or(1.0);

    for (mut camera_transform, follow) in &mut camera_query {
        let desired = desired_position(
            player_transform.translation.truncate(),
            facing_sign,
            follow.look_offset,
            &tuning,
        );
        let smoothed = smooth_toward(camera_transform.translation.truncate(), desired, &tuning);
        camera_transform.translation.x = smoothed.x;
        camera_transform.translation.y = smoothed.y;
    }
}
