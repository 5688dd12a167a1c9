//! Movement domain: player spawn from the loaded movement tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{Health, HealthTuning};
use crate::movement::{
    AnimationFlags, Contacts, GameLayer, MovementController, MovementTuning, Player,
    StoredGravity,
};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    health_tuning: Res<HealthTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let controller = match MovementController::new(tuning.0.clone()) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Refusing to spawn player: {}", e);
            return;
        }
    };

    info!(
        "Spawning player: speed={}, jump={}, dash_speed={}, max_health={}",
        tuning.0.speed, tuning.0.jump_impulse, tuning.0.dash_speed, health_tuning.max_health
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            controller,
            Contacts::default(),
            StoredGravity::default(),
            AnimationFlags::default(),
            Health::new(health_tuning.max_health),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Enemy],
            ),
        ),
    ));
}
