//! Movement domain: a small test room for exercising the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{ContactDamage, Enemy};
use crate::movement::{GameLayer, Surface};

fn spawn_solid(commands: &mut Commands, surface: Surface, center: Vec2, size: Vec2) {
    let color = match surface {
        Surface::Ground => Color::srgb(0.4, 0.5, 0.4),
        Surface::Wall => Color::srgb(0.3, 0.3, 0.4),
    };

    commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(surface.layer(), [GameLayer::Player, GameLayer::Enemy]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    // Floor and the two bounding walls
    spawn_solid(&mut commands, Surface::Ground, Vec2::new(0.0, -200.0), Vec2::new(800.0, 40.0));
    spawn_solid(&mut commands, Surface::Wall, Vec2::new(-420.0, 50.0), Vec2::new(40.0, 500.0));
    spawn_solid(&mut commands, Surface::Wall, Vec2::new(420.0, 50.0), Vec2::new(40.0, 500.0));

    // Platforms within double jump reach
    spawn_solid(&mut commands, Surface::Ground, Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0));
    spawn_solid(&mut commands, Surface::Ground, Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0));
    spawn_solid(&mut commands, Surface::Ground, Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0));

    // Tall pillar for wall slides, capped so its top can be stood on
    spawn_solid(&mut commands, Surface::Wall, Vec2::new(-100.0, -85.0), Vec2::new(30.0, 190.0));
    spawn_solid(&mut commands, Surface::Ground, Vec2::new(-100.0, 15.0), Vec2::new(30.0, 10.0));

    // A stationary hazard
    commands.spawn((
        Enemy,
        ContactDamage(1.0),
        Sprite {
            color: Color::srgb(0.8, 0.25, 0.25),
            custom_size: Some(Vec2::new(28.0, 28.0)),
            ..default()
        },
        Transform::from_xyz(200.0, -166.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(28.0, 28.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player]),
    ));
}
