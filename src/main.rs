use avian2d::prelude::*;
use bevy::prelude::*;

use wallrun::{camera, combat, content, movement, ui};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Wallrun".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * 1800.0))
        .add_plugins((
            content::ContentPlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            camera::CameraPlugin,
            ui::UiPlugin,
        ))
        .run();
}
