//! UI domain: player health bar.

use bevy::prelude::*;

use crate::combat::Health;
use crate::movement::Player;

const BAR_SIZE: Vec2 = Vec2::new(180.0, 14.0);
const BAR_MARGIN: f32 = 16.0;
const BAR_BORDER: f32 = 2.0;

/// Fill element of the player health bar
#[derive(Component)]
pub struct PlayerHealthBarFill;

/// Frame in the top-left corner; the fill starts at full width.
pub(crate) fn spawn_player_healthbar_ui(mut commands: Commands) {
    let frame = Node {
        position_type: PositionType::Absolute,
        left: Val::Px(BAR_MARGIN),
        top: Val::Px(BAR_MARGIN),
        width: Val::Px(BAR_SIZE.x),
        height: Val::Px(BAR_SIZE.y),
        border: UiRect::all(Val::Px(BAR_BORDER)),
        ..default()
    };
    let fill = Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        ..default()
    };

    commands
        .spawn((
            frame,
            BackgroundColor(Color::srgba(0.05, 0.05, 0.08, 0.85)),
            BorderColor::all(Color::srgb(0.35, 0.35, 0.4)),
        ))
        .with_child((PlayerHealthBarFill, fill, BackgroundColor(healthbar_color(1.0))));
}

/// Fill color for a health fraction: green when full, through yellow, to red.
pub(crate) fn healthbar_color(percent: f32) -> Color {
    let percent = percent.clamp(0.0, 1.0);
    if percent > 0.5 {
        let t = (percent - 0.5) * 2.0;
        Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
    } else {
        let t = percent * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

pub(crate) fn update_player_healthbar(
    player_query: Query<&Health, (With<Player>, Changed<Health>)>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<PlayerHealthBarFill>>,
) {
    let Ok(health) = player_query.single() else {
        return;
    };

    let percent = health.percent().clamp(0.0, 1.0);
    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(percent * 100.0);
        bg_color.0 = healthbar_color(percent);
    }
}
