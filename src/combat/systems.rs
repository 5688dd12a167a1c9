//! Combat domain: contact damage and death handling.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{ContactDamage, Enemy, Health};
use crate::combat::events::{DamageEvent, PlayerDiedEvent};
use crate::movement::{MovementController, Player, StoredGravity, apply_gravity_channel};

/// Turn player/enemy collision starts into damage events
pub(crate) fn detect_contact_damage(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    player_query: Query<(), With<Player>>,
    hazard_query: Query<&ContactDamage, With<Enemy>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player, hazard) in pairs {
            if player_query.get(player).is_err() {
                continue;
            }
            let Ok(damage) = hazard_query.get(hazard) else {
                continue;
            };

            damage_events.write(DamageEvent {
                source: hazard,
                target: player,
                amount: damage.0,
            });
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut died_events: MessageWriter<PlayerDiedEvent>,
    mut query: Query<(
        &mut Health,
        Has<Player>,
        Option<&mut MovementController>,
        Option<(&mut GravityScale, &mut StoredGravity)>,
    )>,
) {
    for event in damage_events.read() {
        let Ok((mut health, is_player, controller, gravity)) = query.get_mut(event.target) else {
            continue;
        };

        // Already dead, nothing left to take
        if health.is_dead() {
            continue;
        }

        let applied = health.take_damage(event.amount);
        debug!(
            "Damage {} -> {:?}, health now {}/{}",
            applied, event.target, health.current, health.max
        );

        if !health.is_dead() {
            continue;
        }

        if let Some(mut controller) = controller {
            let exits = controller.disable();
            if let Some((mut scale, mut stored)) = gravity {
                apply_gravity_channel(&exits, &mut scale, &mut stored);
            }
        }

        if is_player {
            info!("Player died");
            died_events.write(PlayerDiedEvent {
                entity: event.target,
            });
        }
    }
}
