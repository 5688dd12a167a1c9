//! Movement domain: drives the controller each fixed step and applies its decision.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    AnimationFlags, Contacts, Facing, MovementController, MovementEvent, MovementEvents, Player,
    PlayerMovementEvent, StoredGravity,
};

pub(crate) fn drive_movement(
    time: Res<Time>,
    mut movement_events: MessageWriter<PlayerMovementEvent>,
    mut query: Query<
        (
            Entity,
            &mut MovementController,
            &Contacts,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut StoredGravity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, contacts, mut velocity, mut gravity, mut stored) in &mut query {
        let decision = controller.tick(contacts.0, velocity.0, dt);

        velocity.0 = decision.velocity;
        apply_gravity_channel(&decision.events, &mut gravity, &mut stored);

        for event in decision.events.iter() {
            movement_events.write(PlayerMovementEvent { entity, event });
        }
    }
}

/// Zero gravity for the length of a dash and put the saved scale back after.
pub(crate) fn apply_gravity_channel(
    events: &MovementEvents,
    gravity: &mut GravityScale,
    stored: &mut StoredGravity,
) {
    if events.contains(MovementEvent::DashStarted) {
        stored.0 = Some(gravity.0);
        gravity.0 = 0.0;
    }
    if events.contains(MovementEvent::DashEnded) {
        if let Some(saved) = stored.0.take() {
            gravity.0 = saved;
        }
    }
}

/// Mirror controller state into presentation flags and sprite orientation.
pub(crate) fn update_presentation(
    mut query: Query<
        (
            &MovementController,
            &Contacts,
            &mut AnimationFlags,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    for (controller, contacts, mut flags, mut sprite) in &mut query {
        let state = controller.state();

        *flags = AnimationFlags {
            running: controller.move_axis() != 0.0,
            grounded: contacts.0.grounded,
            dashing: state.is_dashing,
            wall_sliding: state.is_wall_sliding,
            facing: state.facing,
        };
        sprite.flip_x = state.facing == Facing::Left;
    }
}
