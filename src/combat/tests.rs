//! Combat domain: unit tests for health and death handling.

use avian2d::prelude::GravityScale;
use bevy::prelude::*;

use super::systems::apply_damage;
use super::{DamageEvent, Health, PlayerDiedEvent};
use crate::movement::{
    ContactState, InputEvent, MovementConfig, MovementController, Player, StoredGravity,
};

#[test]
fn test_health_damage_and_heal() {
    let mut health = Health::new(10.0);

    assert_eq!(health.take_damage(3.0), 3.0);
    assert_eq!(health.current, 7.0);

    assert_eq!(health.heal(5.0), 3.0);
    assert_eq!(health.current, 10.0);
}

#[test]
fn test_health_damage_clamps_at_zero() {
    let mut health = Health::new(2.0);

    assert_eq!(health.take_damage(5.0), 2.0);
    assert!(health.is_dead());
    assert_eq!(health.percent(), 0.0);
}

#[test]
fn test_negative_amounts_do_nothing() {
    let mut health = Health::new(4.0);
    assert_eq!(health.take_damage(-1.0), 0.0);
    assert_eq!(health.heal(-1.0), 0.0);
    assert_eq!(health.current, 4.0);
}

#[test]
fn test_percent() {
    let mut health = Health::new(8.0);
    health.take_damage(2.0);
    assert_eq!(health.percent(), 0.75);
}

#[test]
fn test_death_disables_movement_and_restores_gravity() {
    let mut controller =
        MovementController::new(MovementConfig::default()).expect("default config is valid");
    controller.on_input(InputEvent::DashPressed);
    let decision = controller.tick(ContactState::GROUNDED, Vec2::ZERO, 1.0 / 60.0);
    assert!(decision.is_dashing);

    let mut app = App::new();
    app.add_message::<DamageEvent>()
        .add_message::<PlayerDiedEvent>()
        .add_systems(Update, apply_damage);

    // Mid-dash: gravity zeroed with the original scale saved
    let player = app
        .world_mut()
        .spawn((
            Player,
            Health::new(2.0),
            controller,
            GravityScale(0.0),
            StoredGravity(Some(1.0)),
        ))
        .id();

    app.world_mut().write_message(DamageEvent {
        source: player,
        target: player,
        amount: 5.0,
    });
    app.update();

    let entity = app.world().entity(player);
    assert!(entity.get::<Health>().unwrap().is_dead());

    let controller = entity.get::<MovementController>().unwrap();
    assert!(!controller.is_enabled());
    assert!(!controller.state().is_dashing);

    assert_eq!(entity.get::<GravityScale>().unwrap().0, 1.0);
    assert!(entity.get::<StoredGravity>().unwrap().0.is_none());
}

#[test]
fn test_damage_that_does_not_kill_keeps_control() {
    let controller =
        MovementController::new(MovementConfig::default()).expect("default config is valid");

    let mut app = App::new();
    app.add_message::<DamageEvent>()
        .add_message::<PlayerDiedEvent>()
        .add_systems(Update, apply_damage);

    let player = app
        .world_mut()
        .spawn((Player, Health::new(10.0), controller))
        .id();

    app.world_mut().write_message(DamageEvent {
        source: player,
        target: player,
        amount: 1.0,
    });
    app.update();

    let entity = app.world().entity(player);
    assert_eq!(entity.get::<Health>().unwrap().current, 9.0);
    assert!(entity.get::<MovementController>().unwrap().is_enabled());
}
