//! Movement domain: input and ability events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Edge-triggered input produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MoveAxisChanged(f32),
    JumpPressed,
    JumpReleased,
    DashPressed,
}

/// Discrete ability transitions reported by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementEvent {
    Jumped,
    DoubleJumped,
    DashStarted,
    DashEnded,
    WallSlideStarted,
    WallSlideStopped,
}

/// Set of events fired during one tick, kept in the order they fired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementEvents(Vec<MovementEvent>);

impl MovementEvents {
    pub fn insert(&mut self, event: MovementEvent) {
        if !self.0.contains(&event) {
            self.0.push(event);
        }
    }

    pub fn contains(&self, event: MovementEvent) -> bool {
        self.0.contains(&event)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = MovementEvent> + '_ {
        self.0.iter().copied()
    }
}

/// Ability event broadcast to presentation systems (animation, audio).
#[derive(Debug)]
pub struct PlayerMovementEvent {
    pub entity: Entity,
    pub event: MovementEvent,
}

impl Message for PlayerMovementEvent {}
