//! Movement domain: the player movement state machine.
//!
//! Phases overlap (airborne while wall sliding, grounded while touching a
//! wall), so they are flags on [`AbilityState`] rather than one enum. Inputs
//! are buffered by [`MovementController::on_input`] and applied in arrival
//! order at the start of the next [`MovementController::tick`].

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::movement::{
    ConfigError, ContactState, Facing, InputEvent, MovementConfig, MovementEvent, MovementEvents,
};

/// Ability flags and timers, owned by a single controller.
#[derive(Debug, Clone, PartialEq)]
pub struct AbilityState {
    pub facing: Facing,
    pub double_jump_available: bool,
    pub can_dash: bool,
    pub is_dashing: bool,
    pub dash_elapsed: f32,
    pub time_since_dash_ended: f32,
    pub jump_held: bool,
    pub is_wall_sliding: bool,
}

impl Default for AbilityState {
    fn default() -> Self {
        Self {
            facing: Facing::Right,
            double_jump_available: true,
            can_dash: true,
            is_dashing: false,
            dash_elapsed: 0.0,
            time_since_dash_ended: f32::INFINITY,
            jump_held: false,
            is_wall_sliding: false,
        }
    }
}

/// Output of one tick. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementDecision {
    pub velocity: Vec2,
    pub facing: Facing,
    pub events: MovementEvents,
    pub is_dashing: bool,
    pub is_wall_sliding: bool,
    pub grounded: bool,
}

#[derive(Component, Debug)]
pub struct MovementController {
    config: MovementConfig,
    state: AbilityState,
    pending: VecDeque<InputEvent>,
    move_axis: f32,
    /// Direction sign frozen when the current dash started
    dash_direction: f32,
    was_grounded: bool,
    was_on_wall: bool,
    enabled: bool,
}

impl MovementController {
    pub fn new(config: MovementConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validated()?,
            state: AbilityState::default(),
            pending: VecDeque::new(),
            move_axis: 0.0,
            dash_direction: 1.0,
            was_grounded: false,
            was_on_wall: false,
            enabled: true,
        })
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn state(&self) -> &AbilityState {
        &self.state
    }

    pub fn move_axis(&self) -> f32 {
        self.move_axis
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn pending_inputs(&self) -> usize {
        self.pending.len()
    }

    /// Buffer an input until the next tick. Dropped while disabled.
    pub fn on_input(&mut self, event: InputEvent) {
        if self.enabled {
            self.pending.push_back(event);
        }
    }

    /// Advance one simulation step.
    ///
    /// `body_velocity` is the velocity the physics body currently has (gravity
    /// already integrated); `elapsed` is the step length in seconds.
    pub fn tick(
        &mut self,
        contacts: ContactState,
        body_velocity: Vec2,
        elapsed: f32,
    ) -> MovementDecision {
        let elapsed = if elapsed.is_finite() {
            elapsed.max(0.0)
        } else {
            0.0
        };
        let mut events = MovementEvents::default();

        self.track_contacts(contacts);

        if !self.enabled {
            self.pending.clear();
            return self.decision(Vec2::new(0.0, body_velocity.y), contacts, events);
        }

        if self.state.is_dashing {
            return self.tick_dashing(contacts, elapsed, events);
        }

        self.state.time_since_dash_ended += elapsed;

        let mut velocity = body_velocity;
        while let Some(input) = self.pending.pop_front() {
            if self.state.is_dashing {
                self.absorb_during_dash(input);
                continue;
            }

            match input {
                InputEvent::MoveAxisChanged(axis) => self.move_axis = clamp_axis(axis),
                InputEvent::JumpPressed => {
                    self.state.jump_held = true;
                    self.jump(contacts, &mut velocity, &mut events);
                }
                InputEvent::JumpReleased => {
                    self.state.jump_held = false;
                    // Variable jump height
                    if !contacts.grounded && velocity.y > 0.0 {
                        velocity.y = 0.0;
                    }
                }
                InputEvent::DashPressed => self.try_start_dash(&mut events),
            }
        }

        if self.state.is_dashing {
            return self.decision(self.dash_velocity(), contacts, events);
        }

        velocity.x = self.move_axis * self.config.speed;
        self.update_wall_slide(contacts, &mut velocity, &mut events);
        self.update_facing(velocity.x);

        self.decision(velocity, contacts, events)
    }

    /// End an active dash immediately, running the normal exit transition.
    /// The returned set holds `DashEnded` if a dash was actually cancelled.
    pub fn cancel_dash(&mut self) -> MovementEvents {
        let mut events = MovementEvents::default();
        if self.state.is_dashing {
            self.finish_dash(&mut events);
        }
        events
    }

    /// Stop responding to input. Any dash or wall slide ends; the returned
    /// events report those exits so gravity can be restored.
    pub fn disable(&mut self) -> MovementEvents {
        let mut events = MovementEvents::default();
        if self.state.is_dashing {
            self.finish_dash(&mut events);
        }
        if self.state.is_wall_sliding {
            self.state.is_wall_sliding = false;
            events.insert(MovementEvent::WallSlideStopped);
        }
        self.pending.clear();
        self.move_axis = 0.0;
        self.state.jump_held = false;
        self.enabled = false;
        debug!("Movement disabled");
        events
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    fn tick_dashing(
        &mut self,
        contacts: ContactState,
        elapsed: f32,
        mut events: MovementEvents,
    ) -> MovementDecision {
        self.state.dash_elapsed += elapsed;

        while let Some(input) = self.pending.pop_front() {
            self.absorb_during_dash(input);
        }

        if self.state.dash_elapsed >= self.config.dash_duration {
            self.finish_dash(&mut events);
            return self.decision(Vec2::ZERO, contacts, events);
        }

        self.decision(self.dash_velocity(), contacts, events)
    }

    /// Inputs that land while dashing only update held state.
    fn absorb_during_dash(&mut self, input: InputEvent) {
        match input {
            InputEvent::MoveAxisChanged(axis) => self.move_axis = clamp_axis(axis),
            InputEvent::JumpPressed => {
                self.state.jump_held = true;
                debug!("Jump dropped: dashing");
            }
            InputEvent::JumpReleased => self.state.jump_held = false,
            InputEvent::DashPressed => debug!("Dash dropped: already dashing"),
        }
    }

    fn track_contacts(&mut self, contacts: ContactState) {
        let grounded = contacts.grounded;
        let on_wall = !contacts.grounded && contacts.touching_wall;

        if grounded && !self.was_grounded {
            self.refresh_abilities();
            debug!("Landed: abilities refreshed");
        }
        if on_wall && !self.was_on_wall {
            self.refresh_abilities();
            debug!("Wall contact ({:?}): abilities refreshed", contacts.wall_side);
        }

        self.was_grounded = grounded;
        self.was_on_wall = on_wall;
    }

    fn refresh_abilities(&mut self) {
        self.state.double_jump_available = true;
        self.state.can_dash = true;
    }

    fn jump(&mut self, contacts: ContactState, velocity: &mut Vec2, events: &mut MovementEvents) {
        if contacts.grounded {
            velocity.y = self.config.jump_impulse;
            events.insert(MovementEvent::Jumped);
        } else if self.state.double_jump_available {
            velocity.y = self.config.jump_impulse;
            self.state.double_jump_available = false;
            events.insert(MovementEvent::DoubleJumped);
        } else {
            debug!("Jump dropped: no air jump left");
        }
    }

    fn try_start_dash(&mut self, events: &mut MovementEvents) {
        if !self.state.can_dash {
            debug!("Dash dropped: no charge");
            return;
        }

        let cooled = self
            .config
            .cooldown_boundary
            .elapsed(self.state.time_since_dash_ended, self.config.dash_cooldown);
        if !cooled {
            debug!(
                "Dash dropped: cooldown {:.3}/{:.3}",
                self.state.time_since_dash_ended, self.config.dash_cooldown
            );
            return;
        }

        self.state.can_dash = false;
        self.state.is_dashing = true;
        self.state.dash_elapsed = 0.0;
        self.dash_direction = self.state.facing.sign();

        if self.state.is_wall_sliding {
            self.state.is_wall_sliding = false;
            events.insert(MovementEvent::WallSlideStopped);
        }
        events.insert(MovementEvent::DashStarted);
        debug!("Dash started: direction={}", self.dash_direction);
    }

    fn finish_dash(&mut self, events: &mut MovementEvents) {
        self.state.is_dashing = false;
        self.state.time_since_dash_ended = 0.0;
        events.insert(MovementEvent::DashEnded);
        debug!("Dash ended after {:.3}s", self.state.dash_elapsed);
    }

    fn dash_velocity(&self) -> Vec2 {
        Vec2::new(self.dash_direction * self.config.dash_speed, 0.0)
    }

    fn update_wall_slide(
        &mut self,
        contacts: ContactState,
        velocity: &mut Vec2,
        events: &mut MovementEvents,
    ) {
        // Ground contact wins over a simultaneous wall contact
        let on_wall = !contacts.grounded && contacts.touching_wall;
        let sliding = on_wall && velocity.y <= 0.0;

        if sliding {
            velocity.y = -self.config.wall_slide_speed;
        }

        if sliding != self.state.is_wall_sliding {
            self.state.is_wall_sliding = sliding;
            events.insert(if sliding {
                MovementEvent::WallSlideStarted
            } else {
                MovementEvent::WallSlideStopped
            });
        }
    }

    fn update_facing(&mut self, velocity_x: f32) {
        if velocity_x > 0.0 {
            self.state.facing = Facing::Right;
        } else if velocity_x < 0.0 {
            self.state.facing = Facing::Left;
        }
    }

    fn decision(
        &self,
        velocity: Vec2,
        contacts: ContactState,
        events: MovementEvents,
    ) -> MovementDecision {
        MovementDecision {
            velocity,
            facing: self.state.facing,
            events,
            is_dashing: self.state.is_dashing,
            is_wall_sliding: self.state.is_wall_sliding,
            grounded: contacts.grounded,
        }
    }
}

fn clamp_axis(axis: f32) -> f32 {
    if axis.is_nan() {
        0.0
    } else {
        axis.clamp(-1.0, 1.0)
    }
}
