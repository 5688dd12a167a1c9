//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::ContactState;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Contacts sensed this frame, consumed by the movement driver.
#[derive(Component, Debug, Default)]
pub struct Contacts(pub ContactState);

/// Gravity scale saved while a dash suppresses gravity.
#[derive(Component, Debug, Default)]
pub struct StoredGravity(pub Option<f32>);

/// Presentation flags mirrored from the last movement decision.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimationFlags {
    pub running: bool,
    pub grounded: bool,
    pub dashing: bool,
    pub wall_sliding: bool,
    pub facing: Facing,
}
