//! Platformer character controller: contact sensing, a movement state
//! machine with double jump, wall slide and dash, plus the Bevy plugins that
//! drive it.

pub mod camera;
pub mod combat;
pub mod content;
pub mod movement;
pub mod ui;
