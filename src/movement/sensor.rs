//! Movement domain: ground and wall contact sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementConfig};

/// Which side of the character a wall was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSide {
    #[default]
    None,
    Left,
    Right,
}

/// Contact facts for a single tick. Carries no memory of earlier ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactState {
    pub grounded: bool,
    pub touching_wall: bool,
    pub wall_side: WallSide,
}

impl ContactState {
    pub const AIRBORNE: Self = Self {
        grounded: false,
        touching_wall: false,
        wall_side: WallSide::None,
    };

    pub const GROUNDED: Self = Self {
        grounded: true,
        touching_wall: false,
        wall_side: WallSide::None,
    };

    pub fn on_wall(side: WallSide) -> Self {
        Self {
            grounded: false,
            touching_wall: side != WallSide::None,
            wall_side: side,
        }
    }
}

/// Kind of level geometry a cast looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Ground,
    Wall,
}

impl Surface {
    pub fn layer(self) -> GameLayer {
        match self {
            Surface::Ground => GameLayer::Ground,
            Surface::Wall => GameLayer::Wall,
        }
    }
}

/// World query capability: is any `surface` geometry within `distance` of a
/// box with `half_extents` centered at `center`, moving along `direction`?
pub trait ShapeCaster {
    fn box_hits(
        &self,
        surface: Surface,
        center: Vec2,
        half_extents: Vec2,
        direction: Dir2,
        distance: f32,
    ) -> bool;
}

/// Avian spatial query with one layer filter per surface kind.
pub struct SpatialCaster<'a, 'w, 's> {
    query: &'a SpatialQuery<'w, 's>,
    ground_filter: SpatialQueryFilter,
    wall_filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialCaster<'a, 'w, 's> {
    pub fn new(query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            query,
            ground_filter: SpatialQueryFilter::from_mask(Surface::Ground.layer()),
            wall_filter: SpatialQueryFilter::from_mask(Surface::Wall.layer()),
        }
    }
}

impl ShapeCaster for SpatialCaster<'_, '_, '_> {
    fn box_hits(
        &self,
        surface: Surface,
        center: Vec2,
        half_extents: Vec2,
        direction: Dir2,
        distance: f32,
    ) -> bool {
        let shape = Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0);
        let config = ShapeCastConfig::from_max_distance(distance);
        let filter = match surface {
            Surface::Ground => &self.ground_filter,
            Surface::Wall => &self.wall_filter,
        };

        self.query
            .cast_shape(&shape, center, 0.0, direction, &config, filter)
            .is_some()
    }
}

/// Stateless contact sensor built from the margins in a [`MovementConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ContactSensor {
    pub ground_margin: f32,
    pub wall_margin: f32,
    pub wall_inset: f32,
}

impl ContactSensor {
    pub fn from_config(config: &MovementConfig) -> Self {
        Self {
            ground_margin: config.ground_margin,
            wall_margin: config.wall_margin,
            wall_inset: config.wall_inset,
        }
    }

    pub fn sense(
        &self,
        caster: &impl ShapeCaster,
        center: Vec2,
        half_extents: Vec2,
    ) -> ContactState {
        let grounded = caster.box_hits(
            Surface::Ground,
            center,
            half_extents,
            Dir2::NEG_Y,
            self.ground_margin,
        );

        // Shrink top and bottom so the floor under us is not read as a wall
        let wall_extents = Vec2::new(
            half_extents.x,
            (half_extents.y - self.wall_inset).max(half_extents.y * 0.1),
        );
        let left = caster.box_hits(
            Surface::Wall,
            center,
            wall_extents,
            Dir2::NEG_X,
            self.wall_margin,
        );
        let right = caster.box_hits(Surface::Wall, center, wall_extents, Dir2::X, self.wall_margin);

        let wall_side = match (left, right) {
            (true, _) => WallSide::Left,
            (false, true) => WallSide::Right,
            (false, false) => WallSide::None,
        };

        ContactState {
            grounded,
            touching_wall: left || right,
            wall_side,
        }
    }
}
