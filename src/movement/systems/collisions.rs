//! Movement domain: ground and wall detection systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactSensor, Contacts, MovementController, Player, SpatialCaster};

pub(crate) fn detect_contacts(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &MovementController, &mut Contacts), With<Player>>,
) {
    // Ground casts see only ground layers, wall casts only wall layers
    let caster = SpatialCaster::new(&spatial_query);

    for (transform, collider, controller, mut contacts) in &mut query {
        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::new(12.0, 24.0),
        };

        let sensor = ContactSensor::from_config(controller.config());
        let sensed = sensor.sense(&caster, transform.translation.truncate(), half_extents);

        if sensed.grounded != contacts.0.grounded {
            debug!("Ground contact: {}", sensed.grounded);
        }
        if sensed.wall_side != contacts.0.wall_side {
            debug!("Wall contact: {:?}", sensed.wall_side);
        }

        contacts.0 = sensed;
    }
}
