//! Movement domain: ground and wall overlap probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactProbes, ContactReading, Facing, Probe};

/// Answers "is anything on these layers inside this circle?".
pub trait ContactSensor {
    fn overlaps(&self, point: Vec2, radius: f32, mask: LayerMask) -> bool;
}

impl ContactSensor for SpatialQuery<'_, '_> {
    fn overlaps(&self, point: Vec2, radius: f32, mask: LayerMask) -> bool {
        let filter = SpatialQueryFilter::from_mask(mask);

        // A zero radius probe degenerates to a point query
        if radius <= 0.0 {
            return !self.point_intersections(point, &filter).is_empty();
        }

        !self
            .shape_intersections(&Collider::circle(radius), point, 0.0, &filter)
            .is_empty()
    }
}

/// World-space centre of a probe. Probe offsets are authored facing right and
/// mirror with the character.
fn probe_position(origin: Vec2, facing: Facing, probe: &Probe) -> Vec2 {
    origin + Vec2::new(probe.offset.x * facing.sign(), probe.offset.y)
}

pub fn sample_contacts(
    sensor: &impl ContactSensor,
    origin: Vec2,
    facing: Facing,
    probes: &ContactProbes,
) -> ContactReading {
    let ground = &probes.ground;
    let wall = &probes.wall;

    ContactReading {
        grounded: sensor.overlaps(
            probe_position(origin, facing, ground),
            ground.radius,
            ground.mask,
        ),
        walled: sensor.overlaps(probe_position(origin, facing, wall), wall.radius, wall.mask),
    }
}
