//! Movement domain: fixed-rate and frame-rate controller systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::systems::sample_contacts;
use crate::movement::{
    CharacterBody, ContactProbes, JumpedEvent, MovementController, MovementInput, MovementTuning,
    Player,
};

/// `CharacterBody` over the avian velocity and the sprite transform.
pub(crate) struct BodyHandle<'a> {
    velocity: &'a mut LinearVelocity,
    transform: &'a mut Transform,
}

impl<'a> BodyHandle<'a> {
    pub(crate) fn new(velocity: &'a mut LinearVelocity, transform: &'a mut Transform) -> Self {
        Self {
            velocity,
            transform,
        }
    }
}

impl CharacterBody for BodyHandle<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn mirror_horizontal(&mut self) {
        self.transform.scale.x *= -1.0;
    }
}

pub(crate) fn advance_fixed_step(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    gravity: Option<Res<Gravity>>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &mut MovementController,
            &ContactProbes,
            &mut Transform,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let gravity = gravity.map_or_else(|| Gravity::default().0.length(), |g| g.0.length());

    for (mut controller, probes, mut transform, mut velocity) in &mut query {
        let origin = transform.translation.truncate();
        let contacts = sample_contacts(&spatial_query, origin, controller.facing, probes);

        let was_grounded = controller.grounded;
        let mut body = BodyHandle::new(&mut velocity, &mut transform);
        controller.fixed_step(&tuning, contacts, gravity, dt, &mut body);

        if controller.grounded != was_grounded {
            debug!(
                "Ground contact changed: grounded={}, jump_count={}",
                controller.grounded, controller.jump_count
            );
        }
    }
}

pub(crate) fn advance_frame_step(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
    mut jumped: MessageWriter<JumpedEvent>,
    mut query: Query<
        (
            Entity,
            &mut MovementController,
            &mut Transform,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let snapshot = input.snapshot();

    for (entity, mut controller, mut transform, mut velocity) in &mut query {
        let before = controller.phase();

        let mut body = BodyHandle::new(&mut velocity, &mut transform);
        if let Some(kind) = controller.frame_step(&tuning, &snapshot, dt, &mut body) {
            jumped.write(JumpedEvent { entity, kind });
        }

        let after = controller.phase();
        if after != before {
            debug!("Movement phase: {:?} -> {:?}", before, after);
        }
    }

    // Edges are valid for exactly one decision pass
    input.consume_edges();
}
