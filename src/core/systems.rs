//! Core domain: scene setup systems.

use bevy::prelude::*;

/// Screen pixels per world unit
const PIXELS_PER_UNIT: f32 = 48.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
