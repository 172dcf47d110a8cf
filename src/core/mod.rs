//! Core domain: camera and world setup shared by every scene.

mod systems;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Downward acceleration of the physics world, in world units per second squared
pub const WORLD_GRAVITY: f32 = 9.81;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
            .add_systems(Startup, setup_camera);
    }
}
