//! Movement domain: player spawn from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactProbes, GameLayer, MovementController, MovementTuning, Player};

/// Character collider size in world units
const PLAYER_SIZE: Vec2 = Vec2::new(0.6, 1.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    gravity: Option<Res<Gravity>>,
) {
    let controller = MovementController::new(&tuning);
    let profile = *controller.profile();
    let gravity = gravity.map_or_else(|| Gravity::default().0.length(), |g| g.0.length());
    info!(
        "Spawning player: walk_speed={}, jump_power={}, jump_height={:.2}, max_jumps={}, abilities={:?}",
        tuning.walk_speed,
        profile.jump_power,
        tuning.single_jump_height(gravity),
        profile.max_jumps,
        profile.abilities
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            controller,
            ContactProbes::from_tuning(&tuning),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics: world gravity comes from the integrator, the controller only shapes the fall
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
