//! Movement domain: debug-only practice room.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

fn spawn_block<M: Component>(
    commands: &mut Commands,
    marker: M,
    layer: GameLayer,
    color: Color,
    size: Vec2,
    position: Vec2,
) {
    commands.spawn((
        marker,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        ground_color,
        Vec2::new(24.0, 1.0),
        Vec2::new(0.0, -5.0),
    );

    // Outer walls
    for x in [-12.5, 12.5] {
        spawn_block(
            &mut commands,
            Wall,
            GameLayer::Wall,
            wall_color,
            Vec2::new(1.0, 14.0),
            Vec2::new(x, 1.5),
        );
    }

    // Platforms, stepping up towards the centre
    for (width, position) in [
        (4.0, Vec2::new(-7.0, -2.0)),
        (4.0, Vec2::new(7.0, 0.0)),
        (3.0, Vec2::new(0.0, 2.5)),
    ] {
        spawn_block(
            &mut commands,
            Ground,
            GameLayer::Ground,
            platform_color,
            Vec2::new(width, 0.5),
            position,
        );
    }

    // Pillar for wall slide and wall jump practice
    spawn_block(
        &mut commands,
        Wall,
        GameLayer::Wall,
        wall_color,
        Vec2::new(0.8, 5.0),
        Vec2::new(-3.0, -2.0),
    );
}
