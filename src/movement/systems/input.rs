//! Movement domain: keyboard input layer feeding `MovementInput`.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis is carried along but only the horizontal part drives movement
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.set_move_axis(Vec2::new(x, y));
    input.set_run_active(
        keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::KeyJ),
    );

    let started = keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    let canceled =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
    if started || canceled {
        input.set_jump_edge(started, canceled);
    }
}
