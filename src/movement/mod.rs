//! Movement domain: platformer locomotion, jumping and wall interaction.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod systems;

pub use components::{ContactProbes, Facing, GameLayer, Ground, Player, Probe, Wall};
pub use controller::{CharacterBody, ContactReading, JumpKind, MovementController};
pub use events::JumpedEvent;
pub use resources::{InputSnapshot, JumpProfile, MovementInput, MovementTuning, ProbeDef};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{advance_fixed_step, advance_frame_step, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .register_type::<MovementTuning>()
            .register_type::<MovementController>()
            .add_message::<JumpedEvent>()
            .add_systems(Startup, spawn_player)
            .add_systems(FixedUpdate, advance_fixed_step)
            .add_systems(Update, (read_input, advance_frame_step).chain());

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}
