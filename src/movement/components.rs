//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 when facing right, -1 when facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// A circular overlap probe placed relative to the character's origin.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub offset: Vec2,
    pub radius: f32,
    pub mask: LayerMask,
}

/// Ground and wall probes sampled once per fixed tick.
#[derive(Component, Debug, Clone)]
pub struct ContactProbes {
    pub ground: Probe,
    pub wall: Probe,
}

impl ContactProbes {
    pub fn from_tuning(tuning: &MovementTuning) -> Self {
        Self {
            ground: Probe {
                offset: tuning.ground_probe.offset(),
                radius: tuning.ground_probe.radius,
                mask: layer_mask(&tuning.ground_layers),
            },
            wall: Probe {
                offset: tuning.wall_probe.offset(),
                radius: tuning.wall_probe.radius,
                mask: layer_mask(&tuning.wall_layers),
            },
        }
    }
}

fn layer_mask(layers: &[GameLayer]) -> LayerMask {
    LayerMask(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
}
