//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// Overlap probe geometry in the character's local space (facing right).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct ProbeDef {
    pub offset_x: f32,
    pub offset_y: f32,
    pub radius: f32,
}

impl ProbeDef {
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }
}

/// Optional movement abilities. Everything is off unless the author enables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MovementAbilities {
    pub can_multiple_jumps: bool,
    pub can_dynamic_jump: bool,
    pub can_buffer_jump: bool,
    pub can_coyote_time_jump: bool,
    pub can_wall_slide: bool,
    pub can_wall_jump: bool,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MovementTuning {
    pub walk_speed: f32,
    /// Added to `walk_speed` while run is held
    pub run_speed_bonus: f32,
    /// Horizontal control multiplier while airborne (1.0 = full control)
    pub air_acceleration: f32,
    pub jump_power_static: f32,
    pub jump_power_dynamic: f32,
    /// Factor applied to upward velocity when a dynamic jump is released early
    pub jump_power_reduction: f32,
    /// Extra gravity applied while falling, as a fraction of world gravity
    pub fall_multiplier: f32,
    pub abilities: MovementAbilities,
    /// Jumps available between ground contacts; only honoured with multiple jumps enabled
    pub max_jumps: u32,
    pub jump_buffer: f32,
    pub jump_coyote_time: f32,
    /// Minimum airborne time before landing re-arms the jump count
    pub ground_check_delay: f32,
    /// Vertical velocity factor applied every frame while wall sliding
    pub slide_resistance: f32,
    pub wall_jump_power_x: f32,
    pub wall_jump_power_y: f32,
    pub ground_probe: ProbeDef,
    pub wall_probe: ProbeDef,
    #[reflect(ignore)]
    pub ground_layers: Vec<GameLayer>,
    #[reflect(ignore)]
    pub wall_layers: Vec<GameLayer>,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 4.5,
            run_speed_bonus: 4.0,
            air_acceleration: 0.8,
            jump_power_static: 11.0,
            jump_power_dynamic: 12.0,
            jump_power_reduction: 0.5,
            fall_multiplier: 0.5,
            abilities: MovementAbilities::default(),
            max_jumps: 2,
            jump_buffer: 0.2,
            jump_coyote_time: 0.2,
            ground_check_delay: 0.4,
            slide_resistance: 0.1,
            wall_jump_power_x: 11.0,
            wall_jump_power_y: 11.0,
            ground_probe: ProbeDef {
                offset_x: 0.0,
                offset_y: -0.5,
                radius: 0.31,
            },
            wall_probe: ProbeDef {
                offset_x: 0.35,
                offset_y: 0.0,
                radius: 0.0,
            },
            ground_layers: vec![GameLayer::Ground],
            wall_layers: vec![GameLayer::Wall],
        }
    }
}

impl MovementTuning {
    /// Resolve the ability flags into the concrete jump behaviour for a tick.
    pub fn resolve(&self) -> JumpProfile {
        let max_jumps = if self.abilities.can_multiple_jumps {
            self.max_jumps
        } else {
            1
        };
        let jump_power = if self.abilities.can_dynamic_jump {
            self.jump_power_dynamic
        } else {
            self.jump_power_static
        };

        JumpProfile {
            abilities: self.abilities,
            max_jumps,
            jump_power,
            jump_power_reduction: self.jump_power_reduction.clamp(0.0, 1.0),
        }
    }

    /// Horizontal target speed before air control is applied.
    pub fn target_speed(&self, running: bool) -> f32 {
        if running {
            self.walk_speed + self.run_speed_bonus
        } else {
            self.walk_speed
        }
    }

    /// Apex height of a single jump under the given gravity: h = v² / (2g)
    pub fn single_jump_height(&self, gravity: f32) -> f32 {
        let power = self.resolve().jump_power;
        if gravity <= 0.0 {
            return 0.0;
        }
        power * power / (2.0 * gravity)
    }
}

/// Jump behaviour derived from `MovementTuning`.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct JumpProfile {
    pub abilities: MovementAbilities,
    pub max_jumps: u32,
    pub jump_power: f32,
    pub jump_power_reduction: f32,
}

impl Default for JumpProfile {
    fn default() -> Self {
        MovementTuning::default().resolve()
    }
}

/// Jump button transitions reported since the last decision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub struct JumpEdge {
    pub started: bool,
    pub canceled: bool,
}

/// Input values read by one decision pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub axis: Vec2,
    pub run: bool,
    pub jump: JumpEdge,
}

/// Latest input delivered by the input layer.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    axis: Vec2,
    run: bool,
    jump: JumpEdge,
}

impl MovementInput {
    pub fn set_move_axis(&mut self, axis: Vec2) {
        self.axis = axis;
    }

    pub fn set_run_active(&mut self, active: bool) {
        self.run = active;
    }

    /// Latch a jump edge. Edges accumulate until the next decision pass consumes them.
    pub fn set_jump_edge(&mut self, started: bool, canceled: bool) {
        self.jump.started |= started;
        self.jump.canceled |= canceled;
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            axis: self.axis,
            run: self.run,
            jump: self.jump,
        }
    }

    pub fn consume_edges(&mut self) {
        self.jump = JumpEdge::default();
    }
}
