//! Movement domain: the per-character jump and locomotion state machine.
//!
//! `MovementController` owns every transient value the character needs between
//! ticks. The host drives it through two entry points:
//!
//! - [`MovementController::fixed_step`] at the physics rate: contact sampling,
//!   jump-count reset and fall shaping.
//! - [`MovementController::frame_step`] at the render rate: facing, wall slide,
//!   horizontal movement and the jump decision.
//!
//! Neither entry point touches the ECS; bodies and sensors are reached through
//! the [`CharacterBody`] and [`ContactSensor`](super::systems::collisions::ContactSensor) seams so the
//! whole machine can be exercised frame by frame in unit tests.

use bevy::prelude::*;

use crate::movement::{Facing, InputSnapshot, JumpProfile, MovementTuning};

/// Interpolation rate for horizontal velocity, per second.
const HORIZONTAL_SMOOTHING: f32 = 10.0;

/// Velocity and visual orientation of a simulated character.
pub trait CharacterBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Mirror the character's horizontal visual scale.
    fn mirror_horizontal(&mut self);
}

/// Result of one round of overlap queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactReading {
    pub grounded: bool,
    pub walled: bool,
}

/// Coarse movement state, derived from the controller flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum MovementPhase {
    Grounded,
    Airborne,
    WallSliding,
    Jumping,
}

/// Which rule produced a jump impulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum JumpKind {
    /// Pressed shortly before landing
    Buffered,
    Ground,
    /// Extra jump while airborne
    Air,
    /// Pressed shortly after walking off a ledge
    Coyote,
    Wall,
}

#[derive(Component, Debug, Clone, Reflect)]
pub struct MovementController {
    pub facing: Facing,
    pub grounded: bool,
    pub walled: bool,
    pub wall_sliding: bool,
    pub jumping: bool,
    pub jump_count: u32,
    pub jump_buffer_timer: f32,
    pub coyote_timer: f32,
    pub ground_check_delay_timer: f32,
    coyote_armed: bool,
    jump_latched: bool,
    profile: JumpProfile,
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new(&MovementTuning::default())
    }
}

impl MovementController {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            facing: Facing::Right,
            grounded: false,
            walled: false,
            wall_sliding: false,
            jumping: false,
            jump_count: 0,
            jump_buffer_timer: 0.0,
            coyote_timer: 0.0,
            ground_check_delay_timer: 0.0,
            coyote_armed: false,
            jump_latched: false,
            profile: tuning.resolve(),
        }
    }

    pub fn profile(&self) -> &JumpProfile {
        &self.profile
    }

    pub fn phase(&self) -> MovementPhase {
        if self.wall_sliding {
            MovementPhase::WallSliding
        } else if self.jumping {
            MovementPhase::Jumping
        } else if self.grounded {
            MovementPhase::Grounded
        } else {
            MovementPhase::Airborne
        }
    }

    /// Physics-rate update. `gravity` is the magnitude of world gravity.
    pub fn fixed_step(
        &mut self,
        tuning: &MovementTuning,
        contacts: ContactReading,
        gravity: f32,
        dt: f32,
        body: &mut impl CharacterBody,
    ) {
        self.grounded = contacts.grounded;
        self.walled = contacts.walled;

        if self.jumping {
            self.ground_check_delay_timer += dt;
        }
        // Landing only re-arms once the character has been airborne long enough.
        if (self.ground_check_delay_timer >= tuning.ground_check_delay && self.grounded)
            || self.walled
        {
            self.jump_count = 0;
            self.jumping = false;
            self.ground_check_delay_timer = 0.0;
        }

        self.profile = tuning.resolve();

        let mut velocity = body.velocity();
        if velocity.y < 0.0 {
            velocity.y -= gravity * tuning.fall_multiplier * dt;
            body.set_velocity(velocity);
        }
    }

    /// Render-rate update. Returns the jump applied this frame, if any.
    pub fn frame_step(
        &mut self,
        tuning: &MovementTuning,
        input: &InputSnapshot,
        dt: f32,
        body: &mut impl CharacterBody,
    ) -> Option<JumpKind> {
        self.update_facing(input.axis.x, body);
        self.apply_wall_slide(tuning, input.axis.x, body);
        self.apply_horizontal_movement(tuning, input, dt, body);
        self.apply_jump(tuning, input, dt, body)
    }

    fn update_facing(&mut self, axis_x: f32, body: &mut impl CharacterBody) {
        let turning = match self.facing {
            Facing::Right => axis_x < 0.0,
            Facing::Left => axis_x > 0.0,
        };
        if turning {
            self.facing = self.facing.flipped();
            body.mirror_horizontal();
        }
    }

    fn apply_wall_slide(
        &mut self,
        tuning: &MovementTuning,
        axis_x: f32,
        body: &mut impl CharacterBody,
    ) {
        if self.profile.abilities.can_wall_slide && self.walled && axis_x != 0.0 {
            self.wall_sliding = true;
            let velocity = body.velocity();
            // No horizontal drift while pressed against the wall
            body.set_velocity(Vec2::new(0.0, velocity.y * tuning.slide_resistance));
        } else {
            self.wall_sliding = false;
        }
    }

    fn apply_horizontal_movement(
        &mut self,
        tuning: &MovementTuning,
        input: &InputSnapshot,
        dt: f32,
        body: &mut impl CharacterBody,
    ) {
        let acceleration = if self.grounded {
            1.0
        } else {
            tuning.air_acceleration
        };
        let target = input.axis.x * tuning.target_speed(input.run) * acceleration;

        let mut velocity = body.velocity();
        velocity.x = approach(velocity.x, target, dt * HORIZONTAL_SMOOTHING);
        body.set_velocity(velocity);
    }

    fn apply_jump(
        &mut self,
        tuning: &MovementTuning,
        input: &InputSnapshot,
        dt: f32,
        body: &mut impl CharacterBody,
    ) -> Option<JumpKind> {
        let abilities = self.profile.abilities;
        let started = input.jump.started;
        let mut velocity = body.velocity();
        let mut fired = None;

        if abilities.can_buffer_jump && velocity.y < 0.0 {
            if started {
                self.jump_buffer_timer = tuning.jump_buffer;
            } else {
                self.jump_buffer_timer = (self.jump_buffer_timer - dt).max(0.0);
            }
        }

        if abilities.can_coyote_time_jump && velocity.y < 0.0 && !self.jumping && !self.wall_sliding
        {
            if self.coyote_armed {
                self.coyote_timer = (self.coyote_timer - dt).max(0.0);
            } else {
                self.coyote_timer = tuning.jump_coyote_time;
                self.coyote_armed = true;
            }
        } else {
            self.coyote_armed = false;
            self.coyote_timer = 0.0;
        }

        match self.eligible_jump(started) {
            Some(kind) => {
                if !self.jump_latched {
                    self.jumping = true;
                    self.jump_count += 1;
                    // Spent, so a quick re-landing cannot replay the buffered press
                    self.jump_buffer_timer = 0.0;
                    self.jump_latched = true;
                    velocity.y = self.profile.jump_power;
                    body.set_velocity(velocity);
                    fired = Some(kind);
                    debug!("{:?} jump: jump_count={}", kind, self.jump_count);
                }
            }
            None => self.jump_latched = false,
        }

        if abilities.can_dynamic_jump && velocity.y > 0.0 && input.jump.canceled {
            velocity.y *= self.profile.jump_power_reduction;
            body.set_velocity(velocity);
        }

        if abilities.can_wall_jump && self.wall_sliding && started {
            // Push away from the wall the character is facing
            body.set_velocity(Vec2::new(
                -self.facing.sign() * tuning.wall_jump_power_x,
                tuning.wall_jump_power_y,
            ));
            fired = Some(JumpKind::Wall);
            debug!("Wall jump: facing={:?}", self.facing);
        }

        fired
    }

    /// First matching jump rule, in precedence order.
    fn eligible_jump(&self, started: bool) -> Option<JumpKind> {
        let abilities = self.profile.abilities;
        if self.jump_count >= self.profile.max_jumps || self.wall_sliding {
            return None;
        }

        if abilities.can_buffer_jump && self.jump_buffer_timer > 0.0 && self.grounded {
            Some(JumpKind::Buffered)
        } else if self.grounded && started {
            Some(JumpKind::Ground)
        } else if abilities.can_multiple_jumps && started {
            Some(JumpKind::Air)
        } else if abilities.can_coyote_time_jump && started && self.coyote_timer > 0.0 {
            Some(JumpKind::Coyote)
        } else {
            None
        }
    }
}

/// Linear interpolation with the factor clamped to [0, 1].
fn approach(current: f32, target: f32, t: f32) -> f32 {
    current + (target - current) * t.clamp(0.0, 1.0)
}
