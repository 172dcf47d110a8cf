//! Movement domain: messages emitted by the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::JumpKind;

/// Emitted whenever the controller applies a jump impulse
#[allow(dead_code)]
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
    pub kind: JumpKind,
}

impl Message for JumpedEvent {}
