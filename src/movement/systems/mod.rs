//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::sample_contacts;
pub(crate) use input::read_input;
pub(crate) use movement::{advance_fixed_step, advance_frame_step};
