//! Data definitions for RON tuning files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization only.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// Current layout of assets/data/movement.ron
pub const TUNING_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Movement tuning (movement.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    pub tuning: MovementTuning,
}
