//! Content domain: data-driven movement tuning loaded from RON.

mod data;
mod loader;
mod validation;

pub use loader::load_tuning;
pub use validation::validate_tuning;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

/// Authored tuning, relative to the working directory
pub const TUNING_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_systems(PreStartup, load_movement_tuning);
    }
}

/// Replace the default tuning with the authored file, if it loads and validates.
fn load_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    let loaded = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            return;
        }
    };

    let errors = validate_tuning(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            warn!("{}", error);
        }
        warn!(
            "{} invalid tuning value(s) in {}; using default movement tuning",
            errors.len(),
            TUNING_PATH
        );
        return;
    }

    info!("Loaded movement tuning from {}: {:?}", TUNING_PATH, loaded.abilities);
    *tuning = loaded;
}
