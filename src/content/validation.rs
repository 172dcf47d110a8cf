//! Validation for authored movement tuning values.

use crate::movement::{MovementTuning, ProbeDef};

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tuning field '{}' {}", self.field, self.message)
    }
}

/// Helper macro for checking a non-negative value
macro_rules! check_non_negative {
    ($errors:expr, $tuning:expr, $field:ident) => {
        let value = $tuning.$field;
        if value < 0.0 || value.is_nan() {
            $errors.push(ValidationError {
                field: stringify!($field),
                message: format!("must be non-negative, got {}", value),
            });
        }
    };
}

/// Helper macro for checking a factor in [0, 1]
macro_rules! check_unit_range {
    ($errors:expr, $tuning:expr, $field:ident) => {
        let value = $tuning.$field;
        if !(0.0..=1.0).contains(&value) {
            $errors.push(ValidationError {
                field: stringify!($field),
                message: format!("must be within [0, 1], got {}", value),
            });
        }
    };
}

fn check_probe(errors: &mut Vec<ValidationError>, field: &'static str, probe: &ProbeDef) {
    if probe.radius < 0.0 || probe.radius.is_nan() {
        errors.push(ValidationError {
            field,
            message: format!("radius must be non-negative, got {}", probe.radius),
        });
    }
    if !probe.offset_x.is_finite() || !probe.offset_y.is_finite() {
        errors.push(ValidationError {
            field,
            message: "offset must be finite".to_string(),
        });
    }
}

/// Validate authored tuning.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Horizontal
    check_non_negative!(errors, tuning, walk_speed);
    check_non_negative!(errors, tuning, run_speed_bonus);
    check_non_negative!(errors, tuning, air_acceleration);

    // Vertical
    check_non_negative!(errors, tuning, jump_power_static);
    check_non_negative!(errors, tuning, jump_power_dynamic);
    check_unit_range!(errors, tuning, jump_power_reduction);
    check_non_negative!(errors, tuning, fall_multiplier);

    // Limits and durations
    if tuning.max_jumps == 0 {
        errors.push(ValidationError {
            field: "max_jumps",
            message: "must allow at least one jump".to_string(),
        });
    }
    check_non_negative!(errors, tuning, jump_buffer);
    check_non_negative!(errors, tuning, jump_coyote_time);
    check_non_negative!(errors, tuning, ground_check_delay);
    check_unit_range!(errors, tuning, slide_resistance);
    check_non_negative!(errors, tuning, wall_jump_power_x);
    check_non_negative!(errors, tuning, wall_jump_power_y);

    // Sensor geometry
    check_probe(&mut errors, "ground_probe", &tuning.ground_probe);
    check_probe(&mut errors, "wall_probe", &tuning.wall_probe);
    if tuning.ground_layers.is_empty() {
        errors.push(ValidationError {
            field: "ground_layers",
            message: "must name at least one layer".to_string(),
        });
    }
    if tuning.wall_layers.is_empty() {
        errors.push(ValidationError {
            field: "wall_layers",
            message: "must name at least one layer".to_string(),
        });
    }

    errors
}
