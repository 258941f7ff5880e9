//! Range checks for configuration values the simulation divides by or
//! compares against.

use std::fmt;

use super::data::GameConfig;

/// A single out-of-range configuration field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $field:expr, $message:expr) => {
        if !$cond {
            $errors.push(ValidationError {
                field: $field,
                message: $message,
            });
        }
    };
}

/// Validate every section of the configuration.
/// Returns a list of validation errors, empty if the configuration is usable.
pub fn validate_config(config: &GameConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let screen = &config.screen;
    check!(errors, screen.width > 0, "screen.width", "must be positive");
    check!(errors, screen.height > 0, "screen.height", "must be positive");
    check!(
        errors,
        screen.window_scale > 0.0,
        "screen.window_scale",
        "must be positive"
    );
    check!(
        errors,
        screen.ticks_per_second > 0.0,
        "screen.ticks_per_second",
        "must be positive"
    );

    let playground = &config.playground;
    check!(
        errors,
        playground.tile_size > 0.0,
        "playground.tile_size",
        "must be positive"
    );
    check!(errors, playground.rows > 0, "playground.rows", "must be positive");
    check!(errors, playground.cols > 0, "playground.cols", "must be positive");
    // Interior tiles need at least one colour besides the reserved border one.
    check!(
        errors,
        playground.palette.len() >= 2,
        "playground.palette",
        "needs at least two colours"
    );
    // Tiles store palette indices as `u8`.
    check!(
        errors,
        playground.palette.len() <= 256,
        "playground.palette",
        "has more than 256 colours"
    );
    if playground.solid_border {
        check!(
            errors,
            playground.rows >= 3 && playground.cols >= 3,
            "playground.solid_border",
            "needs at least 3 rows and 3 columns"
        );
    }

    let movement = &config.movement;
    check!(
        errors,
        movement.walk_max_speed > 0.0,
        "movement.walk_max_speed",
        "must be positive"
    );
    check!(
        errors,
        movement.sprint_max_speed >= movement.walk_max_speed,
        "movement.sprint_max_speed",
        "must not be below walk_max_speed"
    );
    check!(
        errors,
        movement.speed_increment > 0.0,
        "movement.speed_increment",
        "must be positive"
    );
    check!(
        errors,
        movement.friction >= 0.0,
        "movement.friction",
        "must not be negative"
    );
    check!(
        errors,
        movement.idle_epsilon >= 0.0,
        "movement.idle_epsilon",
        "must not be negative"
    );

    let dash = &config.dash;
    check!(errors, dash.duration_ms > 0, "dash.duration_ms", "must be positive");
    check!(
        errors,
        dash.anticipation_divisor >= 1,
        "dash.anticipation_divisor",
        "must be at least 1"
    );
    check!(
        errors,
        dash.max_distance_tiles > 0.0,
        "dash.max_distance_tiles",
        "must be positive"
    );
    check!(
        errors,
        dash.speed_modifier > 0.0,
        "dash.speed_modifier",
        "must be positive"
    );

    let attack = &config.attack;
    check!(
        errors,
        attack.duration_ms > 0,
        "attack.duration_ms",
        "must be positive"
    );
    check!(errors, attack.combo_step > 0, "attack.combo_step", "must be positive");

    check!(
        errors,
        !config.sprite_manifest.is_empty(),
        "sprite_manifest",
        "must name a file"
    );

    errors
}
