//! Window and animation validation.

use crate::schema::HapticsConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate window constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &HapticsConfig) {
    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
    validate_range(errors, "window.width", config.window.width, 1, 16384);
    validate_range(errors, "window.height", config.window.height, 1, 16384);
}

/// Validate animation ticker constraints.
pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &HapticsConfig) {
    validate_range(
        errors,
        "animation.period_ms",
        config.animation.period_ms,
        1,
        1000,
    );
    validate_range_f64(
        errors,
        "animation.step_degrees",
        config.animation.step_degrees,
        0.0,
        360.0,
    );
}
