//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float). NaN is rejected.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is NaN or infinite.
pub(crate) fn validate_finite(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() {
        errors.push(format!("{name} = {value} must be finite"));
    }
}

/// Push an error for every channel outside `[0, 1]`.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, channels: &[f32]) {
    for (i, c) in channels.iter().enumerate() {
        validate_range_f64(errors, &format!("{name}[{i}]"), f64::from(*c), 0.0, 1.0);
    }
}
