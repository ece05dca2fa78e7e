//! Full configuration validation.
//!
//! Validates numeric ranges, addresses, and colors. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod misc;
mod network;
mod scene;

#[cfg(test)]
mod tests;

use crate::schema::HapticsConfig;
use haptics_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HapticsConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    network::validate_network(&mut errors, config);
    network::validate_transform(&mut errors, config);
    misc::validate_window(&mut errors, config);
    misc::validate_animation(&mut errors, config);
    scene::validate_scene(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
