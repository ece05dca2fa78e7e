//! Haptics visualizer configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use defaults that reproduce the demo scene, so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use haptics_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("listening on port {}", config.network.local_port);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HapticsConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use haptics_common::ConfigError;

/// Load config from an explicit path, or from the platform default path.
///
/// An explicit path must exist. The platform default is created with
/// documented defaults when missing.
pub fn load_config(path: Option<&Path>) -> Result<HapticsConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_config_contains_all_sections() {
        let json = serde_json::to_string_pretty(&HapticsConfig::default()).unwrap();
        assert!(json.contains("\"network\""));
        assert!(json.contains("\"transform\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"animation\""));
        assert!(json.contains("\"scene\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = serde_json::to_string(&HapticsConfig::default()).unwrap();
        let parsed: HapticsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.network.local_port, 5556);
        assert_eq!(parsed.window.title, "Haptics Demo");
        assert_eq!(parsed.scene.floor.grid_x, 8);
    }

    #[test]
    fn load_config_with_missing_explicit_path_fails() {
        let err = load_config(Some(Path::new("/tmp/definitely_missing_haptics.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viz.toml");
        std::fs::write(&path, "[window]\ntitle = \"Bench\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.window.title, "Bench");
    }
}
