//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum StartupMode {
    Windowed,
    #[default]
    Maximized,
    Fullscreen,
}

/// Window appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub startup_mode: StartupMode,
    /// Logical width used in `windowed` mode.
    pub width: u32,
    /// Logical height used in `windowed` mode.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Haptics Demo".into(),
            startup_mode: StartupMode::Maximized,
            width: 1280,
            height: 800,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
