//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive covering every `haptics_*` crate.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "haptics=trace",
            LogLevel::Debug => "haptics=debug",
            LogLevel::Info => "haptics=info",
            LogLevel::Warn => "haptics=warn",
            LogLevel::Error => "haptics=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
