//! Redraw ticker configuration.

use serde::{Deserialize, Serialize};

/// Fixed-cadence redraw ticker.
///
/// Each firing advances a cosmetic angle by `step_degrees` (wrapping at 360)
/// and requests a redraw.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Ticker period in milliseconds (valid range: 1-1000).
    pub period_ms: u32,
    /// Angle advance per tick in degrees (valid range: 0-360).
    pub step_degrees: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            period_ms: 25,
            step_degrees: 1.0,
        }
    }
}

impl AnimationConfig {
    pub fn period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(u64::from(self.period_ms))
    }
}
