//! Raw-to-scene unit transform.

use serde::{Deserialize, Serialize};

/// Affine transform applied to each received component:
/// `scene = scale * raw + shift`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub scale: f64,
    pub shift: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            scale: 10.0,
            shift: 0.0,
        }
    }
}
