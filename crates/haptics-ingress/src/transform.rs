//! Raw-to-scene unit transform.

use haptics_common::Position;
use haptics_config::schema::TransformConfig;

/// `scene = scale * raw + shift`, applied to each component independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub shift: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 10.0,
            shift: 0.0,
        }
    }
}

impl Transform {
    pub fn from_config(config: &TransformConfig) -> Self {
        Self {
            scale: config.scale,
            shift: config.shift,
        }
    }

    /// Transform wire-ordered raw components into a scene position.
    pub fn apply(&self, raw: [f64; 3]) -> Position {
        Position::from_components(raw.map(|v| self.scale * v + self.shift))
    }
}
