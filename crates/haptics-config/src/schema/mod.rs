//! Configuration schema types for the haptics visualizer.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that reproduce the demo scene.

mod animation;
mod network;
mod scene;
mod system;
mod transform;
mod window;

pub use animation::*;
pub use network::*;
pub use scene::*;
pub use system::*;
pub use transform::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HapticsConfig {
    pub network: NetworkConfig,
    pub transform: TransformConfig,
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub scene: SceneConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
