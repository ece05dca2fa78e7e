//! Scene configuration: camera, lighting, marker, static solids, floor.
//!
//! Colors are linear RGBA in `[0, 1]`. Positions are scene units with
//! X = horizontal, Y = vertical, Z = depth (towards the viewer).

use serde::{Deserialize, Serialize};

/// Perspective camera looking down -Z, pulled back and tilted downwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the origin along the view axis.
    pub distance: f32,
    /// Downward tilt around the X axis, in degrees.
    pub tilt_degrees: f32,
    /// Vertical field of view, in degrees (valid range: 1-179).
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 25.0,
            tilt_degrees: 20.0,
            fov_degrees: 45.0,
            near: 1.0,
            far: 200.0,
        }
    }
}

/// Single point light, positioned in eye space.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub position: [f32; 3],
    /// Scene-wide ambient added to every surface regardless of the light.
    pub global_ambient: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    /// Specular reflectance shared by every surface.
    pub material_specular: [f32; 3],
    /// Specular exponent (valid range: 0-128).
    pub shininess: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            position: [-14.0, 7.0, 28.0],
            global_ambient: [0.2, 0.2, 0.2],
            ambient: [0.2, 0.2, 0.2],
            diffuse: [0.8, 0.8, 0.8],
            specular: [1.0, 1.0, 1.0],
            material_specular: [0.0, 1.0, 1.0],
            shininess: 128.0,
        }
    }
}

/// The moving marker that follows the received position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub radius: f32,
    pub color: [f32; 4],
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: 0.3,
            color: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Static translucent sphere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            center: [-3.0, 0.0, 4.0],
            radius: 2.0,
            color: [0.0, 1.0, 0.0, 0.6],
        }
    }
}

/// Static translucent cube.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub center: [f32; 3],
    /// Edge length.
    pub side: f32,
    pub color: [f32; 4],
    /// Rotate about the vertical axis by the animation angle.
    pub spin: bool,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            center: [4.0, 0.0, 3.5],
            side: 3.0,
            color: [0.0, 0.0, 1.0, 0.6],
            spin: false,
        }
    }
}

/// Checkerboard floor centered at the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorConfig {
    /// Height of the floor plane (Y).
    pub depth: f32,
    /// Tiles along X (valid range: 1-256).
    pub grid_x: u32,
    /// Tiles along Z (valid range: 1-256).
    pub grid_y: u32,
    /// Edge length of one tile.
    pub tile_size: f32,
    /// Color of tiles whose cell coordinates sum to an odd number.
    pub tile_color: [f32; 4],
    /// Color of the remaining tiles.
    pub gap_color: [f32; 4],
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            depth: -4.0,
            grid_x: 8,
            grid_y: 8,
            tile_size: 4.0,
            tile_color: [0.2, 0.2, 0.2, 1.0],
            gap_color: [0.0, 0.0, 0.0, 0.0],
        }
    }
}

/// Everything the renderer draws.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub background: [f32; 4],
    /// Present with vsync (`Fifo`) instead of `AutoNoVsync`.
    pub vsync: bool,
    /// Slices and stacks of the sphere meshes (valid range: 3-256).
    pub mesh_detail: u32,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub marker: MarkerConfig,
    pub sphere: SphereConfig,
    pub cube: CubeConfig,
    pub floor: FloorConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0, 1.0],
            vsync: true,
            mesh_detail: 32,
            camera: CameraConfig::default(),
            lighting: LightingConfig::default(),
            marker: MarkerConfig::default(),
            sphere: SphereConfig::default(),
            cube: CubeConfig::default(),
            floor: FloorConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
