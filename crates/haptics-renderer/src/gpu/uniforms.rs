//! GPU uniform buffer types for the mesh shader.
//!
//! `SceneUniforms` (group 0) holds the light and is uploaded once.
//! `DrawUniforms` (group 1) is written per draw at a dynamic offset.

use haptics_config::schema::LightingConfig;

use crate::matrix::{self as mat, Mat4};
use crate::scene::DrawItem;

/// GPU-side light block matching the WGSL `Light` struct.
///
/// Layout: 6 × vec4<f32> = 96 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    /// Light position in eye space, w = 1.
    pub light_position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    /// Material specular color in xyz, shininess in w.
    pub material_specular: [f32; 4],
    pub global_ambient: [f32; 4],
}

impl SceneUniforms {
    pub fn from_config(lighting: &LightingConfig) -> Self {
        Self {
            light_position: extend(lighting.position, 1.0),
            ambient: extend(lighting.ambient, 1.0),
            diffuse: extend(lighting.diffuse, 1.0),
            specular: extend(lighting.specular, 1.0),
            material_specular: extend(lighting.material_specular, lighting.shininess),
            global_ambient: extend(lighting.global_ambient, 1.0),
        }
    }
}

/// GPU-side per-draw block matching the WGSL `Draw` struct.
///
/// Layout: 2 × mat4x4<f32> + vec4<f32> = 144 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: [f32; 16],
    /// Model-View matrix for eye-space lighting.
    pub model_view: [f32; 16],
    /// Tint multiplied with the vertex color.
    pub color: [f32; 4],
}

impl DrawUniforms {
    pub fn new(item: &DrawItem, view: &Mat4, projection: &Mat4) -> Self {
        let model_view = mat::mul(view, &item.model);
        Self {
            mvp: mat::mul(projection, &model_view),
            model_view,
            color: item.color,
        }
    }
}

/// Stride between per-draw blocks in the dynamic uniform buffer.
pub fn draw_uniform_stride(alignment: u64) -> u64 {
    let size = std::mem::size_of::<DrawUniforms>() as u64;
    let alignment = alignment.max(1);
    size.div_ceil(alignment) * alignment
}

fn extend(v: [f32; 3], w: f32) -> [f32; 4] {
    [v[0], v[1], v[2], w]
}

// =============================================================================
// Tests
// =============================================================================
