//! UV sphere generation.

use super::types::MeshVertex;

/// Upper bound on slices and stacks, matching `scene.mesh_detail` validation.
pub const MAX_DETAIL: u32 = 256;

/// Generate a unit UV sphere.
///
/// `stacks` = latitude bands (rows), `slices` = longitude segments
/// (columns). Each quad is split into 2 triangles, producing
/// `stacks * slices * 6` vertices (no index buffer, plain triangle list).
///
/// Radius 1.0, centered at origin, north pole at (0, 1, 0). Both counts are
/// clamped to `MAX_DETAIL`.
pub fn generate_sphere(slices: u32, stacks: u32) -> Vec<MeshVertex> {
    let stacks = stacks.clamp(2, MAX_DETAIL);
    let slices = slices.clamp(3, MAX_DETAIL);

    let mut vertices = Vec::with_capacity(stacks as usize * slices as usize * 6);

    for lat in 0..stacks {
        for lon in 0..slices {
            let p00 = sphere_point(lat, lon, stacks, slices);
            let p10 = sphere_point(lat + 1, lon, stacks, slices);
            let p01 = sphere_point(lat, lon + 1, stacks, slices);
            let p11 = sphere_point(lat + 1, lon + 1, stacks, slices);

            // Unit sphere: normal == position.
            for p in [p00, p10, p01, p10, p11, p01] {
                vertices.push(MeshVertex::new(p, p));
            }
        }
    }

    vertices
}

/// Point on the unit sphere from latitude/longitude indices.
fn sphere_point(lat: u32, lon: u32, stacks: u32, slices: u32) -> [f32; 3] {
    let theta = std::f32::consts::PI * (lat as f32) / (stacks as f32);
    let phi = 2.0 * std::f32::consts::PI * (lon as f32) / (slices as f32);

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi]
}
