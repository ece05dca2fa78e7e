//! Unit cube with flat face normals.

use super::types::MeshVertex;

/// Faces as (outward normal, four corners counter-clockwise seen from outside).
const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    // +X
    (
        [1.0, 0.0, 0.0],
        [
            [0.5, -0.5, 0.5],
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, 0.5, 0.5],
        ],
    ),
    // -X
    (
        [-1.0, 0.0, 0.0],
        [
            [-0.5, -0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [-0.5, 0.5, -0.5],
        ],
    ),
    // +Y
    (
        [0.0, 1.0, 0.0],
        [
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [0.5, 0.5, -0.5],
            [-0.5, 0.5, -0.5],
        ],
    ),
    // -Y
    (
        [0.0, -1.0, 0.0],
        [
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, -0.5],
            [0.5, -0.5, 0.5],
            [-0.5, -0.5, 0.5],
        ],
    ),
    // +Z
    (
        [0.0, 0.0, 1.0],
        [
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
        ],
    ),
    // -Z
    (
        [0.0, 0.0, -1.0],
        [
            [0.5, -0.5, -0.5],
            [-0.5, -0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
        ],
    ),
];

/// Two triangles per quad: 0-1-2, 0-2-3.
pub const QUAD_INDICES: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// Generate a cube with edge length 1.0 centered at the origin (36 vertices).
pub fn generate_cube() -> Vec<MeshVertex> {
    FACES
        .iter()
        .flat_map(|(normal, corners)| {
            QUAD_INDICES
                .iter()
                .map(move |&i| MeshVertex::new(corners[i], *normal))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_36_vertices() {
        assert_eq!(generate_cube().len(), 36);
    }

    #[test]
    fn cube_corners_are_half_unit() {
        for v in generate_cube() {
            for c in v.position {
                assert_eq!(c.abs(), 0.5);
            }
        }
    }

    #[test]
    fn cube_normals_point_outwards() {
        for v in generate_cube() {
            let dot: f32 = v.position.iter().zip(v.normal).map(|(p, n)| p * n).sum();
            assert!((dot - 0.5).abs() < 1e-6, "vertex {v:?}");
        }
    }

    #[test]
    fn cube_triangles_wind_counter_clockwise_from_outside() {
        let mesh = generate_cube();
        for tri in mesh.chunks_exact(3) {
            let [a, b, c] = [tri[0].position, tri[1].position, tri[2].position];
            let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            let cross = [
                u[1] * v[2] - u[2] * v[1],
                u[2] * v[0] - u[0] * v[2],
                u[0] * v[1] - u[1] * v[0],
            ];
            let dot: f32 = cross.iter().zip(tri[0].normal).map(|(c, n)| c * n).sum();
            assert!(dot > 0.0);
        }
    }
}
