use super::cube::QUAD_INDICES;
use super::types::MeshVertex;
use crate::scene::FloorLayout;

const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Two triangles per tile, in world space, with the tile color baked into
/// every vertex. Transparent tiles are kept so they still write depth.
pub fn generate_floor(layout: &FloorLayout) -> Vec<MeshVertex> {
    let tiles = layout.tiles();
    let mut vertices = Vec::with_capacity(tiles.len() * QUAD_INDICES.len());

    for tile in &tiles {
        let [x0, y, z0] = tile.min;
        let [x1, _, z1] = tile.max;
        let corners = [[x0, y, z0], [x0, y, z1], [x1, y, z1], [x1, y, z0]];
        vertices.extend(QUAD_INDICES.iter().map(|&i| MeshVertex {
            position: corners[i],
            normal: UP,
            color: tile.color,
        }));
    }

    vertices
}
