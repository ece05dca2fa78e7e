//! CPU-side mesh generation: unit sphere, unit cube, checkerboard floor.
//!
//! All meshes are plain triangle lists (no index buffer) sharing one vertex
//! format, so a single pipeline draws the whole scene.

mod cube;
mod floor;
mod sphere;
mod types;

pub use cube::generate_cube;
pub use floor::generate_floor;
pub use sphere::generate_sphere;
pub use types::{MeshVertex, WHITE};
