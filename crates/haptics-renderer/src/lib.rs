pub mod gpu;
pub mod matrix;
pub mod mesh;
pub mod pipeline;
pub mod render_state;
pub mod scene;

pub use gpu::{GpuContext, RendererError};
pub use render_state::RenderState;
pub use scene::{Camera, DrawItem, FloorLayout, MeshKind, SceneLayout};
