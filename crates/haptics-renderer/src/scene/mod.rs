//! Render data preparation.
//!
//! Everything here is plain data and math: no wgpu, no window. The GPU side
//! in [`crate::render_state`] consumes a [`SceneLayout`] draw list each frame.

mod camera;
mod floor;
mod layout;

pub use camera::Camera;
pub use floor::{FloorLayout, FloorTile};
pub use layout::{DrawItem, MeshKind, SceneLayout, MAX_DRAW_ITEMS};
