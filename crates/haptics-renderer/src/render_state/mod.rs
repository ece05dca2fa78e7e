//! Frame rendering: owns the GPU context, pipeline and meshes, and turns a
//! [`SceneLayout`](crate::scene::SceneLayout) draw list into a presented frame.

mod frame;
mod helpers;
mod state;

pub use state::RenderState;
