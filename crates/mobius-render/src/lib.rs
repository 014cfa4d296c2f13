//! Visualization of sampled strips: grid meshes and a standalone HTML viewer.
//!
//! Nothing here holds global drawing state. Every render call takes the
//! geometry and the output writer as arguments.

pub mod mesh;
pub mod scene;

pub use mesh::TriangleMesh;
pub use scene::{render_grid, Scene, SceneMesh};
