//! WebGPU rendering module
//!
//! The view produces view-space triangle lists; the pipeline letterboxes
//! them onto the surface.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{Letterbox, RenderState};
pub use vertex::Vertex;
