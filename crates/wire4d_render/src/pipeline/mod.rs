//! Rendering pipeline components
//!
//! A single render pipeline draws pre-tessellated 2D triangles in pixel
//! coordinates. There is no depth attachment: draw order is paint order.

pub mod types;
pub mod wire_pipeline;

pub use types::{Vertex2D, ViewportUniforms};
pub use wire_pipeline::WirePipeline;
