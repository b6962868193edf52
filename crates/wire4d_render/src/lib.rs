//! Wireframe rendering for Wire4D
//!
//! The projection pipeline in `wire4d_core` produces a back-to-front list of
//! NDC segments. This crate turns that list, plus the slider panel, into
//! screen-space triangles and draws them with wgpu in submission order, so
//! the painter's ordering is preserved without a depth buffer.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`mesh::FrameMesh`] - CPU tessellation of thick lines, dots and rectangles
//! - [`mesh::MeshStyle`] - line width and vertex dot radius
//! - [`pipeline::WirePipeline`] - 2D triangle pipeline with a growable vertex buffer

pub mod context;
pub mod mesh;
pub mod pipeline;

pub use context::{ContextError, RenderContext};
pub use mesh::{FrameMesh, MeshStyle, PanelStyle};
pub use pipeline::{Vertex2D, ViewportUniforms, WirePipeline};
