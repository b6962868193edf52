//! GPU-compatible data types for the wireframe pipeline
//!
//! These types must match the layouts in `shaders/wire.wgsl`.

use bytemuck::{Pod, Zeroable};

/// A vertex of a screen-space triangle
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in window pixels, origin top-left, y down
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the wireframe pass
/// Layout: 16 bytes (must match wire.wgsl ViewportUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewportUniforms {
    /// Surface size in pixels
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

impl ViewportUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width.max(1.0), height.max(1.0)],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ViewportUniforms {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
