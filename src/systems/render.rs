//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Tessellating the frame and the slider panel
//! - Submitting the wireframe pass

use std::sync::Arc;
use winit::window::Window;
use wire4d_core::{Frame, Viewport};
use wire4d_input::{PanelLayout, SliderPanel};
use wire4d_render::{ContextError, FrameMesh, MeshStyle, PanelStyle, RenderContext, WirePipeline};

use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: WirePipeline,
    mesh: FrameMesh,
    mesh_style: MeshStyle,
    panel_style: PanelStyle,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = WirePipeline::new(&context.device, context.config.format);
        pipeline.update_viewport(&context.queue, context.size.width, context.size.height);

        Ok(Self {
            context,
            pipeline,
            mesh: FrameMesh::new(),
            mesh_style: render_config.mesh_style(),
            panel_style: render_config.panel_style(),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline
            .update_viewport(&self.context.queue, self.context.size.width, self.context.size.height);
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Render a single frame: background, wireframe back to front, then the panel
    pub fn render_frame(
        &mut self,
        frame: &Frame,
        panel: &SliderPanel,
        layout: &PanelLayout,
    ) -> Result<(), RenderError> {
        let viewport = Viewport::new(layout.origin_x, self.context.size.height as f32);

        self.mesh.clear();
        self.mesh.push_frame(frame, &viewport, &self.mesh_style);
        self.mesh.push_panel(panel, layout, &self.panel_style);
        self.pipeline
            .upload(&self.context.device, &self.context.queue, self.mesh.vertices());

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = frame.background;
        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }

    /// Vertices submitted in the last frame
    pub fn vertex_count(&self) -> u32 {
        self.pipeline.vertex_count()
    }
}
