//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use wire4d_core::{ProjectionMode, Vec4};
use wire4d_input::SliderValues;

use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title with camera position, slider values and projection
    pub fn update_title(&self, pos: Vec4, sliders: &SliderValues, mode: ProjectionMode) {
        self.window
            .set_title(&format_title(&self.base_title, pos, sliders, mode));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn format_title(base: &str, pos: Vec4, sliders: &SliderValues, mode: ProjectionMode) -> String {
    format!(
        "{} - ({:.1}, {:.1}, {:.1}, {:.1}) theta:{:.2} pitch:{:.2} fov:{:.0} [{}]",
        base,
        pos.x,
        pos.y,
        pos.z,
        pos.w,
        sliders.theta,
        sliders.pitch,
        sliders.fov_degrees,
        mode.name()
    )
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_formatting() {
        let sliders = SliderValues {
            w: 0.5,
            theta: 0.25,
            pitch: 0.0,
            fov_degrees: 90.0,
        };
        let title = format_title(
            "Test",
            Vec4::new(1.0, 2.0, 3.0, 0.5),
            &sliders,
            ProjectionMode::PerspectiveRotation,
        );
        assert_eq!(
            title,
            "Test - (1.0, 2.0, 3.0, 0.5) theta:0.25 pitch:0.00 fov:90 [perspective rotation]"
        );
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
