//! Scene construction utilities
//!
//! This module provides a declarative API for building wireframe scenes,
//! plus the projection switching and reset that keep the sliders in step.

mod scene_builder;
mod view_controls;

pub use scene_builder::{build_slider_panel, SceneBuilder};
pub use view_controls::{cycle_projection, place_w_slider, reset_view};
