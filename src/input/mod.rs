//! Input handling module
//!
//! Provides input mapping from raw events to semantic actions, and the
//! binding that lets the camera controller drive the scene camera.

mod camera_binding;
mod input_mapper;

pub use camera_binding::SceneCamera;
pub use input_mapper::{InputMapper, InputAction};
