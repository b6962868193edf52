//! Input handling for Wire4D
//!
//! Raw window events are folded into two pieces of state that the frame
//! driver polls once per tick:
//!
//! - [`HeldKeys`] - which movement keys are currently down
//! - [`SliderPanel`] - the side-panel sliders (w, theta, pitch, fov)
//!
//! [`CameraController`] turns a per-tick [`InputSnapshot`] into camera motion.

mod held_keys;
mod sliders;
mod camera_controller;

pub use held_keys::HeldKeys;
pub use sliders::{PanelLayout, Rect, Slider, SliderId, SliderPanel, SliderRange, SliderValues};
pub use camera_controller::{movement_delta, CameraControl, CameraController, InputSnapshot};
