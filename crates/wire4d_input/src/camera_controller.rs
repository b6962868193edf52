//! Camera controller for held-key movement
//!
//! Controls:
//! - Arrow keys: move in the horizontal plane relative to yaw
//! - W/S: up/down (Y)
//! - A/D: yaw left/right
//!
//! Speeds are per tick, not per second; the simulation runs a fixed tick.

use std::f32::consts::{FRAC_PI_2, PI};

use wire4d_math::Vec4;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::{HeldKeys, SliderPanel, SliderValues};

/// Everything the frame driver reads from input in one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    pub held: HeldKeys,
    pub sliders: SliderValues,
}

/// Camera controller for handling input
pub struct CameraController {
    held: HeldKeys,

    // Configuration
    pub move_speed: f32,
    pub rotation_speed: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            held: HeldKeys::empty(),
            move_speed: 0.1,
            rotation_speed: 0.015,
        }
    }

    /// Process keyboard input. Returns true if the key is a movement key.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        match HeldKeys::from_key_code(key) {
            Some(flag) => {
                self.held.set(flag, state == ElementState::Pressed);
                true
            }
            None => false,
        }
    }

    /// Forget all held keys (window lost focus)
    pub fn release_all(&mut self) {
        self.held = HeldKeys::empty();
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }

    /// Check if any movement keys are pressed
    pub fn is_moving(&self) -> bool {
        !self.held.is_empty()
    }

    /// Freeze the current input state for one tick
    pub fn snapshot(&self, panel: &SliderPanel) -> InputSnapshot {
        InputSnapshot {
            held: self.held,
            sliders: panel.values(),
        }
    }

    /// Apply one tick of input to the camera.
    ///
    /// Translation uses the yaw from before this tick's rotation. Slider values
    /// overwrite camera w, pitch and fov.
    pub fn apply<C: CameraControl>(&self, input: &InputSnapshot, camera: &mut C) {
        let delta = movement_delta(input.held, camera.yaw(), self.move_speed);
        if delta != Vec4::ZERO {
            camera.translate(delta);
        }

        let yaw = (input.held.contains(HeldKeys::YAW_LEFT) as i32
            - input.held.contains(HeldKeys::YAW_RIGHT) as i32) as f32;
        if yaw != 0.0 {
            camera.rotate_yaw(yaw * self.rotation_speed);
        }

        camera.set_w(input.sliders.w);
        camera.set_pitch(input.sliders.pitch);
        camera.set_fov(input.sliders.fov_degrees.to_radians());
    }

    /// Builder: set movement speed (units per tick)
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set yaw speed (radians per tick)
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }
}

/// Translation produced by the held keys for one tick.
///
/// Each horizontal key contributes `speed * (cos a, sin a)` to (x, z), with
/// `a = yaw + PI` (left), `yaw` (right), `yaw + PI/2` (forward),
/// `yaw - PI/2` (backward). `RISE`/`SINK` add `±speed` to y.
pub fn movement_delta(held: HeldKeys, yaw: f32, speed: f32) -> Vec4 {
    let mut delta = Vec4::ZERO;
    let directions = [
        (HeldKeys::STRAFE_LEFT, yaw + PI),
        (HeldKeys::STRAFE_RIGHT, yaw),
        (HeldKeys::FORWARD, yaw + FRAC_PI_2),
        (HeldKeys::BACKWARD, yaw - FRAC_PI_2),
    ];
    for (flag, angle) in directions {
        if held.contains(flag) {
            delta.x += speed * angle.cos();
            delta.z += speed * angle.sin();
        }
    }
    if held.contains(HeldKeys::RISE) {
        delta.y += speed;
    }
    if held.contains(HeldKeys::SINK) {
        delta.y -= speed;
    }
    delta
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    fn yaw(&self) -> f32;
    fn translate(&mut self, delta: Vec4);
    fn rotate_yaw(&mut self, delta: f32);
    fn set_w(&mut self, w: f32);
    fn set_pitch(&mut self, pitch: f32);
    fn set_fov(&mut self, radians: f32);
    fn position(&self) -> Vec4;
}
