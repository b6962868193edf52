//! Binds the scene camera to the camera controller
//!
//! `wire4d_core` knows nothing about input; this wrapper lets
//! [`CameraController::apply`](wire4d_input::CameraController::apply) write
//! straight into a [`Camera`].

use wire4d_core::{Camera, Vec4};
use wire4d_input::CameraControl;

/// Mutable view of a [`Camera`] that the controller can drive
pub struct SceneCamera<'a> {
    camera: &'a mut Camera,
}

impl<'a> SceneCamera<'a> {
    pub fn new(camera: &'a mut Camera) -> Self {
        Self { camera }
    }
}

impl CameraControl for SceneCamera<'_> {
    fn yaw(&self) -> f32 {
        self.camera.rotation.y
    }

    fn translate(&mut self, delta: Vec4) {
        self.camera.position += delta;
    }

    fn rotate_yaw(&mut self, delta: f32) {
        self.camera.rotation.y += delta;
    }

    fn set_w(&mut self, w: f32) {
        self.camera.position.w = w;
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.camera.rotation.x = pitch;
    }

    fn set_fov(&mut self, radians: f32) {
        self.camera.fov = radians;
    }

    fn position(&self) -> Vec4 {
        self.camera.position
    }
}
