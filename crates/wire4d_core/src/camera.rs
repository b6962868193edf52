//! Perspective camera
//!
//! The camera lives in 4D space but only rotates in 3D: yaw around the
//! vertical axis and pitch around the horizontal one. Its w coordinate is
//! consumed by the 4D->3D projector, not by the view transform.

use wire4d_math::{Vec2, Vec4};

/// Camera pose and lens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// 4D position (x, y, z, w)
    pub position: Vec4,
    /// Rotation as (x = pitch, y = yaw), radians
    pub rotation: Vec2,
    /// Field of view in radians
    pub fov: f32,
    /// Near-plane distance; segments with an endpoint at or in front of it are dropped
    pub near: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec4::new(0.0, 2.5, -7.5, 0.0), Vec2::ZERO, 90f32.to_radians(), 1.0)
    }
}

impl Camera {
    pub fn new(position: Vec4, rotation: Vec2, fov: f32, near: f32) -> Self {
        Self {
            position,
            rotation,
            fov,
            near,
        }
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.rotation.x
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }
}
