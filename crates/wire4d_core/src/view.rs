//! 3D -> 2D camera projection
//!
//! Points are translated by the camera position, rotated by yaw then pitch,
//! and perspective-divided. A segment survives only if both endpoints are
//! strictly beyond the near plane; there is no partial clipping.

use wire4d_math::{rotate_pair, Vec2, Vec3};

use crate::camera::Camera;

/// A segment after the camera transform, in NDC with camera-space depths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSegment {
    pub start: Vec2,
    pub end: Vec2,
    pub start_depth: f32,
    pub end_depth: f32,
}

/// Perspective divide: `(x / z / tan_half_fov, y / z / tan_half_fov)`
#[inline]
pub fn perspective_divide(p: Vec3, tan_half_fov: f32) -> Vec2 {
    Vec2::new(p.x / p.z / tan_half_fov, p.y / p.z / tan_half_fov)
}

/// Camera transform with its trigonometry evaluated once per frame
#[derive(Debug, Clone, Copy)]
pub struct CameraView {
    eye: Vec3,
    sin_yaw: f32,
    cos_yaw: f32,
    sin_pitch: f32,
    cos_pitch: f32,
    tan_half_fov: f32,
    near: f32,
}

impl CameraView {
    pub fn new(camera: &Camera) -> Self {
        Self {
            eye: camera.position.xyz(),
            sin_yaw: camera.yaw().sin(),
            cos_yaw: camera.yaw().cos(),
            sin_pitch: camera.pitch().sin(),
            cos_pitch: camera.pitch().cos(),
            tan_half_fov: (camera.fov / 2.0).tan(),
            near: camera.near,
        }
    }

    /// Translate into camera space and apply yaw, then pitch
    pub fn to_camera_space(&self, p: Vec3) -> Vec3 {
        let p = p - self.eye;
        let (x, z) = rotate_pair(p.x, p.z, self.sin_yaw, self.cos_yaw);
        // pitch: y' = y cos - z sin, z' = y sin + z cos
        let (z, y) = rotate_pair(z, p.y, self.sin_pitch, self.cos_pitch);
        Vec3::new(x, y, z)
    }

    /// Whether a camera-space depth lies strictly beyond the near plane.
    ///
    /// Depth zero is always rejected, whatever `near` is, and NaN never passes.
    #[inline]
    pub fn is_visible(&self, depth: f32) -> bool {
        depth > self.near && depth > 0.0
    }

    /// Project a camera-space point to NDC
    #[inline]
    pub fn to_ndc(&self, p: Vec3) -> Vec2 {
        perspective_divide(p, self.tan_half_fov)
    }

    /// Transform both endpoints and project them, or `None` if either
    /// endpoint fails the near-plane test
    pub fn project_segment(&self, start: Vec3, end: Vec3) -> Option<ViewSegment> {
        let a = self.to_camera_space(start);
        let b = self.to_camera_space(end);
        if !(self.is_visible(a.z) && self.is_visible(b.z)) {
            return None;
        }
        Some(ViewSegment {
            start: self.to_ndc(a),
            end: self.to_ndc(b),
            start_depth: a.z,
            end_depth: b.z,
        })
    }
}
