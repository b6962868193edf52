//! NDC to pixel mapping

use wire4d_math::Vec2;

/// The drawing area the projection is mapped onto
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `px = W/2 + x*W`, `py = H/2 - y*W`.
    ///
    /// Both axes scale by the width, so the image keeps the same scale
    /// horizontally and vertically regardless of aspect.
    pub fn to_pixels(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            0.5 * self.width + ndc.x * self.width,
            0.5 * self.height - ndc.y * self.width,
        )
    }
}
