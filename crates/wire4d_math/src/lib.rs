//! Vector math for Wire4D
//!
//! Three plain value types carry points through the projection pipeline:
//!
//! - [`Vec4`] - world-space point, `w` is the fourth spatial axis
//! - [`Vec3`] - point after collapsing `w`, or in camera space
//! - [`Vec2`] - screen-space / NDC point, also used for pitch/yaw pairs

mod vec2;
mod vec3;
mod vec4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Rotate the pair `(a, b)` by an angle given as its sine and cosine.
///
/// Returns `(a*cos + b*sin, b*cos - a*sin)`, the convention used for both the
/// camera yaw and the x/w rotation of the 4D perspective projector.
#[inline]
pub fn rotate_pair(a: f32, b: f32, sin: f32, cos: f32) -> (f32, f32) {
    (a * cos + b * sin, b * cos - a * sin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_pair_zero_angle() {
        let (a, b) = rotate_pair(3.0, -2.0, 0.0, 1.0);
        assert_eq!((a, b), (3.0, -2.0));
    }

    #[test]
    fn test_rotate_pair_quarter_turn() {
        let half_pi = std::f32::consts::FRAC_PI_2;
        let (a, b) = rotate_pair(1.0, 0.0, half_pi.sin(), half_pi.cos());
        assert!(a.abs() < 1e-6);
        assert!((b + 1.0).abs() < 1e-6);
    }
}
