//! 4D -> 3D projection
//!
//! Three rules collapse a 4D point into 3D space. All of them are expressed
//! relative to the camera's w coordinate; the 3D camera transform in
//! [`crate::view`] then subtracts the camera's x/y/z.
//!
//! - [`ProjectionMode::Offset`]: shear along a fixed basis,
//!   `p3 = p.xyz + (p.w - cam_w) * basis`
//! - [`ProjectionMode::AnimatedBlend`]: with `d = p.w - cam_w`,
//!   `p3 = p.xyz - p.xyz * d * scale + offset * d`, where
//!   `scale = a_s * sin(t)` and `offset = (a_o * cos(t), 0, 0)`
//! - [`ProjectionMode::PerspectiveRotation`]: rotate (x, w) by theta, then
//!   divide x/y/z by the w-depth `w' - cam_w`

use serde::{Deserialize, Serialize};
use wire4d_math::{rotate_pair, Vec3, Vec4};

use crate::scene::AnimationState;

/// Which 4D -> 3D rule to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    #[default]
    Offset,
    AnimatedBlend,
    PerspectiveRotation,
}

impl ProjectionMode {
    /// Next mode in cycling order
    pub fn next(self) -> Self {
        match self {
            ProjectionMode::Offset => ProjectionMode::AnimatedBlend,
            ProjectionMode::AnimatedBlend => ProjectionMode::PerspectiveRotation,
            ProjectionMode::PerspectiveRotation => ProjectionMode::Offset,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProjectionMode::Offset => "offset",
            ProjectionMode::AnimatedBlend => "animated blend",
            ProjectionMode::PerspectiveRotation => "perspective rotation",
        }
    }
}

/// Tunables of the projection rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Shear direction for `Offset`
    pub basis: Vec3,
    /// Amplitude of the sinusoidal scale for `AnimatedBlend`
    pub scale_amplitude: f32,
    /// Amplitude of the sinusoidal x offset for `AnimatedBlend`
    pub offset_amplitude: f32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            basis: Vec3::ONE,
            scale_amplitude: 0.5,
            offset_amplitude: 1.5,
        }
    }
}

/// Rotate a point in the x/w plane by `theta`.
///
/// `x' = x cos + w sin`, `w' = w cos - x sin`; y and z are untouched.
pub fn rotate_xw(p: Vec4, theta: f32) -> Vec4 {
    let (x, w) = rotate_pair(p.x, p.w, theta.sin(), theta.cos());
    Vec4::new(x, p.y, p.z, w)
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Offset { basis: Vec3 },
    Blend { scale: f32, offset: Vec3 },
    Perspective { sin: f32, cos: f32 },
}

/// A 4D -> 3D projector with per-frame trigonometry already evaluated
#[derive(Debug, Clone, Copy)]
pub struct Projector4D {
    rule: Rule,
    camera_w: f32,
}

impl Projector4D {
    pub fn new(
        mode: ProjectionMode,
        params: &ProjectionParams,
        camera_w: f32,
        animation: &AnimationState,
    ) -> Self {
        let rule = match mode {
            ProjectionMode::Offset => Rule::Offset { basis: params.basis },
            ProjectionMode::AnimatedBlend => {
                let t = animation.time;
                Rule::Blend {
                    scale: params.scale_amplitude * t.sin(),
                    offset: Vec3::new(params.offset_amplitude * t.cos(), 0.0, 0.0),
                }
            }
            ProjectionMode::PerspectiveRotation => Rule::Perspective {
                sin: animation.theta.sin(),
                cos: animation.theta.cos(),
            },
        };
        Self { rule, camera_w }
    }

    /// Project a point, or `None` if it lies at or behind the 4D eye
    /// (perspective rule only; the other rules always succeed).
    pub fn project(&self, p: Vec4) -> Option<Vec3> {
        match self.rule {
            Rule::Offset { basis } => Some(p.xyz() + basis * (p.w - self.camera_w)),
            Rule::Blend { scale, offset } => {
                let d = p.w - self.camera_w;
                let xyz = p.xyz();
                Some(xyz - xyz * (d * scale) + offset * d)
            }
            Rule::Perspective { sin, cos } => {
                let (x, w) = rotate_pair(p.x, p.w, sin, cos);
                let depth = w - self.camera_w;
                if depth.is_nan() || depth <= 0.0 {
                    return None;
                }
                Some(Vec3::new(x, p.y, p.z) / depth)
            }
        }
    }

    /// The w-depth of a point under the perspective rule
    ///
    /// Returns `None` for the other rules.
    pub fn w_depth(&self, p: Vec4) -> Option<f32> {
        match self.rule {
            Rule::Perspective { sin, cos } => {
                let (_, w) = rotate_pair(p.x, p.w, sin, cos);
                Some(w - self.camera_w)
            }
            _ => None,
        }
    }
}
