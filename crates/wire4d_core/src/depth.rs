//! Painter's-algorithm ordering

use serde::{Deserialize, Serialize};

use crate::scene::ScreenSegment;

/// Which depth represents a segment when ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthKey {
    /// Depth of the endpoint closer to the camera
    #[default]
    NearestEndpoint,
    /// Depth of the endpoint farther from the camera
    FarthestEndpoint,
    /// Mean of both endpoint depths
    Midpoint,
}

impl DepthKey {
    pub fn depth(self, a: f32, b: f32) -> f32 {
        match self {
            DepthKey::NearestEndpoint => a.min(b),
            DepthKey::FarthestEndpoint => a.max(b),
            DepthKey::Midpoint => 0.5 * (a + b),
        }
    }
}

/// Order segments farthest-first.
///
/// Uses a total order on the keys and a stable sort, so equal depths keep
/// their input order.
pub fn sort_back_to_front(segments: &mut [ScreenSegment]) {
    segments.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
