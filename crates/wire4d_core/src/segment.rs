//! Wireframe segments

use serde::{Deserialize, Serialize};
use wire4d_math::Vec4;

/// A line segment between two 4D points
///
/// Each endpoint may carry the index of the w-slice it belongs to
/// (e.g. 0 for the w=0 cube of a tesseract). The tags only drive colouring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec4,
    pub end: Vec4,
    #[serde(default)]
    pub start_slice: Option<u8>,
    #[serde(default)]
    pub end_slice: Option<u8>,
}

/// How a segment relates to the w-slices of its figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Both endpoints in the same slice
    Slice(u8),
    /// Endpoints in different slices (an edge along the 4th dimension)
    Dimensional,
    /// At least one endpoint has no slice tag
    Untagged,
}

impl Segment {
    /// Untagged segment
    pub fn new(start: Vec4, end: Vec4) -> Self {
        Self {
            start,
            end,
            start_slice: None,
            end_slice: None,
        }
    }

    /// Segment whose endpoints belong to the given w-slices
    pub fn tagged(start: Vec4, start_slice: u8, end: Vec4, end_slice: u8) -> Self {
        Self {
            start,
            end,
            start_slice: Some(start_slice),
            end_slice: Some(end_slice),
        }
    }

    pub fn kind(&self) -> EdgeKind {
        match (self.start_slice, self.end_slice) {
            (Some(a), Some(b)) if a == b => EdgeKind::Slice(a),
            (Some(_), Some(_)) => EdgeKind::Dimensional,
            _ => EdgeKind::Untagged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_same_slice() {
        let s = Segment::tagged(Vec4::ZERO, 1, Vec4::W, 1);
        assert_eq!(s.kind(), EdgeKind::Slice(1));
    }

    #[test]
    fn test_kind_cross_slice() {
        let s = Segment::tagged(Vec4::ZERO, 0, Vec4::W, 1);
        assert_eq!(s.kind(), EdgeKind::Dimensional);
    }

    #[test]
    fn test_kind_untagged() {
        assert_eq!(Segment::new(Vec4::ZERO, Vec4::W).kind(), EdgeKind::Untagged);
        let half = Segment { start_slice: Some(0), ..Segment::new(Vec4::ZERO, Vec4::W) };
        assert_eq!(half.kind(), EdgeKind::Untagged);
    }
}
