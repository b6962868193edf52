//! Wireframe shape builders
//!
//! A tesseract wireframe is two cubes at different w, plus the eight edges
//! joining matching corners across w ("dimensional edges"): 12 + 12 + 8 = 32.

use serde::{Deserialize, Serialize};
use wire4d_math::{Vec3, Vec4};

use crate::segment::Segment;

/// Serializable shape description used by scene files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeTemplate {
    /// Two axis-aligned cubes at `w_slices[0]` and `w_slices[1]`, joined corner to corner
    Tesseract {
        center: [f32; 3],
        half_size: f32,
        w_slices: [f32; 2],
    },
    /// Literal segment list
    Segments(Vec<Segment>),
}

impl ShapeTemplate {
    /// The unit tesseract spanning w = 0..1
    pub fn unit_tesseract() -> Self {
        ShapeTemplate::Tesseract {
            center: [0.0; 3],
            half_size: 1.0,
            w_slices: [0.0, 1.0],
        }
    }

    pub fn to_segments(&self) -> Vec<Segment> {
        match self {
            ShapeTemplate::Tesseract {
                center,
                half_size,
                w_slices,
            } => tesseract_wireframe(Vec3::from(*center), *half_size, *w_slices),
            ShapeTemplate::Segments(segments) => segments.clone(),
        }
    }
}

fn cube_corner(center: Vec3, half: f32, index: usize) -> Vec3 {
    let sign = |bit: usize| if index & (1 << bit) != 0 { half } else { -half };
    center + Vec3::new(sign(0), sign(1), sign(2))
}

/// The 12 edges of an axis-aligned cube.
///
/// Corners are indexed by bits (x = bit 0, y = bit 1, z = bit 2); an edge
/// joins two corners differing in exactly one bit.
pub fn cube_edges(center: Vec3, half: f32) -> Vec<(Vec3, Vec3)> {
    let mut edges = Vec::with_capacity(12);
    for i in 0..8usize {
        for bit in 0..3 {
            let j = i | (1 << bit);
            if j != i {
                edges.push((cube_corner(center, half, i), cube_corner(center, half, j)));
            }
        }
    }
    edges
}

/// Tesseract wireframe with slice tags 0 and 1 on the two cubes
pub fn tesseract_wireframe(center: Vec3, half_size: f32, w_slices: [f32; 2]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(32);

    for (slice, &w) in w_slices.iter().enumerate() {
        let tag = slice as u8;
        for (a, b) in cube_edges(center, half_size) {
            segments.push(Segment::tagged(
                Vec4::from_xyz_w(a, w),
                tag,
                Vec4::from_xyz_w(b, w),
                tag,
            ));
        }
    }

    for i in 0..8 {
        let corner = cube_corner(center, half_size, i);
        segments.push(Segment::tagged(
            Vec4::from_xyz_w(corner, w_slices[0]),
            0,
            Vec4::from_xyz_w(corner, w_slices[1]),
            1,
        ));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::EdgeKind;

    #[test]
    fn test_cube_has_12_unit_length_edges() {
        let edges = cube_edges(Vec3::ZERO, 1.0);
        assert_eq!(edges.len(), 12);
        for (a, b) in edges {
            assert!(((a - b).length() - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_tesseract_counts() {
        let segments = tesseract_wireframe(Vec3::ZERO, 1.0, [0.0, 1.0]);
        assert_eq!(segments.len(), 32);

        let count = |k: EdgeKind| segments.iter().filter(|s| s.kind() == k).count();
        assert_eq!(count(EdgeKind::Slice(0)), 12);
        assert_eq!(count(EdgeKind::Slice(1)), 12);
        assert_eq!(count(EdgeKind::Dimensional), 8);
    }

    #[test]
    fn test_tesseract_contains_front_top_edge() {
        let segments = tesseract_wireframe(Vec3::ZERO, 1.0, [0.0, 1.0]);
        let a = Vec4::new(-1.0, 1.0, -1.0, 0.0);
        let b = Vec4::new(1.0, 1.0, -1.0, 0.0);
        assert!(segments
            .iter()
            .any(|s| (s.start == a && s.end == b) || (s.start == b && s.end == a)));
    }

    #[test]
    fn test_dimensional_edges_only_vary_in_w() {
        let segments = tesseract_wireframe(Vec3::new(1.0, 2.0, 3.0), 0.5, [-1.0, 2.0]);
        for s in segments.iter().filter(|s| s.kind() == EdgeKind::Dimensional) {
            assert_eq!(s.start.xyz(), s.end.xyz());
            assert_eq!((s.start.w, s.end.w), (-1.0, 2.0));
        }
    }

    #[test]
    fn test_template_segments_passthrough() {
        let seg = Segment::new(Vec4::ZERO, Vec4::W);
        let t = ShapeTemplate::Segments(vec![seg]);
        assert_eq!(t.to_segments(), vec![seg]);
        assert_eq!(ShapeTemplate::unit_tesseract().to_segments().len(), 32);
    }
}
