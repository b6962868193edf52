//! Colours for the wireframe

use serde::{Deserialize, Serialize};

use crate::segment::EdgeKind;

/// Linear RGBA colour, components in `[0, 1]`
pub type Rgba = [f32; 4];

/// Opaque colour from 8-bit channels
pub fn rgb8(r: u8, g: u8, b: u8) -> Rgba {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colour configuration of a scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgba,
    /// Fill of the endpoint dots
    pub vertex: Rgba,
    /// Edges lying inside slice 0 and slice 1; further slices alternate
    pub slices: [Rgba; 2],
    /// Edges joining two different slices
    pub dimensional: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: rgb8(25, 0, 50),
            vertex: rgb8(100, 50, 200),
            slices: [rgb8(150, 100, 250), rgb8(250, 100, 150)],
            dimensional: rgb8(100, 200, 250),
        }
    }
}

impl Palette {
    /// Stroke colour for an edge
    pub fn edge_color(&self, kind: EdgeKind) -> Rgba {
        match kind {
            EdgeKind::Slice(i) => self.slices[i as usize % 2],
            EdgeKind::Dimensional => self.dimensional,
            EdgeKind::Untagged => self.slices[0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb8() {
        assert_eq!(rgb8(255, 0, 51), [1.0, 0.0, 0.2, 1.0]);
    }

    #[test]
    fn test_edge_colors() {
        let p = Palette::default();
        assert_eq!(p.edge_color(EdgeKind::Slice(0)), p.slices[0]);
        assert_eq!(p.edge_color(EdgeKind::Slice(1)), p.slices[1]);
        assert_eq!(p.edge_color(EdgeKind::Slice(2)), p.slices[0]);
        assert_eq!(p.edge_color(EdgeKind::Dimensional), p.dimensional);
        assert_eq!(p.edge_color(EdgeKind::Untagged), p.slices[0]);
    }
}
