//! CPU tessellation of the frame into screen-space triangles
//!
//! Everything is emitted in draw order. Each segment is a quad followed by
//! a dot on each endpoint, so a nearer segment paints over both the line and
//! the vertex dots of anything behind it.

use wire4d_core::{Frame, Rgba, Viewport};
use wire4d_input::{PanelLayout, Rect, SliderId, SliderPanel};
use wire4d_math::Vec2;

use crate::pipeline::Vertex2D;

/// Triangles in a vertex dot
const DISC_SEGMENTS: usize = 16;

/// Line and dot sizes in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStyle {
    pub line_width: f32,
    pub vertex_radius: f32,
    /// Draw a dot on each segment endpoint
    pub draw_vertices: bool,
}

impl Default for MeshStyle {
    fn default() -> Self {
        Self {
            line_width: 4.0,
            vertex_radius: 6.0,
            draw_vertices: true,
        }
    }
}

/// Colours of the slider panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub background: Rgba,
    pub track: Rgba,
    pub fill: Rgba,
    pub knob: Rgba,
    pub active_knob: Rgba,
    pub knob_radius: f32,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            background: [0.06, 0.02, 0.12, 1.0],
            track: [0.25, 0.2, 0.35, 1.0],
            fill: [0.59, 0.39, 0.98, 1.0],
            knob: [0.85, 0.85, 0.9, 1.0],
            active_knob: [1.0, 1.0, 1.0, 1.0],
            knob_radius: 9.0,
        }
    }
}

/// Growable triangle list in window pixels
#[derive(Debug, Clone, Default)]
pub struct FrameMesh {
    vertices: Vec<Vertex2D>,
}

impl FrameMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex2D] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        self.vertices.extend([
            Vertex2D::new(a.to_array(), color),
            Vertex2D::new(b.to_array(), color),
            Vertex2D::new(c.to_array(), color),
        ]);
    }

    /// A `width`-pixel line from `a` to `b` as two triangles. Zero-length
    /// lines emit nothing.
    pub fn push_line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba) {
        let dir = b - a;
        let len = dir.length();
        if len <= f32::EPSILON || width <= 0.0 {
            return;
        }
        let half = 0.5 * width / len;
        let n = Vec2::new(-dir.y * half, dir.x * half);

        let (p0, p1, p2, p3) = (a + n, a - n, b - n, b + n);
        self.push_triangle(p0, p1, p2, color);
        self.push_triangle(p0, p2, p3, color);
    }

    /// A filled circle as a triangle fan
    pub fn push_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let step = std::f32::consts::TAU / DISC_SEGMENTS as f32;
        let rim = |i: usize| {
            let a = step * i as f32;
            center + Vec2::new(a.cos(), a.sin()) * radius
        };
        for i in 0..DISC_SEGMENTS {
            self.push_triangle(center, rim(i), rim(i + 1), color);
        }
    }

    pub fn push_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let p0 = Vec2::new(rect.x, rect.y);
        let p1 = Vec2::new(rect.x + rect.width, rect.y);
        let p2 = Vec2::new(rect.x + rect.width, rect.y + rect.height);
        let p3 = Vec2::new(rect.x, rect.y + rect.height);
        self.push_triangle(p0, p1, p2, color);
        self.push_triangle(p0, p2, p3, color);
    }

    /// Append the frame's segments, already ordered back to front
    pub fn push_frame(&mut self, frame: &Frame, viewport: &Viewport, style: &MeshStyle) {
        for segment in &frame.segments {
            let a = viewport.to_pixels(segment.start);
            let b = viewport.to_pixels(segment.end);
            self.push_line(a, b, style.line_width, segment.color);
            if style.draw_vertices {
                self.push_disc(a, style.vertex_radius, frame.vertex_color);
                self.push_disc(b, style.vertex_radius, frame.vertex_color);
            }
        }
    }

    /// Append the slider panel: background, then track, fill and knob per slider
    pub fn push_panel(&mut self, panel: &SliderPanel, layout: &PanelLayout, style: &PanelStyle) {
        if layout.width <= 0.0 {
            return;
        }
        self.push_rect(layout.bounds(), style.background);

        for id in SliderId::ALL {
            let track = layout.track(id);
            let fraction = panel.slider(id).fraction();
            self.push_rect(track, style.track);
            self.push_rect(
                Rect::new(track.x, track.y, track.width * fraction, track.height),
                style.fill,
            );

            let knob = Vec2::new(track.x + track.width * fraction, track.y + 0.5 * track.height);
            let color = if panel.dragging() == Some(id) {
                style.active_knob
            } else {
                style.knob
            };
            self.push_disc(knob, style.knob_radius, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire4d_core::ScreenSegment;
    use wire4d_input::SliderRange;

    const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
    const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];

    fn frame(segments: Vec<ScreenSegment>) -> Frame {
        Frame {
            background: [0.0, 0.0, 0.0, 1.0],
            vertex_color: BLUE,
            segments,
            culled: 0,
        }
    }

    fn segment(depth: f32, color: Rgba) -> ScreenSegment {
        ScreenSegment {
            start: Vec2::new(-0.1, 0.0),
            end: Vec2::new(0.1, 0.0),
            depth,
            color,
        }
    }

    #[test]
    fn test_line_quad_has_requested_width() {
        let mut mesh = FrameMesh::new();
        mesh.push_line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 4.0, RED);
        assert_eq!(mesh.vertices().len(), 6);
        let ys: Vec<f32> = mesh.vertices().iter().map(|v| v.position[1]).collect();
        let min = ys.iter().copied().fold(f32::MAX, f32::min);
        let max = ys.iter().copied().fold(f32::MIN, f32::max);
        assert!((max - min - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_line_skipped() {
        let mut mesh = FrameMesh::new();
        mesh.push_line(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0), 4.0, RED);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_disc_stays_within_radius() {
        let mut mesh = FrameMesh::new();
        let c = Vec2::new(50.0, 50.0);
        mesh.push_disc(c, 6.0, BLUE);
        assert_eq!(mesh.vertices().len(), DISC_SEGMENTS * 3);
        for v in mesh.vertices() {
            let d = Vec2::from(v.position) - c;
            assert!(d.length() <= 6.0 + 1e-4);
        }
    }

    #[test]
    fn test_frame_keeps_draw_order() {
        let mut mesh = FrameMesh::new();
        let f = frame(vec![segment(10.0, RED), segment(5.0, BLUE)]);
        mesh.push_frame(&f, &Viewport::new(800.0, 600.0), &MeshStyle::default());

        let per_segment = 6 + 2 * DISC_SEGMENTS * 3;
        assert_eq!(mesh.vertices().len(), 2 * per_segment);
        assert_eq!(mesh.vertices()[0].color, RED);
        assert_eq!(mesh.vertices()[per_segment].color, BLUE);
    }

    #[test]
    fn test_vertices_optional() {
        let mut mesh = FrameMesh::new();
        let style = MeshStyle {
            draw_vertices: false,
            ..MeshStyle::default()
        };
        mesh.push_frame(&frame(vec![segment(1.0, RED)]), &Viewport::new(800.0, 600.0), &style);
        assert_eq!(mesh.vertices().len(), 6);
    }

    #[test]
    fn test_panel_mesh_inside_panel() {
        let panel = SliderPanel::new(
            SliderRange::new(-2.0, 2.0, 0.01, 0.0),
            SliderRange::new(-3.14, 3.14, 0.01, 0.0),
            SliderRange::new(-1.5, 1.5, 0.01, 0.0),
            SliderRange::new(30.0, 150.0, 1.0, 90.0),
        );
        let layout = PanelLayout::new(1280.0, 720.0, 300.0);
        let mut mesh = FrameMesh::new();
        mesh.push_panel(&panel, &layout, &PanelStyle::default());
        assert!(!mesh.is_empty());
        for v in mesh.vertices() {
            assert!(v.position[0] >= layout.origin_x - PanelStyle::default().knob_radius);
        }
    }

    #[test]
    fn test_hidden_panel_emits_nothing() {
        let panel = SliderPanel::new(
            SliderRange::new(0.0, 1.0, 0.1, 0.0),
            SliderRange::new(0.0, 1.0, 0.1, 0.0),
            SliderRange::new(0.0, 1.0, 0.1, 0.0),
            SliderRange::new(30.0, 150.0, 1.0, 90.0),
        );
        let mut mesh = FrameMesh::new();
        mesh.push_panel(&panel, &PanelLayout::new(800.0, 600.0, 0.0), &PanelStyle::default());
        assert!(mesh.is_empty());
    }
}
