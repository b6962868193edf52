//! Scene state, per-tick update and per-frame render
//!
//! `Scene` is the whole simulation state. The frame driver moves the camera
//! from input, then [`Scene::update`] advances the animation for the tick.
//! [`Scene::render`] is a pure function of the state.

use std::f32::consts::TAU;

use wire4d_math::Vec2;

use crate::camera::Camera;
use crate::depth::{sort_back_to_front, DepthKey};
use crate::palette::{Palette, Rgba};
use crate::projection::{ProjectionMode, ProjectionParams, Projector4D};
use crate::segment::Segment;
use crate::view::CameraView;

/// Time-varying projection inputs
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    /// Animation clock in seconds, wrapped to one period of `sin`/`cos`
    pub time: f32,
    /// x/w rotation angle for the perspective projector
    pub theta: f32,
}

/// A segment ready to draw, in NDC
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSegment {
    pub start: Vec2,
    pub end: Vec2,
    /// Sort key (camera-space depth)
    pub depth: f32,
    pub color: Rgba,
}

/// Draw list for one frame, ordered back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: Rgba,
    pub vertex_color: Rgba,
    pub segments: Vec<ScreenSegment>,
    /// Segments dropped by the near plane or the 4D eye
    pub culled: usize,
}

/// Camera, geometry and appearance of the wireframe view
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub segments: Vec<Segment>,
    pub palette: Palette,
    pub mode: ProjectionMode,
    pub params: ProjectionParams,
    pub depth_key: DepthKey,
    pub animation: AnimationState,
    /// Multiplier applied to tick length when advancing the animation clock
    pub animation_speed: f32,
}

impl Scene {
    pub fn new(camera: Camera, segments: Vec<Segment>) -> Self {
        Self {
            camera,
            segments,
            palette: Palette::default(),
            mode: ProjectionMode::default(),
            params: ProjectionParams::default(),
            depth_key: DepthKey::default(),
            animation: AnimationState::default(),
            animation_speed: 1.0,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_mode(mut self, mode: ProjectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_params(mut self, params: ProjectionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_depth_key(mut self, key: DepthKey) -> Self {
        self.depth_key = key;
        self
    }

    pub fn with_animation_speed(mut self, speed: f32) -> Self {
        self.animation_speed = speed;
        self
    }

    /// Advance the animation by one tick of `dt` seconds, with `theta` read
    /// from the sliders
    pub fn update(&mut self, theta: f32, dt: f32) {
        self.animation.theta = theta;
        self.animation.time = (self.animation.time + dt * self.animation_speed).rem_euclid(TAU);
    }

    /// Project every segment and return the draw list, farthest first
    pub fn render(&self) -> Frame {
        let projector = Projector4D::new(
            self.mode,
            &self.params,
            self.camera.position.w,
            &self.animation,
        );
        let view = CameraView::new(&self.camera);

        let mut segments = Vec::with_capacity(self.segments.len());
        let mut culled = 0;

        for segment in &self.segments {
            let projected = projector
                .project(segment.start)
                .zip(projector.project(segment.end))
                .and_then(|(a, b)| view.project_segment(a, b));

            match projected {
                Some(v) => segments.push(ScreenSegment {
                    start: v.start,
                    end: v.end,
                    depth: self.depth_key.depth(v.start_depth, v.end_depth),
                    color: self.palette.edge_color(segment.kind()),
                }),
                None => culled += 1,
            }
        }

        sort_back_to_front(&mut segments);

        Frame {
            background: self.palette.background,
            vertex_color: self.palette.vertex,
            segments,
            culled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::tesseract_wireframe;
    use wire4d_math::{Vec3, Vec4};

    #[test]
    fn test_default_tesseract_fully_visible() {
        let scene = Scene::new(Camera::default(), tesseract_wireframe(Vec3::ZERO, 1.0, [0.0, 1.0]));
        let frame = scene.render();
        assert_eq!(frame.segments.len(), 32);
        assert_eq!(frame.culled, 0);
        assert_eq!(frame.background, scene.palette.background);
    }

    #[test]
    fn test_render_sorted_back_to_front() {
        let scene = Scene::new(Camera::default(), tesseract_wireframe(Vec3::ZERO, 1.0, [0.0, 1.0]));
        let frame = scene.render();
        for pair in frame.segments.windows(2) {
            assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn test_segment_behind_camera_culled() {
        let behind = Segment::new(Vec4::new(0.0, 0.0, -20.0, 0.0), Vec4::new(1.0, 0.0, 5.0, 0.0));
        let front = Segment::new(Vec4::new(0.0, 0.0, 5.0, 0.0), Vec4::new(1.0, 0.0, 5.0, 0.0));
        let scene = Scene::new(Camera::default(), vec![behind, front]);
        let frame = scene.render();
        assert_eq!(frame.segments.len(), 1);
        assert_eq!(frame.culled, 1);
    }

    #[test]
    fn test_update_reads_theta_and_advances_clock() {
        let mut scene = Scene::new(Camera::default(), Vec::new());
        scene.update(0.3, 1.0 / 60.0);
        assert_eq!(scene.animation.theta, 0.3);
        assert!((scene.animation.time - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(scene.camera, Camera::default());
    }

    #[test]
    fn test_animation_clock_wraps() {
        let mut scene = Scene::new(Camera::default(), Vec::new()).with_animation_speed(2.0);
        scene.update(0.0, 4.0);
        assert!(scene.animation.time >= 0.0 && scene.animation.time < TAU);
        assert!((scene.animation.time - (8.0 - TAU)).abs() < 1e-5);
    }

    #[test]
    fn test_blend_frame_changes_with_time() {
        let edge = Segment::new(Vec4::new(-1.0, 1.0, -1.0, 1.0), Vec4::new(1.0, 1.0, -1.0, 1.0));
        let mut scene = Scene::new(Camera::default(), vec![edge])
            .with_mode(ProjectionMode::AnimatedBlend)
            .with_animation_speed(std::f32::consts::FRAC_PI_2);

        // t = 0: no scale, offset (1.5, 0, 0) per unit of w
        let before = scene.render().segments[0];
        assert!((before.start.x - 0.5 / 6.5).abs() < 1e-5);
        assert!((before.start.y - (-1.5 / 6.5)).abs() < 1e-5);

        // t = PI/2: scale 0.5, no offset
        scene.update(0.0, 1.0);
        let after = scene.render().segments[0];
        assert!((after.start.x - (-0.5 / 7.0)).abs() < 1e-5);
        assert!((after.start.y - (-2.0 / 7.0)).abs() < 1e-5);
        assert!((after.depth - 7.0).abs() < 1e-5);
    }

    #[test]
    fn test_perspective_frame_at_nonzero_theta() {
        let mut camera = Camera::default();
        camera.position = Vec4::new(0.0, 0.0, -2.0, -3.0);
        let point = Segment::new(Vec4::new(1.0, 0.0, 0.0, 0.0), Vec4::new(0.0, 0.0, 0.0, 0.0));
        let mut scene = Scene::new(camera, vec![point]).with_mode(ProjectionMode::PerspectiveRotation);
        scene.update(std::f32::consts::FRAC_PI_2, 0.0);

        // theta = PI/2 maps (x, w) = (1, 0) to (0, -1): w-depth 2, p3 = 0
        // (0, 0) stays put: w-depth 3, p3 = 0; both then sit at z = 2
        let frame = scene.render();
        assert_eq!(frame.culled, 0);
        let s = frame.segments[0];
        assert!(s.start.length() < 1e-5);
        assert!(s.end.length() < 1e-5);
        assert!((s.depth - 2.0).abs() < 1e-5);

        // theta = PI/6 leaves x' = cos(PI/6), w' = -sin(PI/6)
        scene.update(std::f32::consts::FRAC_PI_6, 0.0);
        let s = scene.render().segments[0];
        let (sin, cos) = std::f32::consts::FRAC_PI_6.sin_cos();
        let depth = 3.0 - sin;
        let x = cos / depth;
        assert!((s.start.x - x / 2.0).abs() < 1e-5);
        assert!(s.end.length() < 1e-5);
    }

    #[test]
    fn test_segment_straddling_w_eye_culled_whole() {
        let mut camera = Camera::default();
        camera.position.w = 0.5;
        let straddle = Segment::new(Vec4::new(0.0, 2.5, 0.0, 0.0), Vec4::new(0.0, 2.5, 0.0, 1.0));
        let ahead = Segment::new(Vec4::new(0.0, 2.5, 0.0, 1.0), Vec4::new(1.0, 2.5, 0.0, 1.0));
        let scene = Scene::new(camera, vec![straddle, ahead]).with_mode(ProjectionMode::PerspectiveRotation);

        let frame = scene.render();
        assert_eq!(frame.segments.len(), 1);
        assert_eq!(frame.culled, 1);
    }

    #[test]
    fn test_edge_colors_follow_slices() {
        let scene = Scene::new(Camera::default(), tesseract_wireframe(Vec3::ZERO, 1.0, [0.0, 1.0]));
        let frame = scene.render();
        let dimensional = frame
            .segments
            .iter()
            .filter(|s| s.color == scene.palette.dimensional)
            .count();
        assert_eq!(dimensional, 8);
    }
}
