//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for assembling a wireframe [`Scene`] from
//! configuration, scene files and built-in shapes.

use std::path::Path;

use wire4d_core::{
    tesseract_wireframe, Camera, DepthKey, Palette, ProjectionMode, ProjectionParams, Scene,
    SceneFile, Segment, Vec2, Vec3, Vec4,
};
use wire4d_input::{SliderPanel, SliderRange};

use crate::config::AppConfig;

use super::view_controls::place_w_slider;

/// Builder for constructing wireframe scenes
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::from_config(&config)
///     .load_scene_or_default(config.scene.path.as_deref())
///     .build();
/// ```
pub struct SceneBuilder {
    camera: Camera,
    segments: Vec<Segment>,
    palette: Palette,
    mode: ProjectionMode,
    params: ProjectionParams,
    depth_key: DepthKey,
    animation_speed: f32,
}

impl SceneBuilder {
    /// Create a new scene builder with the default camera and no geometry
    pub fn new() -> Self {
        Self {
            camera: Camera::default(),
            segments: Vec::new(),
            palette: Palette::default(),
            mode: ProjectionMode::default(),
            params: ProjectionParams::default(),
            depth_key: DepthKey::default(),
            animation_speed: 1.0,
        }
    }

    /// Camera, appearance and projection settings from configuration
    ///
    /// Pitch and fov start at the panel sliders' initial values, since the
    /// sliders own them from the first tick on.
    pub fn from_config(config: &AppConfig) -> Self {
        let camera = Camera::new(
            Vec4::from(config.camera.start_position),
            Vec2::new(config.panel.pitch.initial, config.camera.start_yaw),
            config.panel.fov.initial.to_radians(),
            config.camera.near,
        );
        Self {
            camera,
            segments: Vec::new(),
            palette: config.rendering.palette(),
            mode: config.projection.mode,
            params: config.projection.params(),
            depth_key: config.projection.depth_key,
            animation_speed: config.projection.animation_speed,
        }
    }

    /// Add a tesseract wireframe
    pub fn add_tesseract(mut self, center: Vec3, half_size: f32, w_slices: [f32; 2]) -> Self {
        self.segments.extend(tesseract_wireframe(center, half_size, w_slices));
        self
    }

    /// Add literal segments
    pub fn add_segments(mut self, segments: impl IntoIterator<Item = Segment>) -> Self {
        self.segments.extend(segments);
        self
    }

    /// Add a scene file's shapes; its spawn point and projection mode, when
    /// present, override the configured ones
    pub fn with_scene_file(mut self, file: &SceneFile) -> Self {
        self.segments.extend(file.segments());
        if let Some(spawn) = file.camera_spawn {
            self.camera.position = Vec4::from(spawn);
        }
        if let Some(mode) = file.projection {
            self.mode = mode;
        }
        self
    }

    /// Load a scene file, falling back to the unit tesseract when no path is
    /// given, the file cannot be loaded, or it contains no segments
    pub fn load_scene_or_default(self, path: Option<&str>) -> Self {
        let loaded = path.and_then(|p| match SceneFile::load(Path::new(p)) {
            Ok(file) => {
                log::info!("Loaded scene '{}' from {}", file.name, p);
                Some(file)
            }
            Err(e) => {
                log::warn!("Failed to load scene {}: {}. Using built-in tesseract", p, e);
                None
            }
        });

        match loaded {
            Some(file) if !file.shapes.is_empty() => self.with_scene_file(&file),
            Some(file) => {
                log::warn!("Scene '{}' has no shapes. Using built-in tesseract", file.name);
                self.add_tesseract(Vec3::ZERO, 1.0, [0.0, 1.0])
            }
            None => self.add_tesseract(Vec3::ZERO, 1.0, [0.0, 1.0]),
        }
    }

    /// Camera the scene will start with
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Build the scene
    pub fn build(self) -> Scene {
        Scene::new(self.camera, self.segments)
            .with_palette(self.palette)
            .with_mode(self.mode)
            .with_params(self.params)
            .with_depth_key(self.depth_key)
            .with_animation_speed(self.animation_speed)
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the slider panel so that its initial values agree with the
/// scene's camera, then place the w-slider for the starting projection.
///
/// The camera's w, pitch and fov replace the configured initial values;
/// ranges and steps come from configuration.
pub fn build_slider_panel(config: &AppConfig, scene: &Scene) -> SliderPanel {
    let camera = &scene.camera;
    let starting_at = |range: SliderRange, initial: f32| SliderRange { initial, ..range };
    let mut panel = SliderPanel::new(
        starting_at(config.panel.w, camera.position.w),
        config.panel.theta,
        starting_at(config.panel.pitch, camera.pitch()),
        starting_at(config.panel.fov, camera.fov.to_degrees()),
    );
    place_w_slider(&mut panel, scene.mode, &config.projection);
    panel
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire4d_core::ShapeTemplate;

    #[test]
    fn test_empty_scene() {
        let scene = SceneBuilder::new().build();
        assert!(scene.segments.is_empty());
        assert_eq!(scene.camera, Camera::default());
    }

    #[test]
    fn test_scene_with_tesseract() {
        let scene = SceneBuilder::new()
            .add_tesseract(Vec3::ZERO, 1.0, [0.0, 1.0])
            .build();
        assert_eq!(scene.segments.len(), 32);
    }

    #[test]
    fn test_from_config_uses_sliders_for_lens() {
        let mut config = AppConfig::default();
        config.panel.fov.initial = 60.0;
        config.projection.mode = ProjectionMode::AnimatedBlend;

        let builder = SceneBuilder::from_config(&config);
        assert!((builder.camera().fov - 60f32.to_radians()).abs() < 1e-6);
        assert_eq!(builder.camera().position, Vec4::new(0.0, 2.5, -7.5, 0.0));
        assert_eq!(builder.build().mode, ProjectionMode::AnimatedBlend);
    }

    #[test]
    fn test_scene_file_overrides_spawn_and_mode() {
        let mut file = SceneFile::new("test").with_shape(ShapeTemplate::unit_tesseract());
        file.camera_spawn = Some([0.0, 1.0, -4.0, 0.5]);
        file.projection = Some(ProjectionMode::PerspectiveRotation);

        let scene = SceneBuilder::new().with_scene_file(&file).build();
        assert_eq!(scene.camera.position, Vec4::new(0.0, 1.0, -4.0, 0.5));
        assert_eq!(scene.mode, ProjectionMode::PerspectiveRotation);
        assert_eq!(scene.segments.len(), 32);
    }

    #[test]
    fn test_missing_scene_falls_back_to_tesseract() {
        let builder = SceneBuilder::new().load_scene_or_default(Some("/nonexistent/scene.ron"));
        assert_eq!(builder.segment_count(), 32);

        let builder = SceneBuilder::new().load_scene_or_default(None);
        assert_eq!(builder.segment_count(), 32);
    }

    #[test]
    fn test_slider_panel_follows_camera() {
        let config = AppConfig::default();
        let mut camera = Camera::default();
        camera.position.w = 1.5;
        let scene = SceneBuilder::new().build();
        let scene = Scene { camera, ..scene };

        let values = build_slider_panel(&config, &scene).values();
        assert!((values.w - 1.5).abs() < 1e-5);
        assert!((values.fov_degrees - 90.0).abs() < 1e-3);
        assert_eq!(values.theta, 0.0);
    }

    #[test]
    fn test_starting_in_perspective_places_eye_behind_shape() {
        let mut config = AppConfig::default();
        config.projection.mode = ProjectionMode::PerspectiveRotation;
        let scene = SceneBuilder::from_config(&config)
            .add_tesseract(Vec3::ZERO, 1.0, [0.0, 1.0])
            .build();

        let panel = build_slider_panel(&config, &scene);
        assert!((panel.values().w - config.projection.perspective_camera_w).abs() < 1e-5);
    }
}
