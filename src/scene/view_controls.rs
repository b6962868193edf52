//! Projection switching and view reset
//!
//! The perspective rule divides by the w-depth, so with the eye at w = 0 the
//! w = 0 slice sits exactly on the 4D eye and is culled. Whenever that rule
//! becomes active (at startup, on cycling, after a reset) the w-slider is
//! moved behind the shape to `projection.perspective_camera_w`.

use wire4d_core::{Camera, ProjectionMode, Scene};
use wire4d_input::{SliderId, SliderPanel};

use crate::config::ProjectionConfig;

/// Put the w-slider where `mode` expects the eye: at the configured
/// perspective w for the perspective rule, at its initial value otherwise
pub fn place_w_slider(panel: &mut SliderPanel, mode: ProjectionMode, projection: &ProjectionConfig) {
    let slider = panel.slider_mut(SliderId::W);
    if mode == ProjectionMode::PerspectiveRotation {
        slider.set_value(projection.perspective_camera_w);
    } else {
        slider.reset();
    }
}

/// Switch the scene to the next projection rule and return it
pub fn cycle_projection(
    scene: &mut Scene,
    panel: &mut SliderPanel,
    projection: &ProjectionConfig,
) -> ProjectionMode {
    scene.mode = scene.mode.next();
    place_w_slider(panel, scene.mode, projection);
    log::info!("Projection: {}", scene.mode.name());
    scene.mode
}

/// Restore the spawn camera and every slider, keeping the current rule
pub fn reset_view(
    scene: &mut Scene,
    spawn: &Camera,
    panel: &mut SliderPanel,
    projection: &ProjectionConfig,
) {
    scene.camera = *spawn;
    panel.reset();
    place_w_slider(panel, scene.mode, projection);
    log::info!("Camera and sliders reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::scene::{build_slider_panel, SceneBuilder};
    use crate::systems::SimulationSystem;
    use wire4d_core::Vec3;
    use wire4d_input::CameraController;

    fn tesseract_scene(config: &AppConfig) -> Scene {
        SceneBuilder::from_config(config)
            .add_tesseract(Vec3::ZERO, 1.0, [0.0, 1.0])
            .build()
    }

    /// Run one tick so the sliders reach the camera, then render
    fn culled_after_tick(scene: &mut Scene, panel: &SliderPanel) -> usize {
        let controller = CameraController::new();
        let mut sim = SimulationSystem::new(60.0, 8);
        sim.advance(1.0 / 60.0 + 1e-4, scene, &controller, panel);
        scene.render().culled
    }

    #[test]
    fn test_start_in_perspective_shows_whole_tesseract() {
        let mut config = AppConfig::default();
        config.projection.mode = ProjectionMode::PerspectiveRotation;
        let mut scene = tesseract_scene(&config);
        let panel = build_slider_panel(&config, &scene);

        assert_eq!(culled_after_tick(&mut scene, &panel), 0);
        assert!((scene.camera.position.w - config.projection.perspective_camera_w).abs() < 1e-5);
    }

    #[test]
    fn test_cycle_into_and_out_of_perspective() {
        let config = AppConfig::default();
        let mut scene = tesseract_scene(&config);
        let mut panel = build_slider_panel(&config, &scene);

        assert_eq!(cycle_projection(&mut scene, &mut panel, &config.projection), ProjectionMode::AnimatedBlend);
        assert_eq!(panel.values().w, 0.0);

        assert_eq!(
            cycle_projection(&mut scene, &mut panel, &config.projection),
            ProjectionMode::PerspectiveRotation
        );
        assert_eq!(culled_after_tick(&mut scene, &panel), 0);

        assert_eq!(cycle_projection(&mut scene, &mut panel, &config.projection), ProjectionMode::Offset);
        assert_eq!(panel.values().w, 0.0);
    }

    #[test]
    fn test_reset_in_perspective_keeps_eye_behind_shape() {
        let mut config = AppConfig::default();
        config.projection.mode = ProjectionMode::PerspectiveRotation;
        let mut scene = tesseract_scene(&config);
        let spawn = scene.camera;
        let mut panel = build_slider_panel(&config, &scene);

        panel.slider_mut(SliderId::W).set_value(0.0);
        scene.camera.position.x = 4.0;
        reset_view(&mut scene, &spawn, &mut panel, &config.projection);

        assert_eq!(scene.camera.position.x, spawn.position.x);
        assert_eq!(culled_after_tick(&mut scene, &panel), 0);
    }

    #[test]
    fn test_reset_in_offset_restores_initial_w() {
        let config = AppConfig::default();
        let mut scene = tesseract_scene(&config);
        let spawn = scene.camera;
        let mut panel = build_slider_panel(&config, &scene);

        panel.slider_mut(SliderId::W).set_value(2.0);
        reset_view(&mut scene, &spawn, &mut panel, &config.projection);
        assert_eq!(panel.values().w, 0.0);
    }
}
