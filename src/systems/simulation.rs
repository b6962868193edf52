//! Simulation system
//!
//! Runs the scene at a fixed tick rate. Movement and rotation speeds are
//! defined per tick, so wall-clock time is accumulated and spent in whole
//! ticks regardless of the display's refresh rate.

use std::time::Instant;
use wire4d_core::Scene;
use wire4d_input::{CameraController, InputSnapshot, SliderPanel};

use crate::input::SceneCamera;

/// Result of a simulation update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationResult {
    /// Ticks run this frame
    pub ticks: u32,
    /// Whether time was discarded because the tick cap was reached
    pub dropped_time: bool,
}

/// Fixed-timestep driver for [`step_scene`]
pub struct SimulationSystem {
    last_frame: Instant,
    accumulator: f32,
    tick_length: f32,
    max_ticks_per_frame: u32,
}

impl SimulationSystem {
    /// Create a simulation running `tick_rate` ticks per second
    pub fn new(tick_rate: f32, max_ticks_per_frame: u32) -> Self {
        let tick_rate = if tick_rate > 0.0 { tick_rate } else { 60.0 };
        Self {
            last_frame: Instant::now(),
            accumulator: 0.0,
            tick_length: 1.0 / tick_rate,
            max_ticks_per_frame: max_ticks_per_frame.max(1),
        }
    }

    /// Length of one tick in seconds
    pub fn tick_length(&self) -> f32 {
        self.tick_length
    }

    /// Run the ticks owed since the previous call
    pub fn update(
        &mut self,
        scene: &mut Scene,
        controller: &CameraController,
        panel: &SliderPanel,
    ) -> SimulationResult {
        let now = Instant::now();
        let elapsed = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(elapsed, scene, controller, panel)
    }

    /// Add `elapsed` seconds to the accumulator and run whole ticks.
    ///
    /// At most `max_ticks_per_frame` ticks run; anything beyond that is
    /// discarded so a long stall does not trigger a burst of movement.
    pub fn advance(
        &mut self,
        elapsed: f32,
        scene: &mut Scene,
        controller: &CameraController,
        panel: &SliderPanel,
    ) -> SimulationResult {
        self.accumulator += elapsed.max(0.0);

        let mut ticks = 0;
        while self.accumulator >= self.tick_length && ticks < self.max_ticks_per_frame {
            let input = controller.snapshot(panel);
            step_scene(scene, controller, &input, self.tick_length);
            self.accumulator -= self.tick_length;
            ticks += 1;
        }

        let dropped_time = self.accumulator >= self.tick_length;
        if dropped_time {
            log::debug!(
                "Simulation fell behind, dropping {:.3}s",
                self.accumulator
            );
            self.accumulator %= self.tick_length;
        }

        SimulationResult { ticks, dropped_time }
    }

    /// Forget accumulated time (after a pause or reset)
    pub fn reset_clock(&mut self) {
        self.last_frame = Instant::now();
        self.accumulator = 0.0;
    }
}

/// One tick: move the camera from input, then advance the animation
pub fn step_scene(scene: &mut Scene, controller: &CameraController, input: &InputSnapshot, dt: f32) {
    controller.apply(input, &mut SceneCamera::new(&mut scene.camera));
    scene.update(input.sliders.theta, dt);
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(60.0, 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;
    use wire4d_core::Camera;
    use wire4d_input::{SliderId, SliderRange};

    fn panel() -> SliderPanel {
        SliderPanel::new(
            SliderRange::new(-5.0, 5.0, 0.01, 0.0),
            SliderRange::new(-3.14, 3.14, 0.01, 0.0),
            SliderRange::new(-1.57, 1.57, 0.01, 0.0),
            SliderRange::new(30.0, 150.0, 1.0, 90.0),
        )
    }

    #[test]
    fn test_whole_ticks_only() {
        let mut sim = SimulationSystem::new(60.0, 8);
        let mut scene = Scene::new(Camera::default(), Vec::new());
        let controller = CameraController::new();

        let result = sim.advance(0.5 / 60.0, &mut scene, &controller, &panel());
        assert_eq!(result.ticks, 0);

        let result = sim.advance(0.6 / 60.0, &mut scene, &controller, &panel());
        assert_eq!(result.ticks, 1);
    }

    #[test]
    fn test_movement_is_per_tick() {
        let mut sim = SimulationSystem::new(60.0, 8);
        let mut scene = Scene::new(Camera::default(), Vec::new());
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);

        let result = sim.advance(3.0 / 60.0 + 1e-4, &mut scene, &controller, &panel());
        assert_eq!(result.ticks, 3);
        assert!((scene.camera.position.y - (2.5 + 0.3)).abs() < 1e-4);
    }

    #[test]
    fn test_step_applies_sliders_and_theta() {
        let mut scene = Scene::new(Camera::default(), Vec::new());
        let mut sliders = panel();
        sliders.slider_mut(SliderId::Theta).set_value(0.5);
        sliders.slider_mut(SliderId::W).set_value(-1.0);
        let controller = CameraController::new();

        step_scene(&mut scene, &controller, &controller.snapshot(&sliders), 1.0 / 60.0);
        assert!((scene.animation.theta - 0.5).abs() < 1e-5);
        assert!((scene.camera.position.w + 1.0).abs() < 1e-5);
        assert!((scene.animation.time - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut sim = SimulationSystem::new(60.0, 4);
        let mut scene = Scene::new(Camera::default(), Vec::new());
        let controller = CameraController::new();

        let result = sim.advance(2.0, &mut scene, &controller, &panel());
        assert_eq!(result.ticks, 4);
        assert!(result.dropped_time);

        let result = sim.advance(0.0, &mut scene, &controller, &panel());
        assert_eq!(result.ticks, 0);
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert!((sim.tick_length() - 1.0 / 60.0).abs() < 1e-7);
    }
}
