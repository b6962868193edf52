//! Wire4D - 4D wireframe viewer
//!
//! Projects 4D polytopes to 3D and then onto the screen, with a walkable
//! camera and a slider panel for camera w, x/w rotation, pitch and fov.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use wire4d::config::{AppConfig, ConfigError};
use wire4d::input::{InputAction, InputMapper};
use wire4d::scene::{build_slider_panel, cycle_projection, reset_view, SceneBuilder};
use wire4d::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use wire4d_core::{Camera, Scene};
use wire4d_input::{CameraController, PanelLayout, SliderPanel};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    scene: Scene,
    /// Camera the scene started with, restored on reset
    spawn_camera: Camera,
    controller: CameraController,
    panel: SliderPanel,
    layout: PanelLayout,
    simulation: SimulationSystem,
    /// Last cursor position in physical pixels
    cursor: (f32, f32),
}

impl App {
    fn new(config: AppConfig) -> Self {
        let scene = SceneBuilder::from_config(&config)
            .load_scene_or_default(config.scene.path.as_deref())
            .build();

        log::info!(
            "Scene ready: {} segments, projection {}",
            scene.segments.len(),
            scene.mode.name()
        );

        let panel = build_slider_panel(&config, &scene);
        let layout = PanelLayout::new(
            config.window.width as f32,
            config.window.height as f32,
            config.panel.width,
        );

        let controller = CameraController::new()
            .with_move_speed(config.input.move_speed)
            .with_rotation_speed(config.input.rotation_speed);

        let simulation =
            SimulationSystem::new(config.input.tick_rate, config.input.max_ticks_per_frame);

        Self {
            spawn_camera: scene.camera,
            config,
            window: None,
            render: None,
            scene,
            controller,
            panel,
            layout,
            simulation,
            cursor: (0.0, 0.0),
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetCamera => {
                reset_view(
                    &mut self.scene,
                    &self.spawn_camera,
                    &mut self.panel,
                    &self.config.projection,
                );
                self.controller.release_all();
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::CycleProjection => {
                cycle_projection(&mut self.scene, &mut self.panel, &self.config.projection);
            }
            InputAction::NudgeSlider(id, steps) => {
                self.panel.slider_mut(id).nudge(steps);
            }
            InputAction::PanelPress => {
                let (x, y) = self.cursor;
                self.panel.press(&self.layout, x, y);
            }
            InputAction::PanelRelease => self.panel.release(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let result = self
            .simulation
            .update(&mut self.scene, &self.controller, &self.panel);

        let frame = self.scene.render();
        if self.config.debug.log_frame_stats {
            log::debug!(
                "ticks={} drawn={} culled={}",
                result.ticks,
                frame.segments.len(),
                frame.culled
            );
        }

        if let Some(window) = &self.window {
            window.update_title(self.scene.camera.position, &self.panel.values(), self.scene.mode);
        }

        if let Some(render) = &mut self.render {
            match render.render_frame(&frame, &self.panel, &self.layout) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("Failed to initialise rendering: {}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = render.size();
        self.layout = PanelLayout::new(width as f32, height as f32, self.config.panel.width);
        self.simulation.reset_clock();

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.layout = PanelLayout::new(
                    physical_size.width as f32,
                    physical_size.height as f32,
                    self.config.panel.width,
                );
            }

            WindowEvent::Focused(false) => {
                self.controller.release_all();
                self.panel.release();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.repeat {
                        // Held keys are tracked as state; only nudges repeat
                        if let Some(action @ InputAction::NudgeSlider(..)) =
                            InputMapper::map_keyboard(key, event.state)
                        {
                            self.handle_action(event_loop, action);
                        }
                        return;
                    }
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(event_loop, action);
                    }
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                self.panel.drag(&self.layout, self.cursor.0);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(action) = InputMapper::map_mouse_button(button, state) {
                    self.handle_action(event_loop, action);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn load_config() -> (AppConfig, Option<ConfigError>) {
    match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

fn main() {
    let (config, config_error) = load_config();

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Wire4D");
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
