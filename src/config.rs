//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`W4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use wire4d_core::{rgb8, DepthKey, Palette, ProjectionMode, ProjectionParams, Vec3};
use wire4d_input::SliderRange;
use wire4d_render::{MeshStyle, PanelStyle};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// 4D projection configuration
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Slider panel configuration
    #[serde(default)]
    pub panel: PanelConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`W4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // W4D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("W4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Wire4D".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position [x, y, z, w]
    pub start_position: [f32; 4],
    /// Starting yaw in radians
    pub start_yaw: f32,
    /// Near plane distance
    pub near: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: [0.0, 2.5, -7.5, 0.0],
            start_yaw: 0.0,
            near: 1.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Movement per tick while a movement key is held
    pub move_speed: f32,
    /// Yaw change per tick in radians
    pub rotation_speed: f32,
    /// Simulation ticks per second
    pub tick_rate: f32,
    /// Cap on ticks run in one frame after a stall
    pub max_ticks_per_frame: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.1,
            rotation_speed: 0.015,
            tick_rate: 60.0,
            max_ticks_per_frame: 8,
        }
    }
}

/// 4D projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Rule used at startup unless the scene file names one
    pub mode: ProjectionMode,
    /// Shear direction of the offset rule
    pub basis: [f32; 3],
    /// Sinusoidal scale amplitude of the animated blend rule
    pub scale_amplitude: f32,
    /// Sinusoidal x offset amplitude of the animated blend rule
    pub offset_amplitude: f32,
    /// Animation clock speed multiplier
    pub animation_speed: f32,
    /// Camera w the w-slider jumps to when entering the perspective rule
    pub perspective_camera_w: f32,
    /// Which endpoint depth orders segments
    pub depth_key: DepthKey,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Offset,
            basis: [1.0, 1.0, 1.0],
            scale_amplitude: 0.5,
            offset_amplitude: 1.5,
            animation_speed: 1.0,
            perspective_camera_w: -3.0,
            depth_key: DepthKey::NearestEndpoint,
        }
    }
}

impl ProjectionConfig {
    pub fn params(&self) -> ProjectionParams {
        ProjectionParams {
            basis: Vec3::from(self.basis),
            scale_amplitude: self.scale_amplitude,
            offset_amplitude: self.offset_amplitude,
        }
    }
}

/// Slider panel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Panel width in pixels; 0 hides the panel
    pub width: f32,
    /// Camera w slider
    pub w: SliderRange,
    /// x/w rotation slider in radians
    pub theta: SliderRange,
    /// Pitch slider in radians
    pub pitch: SliderRange,
    /// Field of view slider in degrees
    pub fov: SliderRange,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            w: SliderRange::new(-5.0, 5.0, 0.01, 0.0),
            theta: SliderRange::new(-3.14, 3.14, 0.01, 0.0),
            pitch: SliderRange::new(-1.57, 1.57, 0.01, 0.0),
            fov: SliderRange::new(30.0, 150.0, 1.0, 90.0),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Edge stroke width in pixels
    pub line_width: f32,
    /// Vertex dot radius in pixels
    pub vertex_radius: f32,
    /// Draw dots on segment endpoints
    pub draw_vertices: bool,
    /// Background colour (8-bit RGB)
    pub background_color: [u8; 3],
    /// Vertex dot colour (8-bit RGB)
    pub vertex_color: [u8; 3],
    /// Colours of edges inside slice 0 and slice 1 (8-bit RGB)
    pub slice_colors: [[u8; 3]; 2],
    /// Colour of edges joining two slices (8-bit RGB)
    pub dimensional_color: [u8; 3],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            line_width: 4.0,
            vertex_radius: 6.0,
            draw_vertices: true,
            background_color: [25, 0, 50],
            vertex_color: [100, 50, 200],
            slice_colors: [[150, 100, 250], [250, 100, 150]],
            dimensional_color: [100, 200, 250],
        }
    }
}

impl RenderingConfig {
    pub fn palette(&self) -> Palette {
        let c = |[r, g, b]: [u8; 3]| rgb8(r, g, b);
        Palette {
            background: c(self.background_color),
            vertex: c(self.vertex_color),
            slices: [c(self.slice_colors[0]), c(self.slice_colors[1])],
            dimensional: c(self.dimensional_color),
        }
    }

    pub fn mesh_style(&self) -> MeshStyle {
        MeshStyle {
            line_width: self.line_width,
            vertex_radius: self.vertex_radius,
            draw_vertices: self.draw_vertices,
        }
    }

    /// Panel colours, with the fill matching slice 0 edges
    pub fn panel_style(&self) -> PanelStyle {
        let [r, g, b] = self.slice_colors[0];
        PanelStyle {
            fill: rgb8(r, g, b),
            ..PanelStyle::default()
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RON scene file to load; the built-in tesseract is used when unset or unreadable
    pub path: Option<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: Some("scenes/tesseract.ron".to_string()),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log per-frame segment counts at debug level
    pub log_frame_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_frame_stats: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
