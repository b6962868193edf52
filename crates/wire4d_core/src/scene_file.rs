//! Scene serialization
//!
//! Provides SceneFile for loading/saving wireframe scenes from RON files.
//! A scene file lists shapes and can optionally pin the camera spawn point
//! and projection mode.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::projection::ProjectionMode;
use crate::segment::Segment;
use crate::shapes::ShapeTemplate;

/// A serializable scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Shapes in this scene
    pub shapes: Vec<ShapeTemplate>,
    /// Camera spawn position [x, y, z, w]
    #[serde(default)]
    pub camera_spawn: Option<[f32; 4]>,
    /// Projection rule to start with
    #[serde(default)]
    pub projection: Option<ProjectionMode>,
}

impl SceneFile {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
            camera_spawn: None,
            projection: None,
        }
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let scene = Self::from_ron(&contents)?;
        log::debug!(
            "Read scene '{}' ({} shapes) from {}",
            scene.name,
            scene.shapes.len(),
            path.display()
        );
        Ok(scene)
    }

    /// Parse a scene from RON text
    pub fn from_ron(contents: &str) -> Result<Self, SceneLoadError> {
        Ok(ron::from_str(contents)?)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let path = path.as_ref();
        fs::write(path, self.to_ron()?)?;
        log::debug!("Wrote scene '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Render this scene as pretty-printed RON
    pub fn to_ron(&self) -> Result<String, SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn with_shape(mut self, shape: ShapeTemplate) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Flatten all shapes into one segment list
    pub fn segments(&self) -> Vec<Segment> {
        self.shapes.iter().flat_map(ShapeTemplate::to_segments).collect()
    }
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    Io(io::Error),
    Serialize(ron::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}
