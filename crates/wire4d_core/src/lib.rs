//! Core types for Wire4D
//!
//! This crate holds the whole projection pipeline, free of any window or GPU
//! code:
//!
//! - [`Camera`] - 4D position, pitch/yaw, field of view, near plane
//! - [`Segment`] - a wireframe edge between two 4D points, tagged by w-slice
//! - [`Projector4D`] - collapses a 4D point to 3D ([`ProjectionMode`] picks the rule)
//! - [`CameraView`] - camera transform, near-plane test and perspective divide
//! - [`Scene`] - camera + segments + palette; `update` per tick, `render` per frame
//! - [`SceneFile`] - RON description of a scene's shapes
//! - [`Viewport`] - NDC to pixel mapping

mod camera;
mod segment;
mod palette;
mod projection;
mod view;
mod depth;
mod shapes;
mod scene;
mod scene_file;
mod viewport;

pub use camera::Camera;
pub use segment::{EdgeKind, Segment};
pub use palette::{rgb8, Palette, Rgba};
pub use projection::{rotate_xw, ProjectionMode, ProjectionParams, Projector4D};
pub use view::{perspective_divide, CameraView, ViewSegment};
pub use depth::{sort_back_to_front, DepthKey};
pub use shapes::{cube_edges, tesseract_wireframe, ShapeTemplate};
pub use scene::{AnimationState, Frame, Scene, ScreenSegment};
pub use scene_file::{SceneFile, SceneLoadError, SceneSaveError};
pub use viewport::Viewport;

// Re-export commonly used types from wire4d_math for convenience
pub use wire4d_math::{Vec2, Vec3, Vec4};
