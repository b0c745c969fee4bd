//! Lumen Core - scene description for the lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Scene data**: `Material`, `Light`, `Camera`
//! - **Render tunables**: `RenderConfig`, `ShadingParameters`, `OcclusionMode`
//! - **Scene files**: JSON parsing and validation into a `SceneDescription`
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.objects.len(),
//!     scene.lights.len());
//! ```

pub mod camera;
pub mod config;
pub mod description;
pub mod material;

// Re-export commonly used types
pub use camera::Camera;
pub use config::{OcclusionMode, RenderConfig, ShadingParameters};
pub use description::{
    load_scene, load_scene_from_string, CameraDescription, ImageSettings, LoadError, LoadResult,
    MaterialDescription, ObjectDescription, SceneDescription, ShapeDescription,
};
pub use material::{Light, Material};
