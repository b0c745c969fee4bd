//! JSON scene files.
//!
//! A scene file lists named materials, the objects that use them, point
//! lights, the camera, the output image size and optional render overrides:
//!
//! ```json
//! {
//!   "image": { "width": 400, "height": 400 },
//!   "camera": { "center": [0, 0, -3], "direction": [0, 0, 1], "up": [0, 1, 0] },
//!   "materials": { "red": { "color": [1, 0, 0], "reflection": 0.2 } },
//!   "objects": [
//!     { "type": "sphere", "center": [0, 0, 0], "radius": 1.0, "material": "red" }
//!   ],
//!   "lights": [ { "position": [2, 2, -2], "color": [1, 1, 1], "power": 1.0 } ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use lumen_math::{Color, Vec3};
use serde::Deserialize;
use thiserror::Error;

use crate::{Camera, Light, Material, RenderConfig};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object {object} references unknown material '{material}'")]
    InvalidMaterial { object: usize, material: String },

    #[error("Object {object} has non-positive radius {radius}")]
    InvalidRadius { object: usize, radius: f32 },

    #[error("Degenerate direction: {0}")]
    InvalidDirection(String),

    #[error("Image size must be non-zero, got {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Output image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ImageSettings {
    pub width: u32,
    pub height: u32,
}

impl ImageSettings {
    /// Reject an image with no pixels.
    pub fn validate(&self) -> LoadResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LoadError::InvalidImageSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
        }
    }
}

/// Camera block of a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CameraDescription {
    pub center: Vec3,
    pub direction: Vec3,
    #[serde(default = "default_up")]
    pub up: Vec3,
    #[serde(default = "default_one")]
    pub screen_distance: f32,
    #[serde(default = "default_one")]
    pub screen_width: f32,
    #[serde(default = "default_one")]
    pub screen_height: f32,
}

fn default_up() -> Vec3 {
    Vec3::Y
}

fn default_one() -> f32 {
    1.0
}

impl CameraDescription {
    /// Build the camera this block describes.
    pub fn to_camera(&self) -> Camera {
        Camera::new(self.center, self.direction, self.up).with_screen(
            self.screen_distance,
            self.screen_width,
            self.screen_height,
        )
    }
}

/// Material entry of a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MaterialDescription {
    pub color: Color,
    #[serde(default)]
    pub reflection: f32,
}

impl From<MaterialDescription> for Material {
    fn from(desc: MaterialDescription) -> Self {
        Material::new(desc.color, desc.reflection)
    }
}

/// Geometry of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDescription {
    Sphere { center: Vec3, radius: f32 },
    Plane { point: Vec3, normal: Vec3 },
}

/// A scene object: a shape and the name of its material.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectDescription {
    #[serde(flatten)]
    pub shape: ShapeDescription,
    pub material: String,
}

/// A parsed scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub image: ImageSettings,
    pub camera: CameraDescription,
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDescription>,
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub render: RenderConfig,
}

impl SceneDescription {
    /// Check the invariants the renderer relies on.
    pub fn validate(&self) -> LoadResult<()> {
        self.image.validate()?;

        let camera = &self.camera;
        if camera.direction.length_squared() == 0.0 {
            return Err(LoadError::InvalidDirection("camera direction".to_string()));
        }
        if camera.direction.cross(camera.up).length_squared() == 0.0 {
            return Err(LoadError::InvalidDirection(
                "camera up is zero or parallel to its direction".to_string(),
            ));
        }

        for (index, object) in self.objects.iter().enumerate() {
            self.material_for(index, object)?;
            match object.shape {
                ShapeDescription::Sphere { radius, .. } => {
                    if radius.is_nan() || radius <= 0.0 {
                        return Err(LoadError::InvalidRadius { object: index, radius });
                    }
                }
                ShapeDescription::Plane { normal, .. } => {
                    if normal.length_squared() == 0.0 {
                        return Err(LoadError::InvalidDirection(format!(
                            "object {index} plane normal"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Resolve the material an object refers to.
    pub fn material_for(&self, index: usize, object: &ObjectDescription) -> LoadResult<Material> {
        self.materials
            .get(&object.material)
            .map(|&desc| Material::from(desc))
            .ok_or_else(|| LoadError::InvalidMaterial {
                object: index,
                material: object.material.clone(),
            })
    }
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_string(source: &str) -> LoadResult<SceneDescription> {
    let description: SceneDescription = serde_json::from_str(source)?;
    description.validate()?;

    log::debug!(
        "Parsed scene: {} objects, {} materials, {} lights",
        description.objects.len(),
        description.materials.len(),
        description.lights.len()
    );

    Ok(description)
}

/// Load and validate a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());

    let source = std::fs::read_to_string(path)?;
    load_scene_from_string(&source)
}
