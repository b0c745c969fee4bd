//! Read-only scene snapshot handed to every trace call.

use lumen_core::{Camera, Light, LoadResult, Material, SceneDescription, ShapeDescription};

use crate::{Plane, Shape, Sphere};

/// Primitives with their materials, lights, and the camera.
///
/// `material(i)` is the material of `primitive(i)`. A scene is never
/// mutated while rendering, so a shared `&Scene` can be traced from any
/// number of threads.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    camera: Camera,
    primitives: Vec<Shape>,
    materials: Vec<Material>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene seen through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    /// Build a scene from a validated description.
    pub fn from_description(description: &SceneDescription) -> LoadResult<Self> {
        let mut scene = Scene::new(description.camera.to_camera());

        for (index, object) in description.objects.iter().enumerate() {
            let material = description.material_for(index, object)?;
            let shape: Shape = match object.shape {
                ShapeDescription::Sphere { center, radius } => Sphere::new(center, radius).into(),
                ShapeDescription::Plane { point, normal } => Plane::new(point, normal).into(),
            };
            scene.add_primitive(shape, material);
        }

        for light in &description.lights {
            scene.add_light(*light);
        }

        log::info!(
            "Built scene: {} primitives, {} lights",
            scene.size_primitive(),
            scene.size_light()
        );

        Ok(scene)
    }

    /// Add a primitive with its material and return its index.
    pub fn add_primitive(&mut self, shape: impl Into<Shape>, material: Material) -> usize {
        let index = self.primitives.len();
        self.primitives.push(shape.into());
        self.materials.push(material);
        index
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Number of primitives.
    pub fn size_primitive(&self) -> usize {
        self.primitives.len()
    }

    /// Get the primitive at `index`.
    pub fn primitive(&self, index: usize) -> &Shape {
        &self.primitives[index]
    }

    /// Get the material of the primitive at `index`.
    pub fn material(&self, index: usize) -> &Material {
        &self.materials[index]
    }

    /// Number of lights.
    pub fn size_light(&self) -> usize {
        self.lights.len()
    }

    /// Get the light at `index`.
    pub fn light(&self, index: usize) -> &Light {
        &self.lights[index]
    }

    /// Iterate over primitives in storage order.
    pub fn primitives(&self) -> impl Iterator<Item = &Shape> {
        self.primitives.iter()
    }

    /// All lights.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::load_scene_from_string;
    use lumen_math::{Color, Vec3};

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new(Camera::default());

        let red = Material::new(Color::X, 0.0);
        let mirror = Material::new(Color::ONE, 1.0);
        assert_eq!(scene.add_primitive(Sphere::new(Vec3::ZERO, 1.0), red), 0);
        assert_eq!(scene.add_primitive(Plane::new(-Vec3::Y, Vec3::Y), mirror), 1);
        scene.add_light(Light::white(Vec3::new(0.0, 5.0, 0.0)));

        assert_eq!(scene.size_primitive(), 2);
        assert_eq!(scene.size_light(), 1);
        assert_eq!(*scene.material(1), mirror);
        assert!(matches!(scene.primitive(0), Shape::Sphere(_)));
        assert_eq!(scene.light(0).position, Vec3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn test_from_description() {
        let description = load_scene_from_string(
            r#"{
                "camera": { "center": [0, 0, -3], "direction": [0, 0, 1] },
                "materials": { "grey": { "color": [0.5, 0.5, 0.5] } },
                "objects": [
                    {
                        "type": "plane", "point": [0, -1, 0], "normal": [0, 1, 0],
                        "material": "grey"
                    },
                    { "type": "sphere", "center": [0, 0, 0], "radius": 1.0, "material": "grey" }
                ],
                "lights": [ { "position": [0, 4, 0], "color": [1, 1, 1] } ]
            }"#,
        )
        .unwrap();

        let scene = Scene::from_description(&description).unwrap();

        assert_eq!(scene.size_primitive(), 2);
        assert_eq!(scene.size_light(), 1);
        assert!(matches!(scene.primitive(0), Shape::Plane(_)));
        assert_eq!(*scene.primitive(1), Shape::Sphere(Sphere::new(Vec3::ZERO, 1.0)));
        assert_eq!(scene.material(1).reflection(), 0.0);
        assert_eq!(scene.camera().center(), Vec3::new(0.0, 0.0, -3.0));
    }
}
