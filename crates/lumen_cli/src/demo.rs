//! Built-in scene rendered when no scene file is given.

use lumen_core::{Camera, ImageSettings, Light, Material};
use lumen_math::{Color, Vec3};
use lumen_renderer::{Plane, Scene, Sphere};

/// Three spheres over a reflective floor, lit by two lights.
pub fn demo_scene() -> (Scene, ImageSettings) {
    let camera = Camera::new(Vec3::new(0.0, 0.5, -4.0), Vec3::new(0.0, -0.1, 1.0), Vec3::Y)
        .with_screen(1.0, 1.0, 1.0);
    let mut scene = Scene::new(camera);

    // Floor
    scene.add_primitive(
        Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y),
        Material::new(Color::splat(0.7), 0.4),
    );

    scene.add_primitive(
        Sphere::new(Vec3::new(-1.2, -0.4, 0.5), 0.6),
        Material::new(Color::new(0.9, 0.2, 0.2), 0.1),
    );
    scene.add_primitive(
        Sphere::new(Vec3::new(0.0, 0.0, 1.5), 1.0),
        Material::new(Color::new(0.9, 0.9, 0.9), 0.8),
    );
    scene.add_primitive(
        Sphere::new(Vec3::new(1.3, -0.5, 0.2), 0.5),
        Material::new(Color::new(0.2, 0.4, 0.9), 0.2),
    );

    scene.add_light(Light::new(Vec3::new(3.0, 4.0, -3.0), Color::ONE, 0.8));
    scene.add_light(Light::new(Vec3::new(-4.0, 3.0, -1.0), Color::new(1.0, 0.9, 0.7), 0.5));

    (scene, ImageSettings::default())
}
