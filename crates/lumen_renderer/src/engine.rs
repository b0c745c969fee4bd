//! Ray tracing core: nearest-hit search, shadow rays, per-light
//! illumination, and the bounded reflection loop.

use lumen_core::{Material, OcclusionMode, RenderConfig};
use lumen_math::{Color, Vec3};

use crate::{reflect, shade, Intersection, Primitive, Ray, Scene};

/// Closest intersection along a ray and the primitive that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Intersection data of the winning primitive
    pub intersection: Intersection,
    /// Index of the primitive in the scene
    pub index: usize,
}

/// Outcome of tracing one ray through the reflection loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracedPath {
    /// Accumulated, attenuation-weighted color
    pub color: Color,
    /// Number of surfaces hit before the loop stopped
    pub bounces: u32,
}

/// Find the closest primitive hit by `ray`.
///
/// Every primitive is tested; storage order says nothing about depth.
/// On equal distances the earlier primitive wins.
pub fn find_nearest(ray: &Ray, scene: &Scene) -> Option<Hit> {
    let mut nearest: Option<Hit> = None;

    for (index, primitive) in scene.primitives().enumerate() {
        if let Some(intersection) = primitive.intersect(ray) {
            let closer = nearest
                .as_ref()
                .map_or(true, |best| intersection.is_closer_than(&best.intersection));
            if closer {
                nearest = Some(Hit { intersection, index });
            }
        }
    }

    nearest
}

/// Whether something blocks the line from `point` to `light_position`.
///
/// Under [`OcclusionMode::AnyHit`] any primitive in the light's direction
/// counts, including one lying past the light.
pub fn in_shadow(point: Vec3, light_position: Vec3, scene: &Scene, config: &RenderConfig) -> bool {
    let to_light = light_position - point;
    let ray = Ray::new(point, to_light).offset(config.ray_offset);

    match config.occlusion {
        OcclusionMode::AnyHit => find_nearest(&ray, scene).is_some(),
        OcclusionMode::BeforeLight => {
            let light_distance = to_light.length() - config.ray_offset;
            find_nearest(&ray, scene).is_some_and(|hit| hit.intersection.relative < light_distance)
        }
    }
}

/// Sum of every light's contribution at an intersection.
///
/// An occluded light adds only a fixed fraction of the base color.
pub fn illuminate(
    material: &Material,
    intersection: &Intersection,
    scene: &Scene,
    config: &RenderConfig,
) -> Color {
    let camera_position = scene.camera().center();
    let mut color = Color::ZERO;

    for light in scene.lights() {
        if in_shadow(intersection.position, light.position, scene, config) {
            color += config.shadow_ambient_fraction * material.color();
        } else {
            color += light.power
                * light.color
                * shade(
                    &config.shading,
                    material,
                    intersection.position,
                    light.position,
                    intersection.normal,
                    camera_position,
                );
        }
    }

    color
}

/// Trace a ray and report both its color and how many surfaces it hit.
///
/// The loop stops when the bounce budget is spent, when a ray escapes the
/// scene, or when attenuation reaches zero and nothing more can be added.
pub fn trace_path(ray: &Ray, scene: &Scene, config: &RenderConfig) -> TracedPath {
    let mut color = Color::ZERO;
    let mut attenuation = config.initial_attenuation;
    let mut current = *ray;
    let mut bounces = 0;

    while bounces < config.max_bounces {
        let Some(hit) = find_nearest(&current, scene) else {
            break;
        };
        bounces += 1;

        let material = scene.material(hit.index);
        color += attenuation * illuminate(material, &hit.intersection, scene, config);
        attenuation *= material.reflection();
        if attenuation <= 0.0 {
            break;
        }

        let direction = reflect(current.direction(), hit.intersection.normal);
        current = Ray::new(hit.intersection.position, direction).offset(config.ray_offset);
    }

    TracedPath { color, bounces }
}

/// Compute the color seen along a ray.
pub fn trace(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Color {
    trace_path(ray, scene, config).color
}
