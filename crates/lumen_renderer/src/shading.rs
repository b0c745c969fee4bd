//! Local illumination model.

use lumen_core::{Material, ShadingParameters};
use lumen_math::{Color, Vec3};

/// Reflect a vector about a normal.
///
/// `d' = d - 2 (d.n) n`; `n` must be unit length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Ambient + diffuse + specular color leaving `point` toward the camera,
/// lit by a white light of unit power at `light_position`.
///
/// The result is non-negative but unbounded; callers scale it by the
/// light's color and power and leave clamping to image output.
pub fn shade(
    shading: &ShadingParameters,
    material: &Material,
    point: Vec3,
    light_position: Vec3,
    normal: Vec3,
    camera_position: Vec3,
) -> Color {
    let to_light = (light_position - point).normalize();
    let to_camera = (camera_position - point).normalize();

    let cos_light = normal.dot(to_light);
    let diffuse = shading.diffuse * cos_light.max(0.0);

    // No highlight on faces turned away from the light
    let specular = if cos_light > 0.0 {
        let reflected = reflect(-to_light, normal);
        shading.specular * reflected.dot(to_camera).max(0.0).powf(shading.shininess)
    } else {
        0.0
    };

    (shading.ambient + diffuse) * material.color() + Color::splat(specular)
}
