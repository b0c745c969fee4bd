//! Sphere primitive for ray tracing.

use crate::{Intersection, Primitive, Ray};
use lumen_math::Vec3;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// `radius` must be positive; a degenerate sphere is not guarded against.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Center of the sphere.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius of the sphere.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        // |p0 + t*u - center|^2 = radius^2 with |u| = 1, so a = 1
        let u = ray.direction();
        let oc = ray.origin() - self.center;
        let b = 2.0 * oc.dot(u);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let r1 = (-b - sqrtd) / 2.0;
        let r2 = (-b + sqrtd) / 2.0;

        // r1 <= r2: take the nearest root in front of the origin
        let t = if r1 > 0.0 {
            r1
        } else if r2 > 0.0 {
            r2
        } else {
            return None;
        };

        let position = ray.at(t);
        let normal = (position - self.center).normalize();

        Some(Intersection::new(position, normal, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    /// Nearest strictly-positive root of the ray/sphere quadratic, in f64.
    fn analytic_root(ray: &Ray, sphere: &Sphere) -> Option<f64> {
        let u = ray.direction().as_dvec3();
        let oc = (ray.origin() - sphere.center()).as_dvec3();
        let b = 2.0 * oc.dot(u);
        let c = oc.length_squared() - (sphere.radius() as f64).powi(2);
        let delta = b * b - 4.0 * c;
        if delta < 0.0 {
            return None;
        }
        [(-b - delta.sqrt()) / 2.0, (-b + delta.sqrt()) / 2.0]
            .into_iter()
            .find(|&t| t > 0.0)
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).expect("ray should hit the sphere");
        assert!(approx(hit.relative, 0.5));
        assert!((hit.position - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-4);
        assert!((hit.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_sphere_hit_matches_analytic_root() {
        let sphere = Sphere::new(Vec3::new(0.3, -0.2, 5.0), 1.5);
        let directions = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.1, 0.0, 1.0),
            Vec3::new(-0.05, 0.1, 1.0),
            Vec3::new(0.2, -0.2, 1.0),
        ];

        for direction in directions {
            let ray = Ray::new(Vec3::ZERO, direction);
            let expected = analytic_root(&ray, &sphere).expect("direction aims at the sphere");
            let hit = sphere.intersect(&ray).expect("ray should hit the sphere");

            assert!(
                (hit.relative as f64 - expected).abs() < 1e-3,
                "direction {direction:?}: got {}, expected {expected}",
                hit.relative
            );
            assert!(approx((hit.position - sphere.center()).length(), sphere.radius()));
            assert!(approx(hit.normal.length(), 1.0));
        }
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        // Both roots negative
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_sphere() {
        // Mixed-sign roots: the exit point is the only forward hit
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.5), Vec3::Z);

        let hit = sphere.intersect(&ray).expect("inside ray always exits");
        assert!(approx(hit.relative, 1.5));
        assert!((hit.position - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-4);
        // Normal stays outward
        assert!((hit.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_origin_on_surface() {
        let sphere = Sphere::new(Vec3::ZERO, 1.5);

        // Zero root is skipped; the far side along the diameter is hit
        let inward = Ray::new(Vec3::new(0.0, 0.0, -1.5), Vec3::Z);
        let hit = sphere.intersect(&inward).expect("inward ray crosses the sphere");
        assert!(approx(hit.relative, 2.0 * sphere.radius()));
        assert!((hit.position - Vec3::new(0.0, 0.0, 1.5)).length() < 1e-4);
        assert!((hit.normal - Vec3::Z).length() < 1e-4);

        // Roots are -3 and 0, neither strictly positive
        let outward = Ray::new(Vec3::new(0.0, 0.0, 1.5), Vec3::Z);
        assert!(sphere.intersect(&outward).is_none());
    }

    #[test]
    fn test_tangent_ray() {
        let sphere = Sphere::new(Vec3::new(0.0, 1.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = sphere.intersect(&ray).expect("grazing ray touches the sphere");
        assert!(approx(hit.relative, 5.0));
    }
}
