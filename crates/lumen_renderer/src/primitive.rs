//! Primitive trait and the closed set of shapes a scene can hold.

use crate::{Intersection, Plane, Ray, Sphere};

/// Trait for objects that can be hit by rays.
pub trait Primitive: Send + Sync {
    /// Test the ray against this object.
    ///
    /// Returns the nearest hit strictly in front of the ray origin, or
    /// `None` if the ray misses.
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;
}

/// Every shape kind the renderer knows about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive for Shape {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Vec3;

    #[test]
    fn test_shape_dispatch() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 4.0), 1.0);
        let plane = Plane::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);

        let shapes: [Shape; 2] = [sphere.into(), plane.into()];

        assert_eq!(shapes[0].intersect(&ray), sphere.intersect(&ray));
        assert_eq!(shapes[1].intersect(&ray), plane.intersect(&ray));
        assert!((shapes[1].intersect(&ray).unwrap().relative - 10.0).abs() < 1e-5);
    }
}
