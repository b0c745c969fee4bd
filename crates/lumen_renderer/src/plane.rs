//! Infinite plane primitive.

use crate::{Intersection, Primitive, Ray};
use lumen_math::Vec3;

/// Below this |u·n| a ray is treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a new plane. The normal is normalized and must be non-zero.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// A point on the plane.
    #[inline]
    pub fn point(&self) -> Vec3 {
        self.point
    }

    /// Unit normal of the plane.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Primitive for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if t <= 0.0 {
            return None;
        }

        // Face the incoming ray
        let normal = if denom > 0.0 { -self.normal } else { self.normal };

        Some(Intersection::new(ray.at(t), normal, t))
    }
}
