use crate::Vec3;

/// Default distance used by [`Ray::offset`].
///
/// This is a numerical-stability parameter: it keeps a ray cast from a
/// freshly computed hit point from re-hitting the surface it starts on
/// because of float round-off. It has no geometric meaning.
pub const DEFAULT_RAY_OFFSET: f32 = 1e-3;

/// A half-line in 3D space with an origin and a unit direction.
///
/// The direction is normalized on construction, so the ray parameter `t`
/// is a true distance: `at(t)` lies `t` units away from the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// A zero-length direction yields NaN components; callers must pass a
    /// non-degenerate vector.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Return a copy of this ray with its origin pushed `epsilon` along the
    /// direction.
    #[inline]
    pub fn offset(self, epsilon: f32) -> Self {
        Self {
            origin: self.at(epsilon),
            direction: self.direction,
        }
    }
}
