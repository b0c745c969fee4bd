//! Result of a successful ray/primitive intersection test.

use lumen_math::Vec3;

/// Where a ray met a surface.
///
/// Produced fresh by every intersection test and never kept past the
/// trace step that created it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Ray parameter of the hit; with unit ray directions this is the
    /// distance from the ray origin, smaller is closer
    pub relative: f32,
}

impl Intersection {
    /// Create a new intersection record.
    pub fn new(position: Vec3, normal: Vec3, relative: f32) -> Self {
        Self {
            position,
            normal,
            relative,
        }
    }

    /// Whether this hit lies strictly closer along the ray than `other`.
    #[inline]
    pub fn is_closer_than(&self, other: &Intersection) -> bool {
        self.relative < other.relative
    }
}
