//! Pinhole camera with a rectangular virtual screen.

use lumen_math::Vec3;

/// Camera looking through a screen rectangle placed in front of its center.
///
/// Normalized screen coordinates `(u, v)` in [0, 1]² map onto that
/// rectangle; `(0.5, 0.5)` is the point straight ahead along `direction`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    center: Vec3,
    direction: Vec3,
    right: Vec3,
    up: Vec3,
    screen_distance: f32,
    screen_width: f32,
    screen_height: f32,
}

impl Camera {
    /// Create a camera at `center` looking along `direction`.
    ///
    /// `up` only needs to be non-parallel to `direction`; it is
    /// re-orthogonalized against it.
    pub fn new(center: Vec3, direction: Vec3, up: Vec3) -> Self {
        let direction = direction.normalize();
        let right = direction.cross(up).normalize();
        let up = right.cross(direction);

        Self {
            center,
            direction,
            right,
            up,
            screen_distance: 1.0,
            screen_width: 1.0,
            screen_height: 1.0,
        }
    }

    /// Set the screen placement and size.
    pub fn with_screen(mut self, distance: f32, width: f32, height: f32) -> Self {
        self.screen_distance = distance;
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Origin of every primary ray.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Unit viewing direction.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Unit up vector, orthogonal to the direction.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right vector.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// 3D position of normalized screen coordinates `(u, v)`.
    pub fn screen_position(&self, u: f32, v: f32) -> Vec3 {
        self.center
            + self.screen_distance * self.direction
            + (u - 0.5) * self.screen_width * self.right
            + (v - 0.5) * self.screen_height * self.up
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z, Vec3::Y)
    }
}
