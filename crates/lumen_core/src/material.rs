//! Surface materials and point lights.

use lumen_math::{Color, Vec3};
use serde::Deserialize;

/// A surface material: base color plus mirror reflectivity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    color: Color,
    reflection: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::splat(0.5), 0.0) // Grey, matte
    }
}

impl Material {
    /// Create a new material.
    ///
    /// `reflection` is the fraction of intensity carried into the reflected
    /// ray and is clamped to [0, 1].
    pub fn new(color: Color, reflection: f32) -> Self {
        Self {
            color,
            reflection: reflection.clamp(0.0, 1.0),
        }
    }

    /// Base color of the surface.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Reflection coefficient in [0, 1].
    #[inline]
    pub fn reflection(&self) -> f32 {
        self.reflection
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Light {
    /// Position in world space
    pub position: Vec3,
    /// Emitted color
    pub color: Color,
    /// Intensity multiplier
    #[serde(default = "default_power")]
    pub power: f32,
}

fn default_power() -> f32 {
    1.0
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, color: Color, power: f32) -> Self {
        Self {
            position,
            color,
            power,
        }
    }

    /// A white light of unit power.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, Color::ONE, 1.0)
    }
}
