//! Render tunables.
//!
//! Every magic number the tracer relies on lives here under a name, with
//! a default matching the classic look of the renderer. A scene file may
//! override any of them through its `"render"` block.

use serde::Deserialize;

/// Default number of ray casts per traced sample (primary ray plus reflections).
pub const MAX_BOUNCES: u32 = 5;

/// Weight applied to the very first bounce's illumination.
///
/// Later bounces are further scaled by each surface's reflection coefficient.
pub const INITIAL_ATTENUATION: f32 = 0.8;

/// Fraction of a material's base color added for each light that is occluded,
/// so shadowed regions do not render fully black.
pub const SHADOW_AMBIENT_FRACTION: f32 = 0.1;

/// Default anti-aliasing grid resolution (samples per pixel = N x N).
pub const SAMPLES_PER_AXIS: u32 = 5;

/// Coefficients of the ambient + diffuse + specular shading model.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShadingParameters {
    /// Constant term, independent of light direction
    pub ambient: f32,
    /// Weight of the Lambert (cosine) term
    pub diffuse: f32,
    /// Weight of the specular highlight
    pub specular: f32,
    /// Specular exponent; larger values give tighter highlights
    pub shininess: f32,
}

impl Default for ShadingParameters {
    fn default() -> Self {
        Self {
            ambient: 0.2,
            diffuse: 0.8,
            specular: 0.6,
            shininess: 128.0,
        }
    }
}

/// Which intersections along a shadow ray count as occluders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcclusionMode {
    /// Any hit in the light's direction shadows the point, even one lying
    /// beyond the light itself.
    #[default]
    AnyHit,
    /// Only hits strictly closer than the light shadow the point.
    BeforeLight,
}

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum number of casts per traced ray (primary + reflections)
    pub max_bounces: u32,
    /// Weight of the first bounce's contribution
    pub initial_attenuation: f32,
    /// Fraction of base color kept for an occluded light
    pub shadow_ambient_fraction: f32,
    /// Distance secondary rays are pushed along their direction before casting
    pub ray_offset: f32,
    /// Anti-aliasing grid size per axis
    pub samples_per_axis: u32,
    /// Shading model coefficients
    pub shading: ShadingParameters,
    /// Shadow ray occlusion policy
    pub occlusion: OcclusionMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_bounces: MAX_BOUNCES,
            initial_attenuation: INITIAL_ATTENUATION,
            shadow_ambient_fraction: SHADOW_AMBIENT_FRACTION,
            ray_offset: lumen_math::DEFAULT_RAY_OFFSET,
            samples_per_axis: SAMPLES_PER_AXIS,
            shading: ShadingParameters::default(),
            occlusion: OcclusionMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.max_bounces, 5);
        assert_eq!(config.initial_attenuation, 0.8);
        assert_eq!(config.shadow_ambient_fraction, 0.1);
        assert_eq!(config.occlusion, OcclusionMode::AnyHit);
    }

    #[test]
    fn test_partial_override() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "max_bounces": 2, "occlusion": "before_light" }"#).unwrap();

        assert_eq!(config.max_bounces, 2);
        assert_eq!(config.occlusion, OcclusionMode::BeforeLight);
        // Untouched fields keep their defaults
        assert_eq!(config.samples_per_axis, SAMPLES_PER_AXIS);
        assert_eq!(config.shading, ShadingParameters::default());
    }
}
