//! Lumen Renderer - recursive ray tracing on the CPU.
//!
//! Casts one primary ray per anti-aliasing sample, finds the nearest hit
//! among all primitives, shades it against every light with a shadow ray
//! per light, then follows the mirror reflection for a bounded number of
//! bounces, attenuating each contribution by the surfaces' reflectivity.

mod antialiasing;
mod engine;
mod intersection;
mod plane;
mod primitive;
mod renderer;
mod scene;
mod shading;
mod sphere;

pub use antialiasing::AntiAliasingTable;
pub use engine::{find_nearest, illuminate, in_shadow, trace, trace_path, Hit, TracedPath};
pub use intersection::Intersection;
pub use plane::Plane;
pub use primitive::{Primitive, Shape};
pub use renderer::{
    clamp_01, color_to_rgb8, ray_generator, render, render_pixel, ImageBuffer, OutputError,
};
pub use scene::Scene;
pub use shading::{reflect, shade};
pub use sphere::Sphere;

/// Re-export common math and scene types
pub use lumen_core::{Camera, Light, Material, OcclusionMode, RenderConfig, ShadingParameters};
pub use lumen_math::{Color, Ray, Vec3};
