// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod ray;
pub use ray::{Ray, DEFAULT_RAY_OFFSET};

/// RGB color, additive and unclamped.
///
/// Values outside [0, 1] are legal while accumulating; clamping is left to
/// whoever writes the final image.
pub type Color = Vec3;
