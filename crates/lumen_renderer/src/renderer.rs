//! Pixel loop and image output.
//!
//! Drives the tracer over every pixel with an anti-aliasing grid:
//! - Primary ray generation through the camera screen
//! - Weighted sub-pixel sampling
//! - Clamped 8-bit conversion and PNG output

use std::path::Path;
use std::time::Instant;

use lumen_core::{Camera, RenderConfig};
use lumen_math::Color;
use thiserror::Error;

use crate::{trace, AntiAliasingTable, Ray, Scene};

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Cannot write an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
}

/// Build the primary ray through normalized screen coordinates `(u, v)`.
pub fn ray_generator(camera: &Camera, u: f32, v: f32) -> Ray {
    let p_screen = camera.screen_position(u, v);
    Ray::new(camera.center(), p_screen - camera.center())
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGB, clamping out-of-range channels.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (255.0 * clamp_01(color.x)).round() as u8;
    let g = (255.0 * clamp_01(color.y)).round() as u8;
    let b = (255.0 * clamp_01(color.z)).round() as u8;
    [r, g, b]
}

/// Simple image buffer for storing render output.
///
/// Row 0 is the top of the picture.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Accumulate into the pixel at (x, y).
    pub fn add(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] += color;
    }

    /// Convert to RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }

    /// Write the image as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), OutputError> {
        if self.width == 0 || self.height == 0 {
            return Err(OutputError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }

        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )?;

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Normalized screen coordinate of pixel `k` out of `n`.
#[inline]
fn screen_coordinate(k: u32, n: u32) -> f32 {
    if n > 1 {
        k as f32 / (n - 1) as f32
    } else {
        0.5
    }
}

/// Size of one pixel step in normalized screen units.
#[inline]
fn pixel_step(n: u32) -> f32 {
    if n > 1 {
        1.0 / (n - 1) as f32
    } else {
        1.0
    }
}

/// Render a single pixel as the weighted sum of its anti-aliasing samples.
pub fn render_pixel(
    scene: &Scene,
    table: &AntiAliasingTable,
    kx: u32,
    ky: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Color {
    let camera = scene.camera();
    let u = screen_coordinate(kx, width);
    let v = screen_coordinate(ky, height);
    let (step_u, step_v) = (pixel_step(width), pixel_step(height));

    let mut color = Color::ZERO;
    for dx in 0..table.size() {
        for dy in 0..table.size() {
            let du = table.displacement(dx) * step_u;
            let dv = table.displacement(dy) * step_v;

            let ray = ray_generator(camera, u + du, v + dv);
            color += table.weight(dx, dy) * trace(&ray, scene, config);
        }
    }

    color
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded. Screen `v` grows upward, so it is flipped when
/// mapped to image rows.
pub fn render(scene: &Scene, width: u32, height: u32, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);
    let table = AntiAliasingTable::new(config.samples_per_axis);

    log::info!(
        "Rendering {}x{} @ {} samples/pixel, {} bounces",
        width,
        height,
        table.size() * table.size(),
        config.max_bounces
    );
    let start = Instant::now();

    for ky in 0..height {
        let row = height - 1 - ky;
        for kx in 0..width {
            let color = render_pixel(scene, &table, kx, ky, width, height, config);
            image.add(kx, row, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use lumen_core::{Light, Material};
    use lumen_math::Vec3;

    #[test]
    fn test_ray_generator_center() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z, Vec3::Y);
        let ray = ray_generator(&camera, 0.5, 0.5);

        assert_eq!(ray.origin(), camera.center());
        assert!((ray.direction() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_ray_generator_top_points_up() {
        let camera = Camera::default();
        let ray = ray_generator(&camera, 0.5, 1.0);
        assert!(ray.direction().y > 0.0);
    }

    #[test]
    fn test_color_to_rgb8_clamps() {
        assert_eq!(color_to_rgb8(Color::new(0.0, 0.5, 1.0)), [0, 128, 255]);
        assert_eq!(color_to_rgb8(Color::new(-1.0, 2.5, 1.0)), [0, 255, 255]);
    }

    #[test]
    fn test_image_buffer_accumulates() {
        let mut image = ImageBuffer::new(4, 3);
        image.add(1, 2, Color::splat(0.25));
        image.add(1, 2, Color::splat(0.5));

        assert_eq!(image.get(1, 2), Color::splat(0.75));
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.to_rgb8().len(), 4 * 3 * 3);

        image.set(1, 2, Color::ONE);
        assert_eq!(image.get(1, 2), Color::ONE);
    }

    #[test]
    fn test_pixel_index_does_not_wrap() {
        // Past u32::MAX pixels; no storage needed to check the indexing
        let image = ImageBuffer {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(69_999, 69_999), 4_899_999_999);
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let image = ImageBuffer::new(0, 4);
        let err = image.save_png("never_written.png").unwrap_err();
        assert!(matches!(err, OutputError::EmptyImage { width: 0, height: 4 }));
    }

    #[test]
    fn test_render_pixel() {
        let mut scene = Scene::new(Camera::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z, Vec3::Y));
        let red = Material::new(Color::new(0.9, 0.2, 0.2), 0.0);
        scene.add_primitive(Sphere::new(Vec3::ZERO, 1.0), red);
        scene.add_light(Light::white(Vec3::new(0.0, 2.0, -4.0)));

        let config = RenderConfig {
            samples_per_axis: 2,
            ..RenderConfig::default()
        };
        let table = AntiAliasingTable::new(config.samples_per_axis);

        // Center pixel looks straight at the sphere
        let center = render_pixel(&scene, &table, 2, 2, 5, 5, &config);
        assert!(center.x > center.z);
        assert!(center.length() > 0.0);

        // Corner pixel misses it
        let corner = render_pixel(&scene, &table, 0, 0, 5, 5, &config);
        assert_eq!(corner, Color::ZERO);
    }
}
