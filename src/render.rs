//! Sampling and shading driver.
//!
//! Walks the pixel grid top row first, casts one or more rays per pixel
//! through the [`Camera`], resolves their colors against the scene and
//! encodes the averaged result. Scanlines are independent, so they may be
//! shaded in parallel with rayon; the finished rows are always emitted in
//! order. Any error aborts the render before a single byte is written.

use std::io::Write;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::hittable::Hittable;
use crate::output::{encode_color, PpmWriter, Rgb8};
use crate::random;
use crate::vec3::Color;

/// Image and sampling parameters for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Number of rays averaged per pixel. With 1, rays go through exact
    /// pixel coordinates with no jitter.
    pub samples_per_pixel: u32,
    /// Bounce limit for recursive shading. Carried for scene files; the
    /// normal shader never bounces.
    pub max_depth: u32,
    /// Apply gamma 2 before encoding
    pub gamma_correction: bool,
    /// Seed for the jitter RNG. `None` draws a fresh seed per render.
    pub seed: Option<u64>,
    /// Shade scanlines on the rayon thread pool
    pub parallel: bool,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            image_width: 400,
            image_height: 225,
            samples_per_pixel: 100,
            max_depth: 50,
            gamma_correction: true,
            seed: None,
            parallel: true,
            show_progress: false,
        }
    }
}

impl RenderSettings {
    /// Check that the settings describe a renderable image.
    pub fn validate(&self) -> Result<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(Error::Configuration(format!(
                "image must be at least 1x1, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(Error::Configuration(
                "samples per pixel must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A finished render: 8-bit pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// `width * height` pixels
    pub pixels: Vec<Rgb8>,
}

impl Image {
    /// Pixel at column `x`, row `y` counted from the top, or `None` outside
    /// the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Write the image as plain-text PPM.
    pub fn write_ppm<W: Write>(&self, sink: W) -> Result<W> {
        let mut writer = PpmWriter::new(sink);
        writer.write_header(self.width, self.height)?;
        for &pixel in &self.pixels {
            writer.write_pixel(pixel)?;
        }
        writer.finish()
    }
}

/// Render `world` as seen by `camera`.
pub fn render(settings: &RenderSettings, camera: &Camera, world: &dyn Hittable) -> Result<Image> {
    settings.validate()?;
    let seed = settings.seed.unwrap_or_else(random::random_seed);

    let threads = if settings.parallel {
        rayon::current_num_threads()
    } else {
        1
    };
    info!(
        "Rendering {}x{}, {} samples per pixel, max depth {}, on {} thread(s)",
        settings.image_width,
        settings.image_height,
        settings.samples_per_pixel,
        settings.max_depth,
        threads
    );
    debug!("Render seed: {}", seed);

    let progress = if settings.show_progress {
        let pb = ProgressBar::new(u64::from(settings.image_height));
        let template = "{bar:40} {pos}/{len} scanlines ETA: {eta}";
        if let Ok(style) = ProgressStyle::default_bar().template(template) {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    // Row index counted from the bottom, emitted from the top.
    let shade_row = |row: u32| -> Result<Vec<Rgb8>> {
        let j = settings.image_height - 1 - row;
        let pixels = render_scanline(settings, camera, world, seed, j);
        progress.inc(1);
        pixels
    };
    let rows: Vec<Vec<Rgb8>> = if settings.parallel {
        (0..settings.image_height)
            .into_par_iter()
            .map(shade_row)
            .collect::<Result<_>>()?
    } else {
        (0..settings.image_height)
            .map(shade_row)
            .collect::<Result<_>>()?
    };
    progress.finish_and_clear();
    info!("Image generated in {:.2?}", start.elapsed());

    Ok(Image {
        width: settings.image_width,
        height: settings.image_height,
        pixels: rows.into_iter().flatten().collect(),
    })
}

/// Render and stream the result to `sink` as plain-text PPM.
pub fn render_ppm<W: Write>(
    settings: &RenderSettings,
    camera: &Camera,
    world: &dyn Hittable,
    sink: W,
) -> Result<W> {
    render(settings, camera, world)?.write_ppm(sink)
}

/// Shade scanline `j`, counted from the bottom of the image.
fn render_scanline(
    settings: &RenderSettings,
    camera: &Camera,
    world: &dyn Hittable,
    seed: u64,
    j: u32,
) -> Result<Vec<Rgb8>> {
    let mut rng = random::scanline_rng(seed, j);
    (0..settings.image_width)
        .map(|i| {
            let sum = sample_pixel(settings, camera, world, &mut rng, i, j)?;
            encode_color(sum, settings.samples_per_pixel, settings.gamma_correction)
        })
        .collect()
}

/// Sum of all sample colors for pixel `(i, j)`.
fn sample_pixel<R: Rng + ?Sized>(
    settings: &RenderSettings,
    camera: &Camera,
    world: &dyn Hittable,
    rng: &mut R,
    i: u32,
    j: u32,
) -> Result<Color> {
    // A single-pixel axis maps everything to coordinate 0.
    let u_span = f64::from(settings.image_width.saturating_sub(1).max(1));
    let v_span = f64::from(settings.image_height.saturating_sub(1).max(1));
    let jitter = settings.samples_per_pixel > 1;

    let mut pixel_color = Color::ZERO;
    for _ in 0..settings.samples_per_pixel {
        let (du, dv) = if jitter {
            (random::random_f64(rng), random::random_f64(rng))
        } else {
            (0.0, 0.0)
        };
        let u = (f64::from(i) + du) / u_span;
        let v = (f64::from(j) + dv) / v_span;
        pixel_color += camera.get_ray(u, v).color(world)?;
    }
    Ok(pixel_color)
}
