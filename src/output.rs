//! # Output Module
//!
//! Turns accumulated sample colors into 8-bit pixels and writes them out:
//! - plain-text PPM (`P3`) to any [`Write`] sink
//! - PNG files through the `image` crate
//!
//! ## Channel encoding
//!
//! A pixel's summed samples are averaged, optionally gamma corrected with
//! gamma 2 (square root), clamped to `[0, 0.999]`, scaled and truncated
//! toward zero. The scale is 256 with gamma correction and 255.999 without,
//! so both variants map the clamped range onto `0..=255`.

use std::io::Write;
use std::path::Path;

use image::{ImageBuffer, Rgb};
use log::{debug, info};

use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::vec3::Color;

/// Largest channel value written to the PPM header.
pub const MAX_CHANNEL_VALUE: u8 = 255;

/// Range each channel is clamped to before scaling.
const CHANNEL_RANGE: Interval = Interval::new(0.0, 0.999);

/// Scale applied to gamma-corrected channels.
const GAMMA_SCALE: f64 = 256.0;

/// Scale applied to linear channels.
const LINEAR_SCALE: f64 = 255.999;

/// An 8-bit RGB pixel.
pub type Rgb8 = [u8; 3];

/// Clamp, scale and truncate one channel value.
pub fn encode_channel(value: f64, gamma_correction: bool) -> u8 {
    let scale = if gamma_correction { GAMMA_SCALE } else { LINEAR_SCALE };
    // NaN clamps to NaN, which saturates to 0 below.
    (scale * CHANNEL_RANGE.clamp(value)).trunc() as u8
}

/// Average `samples_per_pixel` accumulated samples and encode them.
pub fn encode_color(sum: Color, samples_per_pixel: u32, gamma_correction: bool) -> Result<Rgb8> {
    let mut color = sum.checked_div(f64::from(samples_per_pixel))?;
    if gamma_correction {
        color = color.map(f64::sqrt);
    }
    Ok([
        encode_channel(color.x(), gamma_correction),
        encode_channel(color.y(), gamma_correction),
        encode_channel(color.z(), gamma_correction),
    ])
}

/// Streaming writer for plain-text PPM images.
pub struct PpmWriter<W: Write> {
    sink: W,
}

impl<W: Write> PpmWriter<W> {
    /// Wrap `sink`. Nothing is written until [`PpmWriter::write_header`].
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Emit the `P3` header for a `width` x `height` image.
    pub fn write_header(&mut self, width: u32, height: u32) -> Result<()> {
        write!(self.sink, "P3\n{width} {height}\n{MAX_CHANNEL_VALUE}\n")?;
        Ok(())
    }

    /// Emit one pixel as a `R G B` line.
    pub fn write_pixel(&mut self, [r, g, b]: Rgb8) -> Result<()> {
        writeln!(self.sink, "{r} {g} {b}")?;
        Ok(())
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}

/// Save top-to-bottom, row-major pixels as a PNG file.
pub fn save_png(pixels: &[Rgb8], output_path: &Path, width: u32, height: u32) -> Result<()> {
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(Error::Configuration(format!(
            "expected {expected} pixels for a {width}x{height} image, got {}",
            pixels.len()
        )));
    }

    debug!("Encoding {}x{} PNG", width, height);
    let image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb(pixels[y as usize * width as usize + x as usize])
    });
    image.save(output_path)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_boundaries() {
        assert_eq!(encode_channel(0.0, true), 0);
        assert_eq!(encode_channel(0.0, false), 0);
        assert_eq!(encode_channel(-3.0, true), 0);
        assert_eq!(encode_channel(0.999, true), 255);
        assert_eq!(encode_channel(0.999, false), 255);
        assert_eq!(encode_channel(1.0, true), 255);
        assert_eq!(encode_channel(42.0, false), 255);
        assert_eq!(encode_channel(f64::NAN, true), 0);
    }

    #[test]
    fn test_channel_truncates() {
        // 0.5 * 256 = 128 exactly, 0.5 * 255.999 = 127.9995
        assert_eq!(encode_channel(0.5, true), 128);
        assert_eq!(encode_channel(0.5, false), 127);
        assert_eq!(encode_channel(1.0 / 256.0, true), 1);
        assert_eq!(encode_channel(0.99 / 256.0, true), 0);
    }

    #[test]
    fn test_encode_color_averages() {
        let sum = Color::new(2.0, 1.0, 0.0);
        assert_eq!(encode_color(sum, 4, false).unwrap(), [127, 63, 0]);
        // sqrt(0.25) = 0.5
        assert_eq!(encode_color(Color::new(1.0, 1.0, 1.0), 4, true).unwrap(), [128, 128, 128]);
        assert!(matches!(encode_color(sum, 0, true), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_ppm_layout() {
        let mut writer = PpmWriter::new(Vec::new());
        writer.write_header(2, 1).unwrap();
        writer.write_pixel([255, 0, 7]).unwrap();
        writer.write_pixel([0, 128, 255]).unwrap();
        let bytes = writer.finish().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "P3\n2 1\n255\n255 0 7\n0 128 255\n");
    }

    #[test]
    fn test_png_size_mismatch() {
        let path = std::env::temp_dir().join("ppm-raytracer-mismatch.png");
        let result = save_png(&[[0, 0, 0]], &path, 2, 2);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_png_round_trip() {
        let path = std::env::temp_dir().join(format!("ppm-raytracer-{}.png", std::process::id()));
        let pixels = [[255, 0, 0], [0, 255, 0], [0, 0, 255], [10, 20, 30]];
        save_png(&pixels, &path, 2, 2).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (2, 2));
        assert_eq!(loaded.get_pixel(1, 0).0, [0, 255, 0]);
        assert_eq!(loaded.get_pixel(1, 1).0, [10, 20, 30]);
        std::fs::remove_file(&path).unwrap();
    }
}
