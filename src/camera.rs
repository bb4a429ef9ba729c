//! Camera for ray generation.

use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Camera parameters fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Viewport width divided by viewport height
    pub aspect_ratio: f64,
    /// Height of the image plane in world units
    pub viewport_height: f64,
    /// Distance from the origin to the image plane along -z
    pub focal_length: f64,
    /// Eye position
    pub origin: Point3,
}

impl Default for CameraConfig {
    /// 16:9 viewport two units tall, one unit in front of the world origin.
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            viewport_height: 2.0,
            focal_length: 1.0,
            origin: Point3::ZERO,
        }
    }
}

/// Pinhole camera looking down -z.
///
/// All viewport geometry is derived once in [`Camera::new`]; the camera is
/// immutable afterwards and safe to share between render threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    config: CameraConfig,
    /// Ray origin for every generated ray
    origin: Point3,
    /// Full viewport extent along x
    horizontal: Vec3,
    /// Full viewport extent along y
    vertical: Vec3,
    /// World position of the viewport's lower-left corner
    lower_left_corner: Point3,
}

impl Camera {
    /// Derive the viewport from `config`.
    ///
    /// Fails with [`Error::Configuration`] if a parameter is not a positive
    /// finite number, the origin is not finite, or the viewport cannot be
    /// derived.
    pub fn new(config: CameraConfig) -> Result<Self> {
        for (name, value) in [
            ("aspect ratio", config.aspect_ratio),
            ("viewport height", config.viewport_height),
            ("focal length", config.focal_length),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Configuration(format!(
                    "camera {name} must be positive and finite, got {value}"
                )));
            }
        }
        if !config.origin.is_finite() {
            return Err(Error::Configuration(format!(
                "camera origin must be finite, got {:?}",
                config.origin
            )));
        }

        let viewport_width = config.aspect_ratio * config.viewport_height;
        let origin = config.origin;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, config.viewport_height, 0.0);

        let half_extent = |v: Vec3, what: &str| {
            v.checked_div(2.0).map_err(|e| {
                Error::Configuration(format!("could not compute half of {what}: {e}"))
            })
        };
        let lower_left_corner = origin
            - half_extent(horizontal, "horizontal")?
            - half_extent(vertical, "vertical")?
            - Vec3::new(0.0, 0.0, config.focal_length);

        Ok(Self {
            config,
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        })
    }

    /// Parameters this camera was derived from.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Ray from the camera origin through image-plane coordinates `(u, v)`.
    ///
    /// `(0, 0)` is the lower-left corner of the viewport, `(1, 1)` the
    /// upper-right.
    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        let direction =
            self.lower_left_corner + self.horizontal * u + self.vertical * v - self.origin;
        Ray::new(self.origin, direction)
    }
}
