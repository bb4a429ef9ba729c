//! Scene descriptions loaded from TOML.
//!
//! ```toml
//! [image]
//! width = 400
//! samples_per_pixel = 100
//! max_depth = 50
//! gamma_correction = true
//!
//! [camera]
//! aspect_ratio = 1.7777777777777777
//! viewport_height = 2.0
//! focal_length = 1.0
//! origin = [0.0, 0.0, 0.0]
//!
//! [[spheres]]
//! center = [0.0, 0.0, -1.0]
//! radius = 0.5
//! ```
//!
//! Every table and key is optional; missing values fall back to the defaults
//! of [`RenderSettings`] and [`CameraConfig`]. A file without `[[spheres]]`
//! describes an empty scene.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::camera::{Camera, CameraConfig};
use crate::error::{Error, Result};
use crate::hittable::HittableList;
use crate::render::RenderSettings;
use crate::sphere::Sphere;
use crate::vec3::Point3;

/// Image section of a scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageSection {
    /// Image width in pixels; the height follows the aspect ratio
    pub width: u32,
    /// Rays averaged per pixel
    pub samples_per_pixel: u32,
    /// Bounce limit, reserved for recursive shading
    pub max_depth: u32,
    /// Apply gamma 2 before encoding
    pub gamma_correction: bool,
}

impl Default for ImageSection {
    fn default() -> Self {
        let defaults = RenderSettings::default();
        Self {
            width: defaults.image_width,
            samples_per_pixel: defaults.samples_per_pixel,
            max_depth: defaults.max_depth,
            gamma_correction: defaults.gamma_correction,
        }
    }
}

/// Camera section of a scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSection {
    /// Viewport width over height
    pub aspect_ratio: f64,
    /// Viewport height in world units
    pub viewport_height: f64,
    /// Distance from the eye to the viewport
    pub focal_length: f64,
    /// Eye position
    pub origin: [f64; 3],
}

impl Default for CameraSection {
    fn default() -> Self {
        let defaults = CameraConfig::default();
        Self {
            aspect_ratio: defaults.aspect_ratio,
            viewport_height: defaults.viewport_height,
            focal_length: defaults.focal_length,
            origin: [
                defaults.origin.x(),
                defaults.origin.y(),
                defaults.origin.z(),
            ],
        }
    }
}

/// One `[[spheres]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereSection {
    /// Sphere center
    pub center: [f64; 3],
    /// Sphere radius, must not be negative
    pub radius: f64,
}

/// A complete scene: image settings, camera and primitives.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// `[image]` table
    pub image: ImageSection,
    /// `[camera]` table
    pub camera: CameraSection,
    /// `[[spheres]]` entries in insertion order
    pub spheres: Vec<SphereSection>,
}

impl SceneConfig {
    /// The classic two-sphere scene: a small sphere resting on a huge ground sphere.
    pub fn classic() -> Self {
        Self {
            spheres: vec![
                SphereSection {
                    center: [0.0, 0.0, -1.0],
                    radius: 0.5,
                },
                SphereSection {
                    center: [0.0, -100.5, -1.0],
                    radius: 100.0,
                },
            ],
            ..Default::default()
        }
    }

    /// Parse a scene from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading scene from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Camera parameters of this scene.
    pub fn camera_config(&self) -> CameraConfig {
        CameraConfig {
            aspect_ratio: self.camera.aspect_ratio,
            viewport_height: self.camera.viewport_height,
            focal_length: self.camera.focal_length,
            origin: Point3::from(self.camera.origin),
        }
    }

    /// Build the derived camera.
    pub fn camera(&self) -> Result<Camera> {
        Camera::new(self.camera_config())
    }

    /// Render settings for this scene. The image height follows the camera's
    /// aspect ratio, truncated, and is never less than one pixel.
    pub fn render_settings(&self) -> Result<RenderSettings> {
        let aspect_ratio = self.camera.aspect_ratio;
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(Error::Configuration(format!(
                "camera aspect ratio must be positive and finite, got {aspect_ratio}"
            )));
        }
        let height = f64::from(self.image.width) / aspect_ratio;
        if height > f64::from(u32::MAX) {
            return Err(Error::Configuration(format!(
                "aspect ratio {aspect_ratio} makes the image {height} pixels tall"
            )));
        }
        let image_height = (height as u32).max(1);

        let settings = RenderSettings {
            image_width: self.image.width,
            image_height,
            samples_per_pixel: self.image.samples_per_pixel,
            max_depth: self.image.max_depth,
            gamma_correction: self.image.gamma_correction,
            ..Default::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Build the scene's primitive list.
    pub fn world(&self) -> Result<HittableList> {
        let mut world = HittableList::new();
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius.is_finite() && sphere.radius >= 0.0) {
                return Err(Error::Configuration(format!(
                    "sphere {index} has invalid radius {}",
                    sphere.radius
                )));
            }
            let center = Point3::from(sphere.center);
            if !center.is_finite() {
                return Err(Error::Configuration(format!(
                    "sphere {index} has non-finite center {:?}",
                    sphere.center
                )));
            }
            world.add(Box::new(Sphere::new(center, sphere.radius)));
        }
        Ok(world)
    }
}
