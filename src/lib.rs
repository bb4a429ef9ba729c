//! Minimal ray caster
//!
//! Casts rays from a pinhole camera through every pixel of an image, finds the
//! nearest sphere each ray hits and shades it by its surface normal, falling
//! back to a white-to-blue sky. Pixels are averaged over jittered samples,
//! optionally gamma corrected, and written as plain-text PPM (or PNG).

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod config;
pub mod error;
pub mod hittable;
pub mod interval;
pub mod output;
pub mod random;
pub mod ray;
pub mod render;
pub mod sphere;
pub mod vec3;

pub use camera::{Camera, CameraConfig};
pub use error::{Error, Result};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use ray::Ray;
pub use render::{render, render_ppm, Image, RenderSettings};
pub use sphere::Sphere;
pub use vec3::{Color, Point3, Vec3};
