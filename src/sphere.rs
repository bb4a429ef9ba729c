//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection with the half-coefficient quadratic
//! formula.

use crate::error::Result;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::Point3;

/// Sphere primitive defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Point3,

    /// Radius of the sphere.
    ///
    /// Stored as given. A negative radius flips the outward normal inward;
    /// scene files reject it, direct construction does not.
    pub radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Result<Option<HitRecord>> {
        let a = r.direction.length_squared();
        // A zero-length direction or a point sphere has no usable root.
        if a == 0.0 || self.radius == 0.0 {
            return Ok(None);
        }

        let oc = r.origin - self.center;
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return Ok(None);
        }
        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return Ok(None);
            }
        }

        let p = r.at(root);
        let outward_normal = (p - self.center).checked_div(self.radius)?;
        Ok(Some(HitRecord::with_face_normal(r, p, root, outward_normal)))
    }
}
