//! Ray representation and color resolution.
//!
//! A ray is defined as r(t) = origin + t * direction. Resolving a ray's color
//! shades the nearest hit by its normal, or falls back to the sky gradient.

use crate::error::Result;
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::vec3::{Color, Point3, Vec3};

/// Sky color at the top of the gradient.
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Point3,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized. A zero direction is representable and
    /// hits nothing.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Defined for every real t, including negative values.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Resolve the color seen along this ray.
    ///
    /// A hit is shaded by mapping its normal from [-1, 1] to [0, 1] per axis.
    /// A miss blends white into sky blue by the height of the unit direction.
    /// Fails with `DivisionByZero` when a missing ray has no direction.
    pub fn color(&self, world: &dyn Hittable) -> Result<Color> {
        if let Some(rec) = world.hit(self, Interval::FORWARD)? {
            return Ok(0.5 * (rec.normal + Color::ONE));
        }
        self.sky()
    }

    /// White-to-blue vertical gradient for rays that hit nothing.
    pub fn sky(&self) -> Result<Color> {
        let unit_direction = self.direction.unit()?;
        let a = 0.5 * (unit_direction.y() + 1.0);
        Ok(Color::ONE * (1.0 - a) + SKY_BLUE * a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::hittable::HittableList;
    use crate::sphere::Sphere;

    #[test]
    fn test_at() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(ray.at(0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(1.5), Vec3::new(1.0, 3.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(1.0, -2.0, 0.0));
    }

    #[test]
    fn test_sky_gradient_extremes() {
        let up = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0));
        let down = Ray::new(Vec3::ZERO, Vec3::new(0.0, -0.5, 0.0));
        let level = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(up.sky().unwrap(), SKY_BLUE);
        assert_eq!(down.sky().unwrap(), Color::ONE);
        let mid = level.sky().unwrap();
        assert!((mid - Color::new(0.75, 0.85, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_color_of_miss_is_sky() {
        let world = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.3, -0.2, -1.0));
        assert_eq!(ray.color(&world).unwrap(), ray.sky().unwrap());
    }

    #[test]
    fn test_color_of_hit_encodes_normal() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5)));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let color = ray.color(&world).unwrap();
        assert!((color - Color::new(0.5, 0.5, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_zero_direction_miss_fails() {
        let world = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(matches!(ray.color(&world), Err(Error::DivisionByZero)));
    }
}
