//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives, HitRecord for
//! storing intersection data, and HittableList, the scene they live in.

use crate::error::Result;
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Ray-object intersection information.
///
/// Created fresh for every successful intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Surface normal at the intersection point, facing against the ray
    pub normal: Vec3,
    /// Distance along the ray to the intersection point
    pub t: f64,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record, orienting `outward_normal` against the incident ray.
    pub fn with_face_normal(r: &Ray, p: Point3, t: f64, outward_normal: Vec3) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            p,
            normal,
            t,
            front_face,
        }
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so scanlines can be shaded in parallel.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection within the inclusive parameter range `ray_t`.
    ///
    /// `Ok(None)` is a miss. Errors are reserved for invalid geometry.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Result<Option<HitRecord>>;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Supports polymorphic
/// objects through Box<dyn Hittable>.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Remove every object while keeping the allocation.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Result<Option<HitRecord>> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(r, ray_t.with_max(closest_so_far))? {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        Ok(closest)
    }
}
