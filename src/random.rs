//! Random number generation for sampling.
//!
//! Every render row draws from its own ChaCha20 stream derived from a single
//! render seed, so rows can be computed in any order (or in parallel) and
//! still produce the same image.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::Result;
use crate::vec3::Vec3;

/// Build the generator used for scanline `row` of a render seeded with `seed`.
pub fn scanline_rng(seed: u64, row: u32) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(u64::from(row));
    rng
}

/// Draw a fresh render seed from the thread RNG.
pub fn random_seed() -> u64 {
    rand::rng().random()
}

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random()
}

/// Generate a random f64 in [min, max)
pub fn random_f64_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64(rng)
}

/// Generate a vector with each component uniform in [min, max).
pub fn random_vec3_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        random_f64_range(rng, min, max),
        random_f64_range(rng, min, max),
        random_f64_range(rng, min, max),
    )
}

/// Generate a random point strictly inside the unit ball using rejection sampling.
pub fn random_in_unit_ball<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate a random direction of unit length.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec3> {
    random_in_unit_ball(rng).unit()
}

/// Generate a random point in the unit ball on the side `normal` points into.
pub fn random_in_hemisphere<R: Rng + ?Sized>(rng: &mut R, normal: Vec3) -> Vec3 {
    let in_unit_ball = random_in_unit_ball(rng);
    if in_unit_ball.dot(normal) < 0.0 {
        -in_unit_ball
    } else {
        in_unit_ball
    }
}
