//! Three-component vector used for points, directions and colors.
//!
//! `Vec3` wraps `glam::DVec3` and keeps value semantics: every operation
//! returns a new vector. Division is only available through the checked
//! methods, which report [`Error::DivisionByZero`] instead of producing
//! infinities or NaNs.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use glam::DVec3;

use crate::error::{Error, Result};

/// A point in world space.
pub type Point3 = Vec3;

/// A linear RGB color. Components are expected in `[0, 1]` before encoding.
pub type Color = Vec3;

/// Immutable 3D vector of `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3(DVec3);

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3(DVec3::ZERO);
    /// All components set to one.
    pub const ONE: Vec3 = Vec3(DVec3::ONE);

    /// Create a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// First component.
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Second component.
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Third component.
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Dot product `x*x' + y*y' + z*z'`.
    pub fn dot(&self, other: Vec3) -> f64 {
        self.0.dot(other.0)
    }

    /// Squared Euclidean length, equal to `self.dot(self)`.
    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// True if no component is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Divide every component by `divisor`.
    pub fn checked_div(&self, divisor: f64) -> Result<Vec3> {
        if divisor == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(self.0 / divisor))
    }

    /// Component-wise division. Fails if any component of `divisor` is zero.
    pub fn checked_div_vec(&self, divisor: Vec3) -> Result<Vec3> {
        if divisor.0.cmpeq(DVec3::ZERO).any() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(self.0 / divisor.0))
    }

    /// Unit vector pointing the same way. The zero vector has no direction.
    pub fn unit(&self) -> Result<Vec3> {
        self.checked_div(self.length())
    }

    /// Apply `f` to each component.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Vec3 {
        Self::new(f(self.0.x), f(self.0.y), f(self.0.z))
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Self(self.0 + rhs.0)
    }
}

// Only the driver's per-pixel accumulator uses this.
impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.0 += rhs.0;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Self(self.0 - rhs.0)
    }
}

/// Component-wise product.
impl Mul for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        Self(self.0 * rhs.0)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Self(self.0 * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3(self * rhs.0)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_add_and_subtract() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-1.0, 0.5, 2.0);
        assert_eq!(a + b, Vec3::new(0.0, 2.5, 5.0));
        assert_eq!(a - b, Vec3::new(2.0, 1.5, 1.0));
        assert_eq!(a - a, Vec3::ZERO);
    }

    #[test]
    fn test_multiply() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a * Vec3::new(4.0, 5.0, 6.0), Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a * -3.0, Vec3::new(-3.0, -6.0, -9.0));
        assert_eq!(0.5 * a, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(a * 0.0, Vec3::ZERO);
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_divide_by_scalar() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a.checked_div(1.0).unwrap(), a);
        assert_eq!(
            Vec3::new(-1.0, -1.0, -1.0).checked_div(10.0).unwrap(),
            Vec3::new(-0.1, -0.1, -0.1)
        );
        assert!(matches!(a.checked_div(0.0), Err(Error::DivisionByZero)));
        assert!(matches!(a.checked_div(-0.0), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_divide_by_vector() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(
            a.checked_div_vec(Vec3::new(2.0, 2.0, 2.0)).unwrap(),
            Vec3::new(0.5, 0.5, 0.5)
        );
        assert!(matches!(a.checked_div_vec(Vec3::ZERO), Err(Error::DivisionByZero)));
        // A single zero component is enough to fail.
        assert!(matches!(
            a.checked_div_vec(Vec3::new(1.0, 0.0, 1.0)),
            Err(Error::DivisionByZero)
        ));
    }

    #[test]
    fn test_dot_is_commutative() {
        let pairs = [
            (Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, -5.0, 6.0)),
            (Vec3::new(-0.3, 0.0, 7.5), Vec3::new(1e3, 2.0, -1e-3)),
            (Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.dot(b), b.dot(a));
        }
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, -5.0, 6.0)), 12.0);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec3::ZERO.length(), 0.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::new(1.0, 2.0, 2.0).length_squared(), 9.0);
        assert!(Vec3::new(-1e-9, 0.0, 0.0).length() > 0.0);
    }

    #[test]
    fn test_unit_vector() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1e-6, 2e-6, 5e-7),
            Vec3::new(1e8, -3e8, 2.0),
        ] {
            let u = v.unit().unwrap();
            assert!((u.length() - 1.0).abs() < EPS);
            assert!(u.dot(v) > 0.0);
        }
        assert!(matches!(Vec3::ZERO.unit(), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_is_finite() {
        assert!(Vec3::new(1e300, -2.0, 0.0).is_finite());
        assert!(!Vec3::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Vec3::new(0.0, 0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_map() {
        let v = Vec3::new(4.0, 9.0, 16.0).map(f64::sqrt);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
    }
}
