use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A three-component vector.
///
/// No unit is attached; depending on context the components are a position
/// (m), a velocity (m/s), or an acceleration (m/s²).
///
/// With the `serde` feature a vector is written as `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the dot product with `other`.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the squared Euclidean norm.
    #[must_use]
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns the Euclidean norm.
    ///
    /// The norm of the zero vector is zero.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);

        assert_eq!(a + b, Vector3::new(-3.0, 2.5, 5.0));
        assert_eq!(a - b, Vector3::new(5.0, 1.5, 1.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn assign_operators_match_binary_operators() {
        let mut v = Vector3::new(1.0, 1.0, 1.0);
        v += Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
        v -= Vector3::new(2.0, 3.0, 4.0);
        assert_eq!(v, Vector3::ZERO);
    }

    #[test]
    fn norm_of_pythagorean_triple() {
        let v = Vector3::new(3.0, 4.0, 12.0);
        assert_relative_eq!(v.norm_squared(), 169.0);
        assert_relative_eq!(v.norm(), 13.0);
    }

    #[test]
    fn zero_vector_has_zero_norm() {
        assert_eq!(Vector3::ZERO.norm(), 0.0);
    }

    #[test]
    fn finiteness_checks_every_component() {
        assert!(Vector3::new(1.0, -2.0, 0.0).is_finite());
        assert!(!Vector3::new(1.0, f64::NAN, 0.0).is_finite());
        assert!(!Vector3::new(0.0, 0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn converts_to_and_from_arrays() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
    }
}
