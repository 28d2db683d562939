//! 2D vector type for directions and offsets.

use num_traits::Float;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector, the difference of two [`Point2`](super::Point2)s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (z-component of the 3D cross product).
    ///
    /// Positive means `other` turns counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_sign() {
        let east: Vec2<f64> = Vec2::new(1.0, 0.0);
        let north = Vec2::new(0.0, 1.0);
        assert_eq!(east.cross(north), 1.0);
        assert_eq!(north.cross(east), -1.0);
        assert_eq!(east.cross(east * 3.0), 0.0);
    }

    #[test]
    fn test_magnitude() {
        let v: Vec2<f64> = Vec2::new(-3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!((-v).magnitude(), 5.0);
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(Vec2::<f64>::default(), Vec2::zero());
    }
}
