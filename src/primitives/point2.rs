//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
///
/// Equality is exact component-wise comparison. Vertex identity in the
/// visibility graph never relies on it; see [`crate::graph::VertexId`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}
