//! 2D line segment type.

use super::{Point2, Vec2};
use crate::tolerance::{segments_cross, shares_endpoint};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Directionality only matters for orientation signs; intersection and
/// endpoint tests treat the segment as undirected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Exact general-position crossing test against another segment.
    ///
    /// See [`segments_cross`] for the predicate; collinear overlap is not
    /// treated specially.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        segments_cross(self, other, F::zero())
    }

    /// Returns `true` if any endpoint of `self` exactly equals any endpoint
    /// of `other`.
    #[inline]
    pub fn shares_endpoint(self, other: Self) -> bool {
        shares_endpoint(self, other)
    }

    /// Returns `true` if `self` and `other` join the same pair of points,
    /// in either direction.
    #[inline]
    pub fn same_endpoints(self, other: Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
