//! Core polygon type and basic operations.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A simple polygonal obstacle represented as a closed vertex ring.
///
/// Edge `i` joins vertex `i` to vertex `(i + 1) % len`. Winding order is
/// not significant for visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The ring vertices in order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from ordered vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the boundary edges, closing the ring.
    ///
    /// A single-vertex polygon yields one zero-length edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the signed area using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Tests if a point is strictly inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        bounding_box(&self.vertices)
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Computes the signed area of a vertex ring using the shoelace formula.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / (F::one() + F::one())
}

/// Tests if a point is inside a vertex ring using ray casting.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Returns the (min, max) corners enclosing all points, or `None` if empty.
pub fn bounding_box<F: Float>(points: &[Point2<F>]) -> Option<(Point2<F>, Point2<F>)> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;

    for p in rest {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    Some((min, max))
}
