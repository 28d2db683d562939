//! Geometric predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (left turn).
    CounterClockwise,
    /// Points are clockwise (right turn).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// The sign of the cross product `(q - p) × (r - q)` decides the turn made
/// when walking `p -> q -> r`:
/// - `CounterClockwise` for a left turn
/// - `Clockwise` for a right turn
/// - `Collinear` if the absolute cross product is at most `eps`
///
/// Passing `eps = 0` gives the exact test: only a cross product that is
/// exactly zero is collinear. Nearly-collinear inputs then flip between
/// turns depending on rounding, which callers must accept.
#[inline]
pub fn orient2d<F: Float>(p: Point2<F>, q: Point2<F>, r: Point2<F>, eps: F) -> Orientation {
    let cross = (q - p).cross(r - q);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Tests whether two segments cross, general-position form.
///
/// Evaluates the four orientations `(a.start, a.end, b.start)`,
/// `(a.start, a.end, b.end)`, `(b.start, b.end, a.start)` and
/// `(b.start, b.end, a.end)`. The segments cross iff the first two differ
/// AND the last two differ, i.e. each segment's endpoints lie on
/// different sides of (or one of them on) the other segment's line.
///
/// An endpoint lying exactly on the other segment therefore counts as a
/// crossing. Two fully collinear segments never cross, even if they
/// overlap.
pub fn segments_cross<F: Float>(a: Segment2<F>, b: Segment2<F>, eps: F) -> bool {
    let o1 = orient2d(a.start, a.end, b.start, eps);
    let o2 = orient2d(a.start, a.end, b.end, eps);
    let o3 = orient2d(b.start, b.end, a.start, eps);
    let o4 = orient2d(b.start, b.end, a.end, eps);

    o1 != o2 && o3 != o4
}

/// Returns `true` if any endpoint of `a` exactly equals any endpoint of `b`.
#[inline]
pub fn shares_endpoint<F: Float>(a: Segment2<F>, b: Segment2<F>) -> bool {
    a.start == b.start || a.start == b.end || a.end == b.start || a.end == b.end
}
