//! Line-of-sight tests between graph vertices.

use super::vertex::VertexKind;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{segments_cross, shares_endpoint};
use num_traits::Float;

/// Checks whether the segment `p1 -> p2` is unobstructed by any obstacle.
///
/// The sight line is blocked by the first polygon edge it crosses, unless
/// the two segments share an endpoint: a sight line may leave or arrive at
/// an obstacle corner without being blocked by the edges meeting there.
///
/// The test is symmetric in `p1` and `p2`.
///
/// # Example
///
/// ```
/// use visgraph::graph::is_visible;
/// use visgraph::polygon::Polygon;
/// use visgraph::Point2;
///
/// let wall = Polygon::new(vec![
///     Point2::new(2.0, -1.0),
///     Point2::new(3.0, -1.0),
///     Point2::new(3.0, 1.0),
///     Point2::new(2.0, 1.0),
/// ]);
///
/// let a = Point2::new(0.0, 0.0);
/// assert!(!is_visible(&[wall.clone()], a, Point2::new(5.0, 0.0), 0.0));
/// assert!(is_visible(&[wall], a, Point2::new(0.0, 5.0), 0.0));
/// ```
pub fn is_visible<F: Float>(polygons: &[Polygon<F>], p1: Point2<F>, p2: Point2<F>, eps: F) -> bool {
    let sight = Segment2::new(p1, p2);

    !polygons
        .iter()
        .flat_map(|polygon| polygon.edges())
        .any(|edge| segments_cross(sight, edge, eps) && !shares_endpoint(sight, edge))
}

/// Checks whether two vertices are non-adjacent corners of the same
/// obstacle.
///
/// Such pairs are excluded from the visibility graph even when the
/// segment between them crosses no edge, since it may run through the
/// obstacle's interior (e.g. the diagonal of a square). Ring indices that
/// differ by exactly one, wrapping around, are adjacent. A vertex paired
/// with itself counts as non-adjacent.
pub fn is_non_adjacent_same_polygon<F: Float>(
    polygons: &[Polygon<F>],
    a: VertexKind,
    b: VertexKind,
) -> bool {
    let (
        VertexKind::Obstacle {
            polygon: pa,
            index: ia,
        },
        VertexKind::Obstacle {
            polygon: pb,
            index: ib,
        },
    ) = (a, b)
    else {
        return false;
    };

    if pa != pb {
        return false;
    }

    let Some(ring) = polygons.get(pa) else {
        return false;
    };
    let n = ring.len();
    let diff = ia.abs_diff(ib);

    !(diff == 1 || (n > 1 && diff == n - 1))
}
