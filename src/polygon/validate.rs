//! Polygon diagnostics.
//!
//! Obstacles are accepted as given: nothing here repairs a ring. The graph
//! uses these checks to warn about input whose visibility edges are of
//! undefined quality.
//!
//! # Example
//!
//! ```
//! use visgraph::{Point2, polygon::{Polygon, is_simple}};
//!
//! // A figure-8 ring crosses itself
//! let figure8 = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! assert!(!is_simple(&figure8));
//! ```

use super::core::Polygon;
use crate::tolerance::segments_cross;
use num_traits::Float;

/// Issues found in a polygon ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// Fewer than 3 vertices.
    pub is_degenerate: bool,
    /// Absolute area below the tolerance.
    pub has_zero_area: bool,
    /// Two consecutive vertices within the tolerance of each other.
    pub has_duplicate_vertices: bool,
    /// Two non-adjacent edges cross or touch.
    pub has_self_intersections: bool,
}

impl ValidationResult {
    /// Returns `true` if no issue was found.
    pub fn is_valid(&self) -> bool {
        !self.is_degenerate
            && !self.has_zero_area
            && !self.has_duplicate_vertices
            && !self.has_self_intersections
    }
}

/// Validates a polygon ring.
pub fn validate<F: Float>(polygon: &Polygon<F>, tolerance: F) -> ValidationResult {
    let n = polygon.len();
    let is_degenerate = n < 3;

    ValidationResult {
        is_degenerate,
        has_zero_area: is_degenerate || polygon.signed_area().abs() < tolerance,
        has_duplicate_vertices: has_consecutive_duplicates(polygon, tolerance),
        has_self_intersections: has_self_intersection(polygon),
    }
}

/// Checks if a polygon is simple (no two non-adjacent edges meet).
pub fn is_simple<F: Float>(polygon: &Polygon<F>) -> bool {
    !has_self_intersection(polygon)
}

/// Exact check of every pair of non-adjacent edges.
fn has_self_intersection<F: Float>(polygon: &Polygon<F>) -> bool {
    let n = polygon.len();
    if n < 4 {
        return false;
    }

    let edges: Vec<_> = polygon.edges().collect();
    for i in 0..n {
        for j in (i + 2)..n {
            // Last edge is adjacent to the first one
            if (j + 1) % n == i {
                continue;
            }
            if segments_cross(edges[i], edges[j], F::zero()) {
                return true;
            }
        }
    }

    false
}

fn has_consecutive_duplicates<F: Float>(polygon: &Polygon<F>, tolerance: F) -> bool {
    if polygon.len() < 2 {
        return false;
    }
    polygon.edges().any(|e| e.length() <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;

    #[test]
    fn test_square_is_valid() {
        let sq: Polygon<f64> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ]);
        assert!(is_simple(&sq));
        assert!(validate(&sq, 1e-9).is_valid());
    }

    #[test]
    fn test_reflex_polygon_is_simple() {
        let l_shape: Polygon<f64> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 5.0),
            Point2::new(5.0, 10.0),
            Point2::new(0.0, 10.0),
        ]);
        assert!(is_simple(&l_shape));
    }

    #[test]
    fn test_bowtie_self_intersects() {
        let bowtie: Polygon<f64> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ]);
        let result = validate(&bowtie, 1e-9);
        assert!(result.has_self_intersections);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_degenerate_segment_ring() {
        let seg: Polygon<f64> = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        let result = validate(&seg, 1e-9);
        assert!(result.is_degenerate);
        assert!(result.has_zero_area);
        assert!(!result.has_self_intersections);
    }

    #[test]
    fn test_duplicate_vertices() {
        let tri: Polygon<f64> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        ]);
        assert!(validate(&tri, 1e-9).has_duplicate_vertices);
    }
}
