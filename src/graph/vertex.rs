//! Vertex handles and vertex records.

use crate::primitives::Point2;
use num_traits::Float;

/// Stable handle to a vertex in a [`VisibilityGraph`](super::VisibilityGraph).
///
/// Two vertices at the same coordinates have distinct handles; edges,
/// adjacency and search state are all keyed by handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Returns the arena slot this handle refers to.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a vertex stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// Corner `index` of obstacle `polygon`.
    Obstacle { polygon: usize, index: usize },
    /// The start marker.
    Start,
    /// The end marker (search goal).
    End,
}

/// A node of the visibility graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<F> {
    position: Point2<F>,
    kind: VertexKind,
    heuristic: F,
}

impl<F: Float> Vertex<F> {
    pub(crate) fn new(position: Point2<F>, kind: VertexKind, goal: Option<Point2<F>>) -> Self {
        let mut vertex = Self {
            position,
            kind,
            heuristic: F::zero(),
        };
        vertex.retarget(goal);
        vertex
    }

    /// Position, fixed at creation.
    #[inline]
    pub fn position(&self) -> Point2<F> {
        self.position
    }

    #[inline]
    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.kind == VertexKind::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == VertexKind::End
    }

    /// Straight-line distance to the end point the graph held when this
    /// value was last refreshed. Zero while no end is set.
    #[inline]
    pub fn heuristic(&self) -> F {
        self.heuristic
    }

    /// Recomputes the heuristic against a new goal.
    pub(crate) fn retarget(&mut self, goal: Option<Point2<F>>) {
        self.heuristic = goal.map_or_else(F::zero, |g| self.position.distance(g));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_tracks_goal() {
        let mut v: Vertex<f64> = Vertex::new(
            Point2::new(0.0, 0.0),
            VertexKind::Obstacle { polygon: 0, index: 2 },
            Some(Point2::new(3.0, 4.0)),
        );
        assert_eq!(v.heuristic(), 5.0);

        v.retarget(Some(Point2::new(0.0, -2.0)));
        assert_eq!(v.heuristic(), 2.0);

        v.retarget(None);
        assert_eq!(v.heuristic(), 0.0);
    }

    #[test]
    fn test_flags() {
        let s: Vertex<f64> = Vertex::new(Point2::origin(), VertexKind::Start, None);
        let e: Vertex<f64> = Vertex::new(Point2::origin(), VertexKind::End, None);
        assert!(s.is_start() && !s.is_end());
        assert!(e.is_end() && !e.is_start());
        // Same position, different kind: not the same vertex.
        assert_ne!(s, e);
    }
}
