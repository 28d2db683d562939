//! Path reconstruction from search predecessors.

use log::debug;
use num_traits::Float;

use super::astar::{astar, SearchState};
use crate::error::GraphError;
use crate::graph::{VertexId, VisibilityGraph};
use crate::primitives::{Point2, Segment2};

/// A reconstructed shortest path.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath<F> {
    /// One segment per hop, walking from the end back to the start. Each
    /// segment runs from the current vertex to its predecessor.
    pub edges: Vec<Segment2<F>>,
    /// Vertex handles from start to end.
    pub vertices: Vec<VertexId>,
    /// Total Euclidean length.
    pub score: F,
}

impl<F: Float> ShortestPath<F> {
    /// Number of hops.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Positions from start to end.
    pub fn waypoints(&self) -> Vec<Point2<F>> {
        let mut points: Vec<_> = self.edges.iter().rev().map(|e| e.end).collect();
        if let Some(last_hop) = self.edges.first() {
            points.push(last_hop.start);
        }
        points
    }
}

/// Walk predecessors from `end` back to `start`, summing hop lengths.
///
/// Reachability is checked first: an end without a predecessor is
/// [`GraphError::Unreachable`]. The walk is bounded by the vertex count;
/// running past it means the predecessors form a cycle and yields
/// [`GraphError::PredecessorCycle`].
pub fn reconstruct_path<F: Float>(
    graph: &VisibilityGraph<F>,
    search: &SearchState<F>,
    start: VertexId,
    end: VertexId,
) -> Result<ShortestPath<F>, GraphError> {
    if search.predecessor(end).is_none() {
        return Err(GraphError::Unreachable);
    }

    let limit = graph.vertex_count();
    let mut edges = Vec::new();
    let mut vertices = vec![end];
    let mut score = F::zero();
    let mut current = end;

    while current != start {
        if edges.len() >= limit {
            return Err(GraphError::PredecessorCycle { hops: edges.len() });
        }

        let previous = search.predecessor(current).ok_or(GraphError::Unreachable)?;
        let (Some(from), Some(to)) = (graph.position(current), graph.position(previous)) else {
            return Err(GraphError::Unreachable);
        };

        score = score + from.distance(to);
        edges.push(Segment2::new(from, to));
        vertices.push(previous);
        current = previous;
    }

    vertices.reverse();
    Ok(ShortestPath {
        edges,
        vertices,
        score,
    })
}

impl<F: Float> VisibilityGraph<F> {
    /// Search the current adjacency for a shortest start-to-end path.
    ///
    /// Does not touch the graph: every call uses fresh search state, so it
    /// can be repeated without [`clear_lists`](Self::clear_lists). Edges
    /// must already be built.
    pub fn find_path(&self) -> Result<ShortestPath<F>, GraphError> {
        let start = self.start().ok_or(GraphError::MissingStart)?;
        let end = self.end().ok_or(GraphError::MissingEnd)?;

        let search = astar(self, start, end);
        if !search.reached_end() {
            debug!(
                "[AStar] FAILED: frontier exhausted after {} expansions",
                search.expanded()
            );
            return Err(GraphError::Unreachable);
        }

        let path = reconstruct_path(self, &search, start, end)?;
        debug!(
            "[AStar] path found: {} hops, score {:.3}, {} expansions",
            path.len(),
            path.score.to_f64().unwrap_or(f64::NAN),
            search.expanded()
        );
        Ok(path)
    }
}
