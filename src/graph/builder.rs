//! Full visibility graph reconstruction.

use log::debug;
use num_traits::Float;

use super::store::VisibilityGraph;
use super::vertex::{VertexId, VertexKind};
use super::visibility::{is_non_adjacent_same_polygon, is_visible};
use crate::error::GraphError;
use crate::primitives::Point2;

impl<F: Float> VisibilityGraph<F> {
    /// Derive edges, adjacency and the shortest path from the current
    /// vertices and obstacles.
    ///
    /// 1. Retarget every heuristic at the current end point.
    /// 2. For every vertex pair `(i, j)` with `i < j`, skip existing edges
    ///    and same-obstacle chords, then connect the pair if it is visible.
    /// 3. Run A* from start to end and store the reconstructed path.
    ///
    /// Edges and adjacency are populated even when the search fails. On
    /// success the path score is returned and also available through
    /// [`path_score`](Self::path_score); on failure the stored path is
    /// cleared.
    ///
    /// Pair enumeration is O(V²) with an O(E) visibility test each, meant for
    /// tens of vertices.
    pub fn create_visibility_graph(&mut self) -> Result<F, GraphError> {
        self.refresh_heuristics();
        let added = self.build_edges();

        debug!(
            "[VisibilityGraph] rebuilt: {} vertices, {} obstacles, {} edges ({} new)",
            self.vertex_count(),
            self.polygons().len(),
            self.edge_count(),
            added
        );

        match self.find_path() {
            Ok(path) => {
                let score = path.score;
                self.set_path(Some(path));
                Ok(score)
            }
            Err(err) => {
                debug!("[VisibilityGraph] no path: {}", err);
                self.set_path(None);
                Err(err)
            }
        }
    }

    /// Connect every visible, non-excluded vertex pair that is not already
    /// connected. Returns the number of edges added.
    fn build_edges(&mut self) -> usize {
        let nodes: Vec<(VertexId, Point2<F>, VertexKind)> = self
            .vertices()
            .map(|(id, v)| (id, v.position(), v.kind()))
            .collect();
        let eps = self.config().eps;
        let exclude_chords = self.config().exclude_polygon_chords;

        let mut added = 0;
        for (i, &(a, pa, ka)) in nodes.iter().enumerate() {
            for &(b, pb, kb) in &nodes[i + 1..] {
                if self.has_edge(a, b) {
                    continue;
                }
                if exclude_chords && is_non_adjacent_same_polygon(self.polygons(), ka, kb) {
                    continue;
                }
                if is_visible(self.polygons(), pa, pb, eps) {
                    self.connect(a, b);
                    added += 1;
                }
            }
        }

        added
    }
}
