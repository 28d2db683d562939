//! Shortest paths over a visibility graph.
//!
//! [`astar`] expands vertices in order of `cost + heuristic`, using the
//! per-vertex straight-line distance to the end as the heuristic, and
//! [`reconstruct_path`] walks the resulting predecessors back from the end.
//!
//! # Example
//!
//! ```
//! use visgraph::graph::VisibilityGraph;
//! use visgraph::search::{astar, reconstruct_path};
//! use visgraph::Point2;
//!
//! let mut graph = VisibilityGraph::new();
//! graph.add_polygon(vec![
//!     Point2::new(1.0, -1.0),
//!     Point2::new(2.0, -1.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(1.0, 1.0),
//! ]);
//! let start = graph.set_start(Point2::new(0.0, 0.0));
//! let end = graph.set_end(Point2::new(3.0, 0.0));
//! graph.create_visibility_graph().unwrap();
//!
//! let search = astar(&graph, start, end);
//! let path = reconstruct_path(&graph, &search, start, end).unwrap();
//! assert_eq!(path.len(), 3);
//! ```

mod astar;
mod path;

pub use astar::{astar, NodeState, SearchState};
pub use path::{reconstruct_path, ShortestPath};
