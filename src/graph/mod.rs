//! Visibility graph over polygonal obstacles.
//!
//! Nodes are the obstacle corners plus a start and an end point; an edge
//! joins every pair with an unobstructed line of sight:
//! - [`is_visible`] decides line of sight against all obstacle edges
//! - [`is_non_adjacent_same_polygon`] excludes chords across one obstacle
//! - [`VisibilityGraph::create_visibility_graph`] rebuilds edges and the
//!   shortest path in one call
//!
//! # Example
//!
//! ```
//! use visgraph::graph::VisibilityGraph;
//! use visgraph::Point2;
//!
//! let mut graph = VisibilityGraph::new();
//! graph.set_start(Point2::new(0.0, 0.0));
//! graph.set_end(Point2::new(3.0, 4.0));
//!
//! // Nothing in the way: the path is the straight line.
//! assert_eq!(graph.create_visibility_graph(), Ok(5.0));
//! ```

mod builder;
mod config;
mod store;
mod vertex;
mod visibility;

pub use config::GraphConfig;
pub use store::VisibilityGraph;
pub use vertex::{Vertex, VertexId, VertexKind};
pub use visibility::{is_non_adjacent_same_polygon, is_visible};
