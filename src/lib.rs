//! visgraph - Shortest paths around polygonal obstacles
//!
//! Builds a visibility graph over the corners of simple polygonal obstacles
//! plus a start and an end point, then finds the shortest obstacle-avoiding
//! path with A*. Predicates are exact by default; every tolerance is an
//! explicit parameter.
//!
//! ```
//! use visgraph::{Point2, VisibilityGraph};
//!
//! let mut graph = VisibilityGraph::new();
//! graph.add_polygon(vec![
//!     Point2::new(1.0, 1.0),
//!     Point2::new(4.0, 1.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(1.0, 4.0),
//! ]);
//! graph.set_start(Point2::new(0.0, 0.0));
//! graph.set_end(Point2::new(6.0, 6.0));
//!
//! let score = graph.create_visibility_graph().unwrap();
//! assert_eq!(graph.path_edges().len(), 2);
//! assert!((score - (17.0_f64.sqrt() + 29.0_f64.sqrt())).abs() < 1e-12);
//! ```

pub mod error;
pub mod graph;
pub mod io;
pub mod polygon;
pub mod primitives;
pub mod search;
pub mod tolerance;

pub use error::GraphError;
pub use graph::{GraphConfig, VertexId, VisibilityGraph};
pub use primitives::{Point2, Segment2, Vec2};
pub use search::ShortestPath;
pub use tolerance::{orient2d, segments_cross, shares_endpoint, Orientation};
