//! Polygonal obstacles.
//!
//! This module provides the obstacle ring type and the checks used to
//! flag degenerate input:
//! - Boundary edge iteration
//! - Area, containment and bounding box
//! - Simplicity and degeneracy diagnostics
//!
//! # Example
//!
//! ```
//! use visgraph::polygon::Polygon;
//! use visgraph::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(1.0, 1.0),
//!     Point2::new(4.0, 1.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(1.0, 4.0),
//! ]);
//!
//! assert_eq!(square.edges().count(), 4);
//! assert!(square.contains(Point2::new(2.0, 2.0)));
//! ```

mod core;
mod validate;

pub use self::core::{bounding_box, polygon_contains, polygon_signed_area, Polygon};
pub use validate::{is_simple, validate, ValidationResult};
