//! Export of scenes and shapes.
//!
//! Currently SVG only: path strings for polylines and polygons, and a full
//! scene rendering of a [`VisibilityGraph`](crate::graph::VisibilityGraph).

mod svg;

pub use svg::{polygon_to_svg_path, polyline_to_svg_path, scene_to_svg, SvgStyle};
