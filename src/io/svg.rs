//! SVG export of a visibility graph scene.

use std::fmt;

use num_traits::Float;

use crate::graph::VisibilityGraph;
use crate::polygon::{bounding_box, Polygon};
use crate::primitives::{Point2, Segment2};

/// Colours and sizes used by [`scene_to_svg`].
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    pub polygon_color: String,
    pub edge_color: String,
    pub path_color: String,
    pub start_color: String,
    pub end_color: String,
    /// Stroke width for obstacles and visibility edges, in scene units.
    pub stroke_width: f64,
    /// Stroke width for the path.
    pub path_width: f64,
    /// Radius of the start/end markers; corners are drawn at half of it.
    pub marker_radius: f64,
    /// Margin around the scene bounds.
    pub padding: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            polygon_color: "red".to_string(),
            edge_color: "blue".to_string(),
            path_color: "magenta".to_string(),
            start_color: "green".to_string(),
            end_color: "yellow".to_string(),
            stroke_width: 0.03,
            path_width: 0.08,
            marker_radius: 0.2,
            padding: 1.0,
        }
    }
}

/// Converts a polyline to an SVG path string.
///
/// # Example
///
/// ```
/// use visgraph::{Point2, io::polyline_to_svg_path};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ];
///
/// assert_eq!(polyline_to_svg_path(&points, true), "M 0 0 L 10 0 L 10 10 Z");
/// ```
pub fn polyline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>], closed: bool) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut result = format!("M {} {}", first.x, first.y);
    for p in rest {
        result.push_str(&format!(" L {} {}", p.x, p.y));
    }

    if closed {
        result.push_str(" Z");
    }

    result
}

/// Converts a polygon to a closed SVG path string.
pub fn polygon_to_svg_path<F: Float + fmt::Display>(polygon: &Polygon<F>) -> String {
    polyline_to_svg_path(&polygon.vertices, true)
}

/// Renders obstacles, visibility edges, the last path and the start/end
/// markers as a standalone SVG document.
///
/// The y axis points up, as in the scene. An empty graph produces a valid
/// document with an empty drawing.
pub fn scene_to_svg<F: Float + fmt::Display>(graph: &VisibilityGraph<F>, style: &SvgStyle) -> String {
    let points: Vec<Point2<F>> = graph.vertices().map(|(_, v)| v.position()).collect();
    let (min, max) = bounding_box(&points).unwrap_or((Point2::origin(), Point2::origin()));
    let pad = F::from(style.padding).unwrap_or_else(F::one);

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        min.x - pad,
        -(max.y + pad),
        max.x - min.x + pad + pad,
        max.y - min.y + pad + pad
    ));
    svg.push('\n');
    svg.push_str(r#"<g transform="scale(1 -1)">"#);
    svg.push('\n');

    for segment in graph.edges() {
        push_line(&mut svg, segment, &style.edge_color, style.stroke_width);
    }

    for polygon in graph.polygons() {
        svg.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            polygon_to_svg_path(polygon),
            style.polygon_color,
            style.stroke_width
        ));
        svg.push('\n');
        for &corner in &polygon.vertices {
            push_circle(&mut svg, corner, style.marker_radius / 2.0, &style.polygon_color);
        }
    }

    for &segment in graph.path_edges() {
        push_line(&mut svg, segment, &style.path_color, style.path_width);
    }

    if let Some(start) = graph.start_position() {
        push_circle(&mut svg, start, style.marker_radius, &style.start_color);
    }
    if let Some(end) = graph.end_position() {
        push_circle(&mut svg, end, style.marker_radius, &style.end_color);
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

fn push_line<F: Float + fmt::Display>(svg: &mut String, segment: Segment2<F>, color: &str, width: f64) {
    svg.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        segment.start.x, segment.start.y, segment.end.x, segment.end.y, color, width
    ));
    svg.push('\n');
}

fn push_circle<F: Float + fmt::Display>(svg: &mut String, center: Point2<F>, radius: f64, color: &str) {
    svg.push_str(&format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
        center.x, center.y, radius, color
    ));
    svg.push('\n');
}
