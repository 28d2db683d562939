//! Builds a three-obstacle scene, finds the shortest path and writes it as SVG.
//!
//! Run with: cargo run --example scene [output.svg]
//!
//! Set `RUST_LOG=debug` to see the rebuild and search summaries.

use std::env;
use std::error::Error;
use std::fs;

use visgraph::io::{scene_to_svg, SvgStyle};
use visgraph::{Point2, VisibilityGraph};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let output = env::args().nth(1).unwrap_or_else(|| "scene.svg".to_string());

    let mut graph: VisibilityGraph<f64> = VisibilityGraph::new();

    // Square
    graph.add_polygon(vec![
        Point2::new(1.0, 1.0),
        Point2::new(4.0, 1.0),
        Point2::new(4.0, 4.0),
        Point2::new(1.0, 4.0),
    ]);

    // Triangle
    graph.add_polygon(vec![
        Point2::new(5.0, 5.0),
        Point2::new(7.0, 5.0),
        Point2::new(6.0, 8.0),
    ]);

    // Pentagon
    graph.add_polygon(vec![
        Point2::new(8.0, 1.0),
        Point2::new(10.0, 2.0),
        Point2::new(11.0, 4.0),
        Point2::new(9.0, 5.0),
        Point2::new(7.0, 3.0),
    ]);

    graph.set_start(Point2::new(0.0, 0.0));
    graph.set_end(Point2::new(12.0, 6.0));

    let score = graph.create_visibility_graph()?;

    println!(
        "{} vertices, {} visibility edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    if let Some(path) = graph.path() {
        let waypoints: Vec<String> = path
            .waypoints()
            .iter()
            .map(|p| format!("({}, {})", p.x, p.y))
            .collect();
        println!("path: {}", waypoints.join(" -> "));
    }
    println!("score: {:.4}", score);

    fs::write(&output, scene_to_svg(&graph, &SvgStyle::default()))?;
    println!("wrote {}", output);

    Ok(())
}
