//! End-to-end scenarios over complete scenes.

use approx::assert_relative_eq;
use std::collections::HashSet;

use visgraph::graph::VertexKind;
use visgraph::{GraphConfig, GraphError, Point2, VisibilityGraph};

fn init() {
    env_logger::try_init().ok();
}

fn square() -> Vec<Point2<f64>> {
    vec![
        Point2::new(1.0, 1.0),
        Point2::new(4.0, 1.0),
        Point2::new(4.0, 4.0),
        Point2::new(1.0, 4.0),
    ]
}

fn three_obstacle_scene() -> VisibilityGraph<f64> {
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(square());
    graph.add_polygon(vec![
        Point2::new(5.0, 5.0),
        Point2::new(7.0, 5.0),
        Point2::new(6.0, 8.0),
    ]);
    graph.add_polygon(vec![
        Point2::new(8.0, 1.0),
        Point2::new(10.0, 2.0),
        Point2::new(11.0, 4.0),
        Point2::new(9.0, 5.0),
        Point2::new(7.0, 3.0),
    ]);
    graph.set_start(Point2::new(0.0, 0.0));
    graph.set_end(Point2::new(12.0, 6.0));
    graph
}

#[test]
fn square_scene_routes_around_a_corner() {
    init();
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(square());
    graph.set_start(Point2::new(0.0, 0.0));
    graph.set_end(Point2::new(6.0, 6.0));

    let score = graph.create_visibility_graph().unwrap();

    assert!(!graph.is_visible(Point2::new(0.0, 0.0), Point2::new(6.0, 6.0)));
    assert!(score > 72.0_f64.sqrt());
    assert_relative_eq!(score, 17.0_f64.sqrt() + 29.0_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(graph.path_score(), Some(score));
}

#[test]
fn three_obstacle_scene_finds_valid_path() {
    init();
    let mut graph = three_obstacle_scene();
    let score = graph.create_visibility_graph().unwrap();
    let path = graph.path().unwrap().clone();

    // The straight line cuts through the square.
    assert!(!graph.is_visible(Point2::new(0.0, 0.0), Point2::new(12.0, 6.0)));
    assert!(score > 180.0_f64.sqrt());

    // Edges chain from the end back to the start and sum to the score.
    assert_eq!(path.edges.first().unwrap().start, Point2::new(12.0, 6.0));
    assert_eq!(path.edges.last().unwrap().end, Point2::new(0.0, 0.0));
    for pair in path.edges.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    let total: f64 = path.edges.iter().map(|e| e.length()).sum();
    assert_relative_eq!(total, score, epsilon = 1e-9);

    // Every hop is a built visibility edge and a clear line of sight.
    for hop in path.vertices.windows(2) {
        assert!(graph.has_edge(hop[0], hop[1]));
    }
    for edge in &path.edges {
        assert!(graph.is_visible(edge.start, edge.end));
    }

    // Intermediate waypoints are obstacle corners.
    for &id in &path.vertices[1..path.vertices.len() - 1] {
        let kind = graph.vertex(id).unwrap().kind();
        assert!(matches!(kind, VertexKind::Obstacle { .. }));
    }
}

#[test]
fn visibility_is_symmetric_across_scene() {
    init();
    let graph = three_obstacle_scene();
    let points: Vec<_> = graph.vertices().map(|(_, v)| v.position()).collect();

    for &p in &points {
        for &q in &points {
            assert_eq!(graph.is_visible(p, q), graph.is_visible(q, p));
        }
    }
}

#[test]
fn edges_are_unique_and_never_chords() {
    init();
    let mut graph = three_obstacle_scene();
    graph.create_visibility_graph().unwrap();
    graph.create_visibility_graph().unwrap();

    let mut seen = HashSet::new();
    for &(a, b) in graph.edge_pairs() {
        assert_ne!(a, b);
        assert!(seen.insert((a, b)));
        assert!(!graph.is_non_adjacent_same_polygon(a, b));
    }
}

#[test]
fn clear_and_rebuild_is_stable() {
    init();
    let mut graph = three_obstacle_scene();
    let first = graph.create_visibility_graph().unwrap();
    let edges = graph.edge_count();

    graph.clear_lists();
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.path_score().is_none());
    assert_eq!(graph.polygons().len(), 3);
    assert_eq!(graph.vertex_count(), 14);

    let second = graph.create_visibility_graph().unwrap();
    assert_eq!(graph.edge_count(), edges);
    assert_relative_eq!(first, second);
}

#[test]
fn open_field_is_straight_line() {
    init();
    let mut graph: VisibilityGraph<f64> = VisibilityGraph::new();
    graph.set_start(Point2::new(-3.0, 2.0));
    graph.set_end(Point2::new(3.0, -6.0));

    assert_eq!(graph.create_visibility_graph(), Ok(10.0));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn replacing_markers_keeps_a_single_start_and_end() {
    init();
    let mut graph = VisibilityGraph::new();
    graph.add_polygon(square());
    graph.set_start(Point2::new(0.0, 0.0));
    graph.set_end(Point2::new(6.0, 6.0));
    graph.create_visibility_graph().unwrap();

    graph.clear_lists();
    graph.set_start(Point2::new(0.0, 5.0));
    graph.set_end(Point2::new(5.0, 5.0));

    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.vertices().filter(|(_, v)| v.is_start()).count(), 1);
    assert_eq!(graph.vertices().filter(|(_, v)| v.is_end()).count(), 1);
    assert_eq!(graph.start_position(), Some(Point2::new(0.0, 5.0)));
    assert_eq!(graph.end_position(), Some(Point2::new(5.0, 5.0)));

    // Heuristics follow the new end.
    for (_, vertex) in graph.vertices() {
        assert_relative_eq!(
            vertex.heuristic(),
            vertex.position().distance(Point2::new(5.0, 5.0))
        );
    }

    // Clear line above the square.
    assert_eq!(graph.create_visibility_graph(), Ok(5.0));
}

#[test]
fn missing_end_reports_error() {
    init();
    let mut graph: VisibilityGraph<f64> = VisibilityGraph::new();
    graph.set_start(Point2::new(0.0, 0.0));
    assert_eq!(graph.create_visibility_graph(), Err(GraphError::MissingEnd));
    assert_eq!(graph.find_path(), Err(GraphError::MissingEnd));
}

#[test]
fn tolerance_does_not_change_clear_scene() {
    init();
    let config = GraphConfig::default().with_eps(1e-9);
    let mut graph = VisibilityGraph::with_config(config);
    graph.add_polygon(square());
    graph.set_start(Point2::new(0.0, 0.0));
    graph.set_end(Point2::new(6.0, 6.0));

    let score = graph.create_visibility_graph().unwrap();
    assert_relative_eq!(score, 17.0_f64.sqrt() + 29.0_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn single_precision_scene() {
    init();
    let mut graph: VisibilityGraph<f32> = VisibilityGraph::new();
    graph.add_polygon(vec![
        Point2::new(1.0f32, -1.0),
        Point2::new(2.0, -1.0),
        Point2::new(2.0, 1.0),
        Point2::new(1.0, 1.0),
    ]);
    graph.set_start(Point2::new(0.0, 0.0));
    graph.set_end(Point2::new(3.0, 0.0));

    let score = graph.create_visibility_graph().unwrap();
    let expected = 2.0 * 2.0_f32.sqrt() + 1.0;
    assert_relative_eq!(score, expected, epsilon = 1e-5);
    assert_eq!(graph.path_edges().len(), 3);
}
