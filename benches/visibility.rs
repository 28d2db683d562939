//! Benchmarks for visibility graph construction and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use visgraph::polygon::Polygon;
use visgraph::{Point2, VisibilityGraph};

/// Generates one jittered quad per cell of a `side` x `side` grid.
///
/// Each quad stays inside its own 10x10 cell, so obstacles never overlap.
fn generate_obstacles(side: usize, seed: u64) -> Vec<Polygon<f64>> {
    let mut polygons = Vec::with_capacity(side * side);
    let mut state = seed;
    let mut next = || {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state as f64 / u64::MAX as f64
    };

    for row in 0..side {
        for col in 0..side {
            let x = col as f64 * 10.0;
            let y = row as f64 * 10.0;
            polygons.push(Polygon::new(vec![
                Point2::new(x + 1.0 + next() * 2.0, y + 1.0 + next() * 2.0),
                Point2::new(x + 7.0 + next() * 2.0, y + 1.0 + next() * 2.0),
                Point2::new(x + 7.0 + next() * 2.0, y + 7.0 + next() * 2.0),
                Point2::new(x + 1.0 + next() * 2.0, y + 7.0 + next() * 2.0),
            ]));
        }
    }

    polygons
}

fn build_scene(side: usize) -> VisibilityGraph<f64> {
    let mut graph = VisibilityGraph::new();
    for polygon in generate_obstacles(side, 12345) {
        graph.add_polygon(polygon);
    }
    let far = side as f64 * 10.0;
    graph.set_start(Point2::new(-1.0, -1.0));
    graph.set_end(Point2::new(far + 1.0, far + 1.0));
    graph
}

fn bench_create_visibility_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_visibility_graph");

    for side in [2, 4, 6] {
        let scene = build_scene(side);
        group.throughput(Throughput::Elements(scene.vertex_count() as u64));

        group.bench_with_input(BenchmarkId::new("grid", side * side), &scene, |b, scene| {
            b.iter(|| {
                let mut graph = scene.clone();
                black_box(graph.create_visibility_graph())
            })
        });
    }

    group.finish();
}

fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path");

    for side in [2, 4, 6] {
        let mut graph = build_scene(side);
        let _ = graph.create_visibility_graph();

        group.bench_with_input(BenchmarkId::new("grid", side * side), &graph, |b, graph| {
            b.iter(|| black_box(graph.find_path()))
        });
    }

    group.finish();
}

fn bench_is_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_visible");
    let graph = build_scene(6);
    let far = 60.0;

    group.bench_function("blocked_diagonal", |b| {
        b.iter(|| {
            graph.is_visible(
                black_box(Point2::new(0.0, 0.0)),
                black_box(Point2::new(far, far)),
            )
        })
    });

    group.bench_function("clear_corridor", |b| {
        b.iter(|| {
            graph.is_visible(
                black_box(Point2::new(0.0, 10.0)),
                black_box(Point2::new(far, 10.0)),
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_create_visibility_graph,
    bench_find_path,
    bench_is_visible
);
criterion_main!(benches);
