//! Visibility graph storage and mutation API.

use log::warn;
use num_traits::Float;

use super::config::GraphConfig;
use super::vertex::{Vertex, VertexId, VertexKind};
use super::visibility;
use crate::polygon::{self, Polygon};
use crate::primitives::{Point2, Segment2};
use crate::search::ShortestPath;

/// Visibility graph over polygonal obstacles plus a start and an end point.
///
/// Vertices live in an arena addressed by [`VertexId`]. Moving the start or
/// the end removes the old marker vertex and inserts a new one; obstacle
/// corners keep their handles for the lifetime of the graph.
///
/// Mutations never recompute anything. Call
/// [`create_visibility_graph`](Self::create_visibility_graph) to derive
/// edges, adjacency and the shortest path, preceded by
/// [`clear_lists`](Self::clear_lists) after any topology change.
///
/// # Example
///
/// ```
/// use visgraph::graph::VisibilityGraph;
/// use visgraph::Point2;
///
/// let mut graph = VisibilityGraph::new();
/// graph.add_polygon(vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(4.0, 1.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(1.0, 4.0),
/// ]);
/// graph.set_start(Point2::new(0.0, 0.0));
/// graph.set_end(Point2::new(6.0, 6.0));
///
/// let score = graph.create_visibility_graph().unwrap();
/// assert!(score > 72.0_f64.sqrt());
/// assert_eq!(graph.path_score(), Some(score));
/// ```
#[derive(Clone, Debug)]
pub struct VisibilityGraph<F> {
    config: GraphConfig<F>,

    /// Vertex arena; `None` marks a removed vertex whose slot is free.
    slots: Vec<Option<Vertex<F>>>,

    /// Free slots, reused before the arena grows.
    free: Vec<usize>,

    polygons: Vec<Polygon<F>>,

    start: Option<VertexId>,
    end: Option<VertexId>,

    /// Undirected visibility edges, stored once as `(lower, higher)`.
    edges: Vec<(VertexId, VertexId)>,

    /// Neighbor lists indexed by slot.
    adjacency: Vec<Vec<VertexId>>,

    path: Option<ShortestPath<F>>,
}

impl<F: Float> Default for VisibilityGraph<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> VisibilityGraph<F> {
    /// Create an empty graph with the default (exact) configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig<F>) -> Self {
        Self {
            config,
            slots: Vec::new(),
            free: Vec::new(),
            polygons: Vec::new(),
            start: None,
            end: None,
            edges: Vec::new(),
            adjacency: Vec::new(),
            path: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &GraphConfig<F> {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────

    /// Add an obstacle and one vertex per corner.
    ///
    /// Corner heuristics are initialised against the current end point.
    /// Degenerate or self-intersecting rings are accepted with a warning.
    /// Returns the polygon index.
    pub fn add_polygon(&mut self, polygon: impl Into<Polygon<F>>) -> usize {
        let polygon = polygon.into();
        let index = self.polygons.len();

        let report = polygon::validate(&polygon, self.config.eps);
        if !report.is_valid() {
            warn!(
                "[VisibilityGraph] polygon {} ({} vertices) is not a simple ring: {:?}",
                index,
                polygon.len(),
                report
            );
        }

        let goal = self.end_position();
        for (corner, &position) in polygon.vertices.iter().enumerate() {
            let kind = VertexKind::Obstacle {
                polygon: index,
                index: corner,
            };
            self.insert_vertex(Vertex::new(position, kind, goal));
        }

        self.polygons.push(polygon);
        index
    }

    /// Replace the start vertex. Returns the new handle.
    pub fn set_start(&mut self, position: Point2<F>) -> VertexId {
        if let Some(old) = self.start.take() {
            self.remove_vertex(old);
        }
        self.warn_if_degenerate_marker("start", position);

        let id = self.insert_vertex(Vertex::new(position, VertexKind::Start, self.end_position()));
        self.start = Some(id);
        self.path = None;
        id
    }

    /// Replace the end vertex and retarget every heuristic. Returns the new
    /// handle.
    pub fn set_end(&mut self, position: Point2<F>) -> VertexId {
        if let Some(old) = self.end.take() {
            self.remove_vertex(old);
        }
        self.warn_if_degenerate_marker("end", position);

        let id = self.insert_vertex(Vertex::new(position, VertexKind::End, Some(position)));
        self.end = Some(id);
        self.path = None;
        self.refresh_heuristics();
        id
    }

    /// Discard edges, adjacency and the last path.
    ///
    /// Vertices, polygons and the start/end identity are preserved. Search
    /// state is never stored on the graph, so there is nothing else to
    /// reset.
    pub fn clear_lists(&mut self) {
        self.edges.clear();
        for neighbors in &mut self.adjacency {
            neighbors.clear();
        }
        self.path = None;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    /// Ad hoc line-of-sight test against the current obstacles.
    ///
    /// Independent of the built edges.
    pub fn is_visible(&self, p1: Point2<F>, p2: Point2<F>) -> bool {
        visibility::is_visible(&self.polygons, p1, p2, self.config.eps)
    }

    /// Checks whether two vertices are non-adjacent corners of one obstacle.
    ///
    /// Returns `false` if either handle is stale.
    pub fn is_non_adjacent_same_polygon(&self, a: VertexId, b: VertexId) -> bool {
        match (self.vertex(a), self.vertex(b)) {
            (Some(va), Some(vb)) => {
                visibility::is_non_adjacent_same_polygon(&self.polygons, va.kind(), vb.kind())
            }
            _ => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Look up a vertex by handle.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<F>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Iterate over live vertices in handle order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<F>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (VertexId(i), v)))
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Upper bound (exclusive) on slot indices, for per-vertex scratch arrays.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Visibility edges as segments.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.edges
            .iter()
            .filter_map(move |&(a, b)| Some(Segment2::new(self.position(a)?, self.position(b)?)))
    }

    /// Visibility edges as handle pairs `(lower, higher)`.
    #[inline]
    pub fn edge_pairs(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if an edge joins `a` and `b`.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Vertices visible from `id`. Empty for stale handles.
    #[inline]
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon<F>] {
        &self.polygons
    }

    #[inline]
    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<VertexId> {
        self.end
    }

    pub fn start_position(&self) -> Option<Point2<F>> {
        self.start.and_then(|id| self.position(id))
    }

    pub fn end_position(&self) -> Option<Point2<F>> {
        self.end.and_then(|id| self.position(id))
    }

    /// Last path computed by [`create_visibility_graph`](Self::create_visibility_graph).
    #[inline]
    pub fn path(&self) -> Option<&ShortestPath<F>> {
        self.path.as_ref()
    }

    /// Edges of the last path, from the end back to the start.
    pub fn path_edges(&self) -> &[Segment2<F>] {
        self.path.as_ref().map(|p| p.edges.as_slice()).unwrap_or(&[])
    }

    /// Length of the last path, or `None` if no path was found.
    pub fn path_score(&self) -> Option<F> {
        self.path.as_ref().map(|p| p.score)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internals shared with the builder
    // ─────────────────────────────────────────────────────────────────────

    #[inline]
    pub(crate) fn position(&self, id: VertexId) -> Option<Point2<F>> {
        self.vertex(id).map(Vertex::position)
    }

    pub(crate) fn set_path(&mut self, path: Option<ShortestPath<F>>) {
        self.path = path;
    }

    /// Add an undirected edge. The caller guarantees it is new.
    pub(crate) fn connect(&mut self, a: VertexId, b: VertexId) {
        let pair = if a < b { (a, b) } else { (b, a) };
        self.edges.push(pair);
        self.adjacency[a.0].push(b);
        self.adjacency[b.0].push(a);
    }

    /// Recompute every heuristic against the current end point.
    pub(crate) fn refresh_heuristics(&mut self) {
        let goal = self.end_position();
        for vertex in self.slots.iter_mut().flatten() {
            vertex.retarget(goal);
        }
    }

    fn insert_vertex(&mut self, vertex: Vertex<F>) -> VertexId {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(vertex);
                VertexId(slot)
            }
            None => {
                self.slots.push(Some(vertex));
                self.adjacency.push(Vec::new());
                VertexId(self.slots.len() - 1)
            }
        }
    }

    /// Remove a vertex and every edge touching it, so a reused slot never
    /// inherits stale connectivity.
    fn remove_vertex(&mut self, id: VertexId) {
        if self.slots.get_mut(id.0).and_then(Option::take).is_none() {
            return;
        }
        self.free.push(id.0);

        self.edges.retain(|&(a, b)| a != id && b != id);
        for neighbor in std::mem::take(&mut self.adjacency[id.0]) {
            self.adjacency[neighbor.0].retain(|&n| n != id);
        }
    }

    fn warn_if_degenerate_marker(&self, which: &str, position: Point2<F>) {
        if !position.is_finite() {
            warn!("[VisibilityGraph] {} point is not finite", which);
        }
        let on_corner = self.vertices().any(|(_, v)| {
            matches!(v.kind(), VertexKind::Obstacle { .. }) && v.position() == position
        });
        if on_corner {
            warn!("[VisibilityGraph] {} point coincides with an obstacle corner", which);
        }
        if let Some(index) = self.polygons.iter().position(|p| p.contains(position)) {
            warn!("[VisibilityGraph] {} point lies inside obstacle {}", which, index);
        }
    }
}
