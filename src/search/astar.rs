//! A* search over a built visibility graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;
use num_traits::Float;

use crate::graph::{VertexId, VisibilityGraph};

/// Search status of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Not yet discovered.
    Unvisited,
    /// Discovered, waiting to be expanded.
    Frontier,
    /// Expanded; its cost is final.
    Visited,
}

/// Per-search scratch state, indexed by vertex slot.
///
/// Created fresh for every search, so the graph itself never carries
/// search state and repeated searches need no reset.
#[derive(Debug, Clone)]
pub struct SearchState<F> {
    pub(super) cost: Vec<F>,
    pub(super) predecessor: Vec<Option<VertexId>>,
    pub(super) state: Vec<NodeState>,
    pub(super) expanded: usize,
    pub(super) reached_end: bool,
}

impl<F: Float> SearchState<F> {
    /// Scratch space for a graph with `slots` vertex slots.
    pub fn new(slots: usize) -> Self {
        Self {
            cost: vec![F::infinity(); slots],
            predecessor: vec![None; slots],
            state: vec![NodeState::Unvisited; slots],
            expanded: 0,
            reached_end: false,
        }
    }

    /// Best known cost from the start; infinity if undiscovered.
    pub fn cost_from_start(&self, id: VertexId) -> F {
        self.cost.get(id.index()).copied().unwrap_or_else(F::infinity)
    }

    /// Vertex through which `id` was reached most cheaply.
    pub fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.predecessor.get(id.index()).copied().flatten()
    }

    pub fn node_state(&self, id: VertexId) -> NodeState {
        self.state
            .get(id.index())
            .copied()
            .unwrap_or(NodeState::Unvisited)
    }

    /// Number of vertices popped from the frontier and expanded.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Whether the end vertex was popped from the frontier.
    pub fn reached_end(&self) -> bool {
        self.reached_end
    }
}

/// Frontier entry ordered by `cost + heuristic`, then insertion order.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry<F> {
    priority: F,
    cost: F,
    seq: usize,
    vertex: VertexId,
}

impl<F: Float> PartialEq for FrontierEntry<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for FrontierEntry<F> {}

impl<F: Float> Ord for FrontierEntry<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; earlier entries win ties
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<F: Float> PartialOrd for FrontierEntry<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Run A* from `start` to `end` over the graph's current adjacency.
///
/// The frontier vertex with the lowest `cost + heuristic` is expanded
/// first; equal keys are expanded in the order they were queued. The goal
/// test happens when a vertex is popped, which with the Euclidean
/// heuristic yields an optimal path. Neighbors flagged as start are never
/// relaxed.
///
/// Returns the scratch state; check [`SearchState::reached_end`] before
/// reconstructing. Stale handles produce an empty search.
pub fn astar<F: Float>(graph: &VisibilityGraph<F>, start: VertexId, end: VertexId) -> SearchState<F> {
    let mut search = SearchState::new(graph.slot_count());

    let (Some(origin), Some(_)) = (graph.vertex(start), graph.vertex(end)) else {
        return search;
    };

    search.cost[start.index()] = F::zero();
    search.state[start.index()] = NodeState::Frontier;

    let mut seq = 0;
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        priority: origin.heuristic(),
        cost: F::zero(),
        seq,
        vertex: start,
    });

    while let Some(entry) = frontier.pop() {
        let current = entry.vertex;
        let i = current.index();

        // Superseded by a cheaper entry, or already final
        if search.state[i] == NodeState::Visited || entry.cost > search.cost[i] {
            continue;
        }

        let Some(vertex) = graph.vertex(current) else {
            continue;
        };
        search.expanded += 1;
        trace!(
            "[AStar] expand {:?}: g={:.3} f={:.3}",
            current,
            entry.cost.to_f64().unwrap_or(f64::NAN),
            entry.priority.to_f64().unwrap_or(f64::NAN)
        );

        if current == end {
            search.state[i] = NodeState::Visited;
            search.reached_end = true;
            break;
        }

        let position = vertex.position();
        for &neighbor in graph.neighbors(current) {
            let Some(next) = graph.vertex(neighbor) else {
                continue;
            };
            let j = neighbor.index();
            if next.is_start() || search.state[j] == NodeState::Visited {
                continue;
            }

            let candidate = search.cost[i] + position.distance(next.position());
            if candidate < search.cost[j] {
                search.cost[j] = candidate;
                search.predecessor[j] = Some(current);
                search.state[j] = NodeState::Frontier;

                seq += 1;
                frontier.push(FrontierEntry {
                    priority: candidate + next.heuristic(),
                    cost: candidate,
                    seq,
                    vertex: neighbor,
                });
            }
        }

        search.state[i] = NodeState::Visited;
    }

    search
}
