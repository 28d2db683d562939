//! Error types for visibility-graph operations.

use thiserror::Error;

/// Reasons a shortest path could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No vertex is flagged as the start.
    #[error("no start point has been set")]
    MissingStart,

    /// No vertex is flagged as the end.
    #[error("no end point has been set")]
    MissingEnd,

    /// The search frontier emptied before the end was reached.
    #[error("end point is unreachable from the start point")]
    Unreachable,

    /// Following predecessors from the end never arrived at the start.
    #[error("predecessor chain did not reach the start after {hops} hops")]
    PredecessorCycle {
        /// Number of hops followed before giving up.
        hops: usize,
    },
}
