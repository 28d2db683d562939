//! Epsilon-aware geometric predicates.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used; an `eps` of zero selects exact tests.

mod predicates;

pub use predicates::{orient2d, segments_cross, shares_endpoint, Orientation};
