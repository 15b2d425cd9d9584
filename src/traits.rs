//! The strategy seam.
//!
//! A strategy is a decision procedure over an [`AdjacencyMatrix`] and an
//! endpoint pair. The three bundled strategies live in
//! [`crate::strategies`]; the [`Solver`](crate::solver::Solver) selects
//! among registered implementations by name, so tests and callers can plug
//! in their own.
//!
//! Strategies must be pure: the graph is borrowed read-only and all scratch
//! state (visited flags, candidate subsets, DP tables) is local to the call.
//! That is what makes independent trials safe to run on any thread.

use crate::error::Result;
use crate::graph::AdjacencyMatrix;

/// A decision procedure for path existence between two endpoints.
///
/// Implementations must not report `true` when `start == end`; the bundled
/// strategies reject that input with
/// [`SolveError::SameEndpoints`](crate::error::SolveError::SameEndpoints).
pub trait Strategy: Send + Sync {
    /// Decides whether the path this strategy looks for exists.
    ///
    /// Preconditions: `graph` is symmetric with an empty diagonal. Endpoint
    /// range and distinctness are checked by the bundled strategies.
    fn decide(&self, graph: &AdjacencyMatrix, start: usize, end: usize) -> Result<bool>;
}
