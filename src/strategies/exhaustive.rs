//! Fixed-fraction exhaustive search.
//!
//! For `N = 3n`, every subset of `n - 2` interior vertices drawn from
//! `V \ {start, end}` is combined with the endpoints into the candidate list
//! `[start, ..subset, end]`; the induced subgraph over that list is then
//! searched by permuting the interior. Cost is `C(N-2, n-2) * (n-2)!`.

use crate::error::{Result, SolveError};
use crate::generator::BLOCKS;
use crate::graph::AdjacencyMatrix;
use crate::traits::Strategy;
use crate::utils::has_spanning_chain;
use itertools::Itertools;

#[derive(Clone, Copy, Debug, Default)]
pub struct Exhaustive;

impl Exhaustive {
    pub fn new() -> Self {
        Self
    }

    /// Path length `n` this strategy requires for a graph of `vertices`.
    pub fn path_length(vertices: usize) -> Result<usize> {
        if vertices % BLOCKS != 0 {
            return Err(SolveError::VertexCountNotDivisibleByThree(vertices));
        }
        Ok(vertices / BLOCKS)
    }
}

impl Strategy for Exhaustive {
    fn decide(&self, graph: &AdjacencyMatrix, start: usize, end: usize) -> Result<bool> {
        let total = graph.len();
        let n = Self::path_length(total)?;
        graph.check_endpoints(start, end)?;
        if n < 2 {
            return Ok(false);
        }
        if n == 2 {
            return Ok(graph.has_edge(start, end));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            subsets = %crate::utils::binomial(total - 2, n - 2),
            orderings = %crate::utils::factorial(n - 2),
            "exhaustive search"
        );

        let others = (0..total).filter(|&v| v != start && v != end);
        for interior in others.combinations(n - 2) {
            let mut order = Vec::with_capacity(n);
            order.push(start);
            order.extend(interior);
            order.push(end);
            let candidate = graph.induced(&order);
            if has_spanning_chain(&candidate, 0, n - 1) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
