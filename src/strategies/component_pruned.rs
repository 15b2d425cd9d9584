//! Permutation search restricted to the start vertex's component.
//!
//! If `end` is not reachable the answer is `false` without any search.
//! Otherwise the whole component must be visited: this decides plain
//! Hamiltonian-path existence inside the component, still in factorial time.

use crate::component::Restriction;
use crate::error::Result;
use crate::graph::AdjacencyMatrix;
use crate::traits::Strategy;
use crate::utils::has_spanning_chain;

#[derive(Clone, Copy, Debug, Default)]
pub struct ComponentPruned;

impl ComponentPruned {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for ComponentPruned {
    fn decide(&self, graph: &AdjacencyMatrix, start: usize, end: usize) -> Result<bool> {
        graph.check_endpoints(start, end)?;
        let Some(restriction) = Restriction::around(graph, start, end) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(start, end, "end unreachable from start");
            return Ok(false);
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(component = restriction.len(), "permutation search");

        Ok(has_spanning_chain(
            &restriction.graph,
            restriction.start,
            restriction.end,
        ))
    }
}
