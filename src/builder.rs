use crate::solver::{Solver, StrategyKind};
use crate::strategies::{ComponentPruned, Exhaustive, SubsetDp};
use crate::strategies::subset_dp::DEFAULT_VERTEX_LIMIT;
use crate::traits::Strategy;

/// Configures a [`Solver`].
pub struct SolverBuilder {
    defaults: bool,
    dp_vertex_limit: Option<usize>,
    extra: Vec<(String, Box<dyn Strategy>)>,
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self {
            defaults: true,
            dp_vertex_limit: None,
            extra: Vec::new(),
        }
    }
    /// Skip registering the bundled strategies.
    pub fn without_defaults(mut self) -> Self {
        self.defaults = false;
        self
    }
    pub fn with_dp_vertex_limit(mut self, limit: usize) -> Self {
        self.dp_vertex_limit = Some(limit);
        self
    }
    /// Adds `strategy` under `name`, replacing a bundled one with the same name.
    pub fn with_strategy<S>(mut self, name: impl Into<String>, strategy: S) -> Self
    where
        S: Strategy + 'static,
    {
        self.extra.push((name.into(), Box::new(strategy)));
        self
    }
    pub fn build(self) -> Solver {
        let mut solver = Solver::empty();
        if self.defaults {
            let limit = self.dp_vertex_limit.unwrap_or(DEFAULT_VERTEX_LIMIT);
            solver.register(StrategyKind::Exhaustive.name(), Exhaustive);
            solver.register(StrategyKind::ComponentPruned.name(), ComponentPruned);
            solver.register(StrategyKind::SubsetDp.name(), SubsetDp::with_vertex_limit(limit));
        }
        for (name, strategy) in self.extra {
            solver.register_boxed(name, strategy);
        }
        solver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::graph::AdjacencyMatrix;

    #[test]
    fn dp_limit_reaches_strategy() {
        let solver = SolverBuilder::new().with_dp_vertex_limit(2).build();
        let g = AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 2)]);
        assert_eq!(
            solver.execute(&g, 0, 2, "dp"),
            Err(SolveError::ComponentTooLarge { size: 3, limit: 2 })
        );
    }

    #[test]
    fn without_defaults_is_empty() {
        let solver = SolverBuilder::new().without_defaults().build();
        assert_eq!(solver.names().count(), 0);
    }
}
