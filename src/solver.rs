//! Strategy selector.
//!
//! A [`Solver`] maps strategy names to [`Strategy`] implementations and
//! dispatches `execute(graph, start, end, name)` to the matching one. The
//! default registry holds the three bundled strategies under the names
//! listed in [`StrategyKind`]; any other name fails with
//! [`SolveError::InvalidStrategy`] before a search starts.
//!
//! Typical usage:
//! ```
//! use hamstar::{generate, Solver};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let instance = generate(5, &mut rng).unwrap();
//! let solver = Solver::new();
//! let outcome = solver
//!     .execute_timed(&instance.graph, instance.start, instance.end, "dp")
//!     .unwrap();
//! println!("found={} in {:?}", outcome.found, outcome.elapsed);
//! ```

use crate::builder::SolverBuilder;
use crate::error::{Result, SolveError};
use crate::graph::AdjacencyMatrix;
use crate::traits::Strategy;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// The bundled strategies and their registry names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrategyKind {
    Exhaustive,
    ComponentPruned,
    SubsetDp,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Exhaustive,
        StrategyKind::ComponentPruned,
        StrategyKind::SubsetDp,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Exhaustive => "exhaustive",
            StrategyKind::ComponentPruned => "component-pruned",
            StrategyKind::SubsetDp => "dp",
        }
    }

    /// Block sizes `n` that finish in seconds for this strategy.
    pub const fn default_sizes(self) -> &'static [usize] {
        match self {
            StrategyKind::Exhaustive => &[4, 5, 6, 7],
            StrategyKind::ComponentPruned => &[6, 7, 8, 9],
            StrategyKind::SubsetDp => &[10, 11, 12, 13],
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SolveError::invalid_strategy(s, StrategyKind::ALL.map(StrategyKind::name)))
    }
}

/// Result of a timed solve. Only the strategy call is timed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub found: bool,
    pub elapsed: Duration,
}

/// Registry of named strategies.
pub struct Solver {
    strategies: BTreeMap<String, Box<dyn Strategy>>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("strategies", &self.strategies.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Solver {
    /// Solver with the three bundled strategies.
    pub fn new() -> Self {
        SolverBuilder::new().build()
    }

    /// Solver with no strategies registered.
    pub fn empty() -> Self {
        Self {
            strategies: BTreeMap::new(),
        }
    }

    pub fn builder() -> SolverBuilder {
        SolverBuilder::new()
    }

    /// Registers `strategy` under `name`, returning any implementation it replaces.
    pub fn register<S>(&mut self, name: impl Into<String>, strategy: S) -> Option<Box<dyn Strategy>>
    where
        S: Strategy + 'static,
    {
        self.register_boxed(name, Box::new(strategy))
    }

    pub fn register_boxed(
        &mut self,
        name: impl Into<String>,
        strategy: Box<dyn Strategy>,
    ) -> Option<Box<dyn Strategy>> {
        self.strategies.insert(name.into(), strategy)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }

    /// Looks up a strategy by name.
    pub fn strategy(&self, name: &str) -> Result<&dyn Strategy> {
        self.strategies
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| SolveError::invalid_strategy(name, self.names()))
    }

    /// Dispatches to the strategy registered under `name`.
    pub fn execute(
        &self,
        graph: &AdjacencyMatrix,
        start: usize,
        end: usize,
        name: &str,
    ) -> Result<bool> {
        let strategy = self.strategy(name)?;
        debug_assert!(graph.is_symmetric(), "adjacency matrix must be symmetric");

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("solve", strategy = name, vertices = graph.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let found = strategy.decide(graph, start, end)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(found, "solved");

        Ok(found)
    }

    /// Like [`Solver::execute`], also reporting wall-clock time of the search.
    pub fn execute_timed(
        &self,
        graph: &AdjacencyMatrix,
        start: usize,
        end: usize,
        name: &str,
    ) -> Result<Outcome> {
        let started = Instant::now();
        let found = self.execute(graph, start, end, name)?;
        Ok(Outcome {
            found,
            elapsed: started.elapsed(),
        })
    }
}
