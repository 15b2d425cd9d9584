//! Hamiltonian* decision procedures
//!
//! This crate decides whether a simple path from a start vertex to an end
//! vertex exists in a graph built to be hostile to search, and compares three
//! exact strategies for doing so.
//!
//! ## Core idea
//! 1. [`generate`] builds `N = 3n` vertices as three internally connected,
//!    mutually disconnected clusters, then relabels every vertex at random
//!    and draws a distinct start/end pair.
//! 2. A [`Strategy`] decides existence of a path between the endpoints.
//! 3. The [`Solver`] selects a strategy by name and optionally times it.
//!
//! ## Quick start
//! ```
//! use hamstar::{generate, Solver};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let instance = generate(4, &mut rng).unwrap();
//! assert_eq!(instance.graph.len(), 12);
//!
//! let solver = Solver::new();
//! let by_dp = solver.execute(&instance.graph, instance.start, instance.end, "dp").unwrap();
//! let by_search = solver
//!     .execute(&instance.graph, instance.start, instance.end, "component-pruned")
//!     .unwrap();
//! assert_eq!(by_dp, by_search);
//! ```
//!
//! ## Strategies
//! The `strategies` module contains:
//! - `exhaustive`: the Hamiltonian* question proper. Looks for a path through
//!   exactly `N/3` vertices by enumerating vertex subsets and their orderings.
//! - `component-pruned`: restricts to the start's connected component (failing
//!   fast if the end is elsewhere) and asks for a path through *all* of it.
//! - `dp`: same question as `component-pruned`, answered by bitmask DP in
//!   `O(2^m * m^2)` instead of `O(m!)`.
//!
//! The first strategy decides a different problem from the other two; they
//! are not interchangeable answers to one question.

pub mod builder;
pub mod component;
pub mod error;
pub mod experiment;
pub mod generator;
pub mod graph;
pub mod solver;
pub mod strategies;
pub mod traits;
pub mod utils;

pub use crate::builder::SolverBuilder;
pub use crate::error::{Result, SolveError};
pub use crate::generator::{generate, GraphGenerator, Instance};
pub use crate::graph::AdjacencyMatrix;
pub use crate::solver::{Outcome, Solver, StrategyKind};
pub use crate::traits::Strategy;
