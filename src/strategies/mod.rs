//! Bundled [`Strategy`](crate::traits::Strategy) implementations.
//!
//! - [`exhaustive`]       : fixed-fraction Hamiltonian* search over size-`N/3` subsets.
//! - [`component_pruned`] : BFS pruning, then permutation search over the whole component.
//! - [`subset_dp`]        : BFS pruning, then bitmask DP over the whole component.
//!
//! The exhaustive strategy answers a different question from the other two:
//! it looks for a path through exactly `N/3` vertices, while the component
//! strategies look for a path through every vertex of the start's component.

pub mod component_pruned;
pub mod exhaustive;
pub mod subset_dp;

pub use component_pruned::ComponentPruned;
pub use exhaustive::Exhaustive;
pub use subset_dp::{SubsetDp, SubsetTable};
