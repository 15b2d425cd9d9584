//! Bitmask dynamic programming over the start vertex's component.
//!
//! After the same BFS pruning as [`ComponentPruned`](super::ComponentPruned),
//! the component (re-indexed `0..m`) is searched with the table
//!
//! ```text
//! dp[mask][j] = some simple path from s to j visits exactly the vertices in mask
//! ```
//!
//! seeded with `dp[{s}][s]` and closed under "append an unvisited neighbor".
//! Masks are visited in increasing numeric order; every successor
//! `mask | 1 << k` is numerically larger than `mask`, so each state is final
//! before it is expanded. The answer is `dp[full][t]`.
//!
//! Time `O(2^m * m^2)`, space `O(2^m)` words: each row is a `u64` bitset of
//! end vertices, so `m` is bounded by the configured vertex limit and never
//! exceeds [`MAX_MASK_BITS`].

use crate::component::Restriction;
use crate::error::{Result, SolveError};
use crate::graph::AdjacencyMatrix;
use crate::traits::Strategy;

/// Largest component the table can index: one bit per vertex in a `u64`
/// row, and `1 << m` must fit in a `usize` mask.
pub const MAX_MASK_BITS: usize = if (usize::BITS as usize) - 1 < 63 {
    (usize::BITS as usize) - 1
} else {
    63
};

/// Default component-size limit (2^24 rows of 8 bytes).
pub const DEFAULT_VERTEX_LIMIT: usize = 24;

/// Reachability table `dp[mask][j]`, one `u64` end-vertex bitset per mask.
#[derive(Clone, Debug)]
pub struct SubsetTable {
    vertices: usize,
    rows: Vec<u64>,
}

impl SubsetTable {
    /// Fills the table for paths starting at `start`.
    ///
    /// # Panics
    /// Panics if `graph` has more than [`MAX_MASK_BITS`] vertices or if
    /// `start` is out of range. [`SubsetDp`] checks both before building.
    pub fn build(graph: &AdjacencyMatrix, start: usize) -> Self {
        let m = graph.len();
        assert!(m <= MAX_MASK_BITS, "subset table limited to {MAX_MASK_BITS} vertices");
        assert!(start < m, "start out of range");

        let neighbors: Vec<u64> = (0..m)
            .map(|j| graph.neighbors(j).fold(0u64, |acc, k| acc | (1u64 << k)))
            .collect();

        let mut rows = vec![0u64; 1usize << m];
        rows[1usize << start] = 1u64 << start;

        for mask in 0..rows.len() {
            let mut ends = rows[mask];
            while ends != 0 {
                let j = ends.trailing_zeros() as usize;
                ends &= ends - 1;
                let mut next = neighbors[j] & !(mask as u64);
                while next != 0 {
                    let k = next.trailing_zeros() as usize;
                    next &= next - 1;
                    rows[mask | (1usize << k)] |= 1u64 << k;
                }
            }
        }

        Self { vertices: m, rows }
    }

    /// Number of vertices `m` the table covers.
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Mask with every vertex set.
    pub fn full_mask(&self) -> usize {
        self.rows.len() - 1
    }

    /// `dp[mask][j]`.
    #[inline]
    pub fn is_reachable(&self, mask: usize, j: usize) -> bool {
        j < self.vertices && (self.rows[mask] >> j) & 1 == 1
    }

    /// `dp[full][end]`: a path from the start through every vertex ends at `end`.
    pub fn reaches_all(&self, end: usize) -> bool {
        self.is_reachable(self.full_mask(), end)
    }

    /// Every `(mask, j)` state marked reachable, in mask order.
    pub fn states(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(mask, &row)| {
            (0..self.vertices)
                .filter(move |&j| (row >> j) & 1 == 1)
                .map(move |j| (mask, j))
        })
    }

    /// Count of reachable states.
    pub fn state_count(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }
}

/// Bitmask-DP strategy with a configurable component-size limit.
#[derive(Clone, Copy, Debug)]
pub struct SubsetDp {
    vertex_limit: usize,
}

impl Default for SubsetDp {
    fn default() -> Self {
        Self {
            vertex_limit: DEFAULT_VERTEX_LIMIT,
        }
    }
}

impl SubsetDp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the component size the table may be built for; values above
    /// [`MAX_MASK_BITS`] are clamped.
    pub fn with_vertex_limit(limit: usize) -> Self {
        Self {
            vertex_limit: limit.min(MAX_MASK_BITS),
        }
    }

    pub fn vertex_limit(&self) -> usize {
        self.vertex_limit
    }
}

impl Strategy for SubsetDp {
    fn decide(&self, graph: &AdjacencyMatrix, start: usize, end: usize) -> Result<bool> {
        graph.check_endpoints(start, end)?;
        let Some(restriction) = Restriction::around(graph, start, end) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(start, end, "end unreachable from start");
            return Ok(false);
        };
        if restriction.len() > self.vertex_limit {
            return Err(SolveError::ComponentTooLarge {
                size: restriction.len(),
                limit: self.vertex_limit,
            });
        }

        let table = SubsetTable::build(&restriction.graph, restriction.start);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            component = restriction.len(),
            states = table.state_count(),
            "subset table built"
        );

        Ok(table.reaches_all(restriction.end))
    }
}
