//! Permutation search shared by the exhaustive and component-pruned
//! strategies.

use crate::graph::AdjacencyMatrix;
use itertools::Itertools;

/// True when every consecutive pair in `order` is adjacent.
#[inline]
pub fn is_chain(graph: &AdjacencyMatrix, order: &[usize]) -> bool {
    order.windows(2).all(|pair| graph.has_edge(pair[0], pair[1]))
}

/// Decides whether some ordering of *all* vertices of `graph` that begins at
/// `s` and ends at `t` is a chain, by enumerating every permutation of the
/// interior vertices.
///
/// Cost is `(N - 2)!` in the worst case; the search stops at the first hit.
/// Returns `false` when `s == t`.
pub fn has_spanning_chain(graph: &AdjacencyMatrix, s: usize, t: usize) -> bool {
    if s == t {
        return false;
    }
    let interior: Vec<usize> = (0..graph.len()).filter(|&v| v != s && v != t).collect();
    let Some(k) = interior.len().checked_sub(1) else {
        return graph.has_edge(s, t);
    };

    interior
        .iter()
        .copied()
        .permutations(interior.len())
        .any(|mid| {
            graph.has_edge(s, mid[0]) && is_chain(graph, &mid) && graph.has_edge(mid[k], t)
        })
}

/// `C(n, k)` saturating at `u128::MAX`; used to size search spaces in
/// diagnostics.
pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = match acc.checked_mul((n - i) as u128) {
            Some(v) => v / (i as u128 + 1),
            None => return u128::MAX,
        };
    }
    acc
}

/// `n!` saturating at `u128::MAX`.
pub fn factorial(n: usize) -> u128 {
    (1..=n as u128).try_fold(1u128, |acc, i| acc.checked_mul(i)).unwrap_or(u128::MAX)
}
