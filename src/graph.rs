//! Dense adjacency-matrix graph used by every strategy.
//!
//! The matrix is square, symmetric and has an empty diagonal. Symmetry is a
//! caller precondition: it holds for everything built through
//! [`AdjacencyMatrix::add_edge`] and is only checked in debug builds
//! elsewhere.

use crate::error::{Result, SolveError};
use std::fmt;

/// Square boolean adjacency matrix stored row-major in one allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdjacencyMatrix {
    side: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Graph on `side` vertices with no edges.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![false; side * side],
        }
    }

    /// Builds a matrix from rows of `0`/`1` entries.
    ///
    /// Rejects ragged input and any entry other than 0 or 1. Symmetry is
    /// not enforced here; see the module docs.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let side = rows.len();
        let mut matrix = Self::new(side);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != side {
                return Err(SolveError::NotSquare {
                    row,
                    len: values.len(),
                    expected: side,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => {}
                    1 => matrix.cells[row * side + col] = true,
                    _ => return Err(SolveError::InvalidEntry { row, col, value }),
                }
            }
        }
        Ok(matrix)
    }

    /// Builds an undirected graph from an edge list.
    pub fn from_edges(side: usize, edges: &[(usize, usize)]) -> Self {
        let mut matrix = Self::new(side);
        for &(u, v) in edges {
            matrix.add_edge(u, v);
        }
        matrix
    }

    /// Number of vertices `N`.
    #[inline]
    pub fn len(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        debug_assert!(u < self.side && v < self.side);
        self.cells[u * self.side + v]
    }

    /// Adds the undirected edge `{u, v}`. Self-loops are ignored.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert!(u < self.side && v < self.side, "vertex out of range");
        if u == v {
            return;
        }
        self.cells[u * self.side + v] = true;
        self.cells[v * self.side + u] = true;
    }

    pub fn remove_edge(&mut self, u: usize, v: usize) {
        assert!(u < self.side && v < self.side, "vertex out of range");
        self.cells[u * self.side + v] = false;
        self.cells[v * self.side + u] = false;
    }

    /// Neighbors of `u` in increasing order.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        let row = &self.cells[u * self.side..(u + 1) * self.side];
        row.iter()
            .enumerate()
            .filter_map(|(v, &edge)| edge.then_some(v))
    }

    pub fn degree(&self, u: usize) -> usize {
        self.neighbors(u).count()
    }

    /// Number of undirected edges (upper triangle only).
    pub fn edge_count(&self) -> usize {
        let mut count = 0;
        for u in 0..self.side {
            for v in (u + 1)..self.side {
                if self.has_edge(u, v) {
                    count += 1;
                }
            }
        }
        count
    }

    /// True when `graph[i][j] == graph[j][i]` everywhere and the diagonal is empty.
    pub fn is_symmetric(&self) -> bool {
        for u in 0..self.side {
            if self.has_edge(u, u) {
                return false;
            }
            for v in (u + 1)..self.side {
                if self.has_edge(u, v) != self.has_edge(v, u) {
                    return false;
                }
            }
        }
        true
    }

    /// Subgraph induced by `order`, indexed by position in `order`.
    ///
    /// The result owns its storage; `induced[i][j] == self[order[i]][order[j]]`.
    pub fn induced(&self, order: &[usize]) -> Self {
        let side = order.len();
        let mut cells = Vec::with_capacity(side * side);
        for &u in order {
            for &v in order {
                cells.push(self.has_edge(u, v));
            }
        }
        Self { side, cells }
    }

    /// Relabels vertices: `relabeled[i][j] == self[perm[i]][perm[j]]`.
    ///
    /// `perm` must be a permutation of `0..N`, which makes this the induced
    /// subgraph over the full vertex set in permuted order.
    pub fn relabeled(&self, perm: &[usize]) -> Self {
        debug_assert_eq!(perm.len(), self.side);
        self.induced(perm)
    }

    /// Checks the endpoint contract shared by all strategies.
    pub fn check_endpoints(&self, start: usize, end: usize) -> Result<()> {
        for vertex in [start, end] {
            if vertex >= self.side {
                return Err(SolveError::VertexOutOfRange {
                    vertex,
                    vertices: self.side,
                });
            }
        }
        if start == end {
            return Err(SolveError::SameEndpoints(start));
        }
        Ok(())
    }

    /// Rows as `0`/`1` bytes, the inverse of [`AdjacencyMatrix::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.side.max(1))
            .take(self.side)
            .map(|row| row.iter().map(|&edge| u8::from(edge)).collect())
            .collect()
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in 0..self.side {
            for v in 0..self.side {
                let c = if self.has_edge(u, v) { '1' } else { '0' };
                if v > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
