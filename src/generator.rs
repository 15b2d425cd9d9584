//! Adversarial instance generator.
//!
//! Builds `N = 3n` vertices split into three contiguous blocks of `n`.
//! Each block is made internally connected by a shuffled spanning path and
//! then densified with independent fair-coin edges; no edges cross blocks.
//! Finally every label is permuted uniformly at random so the block
//! structure is invisible, and a distinct start/end pair is drawn.
//!
//! Randomness is supplied by the caller, so a seeded RNG reproduces the
//! same instance exactly.

use crate::error::{Result, SolveError};
use crate::graph::AdjacencyMatrix;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of blocks the generator builds.
pub const BLOCKS: usize = 3;

/// Probability of each extra intra-block edge.
pub const EXTRA_EDGE_PROBABILITY: f64 = 0.5;

/// A generated graph together with its endpoint pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub graph: AdjacencyMatrix,
    pub start: usize,
    pub end: usize,
}

impl Instance {
    /// Number of vertices a Hamiltonian* path must visit, `N / 3`.
    pub fn subgraph_size(&self) -> usize {
        self.graph.len() / BLOCKS
    }
}

/// Generator for three-cluster instances.
#[derive(Clone, Copy, Debug)]
pub struct GraphGenerator {
    extra_edge_probability: f64,
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self {
            extra_edge_probability: EXTRA_EDGE_PROBABILITY,
        }
    }
}

impl GraphGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the intra-block edge density.
    ///
    /// # Panics
    /// Panics if `p` is outside `[0, 1]`.
    pub fn with_extra_edge_probability(mut self, p: f64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");
        self.extra_edge_probability = p;
        self
    }

    /// Generates an instance over `3n` vertices.
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Instance> {
        if n == 0 {
            return Err(SolveError::EmptyBlock);
        }
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("generate", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let total = BLOCKS * n;
        let mut clustered = AdjacencyMatrix::new(total);
        for block in 0..BLOCKS {
            let vertices: Vec<usize> = (block * n..(block + 1) * n).collect();
            self.connect_block(&mut clustered, &vertices, rng);
        }

        let mut perm: Vec<usize> = (0..total).collect();
        perm.shuffle(rng);
        let graph = clustered.relabeled(&perm);

        let start = rng.gen_range(0..total);
        // Draw from the N-1 remaining labels and skip over `start`.
        let mut end = rng.gen_range(0..total - 1);
        if end >= start {
            end += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(vertices = total, edges = graph.edge_count(), start, end, "generated instance");

        Ok(Instance { graph, start, end })
    }

    fn connect_block<R: Rng + ?Sized>(
        &self,
        graph: &mut AdjacencyMatrix,
        vertices: &[usize],
        rng: &mut R,
    ) {
        let mut spine = vertices.to_vec();
        spine.shuffle(rng);
        for pair in spine.windows(2) {
            graph.add_edge(pair[0], pair[1]);
        }

        for (i, &u) in vertices.iter().enumerate() {
            for &v in &vertices[i + 1..] {
                if !graph.has_edge(u, v) && rng.gen_bool(self.extra_edge_probability) {
                    graph.add_edge(u, v);
                }
            }
        }
    }
}

/// Generates an instance with the default generator.
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Instance> {
    GraphGenerator::default().generate(n, rng)
}
