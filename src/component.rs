//! Connected-component pruning shared by the component-based strategies.

use crate::graph::AdjacencyMatrix;
use std::collections::VecDeque;

/// Vertices reachable from `start`, in breadth-first discovery order.
///
/// `start` is always the first element.
pub fn connected_component(graph: &AdjacencyMatrix, start: usize) -> Vec<usize> {
    let mut visited = vec![false; graph.len()];
    let mut component = Vec::new();
    let mut queue = VecDeque::from([start]);
    visited[start] = true;
    while let Some(u) = queue.pop_front() {
        component.push(u);
        for v in graph.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }
    component
}

/// The component of `start` as a standalone graph, with both endpoints
/// re-indexed into it.
#[derive(Clone, Debug)]
pub struct Restriction {
    /// Original labels in BFS order; position `i` is vertex `i` of `graph`.
    pub vertices: Vec<usize>,
    pub graph: AdjacencyMatrix,
    pub start: usize,
    pub end: usize,
}

impl Restriction {
    /// Restricts `graph` to the component of `start`.
    ///
    /// Returns `None` when `end` is not reachable from `start`; callers treat
    /// that as an immediate negative answer.
    pub fn around(graph: &AdjacencyMatrix, start: usize, end: usize) -> Option<Self> {
        let vertices = connected_component(graph, start);
        let t = vertices.iter().position(|&v| v == end)?;
        let sub = graph.induced(&vertices);
        Some(Self {
            vertices,
            graph: sub,
            start: 0,
            end: t,
        })
    }

    /// Component size `m`.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
