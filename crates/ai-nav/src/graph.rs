use std::collections::BTreeMap;
use std::fmt::Debug;

use ai_core::{diagnostics::report, AiError, AiResult};

/// What a search algorithm needs from a graph: adjacency and edge costs.
///
/// `neighbors` order is part of the contract; searches that break ties by discovery order stay
/// deterministic only if it is stable.
pub trait WeightedGraph {
    type Node;

    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Cost of moving from `from` to `to`. Fails with [`AiError::InvalidEdge`] when `to` is not a
    /// neighbor of `from`.
    fn cost(&self, from: &Self::Node, to: &Self::Node) -> AiResult<u32>;
}

/// Directed graph with explicitly listed edges. Neighbors come back in insertion order.
#[derive(Debug, Clone)]
pub struct EdgeGraph<N> {
    edges: BTreeMap<N, Vec<(N, u32)>>,
}

impl<N: Ord + Clone> EdgeGraph<N> {
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
        }
    }

    /// Add or re-weight the edge `from -> to`.
    pub fn add_edge(&mut self, from: N, to: N, cost: u32) {
        let out = self.edges.entry(from).or_default();
        match out.iter_mut().find(|(n, _)| *n == to) {
            Some(edge) => edge.1 = cost,
            None => out.push((to, cost)),
        }
    }

    pub fn with_edge(mut self, from: N, to: N, cost: u32) -> Self {
        self.add_edge(from, to, cost);
        self
    }

    pub fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let Some(out) = self.edges.get_mut(from) else {
            return false;
        };
        let before = out.len();
        out.retain(|(n, _)| n != to);
        before != out.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl<N: Ord + Clone> Default for EdgeGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ord + Clone + Debug> WeightedGraph for EdgeGraph<N> {
    type Node = N;

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.edges
            .get(node)
            .map(|out| out.iter().map(|(n, _)| n.clone()).collect())
            .unwrap_or_default()
    }

    fn cost(&self, from: &N, to: &N) -> AiResult<u32> {
        self.edges
            .get(from)
            .and_then(|out| out.iter().find(|(n, _)| n == to))
            .map(|(_, cost)| *cost)
            .ok_or_else(|| report(AiError::invalid_edge(from, to)))
    }
}
