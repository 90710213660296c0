//! Type definitions for minimum spanning forest property tests.

use crate::{AdjacencyMatrixUndirectedGraph, Graph, GraphEdge, GraphNode};

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing ties.
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    Dense,
    /// Several components with no cross-component edges.
    Disconnected,
}

/// Generated input for a property run.
///
/// Keeps the raw edge list next to the distribution so failures print the
/// whole context. Parallel edges may repeat a pair; the graph keeps the first.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of nodes, labelled `0..node_count`.
    pub node_count: usize,
    /// Generated `(source, target, weight)` triples.
    pub edges: Vec<(usize, usize, f64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Materialises the fixture as a matrix graph.
    pub(super) fn graph(&self) -> AdjacencyMatrixUndirectedGraph<usize> {
        let mut graph = AdjacencyMatrixUndirectedGraph::with_capacity(self.node_count);
        for label in 0..self.node_count {
            graph.add_node(GraphNode::new(label));
        }
        for &(source, target, weight) in &self.edges {
            graph
                .add_edge(&GraphEdge::weighted(source, target, weight))
                .expect("generated endpoints are members");
        }
        graph
    }
}
