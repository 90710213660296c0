//! Fluent construction of [`AdjacencyMatrixUndirectedGraph`] instances.

use super::{AdjacencyMatrixUndirectedGraph, Graph, GraphEdge, GraphNode, NodeLabel};
use crate::error::GraphError;

/// Collects nodes and edges, then builds an undirected matrix graph.
///
/// Nodes are inserted in the order they were supplied, so the first node
/// receives index `0`. Duplicate nodes and edges are ignored, matching
/// [`Graph::add_node`] and [`Graph::add_edge`].
///
/// # Examples
/// ```
/// use spanwood_core::{Graph, UndirectedGraphBuilder};
///
/// let graph = UndirectedGraphBuilder::new()
///     .with_nodes(["a", "b", "c"])
///     .with_weighted_edge("a", "b", 1.0)
///     .with_edge("b", "c")
///     .build()?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), spanwood_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct UndirectedGraphBuilder<L> {
    capacity: usize,
    nodes: Vec<L>,
    edges: Vec<GraphEdge<L>>,
}

impl<L> Default for UndirectedGraphBuilder<L> {
    fn default() -> Self {
        Self {
            capacity: 0,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<L: NodeLabel> UndirectedGraphBuilder<L> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocates room for `nodes` nodes in the built graph.
    #[must_use]
    pub fn with_capacity(mut self, nodes: usize) -> Self {
        self.capacity = nodes;
        self
    }

    /// Adds a node.
    #[must_use]
    pub fn with_node(mut self, label: L) -> Self {
        self.nodes.push(label);
        self
    }

    /// Adds several nodes in iteration order.
    #[must_use]
    pub fn with_nodes(mut self, labels: impl IntoIterator<Item = L>) -> Self {
        self.nodes.extend(labels);
        self
    }

    /// Adds an unweighted edge between two previously added nodes.
    #[must_use]
    pub fn with_edge(mut self, node1: L, node2: L) -> Self {
        self.edges.push(GraphEdge::undirected(node1, node2));
        self
    }

    /// Adds a weighted edge between two previously added nodes.
    #[must_use]
    pub fn with_weighted_edge(mut self, node1: L, node2: L, weight: f64) -> Self {
        self.edges.push(GraphEdge::weighted(node1, node2, weight));
        self
    }

    /// Builds the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when an edge names a node that
    /// was never added.
    pub fn build(self) -> Result<AdjacencyMatrixUndirectedGraph<L>, GraphError> {
        let mut graph =
            AdjacencyMatrixUndirectedGraph::with_capacity(self.capacity.max(self.nodes.len()));
        for label in self.nodes {
            graph.add_node(GraphNode::new(label));
        }
        for edge in &self.edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }
}
