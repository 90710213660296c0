//! Graph entities, the [`Graph`] contract and its adjacency-matrix
//! implementation.
//!
//! Nodes are identified by their label; edges refer to their endpoints by
//! label, so a graph owns exactly one [`GraphNode`] per label and edges never
//! hold references into the graph.

mod builder;
mod edge;
mod invariants;
mod matrix;
mod node;

use std::{fmt, hash::Hash};

use crate::error::GraphError;

pub use self::{
    builder::UndirectedGraphBuilder,
    edge::GraphEdge,
    invariants::{GraphInvariant, GraphInvariantViolation},
    matrix::AdjacencyMatrixUndirectedGraph,
    node::{GraphNode, NodeAttributes, NodeColor},
};

/// Requirements on node labels: cheap identity comparison, hashing for index
/// maps and a debug rendering for error payloads.
pub trait NodeLabel: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> NodeLabel for T {}

/// Operations every concrete graph provides.
///
/// Lookups take labels because a node's label is its identity. Queries that
/// only make sense for directed graphs return
/// [`GraphError::UnsupportedOperation`] on undirected implementations.
pub trait Graph<L: NodeLabel> {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of distinct edges. A self-loop counts once.
    fn edge_count(&self) -> usize;

    /// Nodes plus edges.
    fn size(&self) -> usize {
        self.node_count() + self.edge_count()
    }

    /// Returns `true` when the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Removes every node and edge.
    fn clear(&mut self);

    /// Returns `true` for directed graphs.
    fn is_directed(&self) -> bool;

    /// Returns every node.
    fn nodes(&self) -> Vec<&GraphNode<L>>;

    /// Inserts `node`, returning `false` without mutation if a node with the
    /// same label already exists.
    fn add_node(&mut self, node: GraphNode<L>) -> bool;

    /// Removes the node labelled `label` and every incident edge, returning
    /// `false` if no such node exists.
    fn remove_node(&mut self, label: &L) -> bool;

    /// Returns `true` if a node labelled `label` exists.
    fn contains_node(&self, label: &L) -> bool;

    /// Returns the node labelled `label`.
    fn node(&self, label: &L) -> Option<&GraphNode<L>>;

    /// Returns the node labelled `label` for attribute updates.
    fn node_mut(&mut self, label: &L) -> Option<&mut GraphNode<L>>;

    /// Returns the index assigned to the node labelled `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownLabel`] when no node carries `label`.
    fn node_index_of(&self, label: &L) -> Result<usize, GraphError>;

    /// Returns the node currently stored at `index`.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] when `index >= node_count()`.
    fn node_at_index(&self, index: usize) -> Result<&GraphNode<L>, GraphError>;

    /// Returns the nodes joined to `label` by an edge.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `label` is not a member.
    fn adjacent_nodes_of(&self, label: &L) -> Result<Vec<&GraphNode<L>>, GraphError>;

    /// Returns the nodes with an edge pointing at `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnsupportedOperation`] on undirected graphs.
    fn predecessor_nodes_of(&self, label: &L) -> Result<Vec<&GraphNode<L>>, GraphError>;

    /// Returns every edge once.
    fn edges(&self) -> Vec<&GraphEdge<L>>;

    /// Inserts a copy of `edge`, returning `false` if an equal edge exists.
    ///
    /// # Errors
    /// Returns [`GraphError`] when the edge's direction does not match the
    /// graph or an endpoint is not a member.
    fn add_edge(&mut self, edge: &GraphEdge<L>) -> Result<bool, GraphError>;

    /// Removes the edge equal to `edge`, returning `false` if none exists.
    ///
    /// # Errors
    /// Returns [`GraphError`] under the same conditions as [`Graph::add_edge`].
    fn remove_edge(&mut self, edge: &GraphEdge<L>) -> Result<bool, GraphError>;

    /// Returns `true` if an edge equal to `edge` exists.
    ///
    /// # Errors
    /// Returns [`GraphError`] under the same conditions as [`Graph::add_edge`].
    fn contains_edge(&self, edge: &GraphEdge<L>) -> Result<bool, GraphError>;

    /// Returns the edges incident to (or leaving) `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `label` is not a member.
    fn edges_of(&self, label: &L) -> Result<Vec<&GraphEdge<L>>, GraphError>;

    /// Returns the edges entering `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnsupportedOperation`] on undirected graphs.
    fn ingoing_edges_of(&self, label: &L) -> Result<Vec<&GraphEdge<L>>, GraphError>;

    /// Number of edges touching `label`, counting ingoing edges separately
    /// on directed graphs.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `label` is not a member.
    fn degree_of(&self, label: &L) -> Result<usize, GraphError> {
        let outgoing = self.edges_of(label)?.len();
        if !self.is_directed() {
            return Ok(outgoing);
        }
        Ok(outgoing + self.ingoing_edges_of(label)?.len())
    }
}
