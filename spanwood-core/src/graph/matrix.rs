//! Undirected graph backed by a square adjacency matrix.
//!
//! Three structures move together on every mutation: the label-to-index map,
//! the index-to-node table and the matrix itself. Removing a node compacts the
//! indices of every node stored after it, so indices are only stable between
//! removals.

use std::collections::HashMap;

use tracing::debug;

use super::{Graph, GraphEdge, GraphNode, NodeLabel};
use crate::error::{GraphError, describe};

type Cell<L> = Option<GraphEdge<L>>;

/// Undirected graph storing each edge in both `(i, j)` and `(j, i)` cells.
///
/// # Examples
/// ```
/// use spanwood_core::{AdjacencyMatrixUndirectedGraph, Graph, GraphEdge, GraphNode};
///
/// let mut graph = AdjacencyMatrixUndirectedGraph::new();
/// graph.add_node(GraphNode::new("a"));
/// graph.add_node(GraphNode::new("b"));
/// assert!(graph.add_edge(&GraphEdge::weighted("a", "b", 2.0))?);
/// assert!(graph.contains_edge(&GraphEdge::undirected("b", "a"))?);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), spanwood_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyMatrixUndirectedGraph<L> {
    pub(super) indices: HashMap<L, usize>,
    pub(super) nodes: Vec<GraphNode<L>>,
    pub(super) matrix: Vec<Vec<Cell<L>>>,
}

impl<L> Default for AdjacencyMatrixUndirectedGraph<L> {
    fn default() -> Self {
        Self {
            indices: HashMap::new(),
            nodes: Vec::new(),
            matrix: Vec::new(),
        }
    }
}

impl<L: NodeLabel> AdjacencyMatrixUndirectedGraph<L> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `nodes` nodes before the index
    /// map or node table reallocate.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            indices: HashMap::with_capacity(nodes),
            nodes: Vec::with_capacity(nodes),
            matrix: Vec::with_capacity(nodes),
        }
    }

    /// Replaces the weight of the stored edge equal to `edge` in both of its
    /// cells. `None` (or a NaN weight) removes the weight.
    ///
    /// Returns `false` when no such edge is stored.
    ///
    /// # Errors
    /// Returns [`GraphError::DirectedEdge`] for directed edges and
    /// [`GraphError::NodeNotFound`] when an endpoint is not a member.
    pub fn set_edge_weight(
        &mut self,
        edge: &GraphEdge<L>,
        weight: Option<f64>,
    ) -> Result<bool, GraphError> {
        let (row, column) = self.endpoint_indices(edge)?;
        let mut found = false;
        for (i, j) in [(row, column), (column, row)] {
            if let Some(stored) = self.cell_mut(i, j) {
                match weight {
                    Some(value) => stored.set_weight(value),
                    None => stored.clear_weight(),
                }
                found = true;
            }
        }
        Ok(found)
    }

    fn member_index(&self, label: &L) -> Result<usize, GraphError> {
        self.indices
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::node_not_found(label))
    }

    fn endpoint_indices(&self, edge: &GraphEdge<L>) -> Result<(usize, usize), GraphError> {
        if edge.is_directed() {
            return Err(GraphError::DirectedEdge {
                edge: describe(edge),
            });
        }
        Ok((self.member_index(edge.node1())?, self.member_index(edge.node2())?))
    }

    fn row(&self, index: usize) -> &[Cell<L>] {
        self.matrix.get(index).map_or(&[][..], Vec::as_slice)
    }

    fn cell(&self, row: usize, column: usize) -> Option<&GraphEdge<L>> {
        self.row(row).get(column).and_then(Option::as_ref)
    }

    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut GraphEdge<L>> {
        self.matrix
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
            .and_then(Option::as_mut)
    }

    fn store(&mut self, row: usize, column: usize, value: Cell<L>) {
        if let Some(slot) = self.matrix.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            *slot = value;
        }
    }
}

impl<L: NodeLabel> Graph<L> for AdjacencyMatrixUndirectedGraph<L> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .enumerate()
            .map(|(i, row)| row.iter().skip(i).flatten().count())
            .sum()
    }

    fn clear(&mut self) {
        self.indices.clear();
        self.nodes.clear();
        self.matrix.clear();
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn nodes(&self) -> Vec<&GraphNode<L>> {
        self.nodes.iter().collect()
    }

    fn add_node(&mut self, node: GraphNode<L>) -> bool {
        if self.indices.contains_key(node.label()) {
            return false;
        }
        let index = self.nodes.len();
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; index + 1]);
        self.indices.insert(node.label().clone(), index);
        self.nodes.push(node);
        true
    }

    fn remove_node(&mut self, label: &L) -> bool {
        let Some(removed) = self.indices.remove(label) else {
            return false;
        };
        if removed < self.nodes.len() {
            self.nodes.remove(removed);
            self.matrix.remove(removed);
        }
        for row in &mut self.matrix {
            if removed < row.len() {
                row.remove(removed);
            }
        }
        let mut shifted = 0_usize;
        for index in self.indices.values_mut() {
            if *index > removed {
                *index -= 1;
                shifted += 1;
            }
        }
        debug!(node = ?label, index = removed, shifted, "removed node and compacted indices");
        true
    }

    fn contains_node(&self, label: &L) -> bool {
        self.indices.contains_key(label)
    }

    fn node(&self, label: &L) -> Option<&GraphNode<L>> {
        self.indices.get(label).and_then(|&i| self.nodes.get(i))
    }

    fn node_mut(&mut self, label: &L) -> Option<&mut GraphNode<L>> {
        let index = *self.indices.get(label)?;
        self.nodes.get_mut(index)
    }

    fn node_index_of(&self, label: &L) -> Result<usize, GraphError> {
        self.indices
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownLabel {
                label: describe(label),
            })
    }

    fn node_at_index(&self, index: usize) -> Result<&GraphNode<L>, GraphError> {
        self.nodes.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            node_count: self.nodes.len(),
        })
    }

    fn adjacent_nodes_of(&self, label: &L) -> Result<Vec<&GraphNode<L>>, GraphError> {
        let index = self.member_index(label)?;
        Ok(self
            .row(index)
            .iter()
            .zip(&self.nodes)
            .filter(|(cell, _)| cell.is_some())
            .map(|(_, node)| node)
            .collect())
    }

    fn predecessor_nodes_of(&self, _label: &L) -> Result<Vec<&GraphNode<L>>, GraphError> {
        Err(GraphError::UnsupportedOperation {
            operation: "predecessor_nodes_of",
        })
    }

    fn edges(&self) -> Vec<&GraphEdge<L>> {
        self.matrix
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().skip(i).flatten())
            .collect()
    }

    fn add_edge(&mut self, edge: &GraphEdge<L>) -> Result<bool, GraphError> {
        let (row, column) = self.endpoint_indices(edge)?;
        if self.cell(row, column).is_some() {
            return Ok(false);
        }
        let stored = match edge.weight() {
            Some(weight) => GraphEdge::weighted(edge.node1().clone(), edge.node2().clone(), weight),
            None => GraphEdge::undirected(edge.node1().clone(), edge.node2().clone()),
        };
        self.store(column, row, Some(stored.clone()));
        self.store(row, column, Some(stored));
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &GraphEdge<L>) -> Result<bool, GraphError> {
        let (row, column) = self.endpoint_indices(edge)?;
        if self.cell(row, column).is_none() {
            return Ok(false);
        }
        self.store(row, column, None);
        self.store(column, row, None);
        Ok(true)
    }

    fn contains_edge(&self, edge: &GraphEdge<L>) -> Result<bool, GraphError> {
        let (row, column) = self.endpoint_indices(edge)?;
        Ok(self.cell(row, column).is_some())
    }

    fn edges_of(&self, label: &L) -> Result<Vec<&GraphEdge<L>>, GraphError> {
        let index = self.member_index(label)?;
        Ok(self.row(index).iter().flatten().collect())
    }

    fn ingoing_edges_of(&self, _label: &L) -> Result<Vec<&GraphEdge<L>>, GraphError> {
        Err(GraphError::UnsupportedOperation {
            operation: "ingoing_edges_of",
        })
    }
}
