//! Graph nodes: an immutable label plus a bag of traversal scratch fields.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use super::NodeLabel;

/// Visit state used by depth- and breadth-first traversals.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum NodeColor {
    /// The node has not been reached yet.
    #[default]
    Unvisited,
    /// The node has been reached but its neighbourhood is still open.
    Discovered,
    /// The node and its neighbourhood are fully explored.
    Finished,
}

/// Mutable scratch fields read and written by traversal algorithms.
///
/// None of these fields carry invariants inside this crate and none of them
/// take part in node equality or hashing.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeAttributes<L> {
    /// Visit state.
    pub color: NodeColor,
    /// Hop distance from a traversal source.
    pub integer_distance: i64,
    /// Weighted distance from a traversal source.
    pub floating_point_distance: f64,
    /// Label of the node this one was reached from. Never dereferenced here.
    pub predecessor: Option<L>,
    /// Discovery timestamp.
    pub entering_time: u64,
    /// Completion timestamp.
    pub exiting_time: u64,
}

impl<L> Default for NodeAttributes<L> {
    fn default() -> Self {
        Self {
            color: NodeColor::Unvisited,
            integer_distance: 0,
            floating_point_distance: 0.0,
            predecessor: None,
            entering_time: 0,
            exiting_time: 0,
        }
    }
}

impl<L> NodeAttributes<L> {
    /// Restores every field to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A graph node identified solely by its label.
///
/// # Examples
/// ```
/// use spanwood_core::{GraphNode, NodeColor};
///
/// let mut a = GraphNode::new("a");
/// a.attributes_mut().color = NodeColor::Finished;
/// assert_eq!(a, GraphNode::new("a"));
/// assert_eq!(a.to_string(), "Node[ a ]");
/// ```
#[derive(Clone, Debug)]
pub struct GraphNode<L> {
    label: L,
    attributes: NodeAttributes<L>,
}

impl<L: NodeLabel> GraphNode<L> {
    /// Creates a node with default attributes.
    #[must_use]
    pub fn new(label: L) -> Self {
        Self {
            label,
            attributes: NodeAttributes::default(),
        }
    }

    /// Returns the node's identity label.
    #[must_use]
    #[rustfmt::skip]
    pub fn label(&self) -> &L { &self.label }

    /// Returns the traversal scratch fields.
    #[must_use]
    #[rustfmt::skip]
    pub fn attributes(&self) -> &NodeAttributes<L> { &self.attributes }

    /// Returns the traversal scratch fields for mutation.
    #[rustfmt::skip]
    pub fn attributes_mut(&mut self) -> &mut NodeAttributes<L> { &mut self.attributes }

    /// Consumes the node, returning its label.
    #[must_use]
    pub fn into_label(self) -> L {
        self.label
    }
}

impl<L: PartialEq> PartialEq for GraphNode<L> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<L: Eq> Eq for GraphNode<L> {}

impl<L: Hash> Hash for GraphNode<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl<L: fmt::Display> fmt::Display for GraphNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node[ {} ]", self.label)
    }
}

impl<L: NodeLabel> From<L> for GraphNode<L> {
    fn from(label: L) -> Self {
        Self::new(label)
    }
}
