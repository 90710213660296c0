//! Graph edges: an endpoint pair, a direction flag and an optional weight.

use std::{
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
};

use super::NodeLabel;

/// An edge between two node labels.
///
/// Undirected edges compare equal regardless of endpoint order; directed
/// edges only when the endpoints match in order. The weight never takes part
/// in equality or hashing.
///
/// # Examples
/// ```
/// use spanwood_core::GraphEdge;
///
/// let ab = GraphEdge::weighted("a", "b", 1.5);
/// let ba = GraphEdge::undirected("b", "a");
/// assert_eq!(ab, ba);
/// assert!(ab.has_weight());
/// assert!(!ba.has_weight());
/// ```
#[derive(Clone, Debug)]
pub struct GraphEdge<L> {
    node1: L,
    node2: L,
    directed: bool,
    weight: Option<f64>,
}

impl<L: NodeLabel> GraphEdge<L> {
    /// Creates an unweighted edge.
    #[must_use]
    pub fn new(node1: L, node2: L, directed: bool) -> Self {
        Self {
            node1,
            node2,
            directed,
            weight: None,
        }
    }

    /// Creates a weighted edge. A NaN weight leaves the edge unweighted.
    #[must_use]
    pub fn new_weighted(node1: L, node2: L, directed: bool, weight: f64) -> Self {
        let mut edge = Self::new(node1, node2, directed);
        edge.set_weight(weight);
        edge
    }

    /// Creates an unweighted undirected edge.
    #[must_use]
    pub fn undirected(node1: L, node2: L) -> Self {
        Self::new(node1, node2, false)
    }

    /// Creates a weighted undirected edge.
    #[must_use]
    pub fn weighted(node1: L, node2: L, weight: f64) -> Self {
        Self::new_weighted(node1, node2, false, weight)
    }

    /// Returns the first endpoint (the source of a directed edge).
    #[must_use]
    #[rustfmt::skip]
    pub fn node1(&self) -> &L { &self.node1 }

    /// Returns the second endpoint (the target of a directed edge).
    #[must_use]
    #[rustfmt::skip]
    pub fn node2(&self) -> &L { &self.node2 }

    /// Returns both endpoints in construction order.
    #[must_use]
    pub fn endpoints(&self) -> (&L, &L) {
        (&self.node1, &self.node2)
    }

    /// Returns `true` for directed edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_directed(&self) -> bool { self.directed }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.node1 == self.node2
    }

    /// Returns the endpoint across from `label`, or `None` when `label` is
    /// not an endpoint of this edge.
    #[must_use]
    pub fn opposite(&self, label: &L) -> Option<&L> {
        if *label == self.node1 {
            Some(&self.node2)
        } else if *label == self.node2 {
            Some(&self.node1)
        } else {
            None
        }
    }

    /// Returns `true` when the edge carries a weight.
    #[must_use]
    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }

    /// Returns the weight, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Option<f64> { self.weight }

    /// Sets the weight. NaN is the "no weight" sentinel and clears it.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = (!weight.is_nan()).then_some(weight);
    }

    /// Removes the weight.
    pub fn clear_weight(&mut self) {
        self.weight = None;
    }
}

impl<L: PartialEq> PartialEq for GraphEdge<L> {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed {
            return false;
        }
        let same_order = self.node1 == other.node1 && self.node2 == other.node2;
        if self.directed {
            return same_order;
        }
        same_order || (self.node1 == other.node2 && self.node2 == other.node1)
    }
}

impl<L: Eq> Eq for GraphEdge<L> {}

impl<L: Hash> Hash for GraphEdge<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directed.hash(state);
        if self.directed {
            self.node1.hash(state);
            self.node2.hash(state);
        } else {
            // Undirected equality ignores order, so combine endpoint digests
            // with a commutative operation.
            state.write_u64(digest(&self.node1).wrapping_add(digest(&self.node2)));
        }
    }
}

fn digest(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<L: fmt::Display> fmt::Display for GraphEdge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "-->" } else { "--" };
        write!(f, "Edge [ {} {arrow} {} ]", self.node1, self.node2)
    }
}
