//! Connected-component labelling for undirected graphs.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    disjoint_sets::{DisjointSetError, DisjointSets, ForestDisjointSets},
    error::define_error_codes,
    graph::{Graph, NodeLabel},
};

/// Errors returned while labelling connected components.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ComponentsError {
    /// The graph reports itself as directed.
    #[error("connected components are only computed for undirected graphs")]
    DirectedGraph,
    /// The graph listed a node twice or an edge endpoint it does not contain.
    #[error("graph is internally inconsistent: {source}")]
    InconsistentGraph {
        /// Failure reported by the disjoint-set forest.
        #[from]
        source: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`ComponentsError`] variants.
    enum ComponentsErrorCode for ComponentsError {
        /// The graph reports itself as directed.
        DirectedGraph => DirectedGraph => "COMPONENTS_DIRECTED_GRAPH", InvalidArgument,
        /// The graph listed a node twice or an unknown edge endpoint.
        InconsistentGraph => InconsistentGraph { .. } => "COMPONENTS_INCONSISTENT_GRAPH", InvalidArgument,
    }
}

/// A partition of a graph's nodes into connected components.
///
/// Components are ordered by the index of their first node and list their
/// members in node index order. Isolated nodes form singleton components.
#[derive(Clone, Debug)]
pub struct ConnectedComponents<L> {
    components: Vec<Vec<L>>,
    membership: HashMap<L, usize>,
}

impl<L: NodeLabel> PartialEq for ConnectedComponents<L> {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl<L: NodeLabel> Eq for ConnectedComponents<L> {}

impl<L: NodeLabel> ConnectedComponents<L> {
    /// Returns every component.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> &[Vec<L>] { &self.components }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` for the partition of an empty graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the component containing `label`.
    #[must_use]
    pub fn component_of(&self, label: &L) -> Option<&[L]> {
        let index = *self.membership.get(label)?;
        self.components.get(index).map(Vec::as_slice)
    }

    /// Returns `true` when both labels belong to the same component. Labels
    /// outside the graph are never connected.
    #[must_use]
    pub fn are_connected(&self, first: &L, second: &L) -> bool {
        match (self.membership.get(first), self.membership.get(second)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    /// Consumes the partition, returning each component as a set.
    #[must_use]
    pub fn into_sets(self) -> Vec<HashSet<L>> {
        self.components
            .into_iter()
            .map(|members| members.into_iter().collect())
            .collect()
    }
}

/// Labels connected components, reusing one disjoint-set forest across
/// calls.
///
/// # Examples
/// ```
/// use spanwood_core::{ConnectedComponentsComputer, UndirectedGraphBuilder};
///
/// let graph = UndirectedGraphBuilder::new()
///     .with_nodes(["a", "b", "c", "d"])
///     .with_edge("a", "b")
///     .with_edge("b", "c")
///     .build()?;
/// let components = ConnectedComponentsComputer::new().compute_connected_components(&graph)?;
/// assert_eq!(components.components(), &[vec!["a", "b", "c"], vec!["d"]]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct ConnectedComponentsComputer<L> {
    forest: ForestDisjointSets<L>,
}

impl<L> Default for ConnectedComponentsComputer<L> {
    fn default() -> Self {
        Self {
            forest: ForestDisjointSets::default(),
        }
    }
}

impl<L: NodeLabel> ConnectedComponentsComputer<L> {
    /// Creates a computer with an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Partitions the nodes of `graph` into connected components.
    ///
    /// # Errors
    /// Returns [`ComponentsError::DirectedGraph`] for directed graphs and
    /// [`ComponentsError::InconsistentGraph`] when the graph's node and edge
    /// views disagree.
    #[instrument(
        name = "components.compute",
        err,
        skip(self, graph),
        fields(nodes = graph.node_count(), edges = graph.edge_count()),
    )]
    pub fn compute_connected_components<G>(
        &mut self,
        graph: &G,
    ) -> Result<ConnectedComponents<L>, ComponentsError>
    where
        G: Graph<L> + ?Sized,
    {
        if graph.is_directed() {
            return Err(ComponentsError::DirectedGraph);
        }

        self.forest.clear();
        let nodes = graph.nodes();
        for node in &nodes {
            self.forest.make_set(node.label().clone())?;
        }
        for edge in graph.edges() {
            self.forest.union(edge.node1(), edge.node2())?;
        }

        let mut by_representative: HashMap<L, usize> = HashMap::new();
        let mut components: Vec<Vec<L>> = Vec::new();
        let mut membership = HashMap::with_capacity(nodes.len());
        for node in nodes {
            let label = node.label();
            let representative = self
                .forest
                .find_set(label)
                .ok_or_else(|| DisjointSetError::not_present(label))?;
            let index = *by_representative
                .entry(representative)
                .or_insert_with(|| {
                    components.push(Vec::new());
                    components.len() - 1
                });
            if let Some(members) = components.get_mut(index) {
                members.push(label.clone());
            }
            membership.insert(label.clone(), index);
        }

        info!(components = components.len(), "connected components computed");
        Ok(ConnectedComponents {
            components,
            membership,
        })
    }
}

/// Partitions the nodes of `graph` with a fresh
/// [`ConnectedComponentsComputer`].
///
/// # Errors
/// Returns the same errors as
/// [`ConnectedComponentsComputer::compute_connected_components`].
pub fn connected_components<L, G>(graph: &G) -> Result<ConnectedComponents<L>, ComponentsError>
where
    L: NodeLabel,
    G: Graph<L> + ?Sized,
{
    ConnectedComponentsComputer::new().compute_connected_components(graph)
}
