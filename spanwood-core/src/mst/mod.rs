//! Minimum spanning forest construction with Kruskal's algorithm.
//!
//! Edges are visited in non-decreasing weight order and accepted whenever
//! their endpoints still sit in different sets of a [`ForestDisjointSets`].
//! On a disconnected graph the result spans every component separately.

use std::sync::Arc;

use thiserror::Error;
use tracing::{Level, info, instrument, trace};

use crate::{
    disjoint_sets::{DisjointSetError, DisjointSets, ForestDisjointSets},
    error::{define_error_codes, describe},
    graph::{Graph, GraphEdge, NodeLabel},
};

/// Errors returned while computing a minimum spanning forest.
///
/// Every check runs before any work starts, so a failed computation leaves
/// no partial result behind.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// The graph reports itself as directed.
    #[error("minimum spanning forests are only defined for undirected graphs")]
    DirectedGraph,
    /// An edge has no weight.
    #[error("edge {edge} has no weight")]
    UnweightedEdge {
        /// Rendering of the offending edge.
        edge: Arc<str>,
    },
    /// An edge has a negative weight.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// Rendering of the offending edge.
        edge: Arc<str>,
        /// The rejected weight.
        weight: f64,
    },
    /// The graph listed a node twice or an edge endpoint it does not contain.
    #[error("graph is internally inconsistent: {source}")]
    InconsistentGraph {
        /// Failure reported by the disjoint-set forest.
        #[from]
        source: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The graph reports itself as directed.
        DirectedGraph => DirectedGraph => "MST_DIRECTED_GRAPH", InvalidArgument,
        /// An edge has no weight.
        UnweightedEdge => UnweightedEdge { .. } => "MST_UNWEIGHTED_EDGE", InvalidArgument,
        /// An edge has a negative weight.
        NegativeWeight => NegativeWeight { .. } => "MST_NEGATIVE_WEIGHT", InvalidArgument,
        /// The graph listed a node twice or an unknown edge endpoint.
        InconsistentGraph => InconsistentGraph { .. } => "MST_INCONSISTENT_GRAPH", InvalidArgument,
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<L> {
    edges: Vec<GraphEdge<L>>,
    component_count: usize,
    total_weight: f64,
}

impl<L> MinimumSpanningForest<L> {
    /// Returns the accepted edges in non-decreasing weight order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[GraphEdge<L>] { &self.edges }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<GraphEdge<L>> {
        self.edges
    }
}

/// Computes minimum spanning forests, reusing one disjoint-set forest across
/// calls.
///
/// # Examples
/// ```
/// use spanwood_core::{KruskalMsp, UndirectedGraphBuilder};
///
/// let graph = UndirectedGraphBuilder::new()
///     .with_nodes(["a", "b", "c"])
///     .with_weighted_edge("a", "b", 1.0)
///     .with_weighted_edge("b", "c", 2.0)
///     .with_weighted_edge("a", "c", 5.0)
///     .build()?;
/// let forest = KruskalMsp::new().compute_msp(&graph)?;
/// assert_eq!(forest.edges().len(), 2);
/// assert!(forest.is_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct KruskalMsp<L> {
    forest: ForestDisjointSets<L>,
}

impl<L> Default for KruskalMsp<L> {
    fn default() -> Self {
        Self {
            forest: ForestDisjointSets::default(),
        }
    }
}

impl<L: NodeLabel> KruskalMsp<L> {
    /// Creates a computer with an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes a minimum spanning forest of `graph`.
    ///
    /// The graph is only read; an error leaves it untouched.
    ///
    /// # Errors
    /// Returns [`MstError::DirectedGraph`] for directed graphs,
    /// [`MstError::UnweightedEdge`] or [`MstError::NegativeWeight`] when an
    /// edge weight is missing or below zero, and
    /// [`MstError::InconsistentGraph`] when the graph's node and edge views
    /// disagree.
    #[instrument(
        name = "mst.compute",
        err,
        skip(self, graph),
        fields(nodes = graph.node_count(), edges = graph.edge_count()),
    )]
    pub fn compute_msp<G>(&mut self, graph: &G) -> Result<MinimumSpanningForest<L>, MstError>
    where
        G: Graph<L> + ?Sized,
    {
        if graph.is_directed() {
            return Err(MstError::DirectedGraph);
        }
        let mut weighted = weighted_edges(graph.edges())?;

        self.forest.clear();
        for node in graph.nodes() {
            self.forest.make_set(node.label().clone())?;
        }

        weighted.sort_by(|(left, _), (right, _)| left.total_cmp(right));

        let mut edges = Vec::with_capacity(graph.node_count().saturating_sub(1));
        let mut total_weight = 0.0;
        for (weight, edge) in weighted {
            let accepted = self.forest.union(edge.node1(), edge.node2())?;
            if tracing::enabled!(Level::TRACE) {
                trace!(edge = ?edge, weight, accepted, "considered edge");
            }
            if accepted {
                total_weight += weight;
                edges.push(edge.clone());
            }
        }

        let component_count = self.forest.set_count();
        info!(
            edges = edges.len(),
            total_weight,
            components = component_count,
            "minimum spanning forest computed"
        );
        Ok(MinimumSpanningForest {
            edges,
            component_count,
            total_weight,
        })
    }
}

/// Pairs every edge with its weight, rejecting missing or negative weights.
fn weighted_edges<L: NodeLabel>(
    edges: Vec<&GraphEdge<L>>,
) -> Result<Vec<(f64, &GraphEdge<L>)>, MstError> {
    edges
        .into_iter()
        .map(|edge| match edge.weight() {
            None => Err(MstError::UnweightedEdge {
                edge: describe(edge),
            }),
            Some(weight) if weight < 0.0 => Err(MstError::NegativeWeight {
                edge: describe(edge),
                weight,
            }),
            Some(weight) => Ok((weight, edge)),
        })
        .collect()
}

/// Computes a minimum spanning forest of `graph` with a fresh
/// [`KruskalMsp`].
///
/// # Errors
/// Returns the same errors as [`KruskalMsp::compute_msp`].
pub fn kruskal<L, G>(graph: &G) -> Result<MinimumSpanningForest<L>, MstError>
where
    L: NodeLabel,
    G: Graph<L> + ?Sized,
{
    KruskalMsp::new().compute_msp(graph)
}
