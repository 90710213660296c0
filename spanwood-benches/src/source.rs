//! Synthetic graphs for benchmarking.
//!
//! Provides [`SyntheticGraph`], a seeded Erdős–Rényi style generator over
//! [`AdjacencyMatrixUndirectedGraph`] with uniform edge weights in `[0, 1)`.
//! An optional backbone path guarantees a single connected component.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwood_core::{AdjacencyMatrixUndirectedGraph, Graph, GraphEdge, GraphError, GraphNode};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The edge probability fell outside `[0, 1]`.
    #[error("edge probability {got} must lie within [0, 1]")]
    InvalidProbability {
        /// The rejected probability.
        got: f64,
    },
    /// The graph rejected a generated edge.
    #[error("graph rejected a generated edge: {0}")]
    Graph(#[from] GraphError),
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of nodes to generate, labelled `0..node_count`.
    pub node_count: usize,
    /// Probability that any given pair of nodes is joined by an edge.
    pub edge_probability: f64,
    /// Adds the path `0-1-..-(n-1)` so the graph is connected.
    pub backbone: bool,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A seeded random weighted graph.
///
/// # Examples
///
/// ```
/// use spanwood_benches::source::{SyntheticConfig, SyntheticGraph};
/// use spanwood_core::Graph;
///
/// let config = SyntheticConfig {
///     node_count: 10,
///     edge_probability: 0.2,
///     backbone: true,
///     seed: 42,
/// };
/// let graph = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(graph.graph().node_count(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    graph: AdjacencyMatrixUndirectedGraph<usize>,
}

impl SyntheticGraph {
    /// Generates a graph eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroNodes`] if `node_count` is zero and
    /// [`SyntheticError::InvalidProbability`] if `edge_probability` is not a
    /// probability.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        if !(0.0..=1.0).contains(&config.edge_probability) {
            return Err(SyntheticError::InvalidProbability {
                got: config.edge_probability,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut graph = AdjacencyMatrixUndirectedGraph::with_capacity(config.node_count);
        for label in 0..config.node_count {
            graph.add_node(GraphNode::new(label));
        }
        if config.backbone {
            for (left, right) in (0..config.node_count).zip(1..config.node_count) {
                let weight = rng.gen_range(0.0..1.0);
                graph.add_edge(&GraphEdge::weighted(left, right, weight))?;
            }
        }
        for left in 0..config.node_count {
            for right in left.saturating_add(1)..config.node_count {
                if rng.gen_bool(config.edge_probability) {
                    let weight = rng.gen_range(0.0..1.0);
                    graph.add_edge(&GraphEdge::weighted(left, right, weight))?;
                }
            }
        }
        Ok(Self { graph })
    }

    /// Returns the generated graph.
    #[must_use]
    pub const fn graph(&self) -> &AdjacencyMatrixUndirectedGraph<usize> {
        &self.graph
    }

    /// Consumes the generator output, returning the graph.
    #[must_use]
    pub fn into_graph(self) -> AdjacencyMatrixUndirectedGraph<usize> {
        self.graph
    }
}
