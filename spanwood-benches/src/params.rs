//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so they can label
//! Criterion benchmark ids through [`fmt::Display`].

use std::fmt;

/// Parameters for a graph algorithm benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Probability that any given pair of nodes is joined by an edge.
    pub edge_probability: f64,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.node_count, self.edge_probability)
    }
}

/// Parameters for a disjoint-set benchmark run.
#[derive(Clone, Debug)]
pub struct DisjointSetBenchParams {
    /// Number of elements added with `make_set`.
    pub element_count: usize,
    /// Number of random unions applied after insertion.
    pub union_count: usize,
}

impl fmt::Display for DisjointSetBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},unions={}", self.element_count, self.union_count)
    }
}
