//! Prim oracle for minimum spanning forest property verification.
//!
//! Grows one tree per component from its lowest-indexed node using dense
//! `O(n^2)` Prim, which shares no code or ordering with Kruskal: agreement
//! on total weight and edge count is therefore meaningful even when many
//! forests tie.

use crate::{AdjacencyMatrixUndirectedGraph, Graph};

/// Result of the Prim oracle.
#[derive(Clone, Debug)]
pub(super) struct PrimResult {
    /// Total weight of the forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of trees grown.
    pub component_count: usize,
}

/// Computes a minimum spanning forest weight with Prim's algorithm.
///
/// Self-loops never enter a tree. Parallel edges cannot occur because the
/// graph stores at most one edge per pair.
pub(super) fn prim(graph: &AdjacencyMatrixUndirectedGraph<usize>) -> PrimResult {
    let n = graph.node_count();
    let mut weights = vec![vec![None; n]; n];
    for edge in graph.edges() {
        let (a, b) = (index(graph, *edge.node1()), index(graph, *edge.node2()));
        if a != b {
            weights[a][b] = edge.weight();
            weights[b][a] = edge.weight();
        }
    }

    let mut in_tree = vec![false; n];
    let mut best: Vec<Option<f64>> = vec![None; n];
    let mut total_weight = 0.0;
    let mut edge_count = 0;
    let mut component_count = 0;

    for _ in 0..n {
        let next = (0..n)
            .filter(|&v| !in_tree[v])
            .min_by(|&a, &b| cmp_candidate(best[a], best[b]));
        let Some(v) = next else { break };
        match best[v] {
            Some(weight) => {
                total_weight += weight;
                edge_count += 1;
            }
            None => component_count += 1,
        }
        in_tree[v] = true;
        for u in 0..n {
            if in_tree[u] {
                continue;
            }
            if let Some(weight) = weights[v][u] {
                if best[u].is_none_or(|current| weight < current) {
                    best[u] = Some(weight);
                }
            }
        }
    }

    PrimResult {
        total_weight,
        edge_count,
        component_count,
    }
}

/// Reachable candidates first (by weight), then unreached nodes by index.
fn cmp_candidate(a: Option<f64>, b: Option<f64>) -> std::cmp::Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}

fn index(graph: &AdjacencyMatrixUndirectedGraph<usize>, label: usize) -> usize {
    graph.node_index_of(&label).expect("edge endpoints are members")
}
