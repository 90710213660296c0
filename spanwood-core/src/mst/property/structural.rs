//! Property 2: structural invariant verification.
//!
//! For any forest produced by Kruskal, verifies:
//!
//! - every accepted edge exists in the graph with the same weight;
//! - weights appear in non-decreasing order;
//! - the edges form no cycle;
//! - there are exactly `V - C` edges for `C` components;
//! - `C` matches the connected-component labelling of the input.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    AdjacencyMatrixUndirectedGraph, Graph, GraphEdge, KruskalMsp, MinimumSpanningForest,
    connected_components,
};

use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = KruskalMsp::new().compute_msp(&graph).map_err(|e| {
        TestCaseError::fail(format!(
            "kruskal failed: {e} (distribution={:?}, nodes={})",
            fixture.distribution, fixture.node_count,
        ))
    })?;

    validate_membership(&graph, forest.edges())?;
    validate_sorted(forest.edges())?;
    validate_acyclicity(forest.edges())?;
    validate_edge_count(graph.node_count(), &forest)?;
    validate_component_count(&graph, &forest)?;
    Ok(())
}

fn validate_membership(
    graph: &AdjacencyMatrixUndirectedGraph<usize>,
    edges: &[GraphEdge<usize>],
) -> TestCaseResult {
    let stored: HashMap<&GraphEdge<usize>, Option<f64>> = graph
        .edges()
        .into_iter()
        .map(|edge| (edge, edge.weight()))
        .collect();
    for (i, edge) in edges.iter().enumerate() {
        match stored.get(edge) {
            Some(weight) if *weight == edge.weight() => {}
            Some(weight) => {
                return Err(TestCaseError::fail(format!(
                    "edge {i}: weight {:?} differs from stored {weight:?}",
                    edge.weight(),
                )));
            }
            None => {
                return Err(TestCaseError::fail(format!("edge {i}: {edge:?} is not in the graph")));
            }
        }
    }
    Ok(())
}

fn validate_sorted(edges: &[GraphEdge<usize>]) -> TestCaseResult {
    for (i, pair) in edges.windows(2).enumerate() {
        if let [left, right] = pair
            && left.weight() > right.weight()
        {
            return Err(TestCaseError::fail(format!(
                "edges {i} and {} are out of weight order: {:?} > {:?}",
                i + 1,
                left.weight(),
                right.weight(),
            )));
        }
    }
    Ok(())
}

/// Detects cycles with a throwaway parent map keyed by label.
fn validate_acyclicity(edges: &[GraphEdge<usize>]) -> TestCaseResult {
    let mut parent: HashMap<usize, usize> = HashMap::new();
    fn root(parent: &HashMap<usize, usize>, mut node: usize) -> usize {
        while let Some(&next) = parent.get(&node) {
            node = next;
        }
        node
    }
    for (i, edge) in edges.iter().enumerate() {
        let (a, b) = (root(&parent, *edge.node1()), root(&parent, *edge.node2()));
        if a == b {
            return Err(TestCaseError::fail(format!(
                "edge {i}: {edge:?} closes a cycle"
            )));
        }
        parent.insert(a, b);
    }
    Ok(())
}

fn validate_edge_count(node_count: usize, forest: &MinimumSpanningForest<usize>) -> TestCaseResult {
    let expected = node_count.saturating_sub(forest.component_count());
    if forest.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {expected} (n={node_count}, c={})",
            forest.edges().len(),
            forest.component_count(),
        )));
    }
    if forest.is_tree() != (forest.component_count() == 1) {
        return Err(TestCaseError::fail("is_tree disagrees with component count"));
    }
    Ok(())
}

fn validate_component_count(
    graph: &AdjacencyMatrixUndirectedGraph<usize>,
    forest: &MinimumSpanningForest<usize>,
) -> TestCaseResult {
    let components = connected_components(graph)
        .map_err(|e| TestCaseError::fail(format!("components failed: {e}")))?;
    if components.len() != forest.component_count() {
        return Err(TestCaseError::fail(format!(
            "forest spans {} components but labelling finds {}",
            forest.component_count(),
            components.len(),
        )));
    }
    Ok(())
}
