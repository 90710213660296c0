//! Property 1: equivalence with the Prim oracle.
//!
//! Kruskal and Prim must agree on total weight, edge count and component
//! count for every generated graph.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::KruskalMsp;

use super::oracle::prim;
use super::types::MstFixture;

/// Relative tolerance for comparing weight sums accumulated in different
/// orders.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = KruskalMsp::new().compute_msp(&graph).map_err(|e| {
        TestCaseError::fail(format!(
            "kruskal failed: {e} (distribution={:?}, nodes={}, edges={})",
            fixture.distribution,
            fixture.node_count,
            fixture.edges.len(),
        ))
    })?;
    let oracle = prim(&graph);

    let scale = oracle.total_weight.abs().max(1.0);
    if (forest.total_weight() - oracle.total_weight).abs() > WEIGHT_TOLERANCE * scale {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, prim={} (distribution={:?}, nodes={})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.distribution,
            fixture.node_count,
        )));
    }

    if forest.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, prim={} (distribution={:?}, nodes={})",
            forest.edges().len(),
            oracle.edge_count,
            fixture.distribution,
            fixture.node_count,
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, prim={} (distribution={:?}, nodes={})",
            forest.component_count(),
            oracle.component_count,
            fixture.distribution,
            fixture.node_count,
        )));
    }

    Ok(())
}
