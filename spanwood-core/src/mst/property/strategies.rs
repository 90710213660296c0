//! Strategy builders for minimum spanning forest property tests.
//!
//! Each generator draws from a seeded [`SmallRng`] so a failing case can be
//! replayed from its seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::test_utils::suite_max_nodes;

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for most generated graphs.
const MIN_NODES: usize = 4;
/// Default maximum node count, overridable through `SPANWOOD_PBT_MAX_NODES`.
const DEFAULT_MAX_NODES: usize = 40;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 24;

/// Generates fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let max_nodes = suite_max_nodes(DEFAULT_MAX_NODES);
    match distribution {
        WeightDistribution::Unique => {
            probabilistic(rng, max_nodes, (0.2, 0.6), distribution, |r| {
                r.gen_range(0.1..100.0)
            })
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            probabilistic(rng, max_nodes, (0.3, 0.7), distribution, move |r| {
                pool.get(r.gen_range(0..pool.len())).copied().unwrap_or(1.0)
            })
        }
        WeightDistribution::Sparse => generate_sparse(rng, max_nodes),
        WeightDistribution::Dense => probabilistic(
            rng,
            DENSE_MAX_NODES.min(max_nodes),
            (0.7, 0.95),
            distribution,
            |r| r.gen_range(0.0..10.0),
        ),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Adds each unordered pair with a probability drawn from `edge_prob_range`.
fn probabilistic(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes.max(MIN_NODES));
    let edge_probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                edges.push((i, j, weight(rng)));
            }
        }
    }
    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

/// Random spanning path over a shuffled node order plus a few extra edges,
/// some of them self-loops or repeats of an existing pair.
fn generate_sparse(rng: &mut SmallRng, max_nodes: usize) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes.max(MIN_NODES));
    let mut order: Vec<usize> = (0..node_count).collect();
    for i in (1..order.len()).rev() {
        order.swap(i, rng.gen_range(0..=i));
    }

    let mut edges: Vec<(usize, usize, f64)> = order
        .windows(2)
        .filter_map(|pair| match *pair {
            [a, b] => Some((a, b, rng.gen_range(0.1..100.0))),
            _ => None,
        })
        .collect();
    for _ in 0..rng.gen_range(node_count / 2..=node_count) {
        let (i, j) = (rng.gen_range(0..node_count), rng.gen_range(0..node_count));
        edges.push((i, j, rng.gen_range(0.1..100.0)));
    }

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Two to five components of 1-10 nodes with no cross-component edges.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        let edge_probability = rng.gen_range(0.3..=0.8);
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(edge_probability) {
                    edges.push((offset + i, offset + j, rng.gen_range(0.1..100.0)));
                }
            }
        }
        offset += size;
    }
    MstFixture {
        node_count: offset,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

// Implemented by hand to bias towards `ManyIdentical`, the case where many
// spanning forests share the minimum weight.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
