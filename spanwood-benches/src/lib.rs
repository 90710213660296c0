//! Benchmark support crate for spanwood.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for Kruskal's minimum spanning forest,
//! connected-component labelling and the disjoint-set forest.

pub mod error;
pub mod params;
pub mod source;
