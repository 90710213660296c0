//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?`.

use spanwood_core::{ComponentsError, DisjointSetError, MstError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Minimum spanning forest computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Connected-component labelling failed.
    #[error("component labelling failed: {0}")]
    Components(#[from] ComponentsError),
    /// A disjoint-set operation failed.
    #[error("disjoint-set operation failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
}
