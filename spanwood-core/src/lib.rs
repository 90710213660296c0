//! Spanwood core library.
//!
//! A mutable undirected graph backed by an adjacency matrix, a disjoint-set
//! forest with path compression and union by rank, and the two algorithms
//! built on that forest: Kruskal's minimum spanning forest and
//! connected-component labelling.
//!
//! # Examples
//! ```
//! use spanwood_core::{UndirectedGraphBuilder, connected_components, kruskal};
//!
//! let graph = UndirectedGraphBuilder::new()
//!     .with_nodes(["a", "b", "c", "d"])
//!     .with_weighted_edge("a", "b", 1.0)
//!     .with_weighted_edge("b", "c", 1.0)
//!     .with_weighted_edge("a", "c", 3.0)
//!     .build()?;
//!
//! let forest = kruskal(&graph)?;
//! assert_eq!(forest.total_weight(), 2.0);
//! assert_eq!(forest.component_count(), 2);
//!
//! let components = connected_components(&graph)?;
//! assert!(components.are_connected(&"a", &"c"));
//! assert!(!components.are_connected(&"a", &"d"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod components;
mod disjoint_sets;
mod error;
mod graph;
mod mst;


pub use crate::{
    components::{
        ComponentsError, ComponentsErrorCode, ConnectedComponents, ConnectedComponentsComputer,
        connected_components,
    },
    disjoint_sets::{DisjointSetError, DisjointSetErrorCode, DisjointSets, ForestDisjointSets},
    error::{ErrorCategory, GraphError, GraphErrorCode},
    graph::{
        AdjacencyMatrixUndirectedGraph, Graph, GraphEdge, GraphInvariant, GraphInvariantViolation,
        GraphNode, NodeAttributes, NodeColor, NodeLabel, UndirectedGraphBuilder,
    },
    mst::{KruskalMsp, MinimumSpanningForest, MstError, MstErrorCode, kruskal},
};
