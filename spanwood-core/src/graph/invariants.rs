//! Structural self-checks for [`AdjacencyMatrixUndirectedGraph`].
//!
//! Property suites call [`AdjacencyMatrixUndirectedGraph::validate`] after
//! every mutation instead of reimplementing the bookkeeping in each test.

use std::sync::Arc;

use thiserror::Error;

use super::{AdjacencyMatrixUndirectedGraph, NodeLabel};
use crate::error::describe;

/// Enumerates the structural invariants of the matrix graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphInvariant {
    /// The index map, node table and matrix all hold `node_count()` entries.
    TableSizes,
    /// Every matrix row has `node_count()` cells.
    RowWidths,
    /// The index map and node table are inverse of each other.
    IndexMapping,
    /// Cells `(i, j)` and `(j, i)` hold equal edges with equal weights.
    Symmetry,
    /// A stored edge joins exactly the nodes at its row and column.
    EndpointPlacement,
}

impl GraphInvariant {
    /// Returns all invariants in evaluation order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::TableSizes,
            Self::RowWidths,
            Self::IndexMapping,
            Self::Symmetry,
            Self::EndpointPlacement,
        ]
    }
}

/// Reports the first broken invariant found by
/// [`AdjacencyMatrixUndirectedGraph::validate`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GraphInvariantViolation {
    /// The three tables disagree on the node count.
    #[error("index map holds {indices} entries, node table {nodes}, matrix {rows} rows")]
    TableSizes {
        /// Entries in the label-to-index map.
        indices: usize,
        /// Entries in the index-to-node table.
        nodes: usize,
        /// Rows in the matrix.
        rows: usize,
    },
    /// A row is narrower or wider than the node count.
    #[error("row {row} has {width} cells but the graph has {expected} nodes")]
    RowWidth {
        /// Offending row.
        row: usize,
        /// Cells in that row.
        width: usize,
        /// Required width.
        expected: usize,
    },
    /// The index map does not send a node's label back to its slot.
    #[error("node {label} sits at index {index} but the index map says {mapped:?}")]
    IndexMapping {
        /// Rendering of the node label.
        label: Arc<str>,
        /// Slot holding the node.
        index: usize,
        /// Index recorded in the map, if any.
        mapped: Option<usize>,
    },
    /// Mirror cells disagree.
    #[error("cells ({row}, {column}) and ({column}, {row}) disagree")]
    Asymmetric {
        /// Row of the first cell.
        row: usize,
        /// Column of the first cell.
        column: usize,
    },
    /// A stored edge does not join the nodes at its coordinates.
    #[error("edge {edge} is stored at ({row}, {column}) but does not join those nodes")]
    MisplacedEdge {
        /// Rendering of the stored edge.
        edge: Arc<str>,
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        column: usize,
    },
}

impl<L: NodeLabel> AdjacencyMatrixUndirectedGraph<L> {
    /// Runs every [`GraphInvariant`], returning the first violation.
    ///
    /// # Errors
    /// Returns the [`GraphInvariantViolation`] describing the first broken
    /// invariant.
    pub fn validate(&self) -> Result<(), GraphInvariantViolation> {
        GraphInvariant::all()
            .into_iter()
            .try_for_each(|invariant| self.check(invariant))
    }

    /// Evaluates a single invariant.
    ///
    /// # Errors
    /// Returns the [`GraphInvariantViolation`] found, if any.
    pub fn check(&self, invariant: GraphInvariant) -> Result<(), GraphInvariantViolation> {
        match invariant {
            GraphInvariant::TableSizes => self.check_table_sizes(),
            GraphInvariant::RowWidths => self.check_row_widths(),
            GraphInvariant::IndexMapping => self.check_index_mapping(),
            GraphInvariant::Symmetry => self.check_symmetry(),
            GraphInvariant::EndpointPlacement => self.check_endpoint_placement(),
        }
    }

    fn check_table_sizes(&self) -> Result<(), GraphInvariantViolation> {
        let (indices, nodes, rows) = (self.indices.len(), self.nodes.len(), self.matrix.len());
        if indices == nodes && nodes == rows {
            return Ok(());
        }
        Err(GraphInvariantViolation::TableSizes {
            indices,
            nodes,
            rows,
        })
    }

    fn check_row_widths(&self) -> Result<(), GraphInvariantViolation> {
        let expected = self.nodes.len();
        match self
            .matrix
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            Some((row, cells)) => Err(GraphInvariantViolation::RowWidth {
                row,
                width: cells.len(),
                expected,
            }),
            None => Ok(()),
        }
    }

    fn check_index_mapping(&self) -> Result<(), GraphInvariantViolation> {
        for (index, node) in self.nodes.iter().enumerate() {
            let mapped = self.indices.get(node.label()).copied();
            if mapped != Some(index) {
                return Err(GraphInvariantViolation::IndexMapping {
                    label: describe(node.label()),
                    index,
                    mapped,
                });
            }
        }
        Ok(())
    }

    fn check_symmetry(&self) -> Result<(), GraphInvariantViolation> {
        for (row, cells) in self.matrix.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate().skip(row + 1) {
                let mirror = self
                    .matrix
                    .get(column)
                    .and_then(|mirror_row| mirror_row.get(row))
                    .and_then(Option::as_ref);
                let agrees = match (cell, mirror) {
                    (None, None) => true,
                    (Some(edge), Some(other)) => {
                        edge == other
                            && edge.weight().map(f64::to_bits)
                                == other.weight().map(f64::to_bits)
                    }
                    _ => false,
                };
                if !agrees {
                    return Err(GraphInvariantViolation::Asymmetric { row, column });
                }
            }
        }
        Ok(())
    }

    fn check_endpoint_placement(&self) -> Result<(), GraphInvariantViolation> {
        for (row, cells) in self.matrix.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                let Some(edge) = cell else {
                    continue;
                };
                let placed = match (self.nodes.get(row), self.nodes.get(column)) {
                    (Some(a), Some(b)) => {
                        (edge.node1() == a.label() && edge.node2() == b.label())
                            || (edge.node1() == b.label() && edge.node2() == a.label())
                    }
                    _ => false,
                };
                if !placed || edge.is_directed() {
                    return Err(GraphInvariantViolation::MisplacedEdge {
                        edge: describe(edge),
                        row,
                        column,
                    });
                }
            }
        }
        Ok(())
    }
}
