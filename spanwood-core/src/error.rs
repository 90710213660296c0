//! Error taxonomy shared by the graph, forest and algorithm modules.
//!
//! Every module exposes its own error enum with a stable code. Codes map onto
//! [`ErrorCategory`] so callers can react to the broad class of a failure
//! without matching on every variant.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr, $category:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }

            /// Return the broad [`ErrorCategory`] this code belongs to.
            #[must_use]
            pub const fn category(self) -> $crate::error::ErrorCategory {
                match self {
                    $(Self::$CodeVariant => $crate::error::ErrorCategory::$category,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }

            /// Return the broad [`ErrorCategory`] of this error.
            #[must_use]
            pub const fn category(&self) -> $crate::error::ErrorCategory {
                self.code().category()
            }
        }
    };
}

pub(crate) use define_error_codes;

/// Broad classes of failure raised by the library.
///
/// Absent arguments cannot be expressed through the Rust API, so there is no
/// null-argument class; lookups that may miss return [`Option`] instead.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// The argument was well-typed but semantically unacceptable.
    InvalidArgument,
    /// An index fell outside `[0, node_count())`.
    IndexOutOfRange,
    /// The operation is not defined for this kind of graph.
    UnsupportedOperation,
}

impl ErrorCategory {
    /// Return the stable machine-readable representation of this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            Self::UnsupportedOperation => "UNSUPPORTED_OPERATION",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders a label or element for inclusion in an error payload.
pub(crate) fn describe(value: &impl fmt::Debug) -> Arc<str> {
    Arc::from(format!("{value:?}"))
}

/// An error produced by [`crate::Graph`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A directed edge was passed to an undirected graph.
    #[error("edge {edge} is directed but the graph is undirected")]
    DirectedEdge {
        /// Rendering of the rejected edge.
        edge: Arc<str>,
    },
    /// An edge endpoint or queried node is not a member of the graph.
    #[error("node {node} is not a member of the graph")]
    NodeNotFound {
        /// Rendering of the missing node label.
        node: Arc<str>,
    },
    /// No node carries the requested label.
    #[error("no node is labelled {label}")]
    UnknownLabel {
        /// Rendering of the requested label.
        label: Arc<str>,
    },
    /// An index lookup fell outside the node range.
    #[error("index {index} is out of range for a graph with {node_count} nodes")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of nodes at the time of the lookup.
        node_count: usize,
    },
    /// A directed-only query was issued on an undirected graph.
    #[error("`{operation}` is not supported by undirected graphs")]
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A directed edge was passed to an undirected graph.
        DirectedEdge => DirectedEdge { .. } => "GRAPH_DIRECTED_EDGE", InvalidArgument,
        /// An edge endpoint or queried node is not a member of the graph.
        NodeNotFound => NodeNotFound { .. } => "GRAPH_NODE_NOT_FOUND", InvalidArgument,
        /// No node carries the requested label.
        UnknownLabel => UnknownLabel { .. } => "GRAPH_UNKNOWN_LABEL", InvalidArgument,
        /// An index lookup fell outside the node range.
        IndexOutOfRange => IndexOutOfRange { .. } => "GRAPH_INDEX_OUT_OF_RANGE", IndexOutOfRange,
        /// A directed-only query was issued on an undirected graph.
        UnsupportedOperation => UnsupportedOperation { .. } => "GRAPH_UNSUPPORTED_OPERATION", UnsupportedOperation,
    }
}

impl GraphError {
    pub(crate) fn node_not_found(label: &impl fmt::Debug) -> Self {
        Self::NodeNotFound {
            node: describe(label),
        }
    }
}
