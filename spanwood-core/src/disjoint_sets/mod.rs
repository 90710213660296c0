//! Disjoint-set (union-find) structures.
//!
//! [`ForestDisjointSets`] is the engine shared by the minimum spanning forest
//! and connected-component computations. The trait exists so algorithms and
//! tests can talk about the operations without naming the representation.

mod forest;

use std::{fmt, hash::Hash, sync::Arc};

use thiserror::Error;

use crate::error::{define_error_codes, describe};

pub use self::forest::ForestDisjointSets;

/// Errors returned by [`DisjointSets`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// `make_set` was called for an element that is already tracked.
    #[error("element {element} is already present")]
    AlreadyPresent {
        /// Rendering of the duplicate element.
        element: Arc<str>,
    },
    /// The element was never added with `make_set`.
    #[error("element {element} is not present")]
    NotPresent {
        /// Rendering of the missing element.
        element: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// `make_set` was called for an element that is already tracked.
        AlreadyPresent => AlreadyPresent { .. } => "DISJOINT_SET_ALREADY_PRESENT", InvalidArgument,
        /// The element was never added with `make_set`.
        NotPresent => NotPresent { .. } => "DISJOINT_SET_NOT_PRESENT", InvalidArgument,
    }
}

impl DisjointSetError {
    pub(crate) fn not_present(element: &impl fmt::Debug) -> Self {
        Self::NotPresent {
            element: describe(element),
        }
    }
}

/// A partition of elements into disjoint sets, each named by one
/// representative member.
pub trait DisjointSets<E: Clone + Eq + Hash + fmt::Debug> {
    /// Returns `true` if `element` has been added.
    fn is_present(&self, element: &E) -> bool;

    /// Adds `element` as a singleton set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::AlreadyPresent`] if `element` is tracked.
    fn make_set(&mut self, element: E) -> Result<(), DisjointSetError>;

    /// Returns the representative of the set containing `element`, or `None`
    /// if `element` was never added.
    ///
    /// The representative stays the same until the next successful
    /// [`DisjointSets::union`].
    fn find_set(&mut self, element: &E) -> Option<E>;

    /// Merges the sets containing `first` and `second`.
    ///
    /// Returns `false` when both already share a set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if either element is missing.
    fn union(&mut self, first: &E, second: &E) -> Result<bool, DisjointSetError>;

    /// Returns the representative of every set.
    fn current_representatives(&self) -> Vec<&E>;

    /// Returns every member of the set containing `element`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if `element` is missing.
    fn current_elements_of_set_containing(
        &self,
        element: &E,
    ) -> Result<Vec<&E>, DisjointSetError>;

    /// Discards every element.
    fn clear(&mut self);

    /// Number of tracked elements.
    fn len(&self) -> usize;

    /// Number of disjoint sets.
    fn set_count(&self) -> usize;

    /// Returns `true` when no element is tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when `first` and `second` share a set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotPresent`] if either element is missing.
    fn in_same_set(&mut self, first: &E, second: &E) -> Result<bool, DisjointSetError> {
        let left = self
            .find_set(first)
            .ok_or_else(|| DisjointSetError::not_present(first))?;
        let right = self
            .find_set(second)
            .ok_or_else(|| DisjointSetError::not_present(second))?;
        Ok(left == right)
    }
}
