//! Disjoint-set forest with path compression and union by rank.
//!
//! Tree nodes live in an arena and point at their parent by handle, so path
//! compression only rewrites integers. Roots point at themselves.

use std::{collections::HashMap, fmt, hash::Hash};

use super::{DisjointSetError, DisjointSets};
use crate::error::describe;

#[derive(Clone, Debug)]
struct ForestNode<E> {
    item: E,
    parent: usize,
    rank: u32,
}

/// Arena-backed disjoint-set forest.
///
/// When two roots of equal rank are merged, the root of the second argument
/// to [`DisjointSets::union`] survives and its rank grows by one.
///
/// # Examples
/// ```
/// use spanwood_core::{DisjointSets, ForestDisjointSets};
///
/// let mut sets = ForestDisjointSets::new();
/// sets.make_set(1)?;
/// sets.make_set(2)?;
/// assert!(sets.union(&1, &2)?);
/// assert_eq!(sets.find_set(&1), Some(2));
/// assert_eq!(sets.set_count(), 1);
/// # Ok::<(), spanwood_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ForestDisjointSets<E> {
    nodes: Vec<ForestNode<E>>,
    handles: HashMap<E, usize>,
    roots: usize,
}

impl<E> Default for ForestDisjointSets<E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            handles: HashMap::new(),
            roots: 0,
        }
    }
}

impl<E: Clone + Eq + Hash + fmt::Debug> ForestDisjointSets<E> {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `elements` elements.
    #[must_use]
    pub fn with_capacity(elements: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(elements),
            handles: HashMap::with_capacity(elements),
            roots: 0,
        }
    }

    /// Returns the element `element` currently points at, or `None` if
    /// `element` is absent. Roots return themselves.
    #[must_use]
    pub fn parent_of(&self, element: &E) -> Option<&E> {
        let handle = *self.handles.get(element)?;
        let parent = self.nodes.get(handle)?.parent;
        self.nodes.get(parent).map(|node| &node.item)
    }

    /// Returns the rank of `element`, or `None` if it is absent.
    #[must_use]
    pub fn rank_of(&self, element: &E) -> Option<u32> {
        let handle = *self.handles.get(element)?;
        self.nodes.get(handle).map(|node| node.rank)
    }

    fn handle(&self, element: &E) -> Result<usize, DisjointSetError> {
        self.handles
            .get(element)
            .copied()
            .ok_or_else(|| DisjointSetError::not_present(element))
    }

    /// Walks to the root without touching the tree.
    fn root(&self, mut handle: usize) -> usize {
        while let Some(node) = self.nodes.get(handle) {
            if node.parent == handle {
                break;
            }
            handle = node.parent;
        }
        handle
    }

    /// Walks to the root, then relinks every visited node to it.
    fn find_root(&mut self, mut handle: usize) -> usize {
        let root = self.root(handle);
        while handle != root {
            let Some(node) = self.nodes.get_mut(handle) else {
                break;
            };
            let parent = node.parent;
            node.parent = root;
            handle = parent;
        }
        root
    }
}

impl<E: Clone + Eq + Hash + fmt::Debug> DisjointSets<E> for ForestDisjointSets<E> {
    fn is_present(&self, element: &E) -> bool {
        self.handles.contains_key(element)
    }

    fn make_set(&mut self, element: E) -> Result<(), DisjointSetError> {
        if self.handles.contains_key(&element) {
            return Err(DisjointSetError::AlreadyPresent {
                element: describe(&element),
            });
        }
        let handle = self.nodes.len();
        self.handles.insert(element.clone(), handle);
        self.nodes.push(ForestNode {
            item: element,
            parent: handle,
            rank: 0,
        });
        self.roots += 1;
        Ok(())
    }

    fn find_set(&mut self, element: &E) -> Option<E> {
        let handle = *self.handles.get(element)?;
        let root = self.find_root(handle);
        self.nodes.get(root).map(|node| node.item.clone())
    }

    fn union(&mut self, first: &E, second: &E) -> Result<bool, DisjointSetError> {
        let first_handle = self.handle(first)?;
        let second_handle = self.handle(second)?;
        let first_root = self.find_root(first_handle);
        let second_root = self.find_root(second_handle);
        if first_root == second_root {
            return Ok(false);
        }
        let rank = |handle: usize| self.nodes.get(handle).map_or(0, |node| node.rank);
        let (first_rank, second_rank) = (rank(first_root), rank(second_root));
        let (child, survivor) = if first_rank > second_rank {
            (second_root, first_root)
        } else {
            (first_root, second_root)
        };
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = survivor;
        }
        if first_rank == second_rank
            && let Some(node) = self.nodes.get_mut(survivor)
        {
            node.rank = second_rank.saturating_add(1);
        }
        self.roots -= 1;
        Ok(true)
    }

    fn current_representatives(&self) -> Vec<&E> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(handle, node)| node.parent == *handle)
            .map(|(_, node)| &node.item)
            .collect()
    }

    fn current_elements_of_set_containing(
        &self,
        element: &E,
    ) -> Result<Vec<&E>, DisjointSetError> {
        let root = self.root(self.handle(element)?);
        Ok(self
            .nodes
            .iter()
            .enumerate()
            .filter(|(handle, _)| self.root(*handle) == root)
            .map(|(_, node)| &node.item)
            .collect())
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.handles.clear();
        self.roots = 0;
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn set_count(&self) -> usize {
        self.roots
    }
}
