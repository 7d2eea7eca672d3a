use std::ptr;

use generational_arena::Index;
use tracing::instrument;

use super::{Traversal, TraversalOrder};
use crate::domain::error::TreeResult;
use crate::domain::tree::KaryTree;

/// Every subtree left to right, then the parent.
///
/// The stack always holds the path from the root down to the current node, which sits on top.
/// No visited flags are kept: after a node is consumed, the entry below it is its parent, and
/// looking the consumed node up among the parent's children tells whether a sibling subtree is
/// still pending or the parent itself is due.
#[derive(Debug, Clone)]
pub struct PostOrderIterator<'a, T, const K: usize> {
    tree: &'a KaryTree<T, K>,
    stack: Vec<Index>,
}

impl<'a, T, const K: usize> PostOrderIterator<'a, T, K> {
    pub(crate) fn new(tree: &'a KaryTree<T, K>, root: Option<Index>) -> Self {
        let mut walk = Self {
            tree,
            stack: Vec::new(),
        };
        if let Some(root) = root {
            walk.push_leftmost_path(root);
        }
        walk
    }

    /// Pushes `start` and its chain of first children down to a leaf.
    fn push_leftmost_path(&mut self, start: Index) {
        let mut node = Some(start);
        while let Some(idx) = node {
            self.stack.push(idx);
            node = self.tree.children_of(idx).first().copied();
        }
    }

    pub fn current_index(&self) -> Option<Index> {
        self.stack.last().copied()
    }

    #[instrument(level = "trace", skip(self))]
    pub(crate) fn step(&mut self) {
        let Some(done) = self.stack.pop() else {
            return;
        };
        // Root consumed: the walk is over
        let Some(&parent) = self.stack.last() else {
            return;
        };
        let siblings = self.tree.children_of(parent);
        let next_sibling = siblings
            .iter()
            .position(|&sibling| sibling == done)
            .and_then(|pos| siblings.get(pos + 1))
            .copied();
        if let Some(sibling) = next_sibling {
            self.push_leftmost_path(sibling);
        }
        // Otherwise the last child is done and the parent, already on top, is current.
    }
}

impl<'a, T, const K: usize> Traversal for PostOrderIterator<'a, T, K> {
    type Value = &'a T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::PostOrder
    }

    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    fn current_value(&self) -> TreeResult<&'a T> {
        self.current_index()
            .and_then(|idx| self.tree.value_of(idx))
            .ok_or_else(|| self.exhausted())
    }

    fn advance(&mut self) -> TreeResult<&mut Self> {
        if !self.has_next() {
            return Err(self.exhausted());
        }
        self.step();
        Ok(self)
    }
}

impl<'a, T, const K: usize> Iterator for PostOrderIterator<'a, T, K> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current_value().ok()?;
        self.step();
        Some(value)
    }
}

impl<T, const K: usize> PartialEq for PostOrderIterator<'_, T, K> {
    fn eq(&self, other: &Self) -> bool {
        // Arena indices repeat across trees
        self.current_index() == other.current_index()
            && (self.current_index().is_none() || ptr::eq(self.tree, other.tree))
    }
}
