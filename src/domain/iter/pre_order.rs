use std::ptr;

use generational_arena::Index;
use tracing::instrument;

use super::{Traversal, TraversalOrder};
use crate::domain::error::TreeResult;
use crate::domain::tree::KaryTree;

/// Parent first, then each subtree left to right.
///
/// The current node is the top of the stack. Advancing pops it and pushes its children in
/// reverse so the leftmost child surfaces next.
#[derive(Debug, Clone)]
pub struct PreOrderIterator<'a, T, const K: usize> {
    tree: &'a KaryTree<T, K>,
    stack: Vec<Index>,
}

impl<'a, T, const K: usize> PreOrderIterator<'a, T, K> {
    pub(crate) fn new(tree: &'a KaryTree<T, K>, root: Option<Index>) -> Self {
        Self {
            tree,
            stack: root.into_iter().collect(),
        }
    }

    /// Arena index of the node under the cursor.
    pub fn current_index(&self) -> Option<Index> {
        self.stack.last().copied()
    }

    #[instrument(level = "trace", skip(self))]
    pub(crate) fn step(&mut self) {
        if let Some(current_idx) = self.stack.pop() {
            // Push children in reverse order for left-to-right traversal
            self.stack
                .extend(self.tree.children_of(current_idx).iter().rev().copied());
        }
    }
}

impl<'a, T, const K: usize> Traversal for PreOrderIterator<'a, T, K> {
    type Value = &'a T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::PreOrder
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

impl<'a, T, const K: usize> Iterator for PreOrderIterator<'a, T, K> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current_value().ok()?;
        self.step();
        Some(value)
    }
}

impl<T, const K: usize> PartialEq for PreOrderIterator<'_, T, K> {
    fn eq(&self, other: &Self) -> bool {
        // Arena indices repeat across trees
        self.current_index() == other.current_index()
            && (self.current_index().is_none() || ptr::eq(self.tree, other.tree))
    }
}
