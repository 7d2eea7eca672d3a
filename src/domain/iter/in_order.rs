use std::ptr;

use generational_arena::Index;
use tracing::instrument;

use super::{Traversal, TraversalOrder};
use crate::domain::error::TreeResult;
use crate::domain::tree::KaryTree;

/// Left subtree, node, right subtree.
///
/// Only reachable for binary trees: the public factories exist on `KaryTree<T, 2>` alone.
/// The first child is the left one, so a node with a single child has an empty right subtree.
#[derive(Debug, Clone)]
pub struct InOrderIterator<'a, T, const K: usize> {
    tree: &'a KaryTree<T, K>,
    stack: Vec<Index>,
}

impl<'a, T, const K: usize> InOrderIterator<'a, T, K> {
    pub(crate) fn new(tree: &'a KaryTree<T, K>, root: Option<Index>) -> Self {
        let mut walk = Self {
            tree,
            stack: Vec::new(),
        };
        walk.push_left(root);
        walk
    }

    fn push_left(&mut self, mut node: Option<Index>) {
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
        if let Some(done) = self.stack.pop() {
            let right = self.tree.children_of(done).get(1).copied();
            self.push_left(right);
        }
    }
}

impl<'a, T, const K: usize> Traversal for InOrderIterator<'a, T, K> {
    type Value = &'a T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::InOrder
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

impl<'a, T, const K: usize> Iterator for InOrderIterator<'a, T, K> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current_value().ok()?;
        self.step();
        Some(value)
    }
}

impl<T, const K: usize> PartialEq for InOrderIterator<'_, T, K> {
    fn eq(&self, other: &Self) -> bool {
        // Arena indices repeat across trees
        self.current_index() == other.current_index()
            && (self.current_index().is_none() || ptr::eq(self.tree, other.tree))
    }
}
