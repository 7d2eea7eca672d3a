use std::collections::VecDeque;
use std::ptr;

use generational_arena::Index;
use tracing::instrument;

use super::{Traversal, TraversalOrder};
use crate::domain::error::TreeResult;
use crate::domain::tree::KaryTree;

/// Level by level, left to right within a level.
///
/// Each queue entry is a pair (node, depth), the root sitting at depth 0.
#[derive(Debug, Clone)]
pub struct BfsIterator<'a, T, const K: usize> {
    tree: &'a KaryTree<T, K>,
    queue: VecDeque<(Index, usize)>,
}

impl<'a, T, const K: usize> BfsIterator<'a, T, K> {
    pub(crate) fn new(tree: &'a KaryTree<T, K>, root: Option<Index>) -> Self {
        Self {
            tree,
            queue: root.map(|idx| (idx, 0)).into_iter().collect(),
        }
    }

    pub fn current_index(&self) -> Option<Index> {
        self.queue.front().map(|&(idx, _)| idx)
    }

    /// Depth of the node under the cursor.
    pub fn depth(&self) -> Option<usize> {
        self.queue.front().map(|&(_, depth)| depth)
    }

    #[instrument(level = "trace", skip(self))]
    pub(crate) fn step(&mut self) {
        if let Some((idx, depth)) = self.queue.pop_front() {
            for &child in self.tree.children_of(idx) {
                self.queue.push_back((child, depth + 1));
            }
        }
    }
}

impl<'a, T, const K: usize> Traversal for BfsIterator<'a, T, K> {
    type Value = &'a T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::Bfs
    }

    fn has_next(&self) -> bool {
        !self.queue.is_empty()
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

impl<'a, T, const K: usize> Iterator for BfsIterator<'a, T, K> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current_value().ok()?;
        self.step();
        Some(value)
    }
}

impl<T, const K: usize> PartialEq for BfsIterator<'_, T, K> {
    fn eq(&self, other: &Self) -> bool {
        // Arena indices repeat across trees
        self.current_index() == other.current_index()
            && (self.current_index().is_none() || ptr::eq(self.tree, other.tree))
    }
}
