use std::ptr;

use generational_arena::Index;
use tracing::instrument;

use super::{Traversal, TraversalOrder};
use crate::domain::error::TreeResult;
use crate::domain::tree::KaryTree;

/// Depth-first scan.
///
/// Same stack discipline as [`super::PreOrderIterator`] and therefore the same node order,
/// but every stack entry also carries its depth, so the scan can report how deep it is.
#[derive(Debug, Clone)]
pub struct DfsIterator<'a, T, const K: usize> {
    tree: &'a KaryTree<T, K>,
    stack: Vec<(Index, usize)>,
}

impl<'a, T, const K: usize> DfsIterator<'a, T, K> {
    pub(crate) fn new(tree: &'a KaryTree<T, K>, root: Option<Index>) -> Self {
        Self {
            tree,
            stack: root.map(|idx| (idx, 0)).into_iter().collect(),
        }
    }

    pub fn current_index(&self) -> Option<Index> {
        self.stack.last().map(|&(idx, _)| idx)
    }

    /// Depth of the node under the cursor.
    pub fn depth(&self) -> Option<usize> {
        self.stack.last().map(|&(_, depth)| depth)
    }

    #[instrument(level = "trace", skip(self))]
    pub(crate) fn step(&mut self) {
        if let Some((idx, depth)) = self.stack.pop() {
            for &child in self.tree.children_of(idx).iter().rev() {
                self.stack.push((child, depth + 1));
            }
        }
    }
}

impl<'a, T, const K: usize> Traversal for DfsIterator<'a, T, K> {
    type Value = &'a T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::Dfs
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

impl<'a, T, const K: usize> Iterator for DfsIterator<'a, T, K> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current_value().ok()?;
        self.step();
        Some(value)
    }
}

impl<T, const K: usize> PartialEq for DfsIterator<'_, T, K> {
    fn eq(&self, other: &Self) -> bool {
        // Arena indices repeat across trees
        self.current_index() == other.current_index()
            && (self.current_index().is_none() || ptr::eq(self.tree, other.tree))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::tree::KaryTree;

    #[test]
    fn test_depths_in_scan_order() {
        let mut tree: KaryTree<i32, 3> = KaryTree::new();
        tree.add_root(1);
        tree.add_sub_node(&1, 2);
        tree.add_sub_node(&1, 3);
        tree.add_sub_node(&2, 4);

        let mut it = tree.begin_dfs_scan();
        let mut depths = Vec::new();
        while let Some(depth) = it.depth() {
            depths.push(depth);
            it.step();
        }
        assert_eq!(depths, vec![0, 1, 2, 1]);
    }
}
