use generational_arena::{Arena, Index};
use std::fmt;
use tracing::{debug, instrument};

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::iter::{
    BfsIterator, DfsIterator, HeapIterator, InOrderIterator, PostOrderIterator, PreOrderIterator,
    TraversalOrder,
};
use crate::domain::node::Node;

/// Arena-based K-ary tree.
///
/// The tree owns every node; parents refer to their children by arena index, so there are no
/// ownership cycles and no reference counting. `K` bounds the number of children per node.
///
/// Nodes are only created through [`KaryTree::add_root`] and [`KaryTree::add_sub_node`], both of
/// which move the given value into a fresh tree-owned node. Nothing is ever removed except by
/// [`KaryTree::clear`] or by replacing the root.
#[derive(Debug, Clone)]
pub struct KaryTree<T, const K: usize> {
    /// Arena storage for all tree nodes
    arena: Arena<Node<T, K>>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

/// The binary case, the only arity with an in-order traversal.
pub type BinaryTree<T> = KaryTree<T, 2>;

impl<T, const K: usize> Default for KaryTree<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const K: usize> KaryTree<T, K> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Maximum number of children any node may hold.
    pub fn arity(&self) -> usize {
        K
    }

    /// Installs a new root, releasing the previous graph.
    #[instrument(level = "trace", skip_all)]
    pub fn add_root(&mut self, value: T) -> Index {
        self.clear();
        let idx = self.arena.insert(Node::new(value, None));
        self.root = Some(idx);
        idx
    }

    /// Releases every node.
    #[instrument(level = "trace", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&Node<T, K>> {
        self.arena.get(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn value_of(&self, idx: Index) -> Option<&T> {
        self.arena.get(idx).map(Node::value)
    }

    pub(crate) fn children_of(&self, idx: Index) -> &[Index] {
        self.arena.get(idx).map_or(&[][..], |node| node.children())
    }

    fn attach(&mut self, parent_idx: Index, value: T) -> Option<Index> {
        let child_idx = self.arena.insert(Node::new(value, Some(parent_idx)));
        let accepted = self
            .arena
            .get_mut(parent_idx)
            .is_some_and(|parent| parent.add_child(child_idx));
        if accepted {
            Some(child_idx)
        } else {
            self.arena.remove(child_idx);
            None
        }
    }

    /// Number of levels, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut bfs = self.begin_bfs_scan();
        let mut max_depth = 0;
        while let Some(depth) = bfs.depth() {
            max_depth = max_depth.max(depth + 1);
            bfs.step();
        }
        max_depth
    }

    /// Values of all leaves, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self) -> Vec<&T> {
        let mut leaves = Vec::new();
        let mut walk = self.begin_pre_order();
        while let Some(idx) = walk.current_index() {
            if let Some(node) = self.get_node(idx) {
                if node.is_leaf() {
                    leaves.push(node.value());
                }
            }
            walk.step();
        }
        leaves
    }

    pub fn begin_pre_order(&self) -> PreOrderIterator<'_, T, K> {
        PreOrderIterator::new(self, self.root)
    }

    pub fn end_pre_order(&self) -> PreOrderIterator<'_, T, K> {
        PreOrderIterator::new(self, None)
    }

    pub fn begin_post_order(&self) -> PostOrderIterator<'_, T, K> {
        PostOrderIterator::new(self, self.root)
    }

    pub fn end_post_order(&self) -> PostOrderIterator<'_, T, K> {
        PostOrderIterator::new(self, None)
    }

    pub fn begin_bfs_scan(&self) -> BfsIterator<'_, T, K> {
        BfsIterator::new(self, self.root)
    }

    pub fn end_bfs_scan(&self) -> BfsIterator<'_, T, K> {
        BfsIterator::new(self, None)
    }

    pub fn begin_dfs_scan(&self) -> DfsIterator<'_, T, K> {
        DfsIterator::new(self, self.root)
    }

    pub fn end_dfs_scan(&self) -> DfsIterator<'_, T, K> {
        DfsIterator::new(self, None)
    }

    pub fn iter_pre_order(&self) -> PreOrderIterator<'_, T, K> {
        self.begin_pre_order()
    }

    pub fn iter_post_order(&self) -> PostOrderIterator<'_, T, K> {
        self.begin_post_order()
    }

    pub fn iter_bfs(&self) -> BfsIterator<'_, T, K> {
        self.begin_bfs_scan()
    }

    pub fn iter_dfs(&self) -> DfsIterator<'_, T, K> {
        self.begin_dfs_scan()
    }
}

impl<T: PartialEq, const K: usize> KaryTree<T, K> {
    /// Index of the first node, in pre-order, whose value equals `value`.
    #[instrument(level = "trace", skip_all)]
    pub fn find(&self, value: &T) -> Option<Index> {
        let mut walk = self.begin_pre_order();
        while let Some(idx) = walk.current_index() {
            if self.value_of(idx) == Some(value) {
                return Some(idx);
            }
            walk.step();
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Attaches `child` under the node holding `parent`.
    ///
    /// When several nodes hold a value equal to `parent`, the first one met in pre-order from
    /// the root receives the child; callers must not assume any other node is targeted.
    /// A missing parent, or a parent that already has K children, makes this a no-op.
    /// Use [`KaryTree::try_add_sub_node`] to be told about either case.
    #[instrument(level = "trace", skip_all)]
    pub fn add_sub_node(&mut self, parent: &T, child: T) {
        match self.find(parent) {
            Some(parent_idx) => {
                if self.attach(parent_idx, child).is_none() {
                    debug!(arity = K, "parent is full, child dropped");
                }
            }
            None => debug!("parent not found, child dropped"),
        }
    }
}

impl<T: PartialEq + fmt::Debug, const K: usize> KaryTree<T, K> {
    /// Strict variant of [`KaryTree::add_sub_node`], same lookup rule.
    #[instrument(level = "trace", skip(self))]
    pub fn try_add_sub_node(&mut self, parent: &T, child: T) -> TreeResult<Index> {
        let parent_idx = self
            .find(parent)
            .ok_or_else(|| TreeError::ParentNotFound(format!("{parent:?}")))?;
        self.attach(parent_idx, child)
            .ok_or_else(|| TreeError::ArityExceeded {
                parent: format!("{parent:?}"),
                arity: K,
            })
    }
}

impl<T: Ord + Clone, const K: usize> KaryTree<T, K> {
    pub fn begin_heap(&self) -> HeapIterator<T> {
        HeapIterator::new(self.begin_pre_order().cloned())
    }

    pub fn end_heap(&self) -> HeapIterator<T> {
        HeapIterator::new(std::iter::empty())
    }

    pub fn iter_heap(&self) -> HeapIterator<T> {
        self.begin_heap()
    }

    /// Collects every value in the given order.
    ///
    /// In-order is only defined for binary trees; any other arity yields
    /// [`TreeError::InOrderRequiresBinary`].
    #[instrument(level = "debug", skip(self))]
    pub fn traverse(&self, order: TraversalOrder) -> TreeResult<Vec<T>> {
        let values = match order {
            TraversalOrder::PreOrder => self.iter_pre_order().cloned().collect(),
            TraversalOrder::PostOrder => self.iter_post_order().cloned().collect(),
            TraversalOrder::InOrder => {
                if K != 2 {
                    return Err(TreeError::InOrderRequiresBinary { arity: K });
                }
                InOrderIterator::new(self, self.root).cloned().collect()
            }
            TraversalOrder::Bfs => self.iter_bfs().cloned().collect(),
            TraversalOrder::Dfs => self.iter_dfs().cloned().collect(),
            TraversalOrder::Heap => self.iter_heap().collect(),
        };
        Ok(values)
    }
}

impl<T> KaryTree<T, 2> {
    pub fn begin_in_order(&self) -> InOrderIterator<'_, T, 2> {
        InOrderIterator::new(self, self.root)
    }

    pub fn end_in_order(&self) -> InOrderIterator<'_, T, 2> {
        InOrderIterator::new(self, None)
    }

    pub fn iter_in_order(&self) -> InOrderIterator<'_, T, 2> {
        self.begin_in_order()
    }
}

/// Iterating a tree by reference walks it breadth-first.
impl<'a, T, const K: usize> IntoIterator for &'a KaryTree<T, K> {
    type Item = &'a T;
    type IntoIter = BfsIterator<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin_bfs_scan()
    }
}
