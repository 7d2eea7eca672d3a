use generational_arena::Index;

/// Tree node in the arena-backed K-ary tree.
///
/// A node owns its value and the ordered indices of its children. The tree owns the nodes
/// themselves, so a child index is only meaningful together with the tree that issued it.
#[derive(Debug, Clone)]
pub struct Node<T, const K: usize> {
    /// Payload, fixed at creation
    value: T,
    /// Index of parent node in the arena, None for the root
    parent: Option<Index>,
    /// Indices of child nodes in the arena, never more than K
    children: Vec<Index>,
}

impl<T, const K: usize> Node<T, K> {
    pub(crate) fn new(value: T, parent: Option<Index>) -> Self {
        Self {
            value,
            parent,
            children: Vec::with_capacity(K),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    /// Child indices, left to right.
    pub fn children(&self) -> &[Index] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.children.len() >= K
    }

    /// Appends a child if the node still has room for it.
    ///
    /// Returns `false` and leaves the node untouched when it already holds K children.
    pub(crate) fn add_child(&mut self, child: Index) -> bool {
        if self.is_full() {
            return false;
        }
        self.children.push(child);
        true
    }
}
