//! Text rendering of a tree.
//!
//! A read-only observer: it only looks at `root()` and each node's `children()`.

use generational_arena::Index;
use std::fmt;
use termtree::Tree;
use tracing::instrument;

use crate::domain::KaryTree;

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: fmt::Display, const K: usize> TreeDisplay for KaryTree<T, K> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree<T: fmt::Display, const K: usize>(
            tree: &KaryTree<T, K>,
            node_idx: Index,
            parent_tree: &mut Tree<String>,
        ) {
            if let Some(node) = tree.get_node(node_idx) {
                for &child_idx in node.children() {
                    if let Some(child) = tree.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.value().to_string());
                        build_tree(tree, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        match self.root().and_then(|idx| Some((idx, self.get_node(idx)?))) {
            Some((root_idx, root)) => {
                let mut rendered = Tree::new(root.value().to_string());
                build_tree(self, root_idx, &mut rendered);
                rendered
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

impl<T: fmt::Display, const K: usize> fmt::Display for KaryTree<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
