//! Arity-bounded K-ary trees with explicit, resumable traversals.
//!
//! ```
//! use karytree::domain::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! tree.add_root(8);
//! tree.add_sub_node(&8, 13);
//! tree.add_sub_node(&8, 5);
//!
//! let pre: Vec<i32> = tree.iter_pre_order().copied().collect();
//! assert_eq!(pre, vec![8, 13, 5]);
//! let sorted: Vec<i32> = tree.iter_heap().collect();
//! assert_eq!(sorted, vec![5, 8, 13]);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod render;
pub mod util;

pub use domain::{BinaryTree, KaryTree, Traversal, TraversalOrder, TreeError, TreeResult};
