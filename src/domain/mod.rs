//! Domain layer: the K-ary tree and its traversals
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod iter;
pub mod node;
pub mod tree;

pub use generational_arena::Index;

pub use error::{TreeError, TreeResult};
pub use iter::{
    BfsIterator, DfsIterator, HeapIterator, InOrderIterator, PostOrderIterator, PreOrderIterator,
    Traversal, TraversalOrder,
};
pub use node::Node;
pub use tree::{BinaryTree, KaryTree};
