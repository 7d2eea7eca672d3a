//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::iter::TraversalOrder;

/// Domain errors represent violations of the tree's structural contracts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("parent node not found: {0}")]
    ParentNotFound(String),

    #[error("node {parent} already holds the maximum of {arity} children")]
    ArityExceeded { parent: String, arity: usize },

    #[error("{order} traversal is exhausted")]
    TraversalExhausted { order: TraversalOrder },

    #[error("in-order traversal requires a binary tree, arity is {arity}")]
    InOrderRequiresBinary { arity: usize },

    #[error("unknown traversal order: {0}")]
    UnknownOrder(String),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
