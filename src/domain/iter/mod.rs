//! Traversal state machines.
//!
//! Every walk is an explicit stack or queue automaton instead of a recursive function. Each
//! iterator is single-pass and forward-only, and can be compared against the matching
//! `end_*` iterator of its tree to detect exhaustion. All of them also implement
//! [`Iterator`], which is the usual way to drive them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::{TreeError, TreeResult};

mod bfs;
mod dfs;
mod heap;
mod in_order;
mod post_order;
mod pre_order;

pub use bfs::BfsIterator;
pub use dfs::DfsIterator;
pub use heap::HeapIterator;
pub use in_order::InOrderIterator;
pub use post_order::PostOrderIterator;
pub use pre_order::PreOrderIterator;

/// Names the six traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    PreOrder,
    PostOrder,
    InOrder,
    Bfs,
    Dfs,
    Heap,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 6] = [
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::InOrder,
        TraversalOrder::Bfs,
        TraversalOrder::Dfs,
        TraversalOrder::Heap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalOrder::PreOrder => "pre-order",
            TraversalOrder::PostOrder => "post-order",
            TraversalOrder::InOrder => "in-order",
            TraversalOrder::Bfs => "bfs",
            TraversalOrder::Dfs => "dfs",
            TraversalOrder::Heap => "heap",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalOrder {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        TraversalOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == wanted)
            .ok_or_else(|| TreeError::UnknownOrder(s.to_string()))
    }
}

/// Cursor-style access shared by all traversals.
///
/// `current_value` and `advance` fail with [`TreeError::TraversalExhausted`] once the walk is
/// over instead of handing out stale data.
pub trait Traversal {
    type Value;

    fn order(&self) -> TraversalOrder;

    /// True while the cursor still points at a value, i.e. while not equal to the end iterator.
    fn has_next(&self) -> bool;

    fn current_value(&self) -> TreeResult<Self::Value>;

    /// Moves the cursor to the next value.
    fn advance(&mut self) -> TreeResult<&mut Self>;

    fn exhausted(&self) -> TreeError {
        TreeError::TraversalExhausted {
            order: self.order(),
        }
    }
}
