use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{Traversal, TraversalOrder};
use crate::domain::error::TreeResult;

/// Ascending enumeration of all node values.
///
/// Unlike the other traversals this one is not lazy over the tree: construction clones every
/// value into a min-heap, so the iterator owns a snapshot and outlives any later change to the
/// tree it came from.
#[derive(Debug, Clone)]
pub struct HeapIterator<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> HeapIterator<T> {
    pub(crate) fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            heap: values.into_iter().map(Reverse).collect(),
        }
    }

    /// The current minimum, borrowed.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(value)| value)
    }

    pub fn is_not_empty(&self) -> bool {
        !self.heap.is_empty()
    }

    /// Values still to be produced, the current one included.
    pub fn remaining(&self) -> usize {
        self.heap.len()
    }
}

impl<T: Ord + Clone> Traversal for HeapIterator<T> {
    type Value = T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::Heap
    }

    fn has_next(&self) -> bool {
        self.is_not_empty()
    }

    fn current_value(&self) -> TreeResult<T> {
        self.peek().cloned().ok_or_else(|| self.exhausted())
    }

    fn advance(&mut self) -> TreeResult<&mut Self> {
        match self.heap.pop() {
            Some(_) => Ok(self),
            None => Err(self.exhausted()),
        }
    }
}

impl<T: Ord> Iterator for HeapIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T: Ord> ExactSizeIterator for HeapIterator<T> {}

impl<T: Ord> PartialEq for HeapIterator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining() && self.peek() == other.peek()
    }
}
