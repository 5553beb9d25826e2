//! Ready queue for the fragment renderer.
//!
//! Holds commits whose children have all been printed, popping the most
//! recent commit first and breaking timestamp ties by the smaller hash, so
//! output is reproducible on an unchanged repository.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Ordering key for ready commits. Greater means printed earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Priority {
    pub timestamp: i64,
    pub hash: String,
}

impl Priority {
    pub fn new(timestamp: i64, hash: &str) -> Self {
        Self {
            timestamp,
            hash: hash.to_string(),
        }
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| other.hash.cmp(&self.hash))
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Entry {
    priority: Priority,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-heap of graph indices keyed by `Priority`.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    heap: BinaryHeap<Entry>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, idx: usize, priority: Priority) {
        self.heap.push(Entry { priority, idx });
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.idx)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
