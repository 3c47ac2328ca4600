//! Minimum-priority queue of not-yet-expanded items.
//!
//! Equal priorities pop in insertion order, so a search run is reproducible.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// `BinaryHeap` is a max-heap; the key is reversed to pop the lowest
/// `(priority, sequence)` first.
#[derive(Debug)]
struct FrontierEntry<T> {
    key: Reverse<(usize, u64)>,
    item: T,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    next_sequence: u64,
    high_water: usize,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            high_water: 0,
        }
    }

    pub fn insert(&mut self, item: T, priority: usize) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse((priority, sequence)),
            item,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Removes the item with the lowest priority.
    pub fn pop_min(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    /// Priority of the item `pop_min` would return next.
    pub fn min_priority(&self) -> Option<usize> {
        self.heap.peek().map(|entry| entry.key.0 .0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
