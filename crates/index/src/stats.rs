//! Tree statistics for Arbor indexes.
//!
//! This module provides statistics tracking for the B-tree.

use core::sync::atomic::{AtomicUsize, Ordering};

/// Statistics for a B-tree.
#[derive(Debug)]
pub struct TreeStats {
    /// Total number of keys currently stored.
    total_keys: AtomicUsize,
    /// Number of node splits performed over the tree's lifetime.
    node_splits: AtomicUsize,
}

impl TreeStats {
    /// Creates a new empty stats instance.
    pub fn new() -> Self {
        Self {
            total_keys: AtomicUsize::new(0),
            node_splits: AtomicUsize::new(0),
        }
    }

    /// Creates stats with initial values.
    pub fn with_values(total_keys: usize, node_splits: usize) -> Self {
        Self {
            total_keys: AtomicUsize::new(total_keys),
            node_splits: AtomicUsize::new(node_splits),
        }
    }

    /// Returns the total number of keys.
    pub fn total_keys(&self) -> usize {
        self.total_keys.load(Ordering::Relaxed)
    }

    /// Returns the number of node splits performed.
    pub fn node_splits(&self) -> usize {
        self.node_splits.load(Ordering::Relaxed)
    }

    /// Increments the key count by the given amount.
    pub fn add_keys(&self, count: usize) {
        self.total_keys.fetch_add(count, Ordering::Relaxed);
    }

    /// Increments the split count by one.
    pub fn add_split(&self) {
        self.node_splits.fetch_add(1, Ordering::Relaxed);
    }

    /// Resets the key count to zero.
    pub fn clear(&self) {
        self.total_keys.store(0, Ordering::Relaxed);
    }
}

impl Default for TreeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TreeStats {
    fn clone(&self) -> Self {
        Self {
            total_keys: AtomicUsize::new(self.total_keys.load(Ordering::Relaxed)),
            node_splits: AtomicUsize::new(self.node_splits.load(Ordering::Relaxed)),
        }
    }
}
