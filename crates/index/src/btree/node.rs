//! B-tree node definitions.

use alloc::vec::Vec;
use arbor_core::Key;

/// Node identifier in the B-tree arena.
pub type NodeId = usize;

/// A node in the B-tree.
///
/// A node with `n` keys is either a leaf or an internal node with exactly
/// `n + 1` children, where the subtree under `children[i]` holds keys
/// ordering no higher than `keys[i]` and the subtree under
/// `children[i + 1]` holds keys ordering no lower. The tree's minimum
/// degree `t` fixes the capacity at `2t - 1` keys and `2t` children.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// Keys stored in this node, in ascending order.
    pub(crate) keys: Vec<Key>,
    /// For internal nodes: child node IDs.
    /// For leaf nodes: empty.
    pub(crate) children: Vec<NodeId>,
    /// Whether this is a leaf node.
    pub(crate) is_leaf: bool,
}

impl Node {
    /// Creates a new leaf node with storage reserved for `2t - 1` keys.
    pub(crate) fn new_leaf(t: usize) -> Self {
        Self {
            keys: Vec::with_capacity(2 * t - 1),
            children: Vec::new(),
            is_leaf: true,
        }
    }

    /// Creates a new internal node with storage reserved for `2t - 1` keys
    /// and `2t` children.
    pub(crate) fn new_internal(t: usize) -> Self {
        Self {
            keys: Vec::with_capacity(2 * t - 1),
            children: Vec::with_capacity(2 * t),
            is_leaf: false,
        }
    }

    /// Returns the number of keys in this node.
    pub(crate) fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds the maximum `2t - 1` keys.
    pub(crate) fn is_full(&self, t: usize) -> bool {
        self.keys.len() == 2 * t - 1
    }

    /// Finds the position of the first key not less than `key`.
    ///
    /// An exact match, if this node has one, sits at this position.
    pub(crate) fn search_position(&self, key: Key) -> usize {
        self.keys.partition_point(|&k| k < key)
    }

    /// Finds the position of the first key strictly greater than `key`.
    ///
    /// This is where a new copy of `key` belongs in a leaf, so duplicates
    /// land to the right of their equals. For internal nodes the same
    /// position doubles as the descent child index.
    pub(crate) fn insert_position(&self, key: Key) -> usize {
        self.keys.partition_point(|&k| k <= key)
    }

    /// Inserts a key into a leaf node at its insert position.
    pub(crate) fn insert_into_leaf(&mut self, key: Key) {
        debug_assert!(self.is_leaf);
        let pos = self.insert_position(key);
        self.keys.insert(pos, key);
    }
}
