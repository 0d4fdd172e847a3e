//! B-tree implementation.

use super::iter::Keys;
use super::node::{Node, NodeId};
use crate::stats::TreeStats;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use arbor_core::{Error, Key, Result};

/// Smallest minimum degree the tree accepts.
/// Below t = 2 a split cannot leave both halves non-empty.
pub const MIN_DEGREE: usize = 2;

/// Default minimum degree for the B-tree.
/// Sized for L1 cache residency (63 keys * 8 bytes = 504 bytes per node).
pub const DEFAULT_MIN_DEGREE: usize = 32;

/// An in-memory B-tree over scalar keys.
///
/// Nodes live in an arena and refer to each other by index. Every node
/// except the root stays between `t - 1` and `2t - 1` keys, all leaves sit
/// at the same depth, and insertion splits any full node on the way down,
/// so a split never has to propagate back up. Duplicate keys are accepted
/// and kept.
#[derive(Debug)]
pub struct BTree {
    /// Arena of all nodes.
    arena: Vec<Node>,
    /// Root node ID, or None while the tree is empty.
    root: Option<NodeId>,
    /// Minimum degree `t`, fixed at construction.
    min_degree: usize,
    /// Statistics for this tree.
    stats: TreeStats,
}

impl BTree {
    /// Creates an empty B-tree with the given minimum degree.
    ///
    /// Degrees below [`MIN_DEGREE`] are rejected.
    pub fn new(min_degree: usize) -> Result<Self> {
        if min_degree < MIN_DEGREE {
            return Err(Error::invalid_degree(min_degree));
        }

        Ok(Self {
            arena: Vec::new(),
            root: None,
            min_degree,
            stats: TreeStats::new(),
        })
    }

    /// Returns the minimum degree of this tree.
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Returns the statistics for this tree.
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    /// Returns the number of keys in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.stats.total_keys()
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocates a new node in the arena and returns its ID.
    fn alloc_node(arena: &mut Vec<Node>, node: Node) -> NodeId {
        let id = arena.len();
        arena.push(node);
        id
    }

    /// Inserts a key into the tree.
    ///
    /// A full root is split before the descent starts; that is the only
    /// point where the tree gains a level. Inserting a key equal to one
    /// already present keeps both copies.
    pub fn insert(&mut self, key: Key) {
        let t = self.min_degree;

        match self.root {
            None => {
                let mut leaf = Node::new_leaf(t);
                leaf.keys.push(key);
                self.root = Some(Self::alloc_node(&mut self.arena, leaf));
            }
            Some(root_id) if self.arena[root_id].is_full(t) => {
                // Grow upward: the old root becomes the single child of a
                // fresh internal root, then splits into it.
                let mut new_root = Node::new_internal(t);
                new_root.children.push(root_id);
                let new_root_id = Self::alloc_node(&mut self.arena, new_root);
                self.split_child(new_root_id, 0);
                self.root = Some(new_root_id);

                let child_index = if self.arena[new_root_id].keys[0] < key {
                    1
                } else {
                    0
                };
                let child_id = self.arena[new_root_id].children[child_index];
                self.insert_non_full(child_id, key);
            }
            Some(root_id) => self.insert_non_full(root_id, key),
        }

        self.stats.add_keys(1);
    }

    /// Inserts a key into the subtree rooted at a node that is not full.
    ///
    /// Any full child on the descent path is split before the walk moves
    /// into it, so every node reached here has room for one more key.
    fn insert_non_full(&mut self, mut node_id: NodeId, key: Key) {
        let t = self.min_degree;

        loop {
            debug_assert!(!self.arena[node_id].is_full(t));

            if self.arena[node_id].is_leaf {
                self.arena[node_id].insert_into_leaf(key);
                return;
            }

            let mut child_index = self.arena[node_id].insert_position(key);
            let child_id = self.arena[node_id].children[child_index];
            if self.arena[child_id].is_full(t) {
                self.split_child(node_id, child_index);
                // The split left a new separator at child_index. Step
                // right only when it orders strictly below the key; a
                // key equal to the separator descends into the left half.
                if self.arena[node_id].keys[child_index] < key {
                    child_index += 1;
                }
            }
            node_id = self.arena[node_id].children[child_index];
        }
    }

    /// Splits the full child at `child_index` of `parent_id`.
    ///
    /// The child keeps its lower `t - 1` keys, a fresh right sibling takes
    /// the upper `t - 1` (plus the upper `t` child links for internal
    /// nodes), and the median key moves up into the parent at
    /// `child_index`. Both halves end at the minimum fill.
    fn split_child(&mut self, parent_id: NodeId, child_index: usize) {
        let t = self.min_degree;
        let child_id = self.arena[parent_id].children[child_index];

        debug_assert!(!self.arena[parent_id].is_full(t));
        debug_assert!(self.arena[child_id].is_full(t));

        let child = &mut self.arena[child_id];
        let median = child.keys[t - 1];

        let mut sibling = if child.is_leaf {
            Node::new_leaf(t)
        } else {
            Node::new_internal(t)
        };
        sibling.keys.extend(child.keys.drain(t..));
        if !child.is_leaf {
            sibling.children.extend(child.children.drain(t..));
        }
        child.keys.truncate(t - 1);

        let sibling_id = Self::alloc_node(&mut self.arena, sibling);
        let parent = &mut self.arena[parent_id];
        parent.keys.insert(child_index, median);
        parent.children.insert(child_index + 1, sibling_id);

        self.stats.add_split();
    }

    /// Returns true if the key is present in the tree.
    pub fn contains(&self, key: Key) -> bool {
        let mut current = match self.root {
            Some(id) => id,
            None => return false,
        };

        loop {
            let node = &self.arena[current];
            let pos = node.search_position(key);
            if pos < node.key_count() && node.keys[pos] == key {
                return true;
            }
            if node.is_leaf {
                return false;
            }
            current = node.children[pos];
        }
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn iter(&self) -> Keys<'_> {
        Keys::new(&self.arena, self.root)
    }

    /// Returns the smallest key, or None if the tree is empty.
    pub fn min(&self) -> Option<Key> {
        let mut current = self.root?;
        loop {
            let node = &self.arena[current];
            if node.is_leaf {
                return node.keys.first().copied();
            }
            current = node.children[0];
        }
    }

    /// Returns the largest key, or None if the tree is empty.
    pub fn max(&self) -> Option<Key> {
        let mut current = self.root?;
        loop {
            let node = &self.arena[current];
            if node.is_leaf {
                return node.keys.last().copied();
            }
            current = node.children[node.key_count()];
        }
    }

    /// Returns the number of levels on the path from the root to a leaf.
    ///
    /// All leaves sit at the same depth, so the leftmost walk measures the
    /// whole tree. The empty tree has height 0, a lone root leaf height 1.
    pub fn height(&self) -> usize {
        let mut current = match self.root {
            Some(id) => id,
            None => return 0,
        };

        let mut levels = 0;
        loop {
            levels += 1;
            let node = &self.arena[current];
            if node.is_leaf {
                return levels;
            }
            current = node.children[0];
        }
    }

    /// Removes every key, dropping all nodes at once.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.stats.clear();
    }

    /// Verifies the structural invariants, returning true when they hold.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Verifies the structural invariants, describing the first violation.
    ///
    /// Checked per node: key ordering, separator bounds inherited from the
    /// parent, fill between `t - 1` and `2t - 1` keys (root exempt from
    /// the minimum), child count, and a uniform leaf depth. The walk also
    /// cross-checks the key total against the stats counter.
    pub fn check_invariants_detailed(&self) -> core::result::Result<(), String> {
        let root_id = match self.root {
            Some(id) => id,
            None => {
                if self.len() != 0 {
                    return Err(format!(
                        "Tree has no root but stats report {} keys",
                        self.len()
                    ));
                }
                return Ok(());
            }
        };

        let mut state = ValidationState {
            total_keys: 0,
            leaf_depth: None,
        };
        self.validate_node(root_id, None, None, 1, true, &mut state)?;

        if state.total_keys != self.len() {
            return Err(format!(
                "Key count mismatch: counted {} but stats report {}",
                state.total_keys,
                self.len()
            ));
        }

        Ok(())
    }

    /// Validates one node and recurses into its children.
    ///
    /// Separator bounds are inclusive on both sides: a duplicate may sit
    /// flush against a separator in either subtree.
    fn validate_node(
        &self,
        node_id: NodeId,
        lower: Option<Key>,
        upper: Option<Key>,
        depth: usize,
        is_root: bool,
        state: &mut ValidationState,
    ) -> core::result::Result<(), String> {
        let t = self.min_degree;
        let node = self
            .arena
            .get(node_id)
            .ok_or_else(|| format!("Node {} is out of arena bounds", node_id))?;
        let n = node.key_count();

        let min_keys = if is_root { 1 } else { t - 1 };
        if n < min_keys {
            return Err(format!(
                "Node {}: expected at least {} keys, found {}",
                node_id, min_keys, n
            ));
        }
        if n > 2 * t - 1 {
            return Err(format!(
                "Node {}: expected at most {} keys, found {}",
                node_id,
                2 * t - 1,
                n
            ));
        }

        for i in 1..n {
            if node.keys[i - 1] > node.keys[i] {
                return Err(format!(
                    "Node {}: keys out of order at index {} ({} > {})",
                    node_id,
                    i,
                    node.keys[i - 1],
                    node.keys[i]
                ));
            }
        }

        if let Some(bound) = lower {
            if node.keys[0] < bound {
                return Err(format!(
                    "Node {}: key {} below separator bound {}",
                    node_id, node.keys[0], bound
                ));
            }
        }
        if let Some(bound) = upper {
            if node.keys[n - 1] > bound {
                return Err(format!(
                    "Node {}: key {} above separator bound {}",
                    node_id,
                    node.keys[n - 1],
                    bound
                ));
            }
        }

        state.total_keys += n;

        if node.is_leaf {
            if !node.children.is_empty() {
                return Err(format!("Leaf {} has children", node_id));
            }
            match state.leaf_depth {
                None => state.leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(format!(
                        "Leaf {} at depth {} but earlier leaves at depth {}",
                        node_id, depth, expected
                    ));
                }
                Some(_) => {}
            }
            return Ok(());
        }

        if node.children.len() != n + 1 {
            return Err(format!(
                "Node {}: {} keys require {} children, found {}",
                node_id,
                n,
                n + 1,
                node.children.len()
            ));
        }

        for i in 0..=n {
            let child_lower = if i == 0 { lower } else { Some(node.keys[i - 1]) };
            let child_upper = if i == n { upper } else { Some(node.keys[i]) };
            self.validate_node(
                node.children[i],
                child_lower,
                child_upper,
                depth + 1,
                false,
                state,
            )?;
        }

        Ok(())
    }
}

/// Running totals for an invariant validation walk.
struct ValidationState {
    /// Keys counted so far.
    total_keys: usize,
    /// Depth of the first leaf reached; every other leaf must match.
    leaf_depth: Option<usize>,
}
