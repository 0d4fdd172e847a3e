//! B-tree iterator implementation.

use super::node::{Node, NodeId};
use alloc::vec::Vec;
use arbor_core::Key;

/// Iterator over the keys of a B-tree in ascending order.
///
/// The walk keeps an explicit stack of `(node, key index)` frames instead
/// of recursing. A frame records that every key of the node left of the
/// index, and the subtrees between them, have already been yielded.
/// Pushing the left spine of each entered subtree eagerly keeps the
/// smallest unvisited key in the top frame.
pub struct Keys<'a> {
    /// Reference to the arena of nodes.
    arena: &'a [Node],
    /// Stack of (node ID, next key index) frames.
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Keys<'a> {
    /// Creates an iterator over the subtree rooted at `root`.
    pub(crate) fn new(arena: &'a [Node], root: Option<NodeId>) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
        };
        if let Some(root_id) = root {
            iter.push_left_spine(root_id);
        }
        iter
    }

    /// Pushes frames for `node_id` and every leftmost descendant below it.
    fn push_left_spine(&mut self, mut node_id: NodeId) {
        loop {
            self.stack.push((node_id, 0));
            let node = &self.arena[node_id];
            if node.is_leaf {
                return;
            }
            node_id = node.children[0];
        }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let arena = self.arena;
        loop {
            let frame = self.stack.last_mut()?;
            let (node_id, index) = *frame;
            let node = &arena[node_id];

            if index >= node.key_count() {
                self.stack.pop();
                continue;
            }

            frame.1 = index + 1;
            if !node.is_leaf {
                // The subtree right of keys[index] comes after the key
                // itself; queue its left spine above this frame.
                self.push_left_spine(node.children[index + 1]);
            }
            return Some(node.keys[index]);
        }
    }
}
