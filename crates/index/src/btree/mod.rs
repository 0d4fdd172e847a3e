//! B-tree index implementation for Arbor.
//!
//! This module provides the classic B-tree: keys live in every node, and
//! insertion splits full nodes preemptively on the way down.

mod iter;
mod node;
mod tree;

pub use iter::Keys;
pub use tree::{BTree, DEFAULT_MIN_DEGREE, MIN_DEGREE};
