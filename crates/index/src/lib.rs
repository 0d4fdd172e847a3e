//! Arbor Index - B-tree index implementation for Arbor.
//!
//! This crate provides the ordered index at the heart of Arbor:
//!
//! - `BTree`: an in-memory B-tree over scalar keys, supporting insertion,
//!   exact-key search, and in-order traversal
//!
//! Nodes are stored in an arena and addressed by index, so the tree is a
//! single allocation-friendly structure with no pointer chasing beyond
//! slice lookups.
//!
//! # Example
//!
//! ```rust
//! use arbor_index::BTree;
//!
//! let mut tree = BTree::new(3).unwrap();
//! for key in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(key);
//! }
//!
//! // Keys come back in ascending order
//! let sorted: Vec<i64> = tree.iter().collect();
//! assert_eq!(sorted, vec![5, 6, 7, 10, 12, 17, 20, 30]);
//!
//! // Exact-key search
//! assert!(tree.contains(6));
//! assert!(!tree.contains(15));
//! ```

#![no_std]

extern crate alloc;

pub mod btree;
pub mod stats;

pub use btree::{BTree, Keys, DEFAULT_MIN_DEGREE, MIN_DEGREE};
pub use stats::TreeStats;
