//! Key type for Arbor indexes.
//!
//! This module defines the scalar key stored by the index structures.

/// The scalar key stored by Arbor's index structures.
///
/// Keys carry no payload: a tree is an ordered multiset of integers, not a
/// map. Signed so that the full range of comparisons (including negative
/// keys) is exercised by the same code path.
pub type Key = i64;
