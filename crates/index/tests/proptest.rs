//! Property-based tests for arbor-index using proptest.

use arbor_index::BTree;
use hashbrown::HashMap;
use proptest::prelude::*;

/// Counts occurrences of each key, so multisets compare regardless of order.
fn key_counts(keys: &[i64]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for &key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

proptest! {
    /// Test that traversal yields every inserted key, in ascending order.
    #[test]
    fn btree_traversal_sorted_permutation(keys in prop::collection::vec(-1000i64..1000, 1..500)) {
        let mut tree = BTree::new(3).unwrap();
        for &key in &keys {
            tree.insert(key);
        }

        let traversed: Vec<i64> = tree.iter().collect();
        prop_assert_eq!(traversed.len(), keys.len());
        prop_assert!(traversed.windows(2).all(|w| w[0] <= w[1]), "traversal out of order");
        prop_assert_eq!(key_counts(&traversed), key_counts(&keys));
    }

    /// Test that search finds every inserted key and nothing else.
    #[test]
    fn btree_search_correctness(
        keys in prop::collection::vec(0i64..10000, 1..500),
        probes in prop::collection::vec(0i64..10000, 1..100)
    ) {
        let mut tree = BTree::new(2).unwrap();
        for &key in &keys {
            tree.insert(key);
        }

        for &key in &keys {
            prop_assert!(tree.contains(key), "Key {} should exist", key);
        }
        for &probe in &probes {
            prop_assert_eq!(tree.contains(probe), keys.contains(&probe));
        }
    }

    /// Test that structural invariants hold after any insert sequence.
    #[test]
    fn btree_invariants_hold(
        keys in prop::collection::vec(-500i64..500, 0..300),
        degree in 2usize..8
    ) {
        let mut tree = BTree::new(degree).unwrap();
        for &key in &keys {
            tree.insert(key);
        }

        let checked = tree.check_invariants_detailed();
        prop_assert!(checked.is_ok(), "invariant violation: {:?}", checked);
    }

    /// Test that height only grows, one level at a time, within the fill bound.
    #[test]
    fn btree_height_monotone_and_bounded(keys in prop::collection::vec(0i64..100000, 1..1000)) {
        let mut tree = BTree::new(2).unwrap();

        let mut last_height = 0;
        for &key in &keys {
            tree.insert(key);
            let height = tree.height();
            prop_assert!(
                height == last_height || height == last_height + 1,
                "height jumped from {} to {}", last_height, height
            );
            last_height = height;
        }

        // A tree of L levels at minimum fill holds 2 * t^(L-1) - 1 keys.
        let levels = tree.height() as u32;
        let min_keys = 2u64 * 2u64.pow(levels - 1) - 1;
        prop_assert!(tree.len() as u64 >= min_keys);
    }

    /// Test that min/max match the extremes of the inserted keys.
    #[test]
    fn btree_min_max_correct(keys in prop::collection::vec(-10000i64..10000, 1..200)) {
        let mut tree = BTree::new(4).unwrap();
        for &key in &keys {
            tree.insert(key);
        }

        prop_assert_eq!(tree.min(), keys.iter().min().copied());
        prop_assert_eq!(tree.max(), keys.iter().max().copied());
    }

    /// Test that traversing twice without writes yields the same sequence.
    #[test]
    fn btree_traversal_repeatable(keys in prop::collection::vec(0i64..1000, 0..200)) {
        let mut tree = BTree::new(2).unwrap();
        for &key in &keys {
            tree.insert(key);
        }

        let first: Vec<i64> = tree.iter().collect();
        let second: Vec<i64> = tree.iter().collect();
        prop_assert_eq!(first, second);
    }

    /// Test that duplicate inserts are all kept and counted.
    #[test]
    fn btree_duplicates_counted(keys in prop::collection::vec(0i64..50, 1..200)) {
        let mut tree = BTree::new(2).unwrap();
        for &key in &keys {
            tree.insert(key);
            tree.insert(key);
        }

        prop_assert_eq!(tree.len(), keys.len() * 2);
        let mut expected = key_counts(&keys);
        for count in expected.values_mut() {
            *count *= 2;
        }
        let traversed: Vec<i64> = tree.iter().collect();
        prop_assert_eq!(key_counts(&traversed), expected);
    }

    /// Test that clearing a tree makes it empty and reusable.
    #[test]
    fn btree_clear_makes_empty(keys in prop::collection::vec(0i64..1000, 1..100)) {
        let mut tree = BTree::new(3).unwrap();
        for &key in &keys {
            tree.insert(key);
        }

        tree.clear();

        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.len(), 0);
        prop_assert!(tree.min().is_none());
        prop_assert!(tree.max().is_none());
        prop_assert_eq!(tree.iter().count(), 0);

        tree.insert(keys[0]);
        prop_assert!(tree.contains(keys[0]));
        prop_assert!(tree.check_invariants());
    }

    /// Test that stats are consistent with the actual count.
    #[test]
    fn btree_stats_consistent(keys in prop::collection::vec(0i64..1000, 1..100)) {
        let mut tree = BTree::new(2).unwrap();
        for &key in &keys {
            tree.insert(key);
        }

        prop_assert_eq!(tree.len(), keys.len());
        prop_assert_eq!(tree.len(), tree.stats().total_keys());
    }
}
