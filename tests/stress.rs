// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Randomised stress tests for size and height bounds.

mod common;

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use quadlist::SkipList;

/// Generous bound: expected height is about log2(n) + 2.
fn height_bound(n: usize) -> usize {
    3 * (n as f64).log2().ceil() as usize + 2
}

#[test]
fn random_distinct_keys_sorted_and_logarithmic() {
    for trial in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(trial);
        let n = 10_000;
        let mut keys = BTreeSet::new();
        while keys.len() < n {
            keys.insert(rng.gen_range(0..1_000_000u64));
        }
        let mut shuffled: Vec<u64> = keys.iter().copied().collect();
        shuffled.shuffle(&mut rng);

        let mut list = SkipList::with_seed(trial);
        for &key in &shuffled {
            list.insert(key, key.wrapping_mul(31));
        }

        assert_eq!(list.len(), n);
        assert_eq!(list.level_len(0), Some(n));
        assert_eq!(common::keys(&list), keys.iter().copied().collect::<Vec<_>>());
        assert!(
            list.height() <= height_bound(n),
            "trial {}: height {} exceeds {}",
            trial,
            list.height(),
            height_bound(n)
        );
        list.check_invariants();
    }
}

#[test]
fn interleaved_churn() {
    let mut rng = StdRng::seed_from_u64(0xfeed);
    let mut list = SkipList::with_seed(0xbeef);
    let mut present = BTreeSet::new();

    for round in 0..20_000 {
        let key = rng.gen_range(0..2_000u32);
        if rng.gen_bool(0.6) {
            list.insert(key, round);
            present.insert(key);
        } else {
            assert_eq!(list.remove(&key).is_some(), present.remove(&key));
        }
        if round % 1_000 == 0 {
            list.check_invariants();
        }
    }

    assert_eq!(list.len(), present.len());
    assert_eq!(common::keys(&list), present.iter().copied().collect::<Vec<_>>());
    assert!(list.height() <= height_bound(2_000));
    list.check_invariants();
}

#[test]
fn sequential_then_reverse_drain() {
    let mut list = SkipList::with_seed(42);
    for key in 0..5_000u32 {
        list.insert(key, ());
    }
    for key in (0..5_000u32).rev() {
        assert!(list.remove(&key).is_some());
        assert!(list.height() >= 2);
    }
    assert_eq!(list.height(), 2);
    list.check_invariants();
}
