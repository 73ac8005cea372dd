//! AFL Fuzz harness for the skip list grid
//!
//! Replays byte-coded operations against both a `SkipList` and a `BTreeMap`
//! and checks:
//! 1. Every lookup and order query agrees with the `BTreeMap`
//! 2. The grid's structural invariants hold after every mutation
//! 3. The grid never drops below two levels
//!
//! Tower heights come from a seeded generator so crashes reproduce.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use afl::fuzz;
use quadlist::{Config, Entry, SkipList, UpdatePolicy, XorShift};

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { key: u8, value: u8 },
    Remove { key: u8 },
    Query { key: u8 },
    Clear,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 8;
        let rest = &bytes[1..];

        match op_type {
            // Inserts dominate so the grid actually grows.
            0..=3 if rest.len() >= 2 => Some((
                FuzzOp::Insert {
                    key: rest[0],
                    value: rest[1],
                },
                &rest[2..],
            )),
            4 | 5 if !rest.is_empty() => Some((FuzzOp::Remove { key: rest[0] }, &rest[1..])),
            6 if !rest.is_empty() => Some((FuzzOp::Query { key: rest[0] }, &rest[1..])),
            7 => Some((FuzzOp::Clear, rest)),
            _ => None,
        }
    }
}

fn pair(entry: &Entry<u8, u8>) -> (u8, u8) {
    (*entry.key(), *entry.value())
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((&seed, mut remaining)) = data.split_first() else {
            return;
        };
        let update = if seed & 1 == 0 {
            UpdatePolicy::KeepHeight
        } else {
            UpdatePolicy::Reroll
        };
        let mut list = SkipList::with_config(
            Config::new().with_update(update),
            XorShift::new(seed as u64 + 1),
        );
        let mut oracle: BTreeMap<u8, u8> = BTreeMap::new();

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { key, value } => {
                    assert_eq!(list.insert(key, value), oracle.insert(key, value));
                    list.check_invariants();
                }
                FuzzOp::Remove { key } => {
                    assert_eq!(list.remove(&key), oracle.remove(&key));
                    list.check_invariants();
                }
                FuzzOp::Query { key } => {
                    assert_eq!(list.get(&key), oracle.get(&key));
                    assert_eq!(
                        list.floor_entry(&key).map(pair),
                        oracle.range(..=key).next_back().map(|(k, v)| (*k, *v))
                    );
                    assert_eq!(
                        list.ceiling_entry(&key).map(pair),
                        oracle.range(key..).next().map(|(k, v)| (*k, *v))
                    );
                    assert_eq!(
                        list.greater_entry(&key).map(pair),
                        oracle
                            .range((Excluded(key), Unbounded))
                            .next()
                            .map(|(k, v)| (*k, *v))
                    );
                    assert_eq!(
                        list.lesser_entry(&key).map(pair),
                        oracle.range(..key).next_back().map(|(k, v)| (*k, *v))
                    );
                }
                FuzzOp::Clear => {
                    list.clear();
                    oracle.clear();
                }
            }
            assert!(list.height() >= 2);
            assert_eq!(list.len(), oracle.len());
        }

        let keys: Vec<u8> = list.iter().map(|(k, _)| *k).collect();
        let expected: Vec<u8> = oracle.keys().copied().collect();
        assert_eq!(keys, expected);
    });
}
