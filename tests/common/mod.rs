// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Shared test helpers.

#![allow(dead_code)]

use rand_core::{RngCore, impls};

/// A generator that replays a fixed list of tower heights, then height 0.
///
/// Each draw is `h` one bits followed by a zero, which the skip list reads as
/// `h` heads before the first tail.
pub struct Heights {
    heights: std::vec::IntoIter<usize>,
}

impl Heights {
    pub fn new(heights: &[usize]) -> Self {
        Heights {
            heights: heights.to_vec().into_iter(),
        }
    }
}

impl RngCore for Heights {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let height = self.heights.next().unwrap_or(0);
        assert!(height < 64, "height {} does not fit in one draw", height);
        (1u64 << height) - 1
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Collect the keys of a list in iteration order.
pub fn keys<K: Clone, V, R>(list: &quadlist::SkipList<K, V, R>) -> Vec<K> {
    list.iter().map(|(key, _)| key.clone()).collect()
}
