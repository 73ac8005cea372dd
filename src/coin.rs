// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Coin-flip tower heights.
//!
//! A new tower climbs one level for every head before the first tail, so
//! height 0 (bottom row only) has probability 1/2, height 1 has 1/4, and so
//! on. One `u64` from the generator supplies 64 tosses at once: the number of
//! trailing one bits is the number of leading heads.
//!
//! The generator is any [`RngCore`], injected into the skip list, so tests can
//! script exact heights. [`XorShift`] is the default.

use rand_core::{RngCore, SeedableRng, impls};

/// Number of heads before the first tail, at most 64.
pub(crate) fn flip_height<R: RngCore>(rng: &mut R) -> usize {
    rng.next_u64().trailing_ones() as usize
}

/// Fallback state for an all-zero seed; xorshift never leaves zero.
const ZERO_SEED: u64 = 0x12345678_9abcdef0;

/// A xorshift64 generator. Fast and small; not for cryptographic use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift {
    state: u64,
}

impl XorShift {
    pub fn new(seed: u64) -> Self {
        XorShift {
            state: if seed == 0 { ZERO_SEED } else { seed },
        }
    }
}

impl RngCore for XorShift {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        XorShift::new(u64::from_le_bytes(seed))
    }
}

/// A generator that replays a fixed list of tower heights, then height 0.
#[cfg(test)]
pub(crate) struct Scripted {
    heights: std::vec::IntoIter<usize>,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(heights: &[usize]) -> Self {
        Scripted {
            heights: heights.to_vec().into_iter(),
        }
    }
}

#[cfg(test)]
impl RngCore for Scripted {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let height = self.heights.next().unwrap_or(0);
        assert!(height < 64);
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
