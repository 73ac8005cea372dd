// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Skip list tuning.

/// Tallest tower a key may have by default. A `u64` of coin tosses cannot
/// produce more than 64 heads, so this is no cap at all in practice.
pub const MAX_HEIGHT: usize = 64;

/// What inserting an already-present key does to its tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePolicy {
    /// Replace the value in place and keep the existing tower.
    #[default]
    KeepHeight,
    /// Remove the tower, then insert the key afresh with a new random height.
    Reroll,
}

/// Construction-time settings for a [`SkipList`](crate::SkipList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub update: UpdatePolicy,
    /// Maximum number of levels a single tower may span. At least 1.
    pub max_height: usize,
}

impl Config {
    pub fn new() -> Self {
        Config {
            update: UpdatePolicy::KeepHeight,
            max_height: MAX_HEIGHT,
        }
    }

    pub fn with_update(mut self, update: UpdatePolicy) -> Self {
        self.update = update;
        self
    }

    /// Clamped to at least 1: every key lives on the bottom row.
    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height.max(1);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
