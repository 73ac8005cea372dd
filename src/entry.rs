// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! The key/value record behind a tower.
//!
//! A tower has one node per level, but only one `Entry`. Every node of the
//! tower refers to the same entry slot, so the payload is stored once and
//! freed once, when the last node of the tower is unlinked.

/// A key with its value, as stored in a [`SkipList`](crate::SkipList).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
    /// Number of levels the tower spans (always at least one).
    height: usize,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V, height: usize) -> Self {
        debug_assert!(height >= 1);
        Entry { key, value, height }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Number of grid levels this key occupies, counting the bottom row.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
