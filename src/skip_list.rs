// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Ordered map over a four-way linked skip list.
//!
//! # Search
//!
//! Every operation starts with the same descent: from the top-left sentinel,
//! move right while the next key does not exceed the search key, then drop a
//! level. The node reached on each level is recorded in a *trail*, top level
//! first. The last node of the trail is the greatest bottom-row key `<=` the
//! search key, which answers `find` and all four order queries directly.
//!
//! # Operations
//!
//! - `insert(key, value)`: O(log n) expected - splices a new tower after the trail
//! - `remove(key)`: O(log n) expected - unlinks the tower bottom-up
//! - `find` / `floor_entry` / `ceiling_entry` / `greater_entry` / `lesser_entry`:
//!   O(log n) expected
//! - `first` / `last`: O(1)
//! - `len()`: O(1)
//!
//! # Levels
//!
//! The top level never holds a real key. A tower of height `h` (levels
//! `0..=h`) grows the grid to at least `h + 2` levels; removing the tallest
//! tower trims empty levels back down, never below two.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use rand_core::{RngCore, SeedableRng};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::boundary::Boundary;
use crate::coin::{XorShift, flip_height};
use crate::config::{Config, UpdatePolicy};
use crate::diagram::Diagram;
use crate::entry::Entry;
use crate::error::Error;
use crate::grid::{Grid, Idx, MIN_LEVELS, NULL};
use crate::trace::{debug_log, trace_log};

/// Rightmost node not exceeding the search key on each level, top first.
type Trail = SmallVec<[Idx; 16]>;

/// An ordered map with expected O(log n) search, insertion and removal.
///
/// `R` supplies the coin flips that choose tower heights. Seed it (or script
/// it) to make the grid's shape reproducible.
pub struct SkipList<K, V, R = XorShift> {
    grid: Grid<K, V>,
    rng: R,
    config: Config,
    len: usize,
}

impl<K, V> SkipList<K, V, XorShift> {
    /// Create an empty list seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(XorShift::from_entropy())
    }

    /// Create an empty list with a reproducible height sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(XorShift::seed_from_u64(seed))
    }
}

impl<K, V> Default for SkipList<K, V, XorShift> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, R> SkipList<K, V, R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_config(Config::default(), rng)
    }

    pub fn with_config(config: Config, rng: R) -> Self {
        SkipList {
            grid: Grid::new(),
            rng,
            config,
            len: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels in the grid, including the empty top level. Never
    /// less than two.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of real keys on `level`, or `None` past the top.
    pub fn level_len(&self, level: usize) -> Option<usize> {
        if level < self.grid.height() {
            Some(self.grid.level(level).len)
        } else {
            None
        }
    }

    /// Remove every entry and shrink back to two levels.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.len = 0;
    }

    /// The entry with the least key.
    pub fn first(&self) -> Option<&Entry<K, V>> {
        let head = self.grid.bottom().head;
        self.grid.real_entry(self.grid.node(head).next)
    }

    /// The entry with the greatest key.
    pub fn last(&self) -> Option<&Entry<K, V>> {
        let tail = self.grid.bottom().tail;
        self.grid.real_entry(self.grid.node(tail).prev)
    }

    /// Iterate over the bottom row in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            grid: &self.grid,
            current: self.grid.node(self.grid.bottom().head).next,
            remaining: self.len,
        }
    }

    /// Row-by-row rendering of the grid, for debugging.
    pub fn diagram(&self) -> Diagram<'_, K, V> {
        Diagram::new(&self.grid)
    }

    /// Write [`diagram`](Self::diagram) to stdout.
    pub fn print(&self)
    where
        K: fmt::Display,
    {
        print!("{}", self.diagram());
    }
}

impl<K: Ord, V, R> SkipList<K, V, R> {
    /// Scan right along one row from `current` while the next key is `<= key`.
    fn scan(&self, mut current: Idx, key: &K) -> Idx {
        loop {
            let next = self.grid.node(current).next;
            if self.grid.cmp_key(next, key) == Ordering::Greater {
                return current;
            }
            current = next;
        }
    }

    /// Record the rightmost node not exceeding `key` on every level, top first.
    fn trail(&self, key: &K) -> Trail {
        let mut trail = Trail::with_capacity(self.grid.height());
        let mut current = self.grid.top().head;
        while current != NULL {
            current = self.scan(current, key);
            trail.push(current);
            current = self.grid.node(current).below;
        }
        debug_assert_eq!(trail.len(), self.grid.height());
        trail
    }

    /// The bottom-row node a trail for `key` ends on, without recording the
    /// trail. This is the greatest key `<= key`, or the `-inf` sentinel.
    fn descend(&self, key: &K) -> Idx {
        let mut current = self.grid.top().head;
        loop {
            current = self.scan(current, key);
            let below = self.grid.node(current).below;
            if below == NULL {
                return current;
            }
            current = below;
        }
    }

    /// The bottom-row node holding exactly `key`.
    fn locate(&self, key: &K) -> Option<Idx> {
        let bottom = self.descend(key);
        if self.grid.cmp_key(bottom, key) == Ordering::Equal {
            Some(bottom)
        } else {
            None
        }
    }

    pub fn find(&self, key: &K) -> Option<&Entry<K, V>> {
        self.locate(key).and_then(|node| self.grid.real_entry(node))
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(Entry::value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let node = self.locate(key)?;
        match self.grid.node(node).key {
            Boundary::Real(entry) => Some(self.grid.entry_mut(entry).value_mut()),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// The entry with the least key `>= key`.
    pub fn ceiling_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let bottom = self.descend(key);
        if self.grid.cmp_key(bottom, key) == Ordering::Equal {
            self.grid.real_entry(bottom)
        } else {
            self.grid.real_entry(self.grid.node(bottom).next)
        }
    }

    /// The entry with the greatest key `<= key`.
    pub fn floor_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        self.grid.real_entry(self.descend(key))
    }

    /// The entry with the least key `> key`.
    pub fn greater_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let bottom = self.descend(key);
        if self.grid.cmp_key(bottom, key) == Ordering::Greater {
            self.grid.real_entry(bottom)
        } else {
            self.grid.real_entry(self.grid.node(bottom).next)
        }
    }

    /// The entry with the greatest key `< key`.
    pub fn lesser_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let bottom = self.descend(key);
        if self.grid.cmp_key(bottom, key) == Ordering::Less {
            return self.grid.real_entry(bottom);
        }
        match self.grid.node(bottom).prev {
            NULL => self.grid.real_entry(bottom),
            prev => self.grid.real_entry(prev),
        }
    }

    /// Remove `key`, returning its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let bottom = self.locate(key)?;
        let Boundary::Real(entry) = self.grid.node(bottom).key else {
            return None;
        };

        let mut current = bottom;
        let mut spanned = 0;
        while current != NULL {
            current = self.grid.unlink(current, spanned);
            spanned += 1;
        }
        let removed = self.grid.take_entry(entry);
        debug_assert_eq!(removed.height(), spanned);
        self.len -= 1;
        trace_log!(spanned, "removed tower");

        if spanned == self.grid.height() - 1 {
            while self.grid.pop_top_level_if_empty() {}
        }
        Some(removed.into_pair().1)
    }
}

impl<K: Ord, V, R: RngCore> SkipList<K, V, R> {
    /// Insert `key`, returning the value it replaced.
    ///
    /// # Panics
    ///
    /// Panics if the grid cannot allocate room for the new tower. Use
    /// [`try_insert`](Self::try_insert) to handle that case.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.try_insert(key, value) {
            Ok(old) => old,
            Err(err) => panic!("{}", err),
        }
    }

    /// Insert `key`, returning the value it replaced, or an error if the grid
    /// could not grow. A failed insert leaves the list as it was, except that
    /// under [`UpdatePolicy::Reroll`] the replaced key is already gone.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, Error> {
        if let Some(node) = self.locate(&key) {
            match self.config.update {
                UpdatePolicy::KeepHeight => {
                    let Boundary::Real(entry) = self.grid.node(node).key else {
                        unreachable!("sentinel matched a real key");
                    };
                    let slot = self.grid.entry_mut(entry).value_mut();
                    return Ok(Some(mem::replace(slot, value)));
                }
                UpdatePolicy::Reroll => {
                    let old = self.remove(&key);
                    self.insert_tower(key, value)?;
                    return Ok(old);
                }
            }
        }
        self.insert_tower(key, value)?;
        Ok(None)
    }

    /// Coin-flip a tower height, capped so the tower spans at most
    /// `max_height` levels.
    fn random_height(&mut self) -> usize {
        flip_height(&mut self.rng).min(self.config.max_height.max(1) - 1)
    }

    /// Build a fresh tower for a key known to be absent.
    fn insert_tower(&mut self, key: K, value: V) -> Result<(), Error> {
        let height = self.random_height();
        let new_levels = (height + MIN_LEVELS).saturating_sub(self.grid.height());
        self.grid.reserve(height + 1 + 2 * new_levels, 1, new_levels)?;

        for _ in 0..new_levels {
            self.grid.push_level();
        }

        let trail = self.trail(&key);
        let entry = self.grid.alloc_entry(Entry::new(key, value, height + 1));
        let mut lower = NULL;
        for level in 0..=height {
            let pred = trail[trail.len() - 1 - level];
            let node = self.grid.alloc_node(Boundary::Real(entry));
            self.grid.splice_after(pred, node, level);
            if lower != NULL {
                self.grid.stack(lower, node);
            }
            lower = node;
        }
        self.len += 1;
        trace_log!(height, "inserted tower");
        debug_log!(len = self.len, grid_height = self.grid.height(), "insert done");
        Ok(())
    }
}

impl<K: Ord, V, R> SkipList<K, V, R> {
    /// Walk the whole grid and panic if any structural invariant is broken.
    ///
    /// Checks row order, sentinel placement, vertical links, the tower
    /// invariant, per-level counts, entry uniqueness and the height rules.
    /// O(n log n); meant for tests and fuzzing.
    pub fn check_invariants(&self) {
        let height = self.grid.height();
        assert!(height >= MIN_LEVELS, "INVARIANT VIOLATED: height {} < 2", height);
        assert_eq!(
            self.grid.top().len,
            0,
            "INVARIANT VIOLATED: top level holds real keys"
        );
        if height > MIN_LEVELS {
            assert!(
                self.grid.level(height - 2).len > 0,
                "INVARIANT VIOLATED: two empty levels on top (height {})",
                height
            );
        }
        assert_eq!(
            self.grid.bottom().len,
            self.len,
            "INVARIANT VIOLATED: bottom row count != len()"
        );

        let mut seen: FxHashSet<Idx> = FxHashSet::default();
        for level in 0..height {
            let row = self.grid.level(level);
            assert_eq!(self.grid.node(row.head).key, Boundary::NegInf);
            assert_eq!(self.grid.node(row.tail).key, Boundary::PosInf);
            assert_eq!(self.grid.node(row.head).prev, NULL);
            assert_eq!(self.grid.node(row.tail).next, NULL);
            if level > 0 {
                let under = self.grid.level(level - 1);
                assert_eq!(self.grid.node(row.head).below, under.head);
                assert_eq!(self.grid.node(row.tail).below, under.tail);
            }

            let mut count = 0usize;
            let mut prev = row.head;
            let mut current = self.grid.node(row.head).next;
            while current != row.tail {
                let quad = self.grid.node(current);
                assert_eq!(quad.prev, prev, "INVARIANT VIOLATED: broken prev link");
                assert!(
                    self.grid.label(prev) < self.grid.label(current),
                    "INVARIANT VIOLATED: level {} out of order",
                    level
                );
                let Boundary::Real(entry) = quad.key else {
                    panic!("INVARIANT VIOLATED: sentinel inside level {}", level);
                };
                if level == 0 {
                    assert_eq!(quad.below, NULL);
                    assert!(seen.insert(entry), "INVARIANT VIOLATED: duplicate entry");
                } else {
                    // Tower invariant: every key here is on the level below.
                    assert_ne!(quad.below, NULL, "INVARIANT VIOLATED: tower gap");
                    let under = self.grid.node(quad.below);
                    assert_eq!(under.key, quad.key, "INVARIANT VIOLATED: tower key mismatch");
                    assert_eq!(under.above, current);
                }
                if quad.above == NULL {
                    assert_eq!(
                        self.grid.entry(entry).height(),
                        level + 1,
                        "INVARIANT VIOLATED: entry height disagrees with tower"
                    );
                }
                count += 1;
                prev = current;
                current = quad.next;
            }
            assert_eq!(self.grid.node(row.tail).prev, prev);
            assert_eq!(count, row.len, "INVARIANT VIOLATED: level {} count", level);
        }
        assert_eq!(self.grid.occupied_entries(), self.len);
    }
}

impl<K: fmt::Debug, V: fmt::Debug, R> fmt::Debug for SkipList<K, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipList<K, V, XorShift> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<K: Ord, V, R: RngCore> Extend<(K, V)> for SkipList<K, V, R> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, R> IntoIterator for &'a SkipList<K, V, R> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`SkipList`].
pub struct Iter<'a, K, V> {
    grid: &'a Grid<K, V>,
    current: Idx,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.grid.real_entry(self.current)?;
        self.current = self.grid.node(self.current).next;
        self.remaining -= 1;
        Some((entry.key(), entry.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
