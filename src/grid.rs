// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! The level grid: an arena of four-way linked nodes.
//!
//! # Structure
//!
//! Each level is a doubly linked row bounded by two sentinel nodes. Nodes of
//! the same key on adjacent levels are linked vertically into a tower. The
//! top level always holds only its sentinels.
//!
//! ```text
//! Level 2: -inf <-----------------------------------> +inf
//!           |                                          |
//! Level 1: -inf <-------------> d <-----------------> +inf
//!           |                   |                      |
//! Level 0: -inf <-> b <-------> d <-------> f <-----> +inf
//! ```
//!
//! # Ownership
//!
//! Nodes live in one `Vec` and refer to each other by index, so there are no
//! dangling links to chase and teardown is a `clear`. Entries live in a second
//! `Vec`; every node of a tower holds the index of the same entry. Vacated
//! slots in both arenas go on free lists and are reused.

use std::cmp::Ordering;

use crate::boundary::Boundary;
use crate::entry::Entry;
use crate::error::Error;
use crate::trace::debug_log;

/// Arena index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Null link marker.
pub(crate) const NULL: Idx = Idx::MAX;

/// Fewest levels a grid may have: the bottom row and an empty top row.
pub(crate) const MIN_LEVELS: usize = 2;

/// A grid node. Sentinels carry `NegInf`/`PosInf`, real nodes the index of
/// their tower's entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Quad {
    pub(crate) key: Boundary<Idx>,
    pub(crate) next: Idx,
    pub(crate) prev: Idx,
    pub(crate) above: Idx,
    pub(crate) below: Idx,
}

impl Quad {
    fn new(key: Boundary<Idx>) -> Self {
        Quad {
            key,
            next: NULL,
            prev: NULL,
            above: NULL,
            below: NULL,
        }
    }
}

/// One row of the grid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Level {
    pub(crate) head: Idx,
    pub(crate) tail: Idx,
    /// Real keys on this row, sentinels excluded.
    pub(crate) len: usize,
}

pub(crate) struct Grid<K, V> {
    nodes: Vec<Quad>,
    free_nodes: Vec<Idx>,
    entries: Vec<Option<Entry<K, V>>>,
    free_entries: Vec<Idx>,
    /// Rows, bottom (index 0) to top.
    levels: Vec<Level>,
}

impl<K, V> Grid<K, V> {
    pub(crate) fn new() -> Self {
        let mut grid = Grid {
            nodes: Vec::new(),
            free_nodes: Vec::new(),
            entries: Vec::new(),
            free_entries: Vec::new(),
            levels: Vec::with_capacity(MIN_LEVELS),
        };
        for _ in 0..MIN_LEVELS {
            grid.push_level();
        }
        grid
    }

    /// Drop every entry and node and return to the empty two-level grid.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free_nodes.clear();
        self.entries.clear();
        self.free_entries.clear();
        self.levels.clear();
        for _ in 0..MIN_LEVELS {
            self.push_level();
        }
    }

    // --- Node access helpers ---

    pub(crate) fn node(&self, idx: Idx) -> &Quad {
        &self.nodes[idx as usize]
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Quad {
        &mut self.nodes[idx as usize]
    }

    pub(crate) fn entry(&self, idx: Idx) -> &Entry<K, V> {
        match &self.entries[idx as usize] {
            Some(entry) => entry,
            None => unreachable!("node refers to vacated entry {}", idx),
        }
    }

    pub(crate) fn entry_mut(&mut self, idx: Idx) -> &mut Entry<K, V> {
        match &mut self.entries[idx as usize] {
            Some(entry) => entry,
            None => unreachable!("node refers to vacated entry {}", idx),
        }
    }

    /// The entry behind a node, or `None` for a sentinel.
    pub(crate) fn real_entry(&self, idx: Idx) -> Option<&Entry<K, V>> {
        match self.node(idx).key {
            Boundary::Real(entry) => Some(self.entry(entry)),
            _ => None,
        }
    }

    /// The node's key, with sentinels as sentinels.
    pub(crate) fn label(&self, idx: Idx) -> Boundary<&K> {
        self.node(idx).key.map(|entry| self.entry(entry).key())
    }

    pub(crate) fn height(&self) -> usize {
        self.levels.len()
    }

    pub(crate) fn level(&self, level: usize) -> &Level {
        &self.levels[level]
    }

    pub(crate) fn top(&self) -> &Level {
        &self.levels[self.levels.len() - 1]
    }

    pub(crate) fn bottom(&self) -> &Level {
        &self.levels[0]
    }

    pub(crate) fn occupied_entries(&self) -> usize {
        self.entries.len() - self.free_entries.len()
    }

    // --- Allocation ---

    /// Make room for `nodes` more nodes, `entries` more entries and `levels`
    /// more rows without aborting on allocation failure.
    pub(crate) fn reserve(&mut self, nodes: usize, entries: usize, levels: usize) -> Result<(), Error> {
        self.nodes
            .try_reserve(nodes.saturating_sub(self.free_nodes.len()))?;
        self.entries
            .try_reserve(entries.saturating_sub(self.free_entries.len()))?;
        self.levels.try_reserve(levels)?;
        Ok(())
    }

    pub(crate) fn alloc_node(&mut self, key: Boundary<Idx>) -> Idx {
        if let Some(idx) = self.free_nodes.pop() {
            *self.node_mut(idx) = Quad::new(key);
            idx
        } else {
            let idx = self.nodes.len() as Idx;
            self.nodes.push(Quad::new(key));
            idx
        }
    }

    fn free_node(&mut self, idx: Idx) {
        *self.node_mut(idx) = Quad::new(Boundary::NegInf);
        self.free_nodes.push(idx);
    }

    pub(crate) fn alloc_entry(&mut self, entry: Entry<K, V>) -> Idx {
        if let Some(idx) = self.free_entries.pop() {
            self.entries[idx as usize] = Some(entry);
            idx
        } else {
            let idx = self.entries.len() as Idx;
            self.entries.push(Some(entry));
            idx
        }
    }

    pub(crate) fn take_entry(&mut self, idx: Idx) -> Entry<K, V> {
        match self.entries[idx as usize].take() {
            Some(entry) => {
                self.free_entries.push(idx);
                entry
            }
            None => unreachable!("entry {} freed twice", idx),
        }
    }

    // --- Row and tower surgery ---

    /// Link `node` into row `level` directly after `pred`.
    pub(crate) fn splice_after(&mut self, pred: Idx, node: Idx, level: usize) {
        let next = self.node(pred).next;
        debug_assert!(next != NULL, "cannot splice after a tail sentinel");
        self.node_mut(node).prev = pred;
        self.node_mut(node).next = next;
        self.node_mut(next).prev = node;
        self.node_mut(pred).next = node;
        self.levels[level].len += 1;
    }

    /// Link `upper` directly above `lower` in a tower.
    pub(crate) fn stack(&mut self, lower: Idx, upper: Idx) {
        self.node_mut(lower).above = upper;
        self.node_mut(upper).below = lower;
    }

    /// Unlink a real node from row `level` and free its slot. Returns the node
    /// that was above it.
    pub(crate) fn unlink(&mut self, node: Idx, level: usize) -> Idx {
        let Quad {
            prev, next, above, ..
        } = *self.node(node);
        debug_assert!(prev != NULL && next != NULL, "cannot unlink a sentinel");
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
        if above != NULL {
            self.node_mut(above).below = NULL;
        }
        self.levels[level].len -= 1;
        self.free_node(node);
        above
    }

    // --- Level lifecycle ---

    /// Add an empty row on top of the grid.
    pub(crate) fn push_level(&mut self) {
        let head = self.alloc_node(Boundary::NegInf);
        let tail = self.alloc_node(Boundary::PosInf);
        self.node_mut(head).next = tail;
        self.node_mut(tail).prev = head;

        if let Some(&old) = self.levels.last() {
            self.stack(old.head, head);
            self.stack(old.tail, tail);
        }
        self.levels.push(Level { head, tail, len: 0 });
        debug_log!(height = self.levels.len(), "pushed level");
    }

    /// Remove the top row if it is redundant: the row beneath it holds no real
    /// keys either, and the grid stays at or above two levels. Returns whether
    /// a row was removed.
    pub(crate) fn pop_top_level_if_empty(&mut self) -> bool {
        let height = self.levels.len();
        if height <= MIN_LEVELS || self.levels[height - 2].len != 0 {
            return false;
        }
        let top = self.levels[height - 1];
        debug_assert_eq!(top.len, 0, "top level holds real keys");

        let below = self.levels[height - 2];
        self.node_mut(below.head).above = NULL;
        self.node_mut(below.tail).above = NULL;
        self.free_node(top.head);
        self.free_node(top.tail);
        self.levels.pop();
        debug_log!(height = self.levels.len(), "popped level");
        true
    }
}

impl<K: Ord, V> Grid<K, V> {
    /// Order of the node's key relative to `key`.
    pub(crate) fn cmp_key(&self, idx: Idx, key: &K) -> Ordering {
        self.label(idx).cmp_real(&key)
    }
}
