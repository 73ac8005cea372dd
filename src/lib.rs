// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Quadlist - an ordered map on a four-way linked skip list.
//!
//! Keys sit in a grid of rows. The bottom row holds every key in order; each
//! row above holds roughly half the keys of the row below, picked by coin
//! flips. Nodes link left/right within a row and up/down within a key's
//! tower, and every search walks right-then-down from the top-left corner.
//!
//! # Quick Start
//!
//! ```
//! use quadlist::SkipList;
//!
//! let mut map = SkipList::with_seed(7);
//! map.insert("b", 2);
//! map.insert("d", 4);
//! map.insert("f", 6);
//!
//! assert_eq!(map.get(&"d"), Some(&4));
//! assert_eq!(map.ceiling_entry(&"c").map(|e| *e.value()), Some(4));
//! assert_eq!(map.lesser_entry(&"d").map(|e| *e.key()), Some("b"));
//!
//! map.remove(&"d");
//! assert_eq!(map.ceiling_entry(&"c").map(|e| *e.key()), Some("f"));
//! ```
//!
//! # Sentinels
//!
//! Row boundaries are the [`Boundary::NegInf`] and [`Boundary::PosInf`]
//! variants, not reserved key values. The map only accepts plain `K`, so a
//! sentinel can never be inserted or removed, and queries report a sentinel
//! answer as `None`.
//!
//! # Reproducible shapes
//!
//! Tower heights come from an injected [`rand_core::RngCore`]. Use
//! [`SkipList::with_seed`] or [`SkipList::with_rng`] to fix the grid's shape.
//!
//! # Feature Flags
//!
//! - `tracing` - log grid growth, trimming and tower splicing via `tracing`
//! - `bench` - build the `grid_quick` benchmark binary

mod trace;

pub mod boundary;
pub mod coin;
pub mod config;
pub mod diagram;
pub mod entry;
pub mod error;
mod grid;
pub mod skip_list;

pub use boundary::Boundary;
pub use coin::XorShift;
pub use config::{Config, UpdatePolicy};
pub use diagram::Diagram;
pub use entry::Entry;
pub use error::Error;
pub use skip_list::{Iter, SkipList};
