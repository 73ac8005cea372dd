// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Zero-cost logging macros.
//!
//! With the `tracing` feature enabled these forward to the `tracing` crate.
//! Without it they expand to nothing, so the hot paths of the grid pay no
//! cost for their log lines.
//!
//! ```bash
//! cargo test --features tracing
//! ```

#![allow(unused_macros, unused_imports)]

/// Trace-level logging (tower splicing, per-node work).
#[cfg(feature = "tracing")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

/// Debug-level logging (level growth and trimming).
#[cfg(feature = "tracing")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_log;
pub(crate) use trace_log;
