// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Errors reported by fallible skip list operations.
//!
//! Absent keys are not errors: lookups and removals report them with `None`.

use std::collections::TryReserveError;
use std::fmt;

/// Error returned by [`SkipList::try_insert`](crate::SkipList::try_insert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The node or entry arena could not grow to hold the new tower.
    Alloc(TryReserveError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Alloc(err) => write!(f, "skip list allocation failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Alloc(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Error::Alloc(err)
    }
}
