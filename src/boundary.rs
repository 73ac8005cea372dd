// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Row boundary keys.
//!
//! Every level of the grid starts with a `NegInf` sentinel and ends with a
//! `PosInf` sentinel. Rather than reserving two magic values of the key type,
//! sentinels are separate variants, so any `K` can be stored.
//!
//! The derived ordering compares the variant first and the real key second:
//!
//! ```text
//! NegInf < Real(a) < Real(b) < PosInf      for all a < b
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A key extended with the two row sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Boundary<T> {
    /// Compares below every real key.
    NegInf,
    /// A user key.
    Real(T),
    /// Compares above every real key.
    PosInf,
}

impl<T> Boundary<T> {
    /// The real key, or `None` for a sentinel.
    pub fn real(&self) -> Option<&T> {
        match self {
            Boundary::Real(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_real(self) -> Option<T> {
        match self {
            Boundary::Real(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Boundary::Real(_))
    }

    pub fn as_ref(&self) -> Boundary<&T> {
        match self {
            Boundary::NegInf => Boundary::NegInf,
            Boundary::Real(value) => Boundary::Real(value),
            Boundary::PosInf => Boundary::PosInf,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Boundary<U> {
        match self {
            Boundary::NegInf => Boundary::NegInf,
            Boundary::Real(value) => Boundary::Real(f(value)),
            Boundary::PosInf => Boundary::PosInf,
        }
    }
}

impl<T: Ord> Boundary<T> {
    /// Compare this boundary against a bare key.
    pub fn cmp_real(&self, key: &T) -> Ordering {
        match self {
            Boundary::NegInf => Ordering::Less,
            Boundary::Real(value) => value.cmp(key),
            Boundary::PosInf => Ordering::Greater,
        }
    }
}

impl<T> From<T> for Boundary<T> {
    fn from(value: T) -> Self {
        Boundary::Real(value)
    }
}

impl<T: fmt::Display> fmt::Display for Boundary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::NegInf => f.write_str("-inf"),
            Boundary::Real(value) => value.fmt(f),
            Boundary::PosInf => f.write_str("+inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_bracket_every_key() {
        let keys = [i64::MIN, -1, 0, 1, i64::MAX];
        for key in keys {
            assert!(Boundary::NegInf < Boundary::Real(key));
            assert!(Boundary::Real(key) < Boundary::PosInf);
            assert_eq!(Boundary::<i64>::NegInf.cmp_real(&key), Ordering::Less);
            assert_eq!(Boundary::<i64>::PosInf.cmp_real(&key), Ordering::Greater);
        }
    }

    #[test]
    fn real_keys_keep_their_order() {
        assert!(Boundary::Real("a") < Boundary::Real("b"));
        assert_eq!(Boundary::Real(3).cmp_real(&3), Ordering::Equal);
        assert_eq!(Boundary::Real(2).cmp_real(&3), Ordering::Less);
    }

    #[test]
    fn magic_strings_are_ordinary_keys() {
        // The bytes that would have been reserved for sentinels are plain keys here.
        let low = Boundary::Real("!!");
        let high = Boundary::Real("}}");
        assert!(low.real().is_some());
        assert!(!high.is_sentinel());
        assert!(Boundary::NegInf < low);
        assert!(high < Boundary::PosInf);
    }

    #[test]
    fn display() {
        assert_eq!(Boundary::<u8>::NegInf.to_string(), "-inf");
        assert_eq!(Boundary::Real(7).to_string(), "7");
        assert_eq!(Boundary::<u8>::PosInf.to_string(), "+inf");
    }

    #[test]
    fn map_and_into_real() {
        assert_eq!(Boundary::Real(2).map(|v| v * 10), Boundary::Real(20));
        assert_eq!(Boundary::<u8>::PosInf.map(|v| v + 1), Boundary::PosInf);
        assert_eq!(Boundary::Real('x').into_real(), Some('x'));
        assert_eq!(Boundary::<char>::NegInf.into_real(), None);
        assert_eq!(Boundary::from(5).as_ref(), Boundary::Real(&5));
    }
}
