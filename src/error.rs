//! Error type for lane, slice and gather/scatter index checks.
//!
//! Every checked entry point in the crate reports exactly one failure mode:
//! an index that does not fit the vector, slice or buffer it addresses. The
//! check happens before any lane or memory is written, so a failed call
//! leaves its receiver untouched.

use std::fmt;

/// An index fell outside `[0, len)`.
///
/// `index` is the first offending index found while scanning lanes in
/// ascending order, `len` the length it was checked against. For slice
/// loads and stores `index` is the last lane that did not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfRange {
    #[inline]
    #[must_use]
    pub const fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }

    /// Returns `Ok(index)` when `index < len`.
    #[inline]
    pub const fn check(index: usize, len: usize) -> Result<usize, Self> {
        if index < len {
            Ok(index)
        } else {
            Err(Self::new(index, len))
        }
    }
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}

impl std::error::Error for IndexOutOfRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bounds() {
        assert_eq!(IndexOutOfRange::check(3, 4), Ok(3));
        assert_eq!(IndexOutOfRange::check(4, 4), Err(IndexOutOfRange::new(4, 4)));
        assert_eq!(IndexOutOfRange::check(0, 0), Err(IndexOutOfRange::new(0, 0)));
    }

    #[test]
    fn test_display() {
        let err = IndexOutOfRange::new(9, 8);
        assert_eq!(err.to_string(), "index 9 out of range for length 8");
    }
}
