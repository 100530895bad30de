//! Pre-validated lane and memory indices.
//!
//! Checked entry points validate on every call. When the same index is used
//! many times, validate it once into one of these wrappers and use the
//! `_trusted` forms, which skip the per-lane checks.

use std::fmt;
use std::marker::PhantomData;

use crate::error::IndexOutOfRange;
use crate::interface::SimdVec;
use crate::registry::VecBinding;
use crate::scalar::{SimdScalar, UintScalar};

/// A lane index known to be below `V::LENGTH`.
pub struct TrustedIndex<V> {
    index: usize,
    _vector: PhantomData<fn() -> V>,
}

impl<V: VecBinding> TrustedIndex<V> {
    #[inline]
    pub fn new(index: usize) -> Result<Self, IndexOutOfRange> {
        let index = IndexOutOfRange::check(index, V::LENGTH)?;
        Ok(Self { index, _vector: PhantomData })
    }

    /// # Safety
    ///
    /// `index` must be below `V::LENGTH`.
    #[inline]
    pub const unsafe fn new_unchecked(index: usize) -> Self {
        Self { index, _vector: PhantomData }
    }
}

impl<V> TrustedIndex<V> {
    #[inline]
    pub const fn get(self) -> usize {
        self.index
    }
}

impl<V> Clone for TrustedIndex<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for TrustedIndex<V> {}

impl<V> PartialEq for TrustedIndex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<V> Eq for TrustedIndex<V> {}

impl<V> fmt::Debug for TrustedIndex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TrustedIndex").field(&self.index).finish()
    }
}

/// An index vector whose lanes are all known to address a buffer of at
/// least [`bound`](Self::bound) elements.
///
/// `bound` is one past the largest lane, so the trusted gather and scatter
/// forms only need `base.len() >= bound`, an O(1) check, before accessing
/// memory without per-lane bounds checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrustedIndices<U> {
    indices: U,
    bound: usize,
}

impl<U> TrustedIndices<U>
where
    U: SimdVec + VecBinding<Scalar: UintScalar>,
{
    /// Validate every lane of `indices` against a buffer of `len` elements.
    pub fn new(indices: U, len: usize) -> Result<Self, IndexOutOfRange> {
        let mut bound = 0;
        for lane in 0..U::LENGTH {
            let value = indices.extract_lane(lane);
            let index = value.to_index().ok_or(IndexOutOfRange::new(usize::MAX, len))?;
            IndexOutOfRange::check(index, len)?;
            bound = bound.max(index + 1);
        }
        Ok(Self { indices, bound })
    }

    /// # Safety
    ///
    /// Every lane of `indices`, converted with
    /// [`UintScalar::as_index`], must be below `bound`.
    #[inline]
    pub const unsafe fn new_unchecked(indices: U, bound: usize) -> Self {
        Self { indices, bound }
    }

    #[inline]
    pub fn indices(&self) -> &U {
        &self.indices
    }

    #[inline]
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Lane `lane` as a memory index. Always below [`bound`](Self::bound).
    #[inline]
    pub fn lane(&self, lane: usize) -> usize {
        self.indices.extract_lane(lane).as_index()
    }

    /// Fails unless a buffer of `len` elements covers every lane.
    #[inline]
    pub fn check_len(&self, len: usize) -> Result<(), IndexOutOfRange> {
        if len >= self.bound {
            Ok(())
        } else {
            Err(IndexOutOfRange::new(self.bound - 1, len))
        }
    }
}
