use super::SimdVec;
use crate::emulation;
use crate::registry::{FloatCounterpart, IntCounterpart, UintCounterpart};

/// Lane-wise conversion to the counterpart types, with `as` semantics:
/// integers wrap, floats truncate toward zero and saturate, NaN becomes 0.
///
/// Implemented for every vector; each method exists only where the
/// counterpart binding does.
pub trait SimdConvert: SimdVec {
    #[inline]
    fn to_uint(&self) -> <Self as UintCounterpart>::Uint
    where
        Self: UintCounterpart,
    {
        emulation::convert(self)
    }

    #[inline]
    fn to_int(&self) -> <Self as IntCounterpart>::Int
    where
        Self: IntCounterpart,
    {
        emulation::convert(self)
    }

    #[inline]
    fn to_float(&self) -> <Self as FloatCounterpart>::Float
    where
        Self: FloatCounterpart,
    {
        emulation::convert(self)
    }
}

impl<T: SimdVec> SimdConvert for T {}
