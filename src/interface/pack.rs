use super::SimdVec;
use crate::emulation::pack;
use crate::registry::HalfLength;

/// Conversion between a vector and two vectors of its half-length sibling.
///
/// The low half occupies lanes `[0, LENGTH / 2)`. Width-1 vectors have no
/// half sibling and therefore no `SimdPack` impl.
///
/// ```
/// use ferrous_lanes::prelude::*;
///
/// let v = U32x4::from_halves(U32x2::from_array([1, 2]), U32x2::from_array([3, 4]));
/// assert_eq!(v.to_array(), [1, 2, 3, 4]);
/// assert_eq!(v.unpacklo().to_array(), [1, 2]);
/// ```
///
/// ```compile_fail
/// use ferrous_lanes::prelude::*;
///
/// let _ = U32x1::splat(1).unpacklo();
/// ```
pub trait SimdPack: SimdVec + HalfLength {
    #[inline]
    fn from_halves(lo: Self::Half, hi: Self::Half) -> Self {
        pack::from_halves(&lo, &hi)
    }

    /// Overwrite both halves.
    #[inline]
    fn pack(&mut self, lo: Self::Half, hi: Self::Half) -> &mut Self {
        *self = Self::from_halves(lo, hi);
        self
    }

    /// Overwrite the low half, keeping the high half.
    #[inline]
    fn packlo(&mut self, lo: Self::Half) -> &mut Self {
        pack::write_low(self, &lo);
        self
    }

    /// Overwrite the high half, keeping the low half.
    #[inline]
    fn packhi(&mut self, hi: Self::Half) -> &mut Self {
        pack::write_high(self, &hi);
        self
    }

    #[inline]
    fn unpack(&self) -> (Self::Half, Self::Half) {
        (self.unpacklo(), self.unpackhi())
    }

    #[inline]
    fn unpacklo(&self) -> Self::Half {
        pack::read_low(self)
    }

    #[inline]
    fn unpackhi(&self) -> Self::Half {
        pack::read_high(self)
    }
}
