use super::SimdVec;
use crate::emulation::memory;
use crate::error::IndexOutOfRange;
use crate::registry::UintCounterpart;
use crate::trusted::TrustedIndices;

/// Indexed memory access, with lane indices held in the unsigned
/// counterpart.
///
/// The checked forms validate every participating index before touching
/// memory, so a failed call leaves both the receiver and the buffer as they
/// were. Scatter writes lanes in ascending order: duplicate indices keep the
/// value of the highest lane.
pub trait SimdGather: SimdVec + UintCounterpart {
    /// `self[i] = base[indices[i]]` for every lane.
    #[inline]
    fn gather(&mut self, base: &[Self::Scalar], indices: &Self::Uint) -> Result<&mut Self, IndexOutOfRange> {
        memory::gather(self, base, indices)?;
        Ok(self)
    }

    #[inline]
    fn gather_m(
        &mut self,
        mask: &Self::Mask,
        base: &[Self::Scalar],
        indices: &Self::Uint,
    ) -> Result<&mut Self, IndexOutOfRange> {
        memory::gather_masked(self, mask, base, indices)?;
        Ok(self)
    }

    /// Gather through indices validated up front. Only checks that `base`
    /// is at least as long as the bound the indices were validated against.
    #[inline]
    fn gather_trusted(
        &mut self,
        base: &[Self::Scalar],
        indices: &TrustedIndices<Self::Uint>,
    ) -> Result<&mut Self, IndexOutOfRange> {
        memory::gather_trusted(self, base, indices)?;
        Ok(self)
    }

    #[inline]
    fn gather_trusted_m(
        &mut self,
        mask: &Self::Mask,
        base: &[Self::Scalar],
        indices: &TrustedIndices<Self::Uint>,
    ) -> Result<&mut Self, IndexOutOfRange> {
        memory::gather_trusted_masked(self, mask, base, indices)?;
        Ok(self)
    }

    /// `base[indices[i]] = self[i]` for every lane, ascending.
    #[inline]
    fn scatter(&self, base: &mut [Self::Scalar], indices: &Self::Uint) -> Result<(), IndexOutOfRange> {
        memory::scatter(self, base, indices)
    }

    #[inline]
    fn scatter_m(
        &self,
        mask: &Self::Mask,
        base: &mut [Self::Scalar],
        indices: &Self::Uint,
    ) -> Result<(), IndexOutOfRange> {
        memory::scatter_masked(self, mask, base, indices)
    }

    #[inline]
    fn scatter_trusted(
        &self,
        base: &mut [Self::Scalar],
        indices: &TrustedIndices<Self::Uint>,
    ) -> Result<(), IndexOutOfRange> {
        memory::scatter_trusted(self, base, indices)
    }

    #[inline]
    fn scatter_trusted_m(
        &self,
        mask: &Self::Mask,
        base: &mut [Self::Scalar],
        indices: &TrustedIndices<Self::Uint>,
    ) -> Result<(), IndexOutOfRange> {
        memory::scatter_trusted_masked(self, mask, base, indices)
    }
}
