use num_traits::One;

use super::SimdGather;
use crate::error::IndexOutOfRange;
use crate::registry::{UintCounterpart, VecBinding};
use crate::scalar::UintScalar;
use crate::trusted::TrustedIndices;

/// Histogram update with the lanes of `self` as bin indices.
///
/// A gather, add and scatter over indices that contain duplicates would
/// lose updates, so the update only takes the bulk path when the indices are
/// [`unique`](super::SimdVec::unique); otherwise it splits the index vector
/// into halves and recurses. Width-1 vectors are always unique.
pub trait SimdHistogram: SimdGather + UintCounterpart<Uint = Self> + VecBinding<Scalar: UintScalar> {
    /// Add `amount` to `bins[self[i]]` for every lane. Validates every
    /// index before any bin changes.
    #[inline]
    fn histogram_add(&self, bins: &mut [Self::Scalar], amount: Self::Scalar) -> Result<(), IndexOutOfRange> {
        let indices = TrustedIndices::new(*self, bins.len())?;
        Self::histogram_add_trusted(&indices, bins, amount)
    }

    #[inline]
    fn histogram_increment(&self, bins: &mut [Self::Scalar]) -> Result<(), IndexOutOfRange> {
        self.histogram_add(bins, Self::Scalar::one())
    }

    /// Update through pre-validated indices. Supplied per width: the
    /// narrowest width is a direct update, wider ones split on duplicates.
    fn histogram_add_trusted(
        indices: &TrustedIndices<Self>,
        bins: &mut [Self::Scalar],
        amount: Self::Scalar,
    ) -> Result<(), IndexOutOfRange>;
}
