//! Recursive histogram update.
//!
//! A single gather, add and scatter is only correct when no two lanes name
//! the same bin: with duplicates, every lane reads the same old count and
//! the scatter keeps one increment. The split path halves the index vector
//! until each piece is unique; width 1 always is.

use crate::error::IndexOutOfRange;
use crate::interface::{SimdHistogram, SimdPack};
use crate::registry::{HalfLength, VecBinding};
use crate::scalar::SimdScalar;
use crate::trusted::TrustedIndices;

type Scalar<V> = <V as VecBinding>::Scalar;

/// Gather the current counts, add `amount`, scatter them back. Indices
/// must be unique.
#[inline]
pub fn bulk_add<V: SimdHistogram>(
    indices: &TrustedIndices<V>,
    bins: &mut [Scalar<V>],
    amount: Scalar<V>,
) -> Result<(), IndexOutOfRange> {
    debug_assert!(indices.indices().unique());
    let mut counts = V::zero();
    counts.gather_trusted(bins, indices)?;
    counts.adda_s(amount);
    counts.scatter_trusted(bins, indices)
}

/// Bulk update when the indices are unique, else recurse on both halves.
pub fn split_add<V>(indices: &TrustedIndices<V>, bins: &mut [Scalar<V>], amount: Scalar<V>) -> Result<(), IndexOutOfRange>
where
    V: SimdHistogram + SimdPack,
    <V as HalfLength>::Half: SimdHistogram,
{
    if indices.indices().unique() {
        return bulk_add(indices, bins, amount);
    }

    #[cfg(feature = "debug-logging")]
    log::trace!("histogram: duplicate indices at width {}, splitting", V::LENGTH);

    let (lo, hi) = indices.indices().unpack();
    // SAFETY: the halves hold a subset of the lanes already validated
    // against `bound`.
    let (lo, hi) = unsafe {
        (
            TrustedIndices::new_unchecked(lo, indices.bound()),
            TrustedIndices::new_unchecked(hi, indices.bound()),
        )
    };
    <V as HalfLength>::Half::histogram_add_trusted(&lo, bins, amount)?;
    <V as HalfLength>::Half::histogram_add_trusted(&hi, bins, amount)
}

/// Plain lane-by-lane update, the reference the recursive path must match.
pub fn reference_add<V: SimdHistogram>(indices: &V, bins: &mut [Scalar<V>], amount: Scalar<V>) -> Result<(), IndexOutOfRange> {
    let checked = TrustedIndices::new(*indices, bins.len())?;
    for lane in 0..V::LENGTH {
        let index = checked.lane(lane);
        bins[index] = bins[index].lane_add(amount);
    }
    Ok(())
}
