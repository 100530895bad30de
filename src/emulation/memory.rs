//! Contiguous and indexed memory access.
//!
//! Every checked function validates all participating lanes before the
//! first write, so a failed call changes nothing.

use crate::error::IndexOutOfRange;
use crate::interface::{SimdMask, SimdVec};
use crate::registry::VecBinding;
use crate::scalar::{SimdScalar, UintScalar};
use crate::trusted::TrustedIndices;

type Scalar<V> = <V as VecBinding>::Scalar;

/// Whether `ptr` satisfies `alignment`. A misaligned pointer is reported
/// as a warning in debug builds or with the `debug-logging` feature; it
/// never aborts.
#[inline]
pub fn check_alignment<T>(ptr: *const T, alignment: usize, op: &'static str) -> bool {
    let aligned = ptr.addr() % alignment == 0;
    if !aligned && (cfg!(debug_assertions) || cfg!(feature = "debug-logging")) {
        log::warn!("{op}: pointer {ptr:p} is not aligned to {alignment} bytes");
    }
    aligned
}

#[inline]
fn fits(len: usize, lanes: usize) -> Result<(), IndexOutOfRange> {
    if len >= lanes {
        Ok(())
    } else {
        Err(IndexOutOfRange::new(lanes - 1, len))
    }
}

/// First true lane that does not fit in `len`, if any.
#[inline]
fn masked_fits<M: SimdMask>(mask: &M, len: usize) -> Result<(), IndexOutOfRange> {
    (len..M::LENGTH)
        .find(|&i| mask.extract_lane(i))
        .map_or(Ok(()), |i| Err(IndexOutOfRange::new(i, len)))
}

// ===== Contiguous =====

pub fn load<V: SimdVec>(dst: &mut V, src: &[Scalar<V>]) -> Result<(), IndexOutOfRange> {
    fits(src.len(), V::LENGTH)?;
    for (i, &value) in src.iter().take(V::LENGTH).enumerate() {
        dst.insert_lane(i, value);
    }
    Ok(())
}

pub fn load_masked<V: SimdVec>(dst: &mut V, mask: &V::Mask, src: &[Scalar<V>]) -> Result<(), IndexOutOfRange> {
    masked_fits(mask, src.len())?;
    for (i, &value) in src.iter().take(V::LENGTH).enumerate() {
        if mask.extract_lane(i) {
            dst.insert_lane(i, value);
        }
    }
    Ok(())
}

pub fn store<V: SimdVec>(src: &V, dst: &mut [Scalar<V>]) -> Result<(), IndexOutOfRange> {
    fits(dst.len(), V::LENGTH)?;
    for (i, slot) in dst.iter_mut().take(V::LENGTH).enumerate() {
        *slot = src.extract_lane(i);
    }
    Ok(())
}

pub fn store_masked<V: SimdVec>(src: &V, mask: &V::Mask, dst: &mut [Scalar<V>]) -> Result<(), IndexOutOfRange> {
    masked_fits(mask, dst.len())?;
    for (i, slot) in dst.iter_mut().take(V::LENGTH).enumerate() {
        if mask.extract_lane(i) {
            *slot = src.extract_lane(i);
        }
    }
    Ok(())
}

// ===== Aligned pointers =====

/// # Safety
///
/// `src` must be valid for reads of `V::LENGTH` scalars.
pub unsafe fn load_aligned<V: SimdVec>(dst: &mut V, src: *const Scalar<V>) {
    check_alignment(src, V::ALIGNMENT, "loada");
    for i in 0..V::LENGTH {
        // SAFETY: the caller guarantees `LENGTH` readable scalars at `src`.
        dst.insert_lane(i, unsafe { src.add(i).read_unaligned() });
    }
}

/// # Safety
///
/// `src` must be valid for reads at every lane where `mask` is true.
pub unsafe fn load_aligned_masked<V: SimdVec>(dst: &mut V, mask: &V::Mask, src: *const Scalar<V>) {
    check_alignment(src, V::ALIGNMENT, "loada_m");
    for i in 0..V::LENGTH {
        if mask.extract_lane(i) {
            // SAFETY: lane `i` is selected, so the caller guarantees it is readable.
            dst.insert_lane(i, unsafe { src.add(i).read_unaligned() });
        }
    }
}

/// # Safety
///
/// `dst` must be valid for writes of `V::LENGTH` scalars.
pub unsafe fn store_aligned<V: SimdVec>(src: &V, dst: *mut Scalar<V>) {
    check_alignment(dst.cast_const(), V::ALIGNMENT, "storea");
    for i in 0..V::LENGTH {
        // SAFETY: the caller guarantees `LENGTH` writable scalars at `dst`.
        unsafe { dst.add(i).write_unaligned(src.extract_lane(i)) };
    }
}

/// # Safety
///
/// `dst` must be valid for writes at every lane where `mask` is true.
pub unsafe fn store_aligned_masked<V: SimdVec>(src: &V, mask: &V::Mask, dst: *mut Scalar<V>) {
    check_alignment(dst.cast_const(), V::ALIGNMENT, "storea_m");
    for i in 0..V::LENGTH {
        if mask.extract_lane(i) {
            // SAFETY: lane `i` is selected, so the caller guarantees it is writable.
            unsafe { dst.add(i).write_unaligned(src.extract_lane(i)) };
        }
    }
}

// ===== Gather and scatter =====

#[inline]
fn lane_index<U: SimdVec>(indices: &U, lane: usize, len: usize) -> Result<usize, IndexOutOfRange> {
    let index = indices.extract_lane(lane).to_index().unwrap_or(usize::MAX);
    IndexOutOfRange::check(index, len)
}

fn validate<U: SimdVec>(indices: &U, mask: Option<&U::Mask>, len: usize) -> Result<(), IndexOutOfRange> {
    for lane in 0..U::LENGTH {
        if mask.is_none_or(|m| m.extract_lane(lane)) {
            lane_index(indices, lane, len)?;
        }
    }
    Ok(())
}

pub fn gather<V: SimdVec, U: SimdVec<Mask = V::Mask>>(
    dst: &mut V,
    base: &[Scalar<V>],
    indices: &U,
) -> Result<(), IndexOutOfRange> {
    validate(indices, None, base.len())?;
    for lane in 0..V::LENGTH {
        dst.insert_lane(lane, base[lane_index(indices, lane, base.len())?]);
    }
    Ok(())
}

pub fn gather_masked<V: SimdVec, U: SimdVec<Mask = V::Mask>>(
    dst: &mut V,
    mask: &V::Mask,
    base: &[Scalar<V>],
    indices: &U,
) -> Result<(), IndexOutOfRange> {
    validate(indices, Some(mask), base.len())?;
    for lane in 0..V::LENGTH {
        if mask.extract_lane(lane) {
            dst.insert_lane(lane, base[lane_index(indices, lane, base.len())?]);
        }
    }
    Ok(())
}

pub fn scatter<V: SimdVec, U: SimdVec<Mask = V::Mask>>(
    src: &V,
    base: &mut [Scalar<V>],
    indices: &U,
) -> Result<(), IndexOutOfRange> {
    validate(indices, None, base.len())?;
    for lane in 0..V::LENGTH {
        let index = lane_index(indices, lane, base.len())?;
        base[index] = src.extract_lane(lane);
    }
    Ok(())
}

pub fn scatter_masked<V: SimdVec, U: SimdVec<Mask = V::Mask>>(
    src: &V,
    mask: &V::Mask,
    base: &mut [Scalar<V>],
    indices: &U,
) -> Result<(), IndexOutOfRange> {
    validate(indices, Some(mask), base.len())?;
    for lane in 0..V::LENGTH {
        if mask.extract_lane(lane) {
            let index = lane_index(indices, lane, base.len())?;
            base[index] = src.extract_lane(lane);
        }
    }
    Ok(())
}

pub fn gather_trusted<V, U>(dst: &mut V, base: &[Scalar<V>], indices: &TrustedIndices<U>) -> Result<(), IndexOutOfRange>
where
    V: SimdVec,
    U: SimdVec + VecBinding<Scalar: UintScalar>,
{
    indices.check_len(base.len())?;
    for lane in 0..V::LENGTH {
        // SAFETY: every lane is below `bound`, and `bound <= base.len()` was just checked.
        dst.insert_lane(lane, unsafe { *base.get_unchecked(indices.lane(lane)) });
    }
    Ok(())
}

pub fn gather_trusted_masked<V, U>(
    dst: &mut V,
    mask: &V::Mask,
    base: &[Scalar<V>],
    indices: &TrustedIndices<U>,
) -> Result<(), IndexOutOfRange>
where
    V: SimdVec,
    U: SimdVec + VecBinding<Scalar: UintScalar>,
{
    indices.check_len(base.len())?;
    for lane in 0..V::LENGTH {
        if mask.extract_lane(lane) {
            // SAFETY: as in `gather_trusted`.
            dst.insert_lane(lane, unsafe { *base.get_unchecked(indices.lane(lane)) });
        }
    }
    Ok(())
}

pub fn scatter_trusted<V, U>(src: &V, base: &mut [Scalar<V>], indices: &TrustedIndices<U>) -> Result<(), IndexOutOfRange>
where
    V: SimdVec,
    U: SimdVec + VecBinding<Scalar: UintScalar>,
{
    indices.check_len(base.len())?;
    for lane in 0..V::LENGTH {
        // SAFETY: every lane is below `bound`, and `bound <= base.len()` was just checked.
        unsafe { *base.get_unchecked_mut(indices.lane(lane)) = src.extract_lane(lane) };
    }
    Ok(())
}

pub fn scatter_trusted_masked<V, U>(
    src: &V,
    mask: &V::Mask,
    base: &mut [Scalar<V>],
    indices: &TrustedIndices<U>,
) -> Result<(), IndexOutOfRange>
where
    V: SimdVec,
    U: SimdVec + VecBinding<Scalar: UintScalar>,
{
    indices.check_len(base.len())?;
    for lane in 0..V::LENGTH {
        if mask.extract_lane(lane) {
            // SAFETY: as in `scatter_trusted`.
            unsafe { *base.get_unchecked_mut(indices.lane(lane)) = src.extract_lane(lane) };
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{I32x4, M4, U32x4};

    #[test]
    fn test_load_short_slice_fails_without_writing() {
        let mut v = U32x4::splat(7);
        let err = load(&mut v, &[1, 2, 3]).unwrap_err();
        assert_eq!(err, IndexOutOfRange::new(3, 3));
        assert_eq!(v, U32x4::splat(7));
    }

    #[test]
    fn test_masked_store_only_needs_selected_lanes() {
        let v = U32x4::from_array([1, 2, 3, 4]);
        let mut out = [0u32; 2];
        store_masked(&v, &M4::from_array([true, true, false, false]), &mut out).unwrap();
        assert_eq!(out, [1, 2]);
        let err = store_masked(&v, &M4::from_array([true, false, false, true]), &mut out).unwrap_err();
        assert_eq!(err, IndexOutOfRange::new(3, 2));
    }

    #[test]
    fn test_scatter_is_all_or_nothing() {
        let v = I32x4::from_array([10, 20, 30, 40]);
        let mut buf = [0i32; 4];
        let err = scatter(&v, &mut buf, &U32x4::from_array([0, 1, 2, 4])).unwrap_err();
        assert_eq!(err, IndexOutOfRange::new(4, 4));
        assert_eq!(buf, [0; 4]);
    }

    #[test]
    fn test_scatter_duplicates_last_write_wins() {
        let v = I32x4::from_array([10, 20, 30, 40]);
        let mut buf = [0i32; 2];
        scatter(&v, &mut buf, &U32x4::from_array([1, 0, 1, 0])).unwrap();
        assert_eq!(buf, [40, 30]);
    }

    #[test]
    fn test_check_alignment() {
        let data = [0u64; 4];
        assert!(check_alignment(data.as_ptr(), 8, "loada"));
        let byte = data.as_ptr().cast::<u8>();
        assert!(!check_alignment(byte.wrapping_add(1), 8, "loada"));
    }
}
