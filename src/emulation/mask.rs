//! Lane loops for mask types.

use crate::interface::SimdMask;

#[inline]
pub fn mask_from_fn<M: SimdMask>(mut f: impl FnMut(usize) -> bool) -> M {
    let mut out = M::splat(false);
    for i in 0..M::LENGTH {
        out.insert_lane(i, f(i));
    }
    out
}

#[inline]
pub fn mask_map<M: SimdMask>(a: M, f: impl Fn(bool) -> bool) -> M {
    mask_from_fn(|i| f(a.extract_lane(i)))
}

#[inline]
pub fn mask_zip<M: SimdMask>(a: M, b: M, f: impl Fn(bool, bool) -> bool) -> M {
    mask_from_fn(|i| f(a.extract_lane(i), b.extract_lane(i)))
}

#[inline]
pub fn mask_fold<M: SimdMask>(a: &M, init: bool, f: impl Fn(bool, bool) -> bool) -> bool {
    (0..M::LENGTH).fold(init, |acc, i| f(acc, a.extract_lane(i)))
}

#[inline]
pub fn mask_to_bitmask<M: SimdMask>(a: &M) -> u128 {
    (0..M::LENGTH)
        .filter(|&i| a.extract_lane(i))
        .fold(0u128, |bits, i| bits | (1u128 << i))
}
