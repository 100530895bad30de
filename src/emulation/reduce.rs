//! Horizontal folds over lanes 0..LENGTH, left to right.

use crate::interface::{SimdMask, SimdVec};
use crate::registry::VecBinding;

type Scalar<V> = <V as VecBinding>::Scalar;

/// Fold starting from lane 0.
#[inline]
pub fn fold_lanes<V: SimdVec>(v: &V, f: impl Fn(Scalar<V>, Scalar<V>) -> Scalar<V>) -> Scalar<V> {
    (1..V::LENGTH).fold(v.extract_lane(0), |acc, i| f(acc, v.extract_lane(i)))
}

/// Fold every lane into `init`.
#[inline]
pub fn fold_from<V: SimdVec>(v: &V, init: Scalar<V>, f: impl Fn(Scalar<V>, Scalar<V>) -> Scalar<V>) -> Scalar<V> {
    (0..V::LENGTH).fold(init, |acc, i| f(acc, v.extract_lane(i)))
}

/// Fold the lanes whose mask bit is set into `init`. With an all-false
/// mask the result is `init`.
#[inline]
pub fn fold_masked<V: SimdVec>(
    v: &V,
    mask: &V::Mask,
    init: Scalar<V>,
    f: impl Fn(Scalar<V>, Scalar<V>) -> Scalar<V>,
) -> Scalar<V> {
    (0..V::LENGTH)
        .filter(|&i| mask.extract_lane(i))
        .fold(init, |acc, i| f(acc, v.extract_lane(i)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{F32x4, M4, U8x4};

    #[test]
    fn test_fold_order_is_left_to_right() {
        let v = F32x4::from_array([1.0, 2.0, 3.0, 4.0]);
        let trace = fold_lanes(&v, |acc, x| acc * 10.0 + x);
        assert_eq!(trace, 1234.0);
    }

    #[test]
    fn test_fold_masked_all_false_is_init() {
        let v = U8x4::from_array([1, 2, 3, 4]);
        assert_eq!(fold_masked(&v, &M4::splat(false), 0, |a: u8, b| a.wrapping_add(b)), 0);
        assert_eq!(fold_masked(&v, &M4::from_array([false, true, false, true]), 0, |a: u8, b| a + b), 6);
    }
}
