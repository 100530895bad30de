//! Half/full width conversion. The low half is lanes `[0, LENGTH / 2)`.

use crate::interface::SimdVec;
use crate::registry::HalfLength;

#[inline]
pub fn from_halves<V: SimdVec + HalfLength>(lo: &V::Half, hi: &V::Half) -> V {
    let half = <V::Half as crate::registry::VecBinding>::LENGTH;
    super::from_fn(|i| if i < half { lo.extract_lane(i) } else { hi.extract_lane(i - half) })
}

#[inline]
pub fn write_low<V: SimdVec + HalfLength>(dst: &mut V, lo: &V::Half) {
    for i in 0..V::LENGTH / 2 {
        dst.insert_lane(i, lo.extract_lane(i));
    }
}

#[inline]
pub fn write_high<V: SimdVec + HalfLength>(dst: &mut V, hi: &V::Half) {
    let half = V::LENGTH / 2;
    for i in 0..half {
        dst.insert_lane(half + i, hi.extract_lane(i));
    }
}

#[inline]
pub fn read_low<V: SimdVec + HalfLength>(src: &V) -> V::Half {
    super::from_fn(|i| src.extract_lane(i))
}

#[inline]
pub fn read_high<V: SimdVec + HalfLength>(src: &V) -> V::Half {
    let half = V::LENGTH / 2;
    super::from_fn(|i| src.extract_lane(half + i))
}
