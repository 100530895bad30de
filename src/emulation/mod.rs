//! Scalar emulation engine
//!
//! One generic algorithm per interface operation, written only against
//! `extract_lane`, `insert_lane` and `LENGTH`. These are the bodies every
//! capability-trait default method forwards to, so any type that supplies
//! the three backend primitives gets a correct (if slow) implementation of
//! the whole operation surface.
//!
//! The functions are public so that backend parity tests can compare an
//! accelerated override against the reference lane loop directly.
//!
//! Masked helpers merge on true: lanes whose mask bit is false are copied
//! from the receiver, never zeroed.

pub mod histogram;
pub mod mask;
pub mod math;
pub mod memory;
pub mod pack;
pub mod reduce;

use crate::interface::{SimdMask, SimdSwizzle, SimdVec};
use crate::registry::VecBinding;
use crate::scalar::SimdScalar;

type Scalar<V> = <V as VecBinding>::Scalar;

/// Build a vector lane by lane from `f(index)`.
#[inline]
pub fn from_fn<V: SimdVec>(mut f: impl FnMut(usize) -> Scalar<V>) -> V {
    let mut out = V::splat(<Scalar<V> as num_traits::Zero>::zero());
    for i in 0..V::LENGTH {
        out.insert_lane(i, f(i));
    }
    out
}

#[inline]
pub fn map<V: SimdVec>(a: V, f: impl Fn(Scalar<V>) -> Scalar<V>) -> V {
    let mut out = a;
    for i in 0..V::LENGTH {
        out.insert_lane(i, f(a.extract_lane(i)));
    }
    out
}

#[inline]
pub fn map_masked<V: SimdVec>(a: V, mask: &V::Mask, f: impl Fn(Scalar<V>) -> Scalar<V>) -> V {
    let mut out = a;
    for i in 0..V::LENGTH {
        if mask.extract_lane(i) {
            out.insert_lane(i, f(a.extract_lane(i)));
        }
    }
    out
}

#[inline]
pub fn zip<V: SimdVec>(a: V, b: V, f: impl Fn(Scalar<V>, Scalar<V>) -> Scalar<V>) -> V {
    let mut out = a;
    for i in 0..V::LENGTH {
        out.insert_lane(i, f(a.extract_lane(i), b.extract_lane(i)));
    }
    out
}

#[inline]
pub fn zip_masked<V: SimdVec>(
    a: V,
    mask: &V::Mask,
    b: V,
    f: impl Fn(Scalar<V>, Scalar<V>) -> Scalar<V>,
) -> V {
    let mut out = a;
    for i in 0..V::LENGTH {
        if mask.extract_lane(i) {
            out.insert_lane(i, f(a.extract_lane(i), b.extract_lane(i)));
        }
    }
    out
}

#[inline]
pub fn zip_scalar<V: SimdVec>(a: V, b: Scalar<V>, f: impl Fn(Scalar<V>, Scalar<V>) -> Scalar<V>) -> V {
    map(a, |x| f(x, b))
}

#[inline]
pub fn zip_scalar_masked<V: SimdVec>(
    a: V,
    mask: &V::Mask,
    b: Scalar<V>,
    f: impl Fn(Scalar<V>, Scalar<V>) -> Scalar<V>,
) -> V {
    map_masked(a, mask, |x| f(x, b))
}

/// Three-operand lane loop for the fused operation family.
#[inline]
pub fn zip3<V: SimdVec>(
    a: V,
    b: V,
    c: V,
    f: impl Fn(Scalar<V>, Scalar<V>, Scalar<V>) -> Scalar<V>,
) -> V {
    let mut out = a;
    for i in 0..V::LENGTH {
        out.insert_lane(i, f(a.extract_lane(i), b.extract_lane(i), c.extract_lane(i)));
    }
    out
}

#[inline]
pub fn zip3_masked<V: SimdVec>(
    a: V,
    mask: &V::Mask,
    b: V,
    c: V,
    f: impl Fn(Scalar<V>, Scalar<V>, Scalar<V>) -> Scalar<V>,
) -> V {
    let mut out = a;
    for i in 0..V::LENGTH {
        if mask.extract_lane(i) {
            out.insert_lane(i, f(a.extract_lane(i), b.extract_lane(i), c.extract_lane(i)));
        }
    }
    out
}

/// Lane loop whose second operand comes from another vector type of the
/// same length, typically the unsigned counterpart holding shift amounts.
#[inline]
pub fn zip_amounts<V: SimdVec, U: SimdVec>(a: V, amounts: &U, f: impl Fn(Scalar<V>, Scalar<U>) -> Scalar<V>) -> V {
    debug_assert_eq!(V::LENGTH, U::LENGTH);
    let mut out = a;
    for i in 0..V::LENGTH {
        out.insert_lane(i, f(a.extract_lane(i), amounts.extract_lane(i)));
    }
    out
}

#[inline]
pub fn zip_amounts_masked<V: SimdVec, U: SimdVec>(
    a: V,
    mask: &V::Mask,
    amounts: &U,
    f: impl Fn(Scalar<V>, Scalar<U>) -> Scalar<V>,
) -> V {
    debug_assert_eq!(V::LENGTH, U::LENGTH);
    let mut out = a;
    for i in 0..V::LENGTH {
        if mask.extract_lane(i) {
            out.insert_lane(i, f(a.extract_lane(i), amounts.extract_lane(i)));
        }
    }
    out
}

#[inline]
pub fn compare<V: SimdVec>(a: &V, b: &V, f: impl Fn(Scalar<V>, Scalar<V>) -> bool) -> V::Mask {
    let mut out = V::Mask::splat(false);
    for i in 0..V::LENGTH {
        out.insert_lane(i, f(a.extract_lane(i), b.extract_lane(i)));
    }
    out
}

#[inline]
pub fn compare_scalar<V: SimdVec>(a: &V, b: Scalar<V>, f: impl Fn(Scalar<V>, Scalar<V>) -> bool) -> V::Mask {
    predicate(a, |x| f(x, b))
}

#[inline]
pub fn predicate<V: SimdVec>(a: &V, f: impl Fn(Scalar<V>) -> bool) -> V::Mask {
    let mut out = V::Mask::splat(false);
    for i in 0..V::LENGTH {
        out.insert_lane(i, f(a.extract_lane(i)));
    }
    out
}

/// True iff `f` holds for every lane pair.
#[inline]
pub fn all_lanes<V: SimdVec>(a: &V, b: &V, f: impl Fn(Scalar<V>, Scalar<V>) -> bool) -> bool {
    (0..V::LENGTH).all(|i| f(a.extract_lane(i), b.extract_lane(i)))
}

/// Lane `i` of the result is `b[i]` where `mask[i]` is true, else `a[i]`.
#[inline]
pub fn blend<V: SimdVec>(a: V, mask: &V::Mask, b: V) -> V {
    zip_masked(a, mask, b, |_, y| y)
}

#[inline]
pub fn blend_scalar<V: SimdVec>(a: V, mask: &V::Mask, b: Scalar<V>) -> V {
    map_masked(a, mask, |_| b)
}

/// Lane `i` of the result is `a[swizzle[i]]`.
#[inline]
pub fn swizzle<V: SimdVec>(a: V, swizzle: &V::Swizzle) -> V {
    debug_assert_eq!(V::LENGTH, <V::Swizzle as SimdSwizzle>::LENGTH);
    let mut out = a;
    for i in 0..V::LENGTH {
        out.insert_lane(i, a.extract_lane(swizzle.extract_lane(i)));
    }
    out
}

/// True iff no two lanes hold equal values. Pairwise, O(LENGTH^2).
#[inline]
pub fn unique<V: SimdVec>(a: &V) -> bool {
    for i in 0..V::LENGTH {
        let x = a.extract_lane(i);
        for j in (i + 1)..V::LENGTH {
            if x == a.extract_lane(j) {
                return false;
            }
        }
    }
    true
}

/// Lane-wise `as` conversion between two vector types of the same length.
#[inline]
pub fn convert<V: SimdVec, W: SimdVec>(a: &V) -> W {
    debug_assert_eq!(V::LENGTH, W::LENGTH);
    from_fn(|i| a.extract_lane(i).cast::<Scalar<W>>())
}
