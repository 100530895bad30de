//! Short-lived views for masked and single-lane compound assignment.
//!
//! `v.masked(m)` and `v.at(i)` borrow the vector mutably for as long as the
//! proxy lives, so a proxy cannot outlive the statement that uses it in any
//! way that matters; it is neither `Clone` nor constructible outside the
//! crate.
//!
//! ```
//! use ferrous_lanes::prelude::*;
//!
//! let mut v = U32x4::from_array([1, 2, 3, 4]);
//! v.masked(M4::from_array([true, false, true, false])).add_s(10);
//! assert_eq!(v.to_array(), [11, 2, 13, 4]);
//!
//! let mut lane = v.at(1).unwrap();
//! lane *= 5;
//! assert!(lane == 10);
//! assert_eq!(v.to_array(), [11, 10, 13, 4]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::interface::{SimdBitwise, SimdVec};
use crate::registry::VecBinding;
use crate::scalar::SimdScalar;
use crate::trusted::TrustedIndex;

type Scalar<V> = <V as VecBinding>::Scalar;

/// A mask bound to a vector. Every write goes through the vector's masked
/// in-place operation, so lanes outside the mask keep their value.
pub struct IntermediateMask<'a, V: SimdVec> {
    mask: V::Mask,
    target: &'a mut V,
}

impl<'a, V: SimdVec> IntermediateMask<'a, V> {
    #[inline]
    pub(crate) fn new(mask: V::Mask, target: &'a mut V) -> Self {
        Self { mask, target }
    }

    #[inline]
    pub fn mask(&self) -> &V::Mask {
        &self.mask
    }

    #[inline]
    pub fn assign(&mut self, b: V) -> &mut Self {
        self.target.assign_m(&self.mask, b);
        self
    }

    #[inline]
    pub fn assign_s(&mut self, b: Scalar<V>) -> &mut Self {
        self.target.assign_ms(&self.mask, b);
        self
    }

    #[inline]
    pub fn add(&mut self, b: V) -> &mut Self {
        self.target.adda_m(&self.mask, b);
        self
    }

    #[inline]
    pub fn add_s(&mut self, b: Scalar<V>) -> &mut Self {
        self.target.adda_ms(&self.mask, b);
        self
    }

    #[inline]
    pub fn sub(&mut self, b: V) -> &mut Self {
        self.target.suba_m(&self.mask, b);
        self
    }

    #[inline]
    pub fn sub_s(&mut self, b: Scalar<V>) -> &mut Self {
        self.target.suba_ms(&self.mask, b);
        self
    }

    #[inline]
    pub fn mul(&mut self, b: V) -> &mut Self {
        self.target.mula_m(&self.mask, b);
        self
    }

    #[inline]
    pub fn mul_s(&mut self, b: Scalar<V>) -> &mut Self {
        self.target.mula_ms(&self.mask, b);
        self
    }

    #[inline]
    pub fn div(&mut self, b: V) -> &mut Self {
        self.target.diva_m(&self.mask, b);
        self
    }

    #[inline]
    pub fn div_s(&mut self, b: Scalar<V>) -> &mut Self {
        self.target.diva_ms(&self.mask, b);
        self
    }
}

impl<V: SimdVec> fmt::Debug for IntermediateMask<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntermediateMask")
            .field("mask", &self.mask)
            .field("target", &self.target)
            .finish()
    }
}

macro_rules! mask_assign {
    ($($bound:ident: $trait:ident, $method:ident => $op:ident;)*) => {
        $(
            impl<V: $bound> $trait<V> for IntermediateMask<'_, V> {
                #[inline]
                fn $method(&mut self, rhs: V) {
                    self.target.$op(&self.mask, rhs);
                }
            }
        )*
    };
}

mask_assign! {
    SimdVec: AddAssign, add_assign => adda_m;
    SimdVec: SubAssign, sub_assign => suba_m;
    SimdVec: MulAssign, mul_assign => mula_m;
    SimdVec: DivAssign, div_assign => diva_m;
    SimdBitwise: BitAndAssign, bitand_assign => banda_m;
    SimdBitwise: BitOrAssign, bitor_assign => bora_m;
    SimdBitwise: BitXorAssign, bitxor_assign => bxora_m;
}

/// One lane of a vector, read and written through the vector's lane
/// primitives.
pub struct IntermediateIndex<'a, V: SimdVec> {
    index: TrustedIndex<V>,
    target: &'a mut V,
}

impl<'a, V: SimdVec> IntermediateIndex<'a, V> {
    #[inline]
    pub(crate) fn new(index: TrustedIndex<V>, target: &'a mut V) -> Self {
        Self { index, target }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index.get()
    }

    #[inline]
    pub fn get(&self) -> Scalar<V> {
        self.target.extract_trusted(self.index)
    }

    #[inline]
    pub fn set(&mut self, value: Scalar<V>) -> &mut Self {
        self.target.insert_trusted(self.index, value);
        self
    }

    #[inline]
    fn update(&mut self, f: impl FnOnce(Scalar<V>) -> Scalar<V>) {
        let value = f(self.get());
        self.set(value);
    }
}

impl<V: SimdVec> fmt::Debug for IntermediateIndex<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntermediateIndex")
            .field("index", &self.index())
            .field("value", &self.get())
            .finish()
    }
}

impl<V: SimdVec> AddAssign<Scalar<V>> for IntermediateIndex<'_, V> {
    #[inline]
    fn add_assign(&mut self, rhs: Scalar<V>) {
        self.update(|x| x.lane_add(rhs));
    }
}

impl<V: SimdVec> SubAssign<Scalar<V>> for IntermediateIndex<'_, V> {
    #[inline]
    fn sub_assign(&mut self, rhs: Scalar<V>) {
        self.update(|x| x.lane_sub(rhs));
    }
}

impl<V: SimdVec> MulAssign<Scalar<V>> for IntermediateIndex<'_, V> {
    #[inline]
    fn mul_assign(&mut self, rhs: Scalar<V>) {
        self.update(|x| x.lane_mul(rhs));
    }
}

impl<V: SimdVec> DivAssign<Scalar<V>> for IntermediateIndex<'_, V> {
    #[inline]
    fn div_assign(&mut self, rhs: Scalar<V>) {
        self.update(|x| x.lane_div(rhs));
    }
}

/// Arithmetic against a raw scalar reads the lane and returns a scalar; the
/// vector is not written.
macro_rules! index_scalar_ops {
    ($($trait:ident, $method:ident => $lane:ident;)*) => {
        $(
            impl<V: SimdVec> $trait<Scalar<V>> for IntermediateIndex<'_, V> {
                type Output = Scalar<V>;

                #[inline]
                fn $method(self, rhs: Scalar<V>) -> Scalar<V> {
                    self.get().$lane(rhs)
                }
            }
        )*
    };
}

index_scalar_ops! {
    Add, add => lane_add;
    Sub, sub => lane_sub;
    Mul, mul => lane_mul;
    Div, div => lane_div;
}

impl<V: SimdVec> PartialEq<Scalar<V>> for IntermediateIndex<'_, V> {
    #[inline]
    fn eq(&self, other: &Scalar<V>) -> bool {
        self.get() == *other
    }
}

impl<V: SimdVec> PartialOrd<Scalar<V>> for IntermediateIndex<'_, V> {
    #[inline]
    fn partial_cmp(&self, other: &Scalar<V>) -> Option<Ordering> {
        self.get().partial_cmp(other)
    }
}

/// Proxy-to-proxy comparisons and arithmetic, one impl per vector type. A
/// single generic impl would overlap with the scalar forms above.
macro_rules! index_ops {
    ($($vec:ident)*) => {
        $(
            impl<'b> PartialEq<$crate::proxy::IntermediateIndex<'b, $vec>>
                for $crate::proxy::IntermediateIndex<'_, $vec>
            {
                #[inline]
                fn eq(&self, other: &$crate::proxy::IntermediateIndex<'b, $vec>) -> bool {
                    self.get() == other.get()
                }
            }

            impl<'b> PartialOrd<$crate::proxy::IntermediateIndex<'b, $vec>>
                for $crate::proxy::IntermediateIndex<'_, $vec>
            {
                #[inline]
                fn partial_cmp(
                    &self,
                    other: &$crate::proxy::IntermediateIndex<'b, $vec>,
                ) -> Option<::std::cmp::Ordering> {
                    self.get().partial_cmp(&other.get())
                }
            }

            $crate::proxy::index_ops!(@arith $vec:
                Add, add => lane_add;
                Sub, sub => lane_sub;
                Mul, mul => lane_mul;
                Div, div => lane_div;
            );
        )*
    };
    (@arith $vec:ident: $($trait:ident, $method:ident => $lane:ident;)*) => {
        $(
            impl<'b> ::std::ops::$trait<$crate::proxy::IntermediateIndex<'b, $vec>>
                for $crate::proxy::IntermediateIndex<'_, $vec>
            {
                type Output = <$vec as $crate::registry::VecBinding>::Scalar;

                #[inline]
                fn $method(self, rhs: $crate::proxy::IntermediateIndex<'b, $vec>) -> Self::Output {
                    $crate::scalar::SimdScalar::$lane(self.get(), rhs.get())
                }
            }
        )*
    };
}

pub(crate) use index_ops;
