//! Capability interfaces
//!
//! Each capability is a trait whose methods all have default bodies routed
//! through [`crate::emulation`]. A concrete type only has to supply
//! `splat`, `extract_lane` and `insert_lane`; a backend may override any
//! other method in the same `impl` block and every default that uses it
//! internally picks the override up, because defaults call through `self`.
//!
//! ## Operation families
//!
//! Arithmetic, bitwise, shift and math operations come in systematic
//! families. For a binary operation `op`:
//!
//! | method      | operands              | result            |
//! |-------------|-----------------------|-------------------|
//! | `op`        | vector                | new vector        |
//! | `op_m`      | mask, vector          | new vector        |
//! | `op_s`      | scalar                | new vector        |
//! | `op_ms`     | mask, scalar          | new vector        |
//! | `opa`       | vector                | in place          |
//! | `opa_m`     | mask, vector          | in place          |
//! | `opa_s`     | scalar                | in place          |
//! | `opa_ms`    | mask, scalar          | in place          |
//!
//! Masked forms merge on true: lanes whose mask bit is false keep the
//! receiver's value. Unary operations have `op`, `op_m`, `opa`, `opa_m`.
//!
//! ## Capabilities
//!
//! - [`SimdVec`]: construction, lane access, memory, blend, swizzle,
//!   arithmetic, comparisons, reductions. Every vector type.
//! - [`SimdBitwise`], [`SimdInteger`], [`SimdShift`]: integer lanes.
//! - [`SimdSign`]: signed integer and float lanes only.
//! - [`SimdGather`]: indexed memory access through the unsigned counterpart.
//! - [`SimdPack`]: types with a half-length sibling.
//! - [`SimdFloat`]: float lanes.
//! - [`SimdHistogram`]: unsigned index vectors.
//! - [`SimdMask`], [`SimdSwizzle`]: mask and permutation types.

/// Emits the eight methods of a binary operation family inside a trait.
macro_rules! binary_family {
    (
        $(#[$meta:meta])*
        $op:ident, $op_m:ident, $op_s:ident, $op_ms:ident,
        $opa:ident, $opa_m:ident, $opa_s:ident, $opa_ms:ident => $lane:expr
    ) => {
        $(#[$meta])*
        #[inline]
        fn $op(self, b: Self) -> Self {
            $crate::emulation::zip(self, b, $lane)
        }

        #[doc = concat!("Masked [`", stringify!($op), "`](Self::", stringify!($op), "); false lanes keep `self`.")]
        #[inline]
        fn $op_m(self, mask: &Self::Mask, b: Self) -> Self {
            $crate::emulation::zip_masked(self, mask, b, $lane)
        }

        #[doc = concat!("[`", stringify!($op), "`](Self::", stringify!($op), ") with a broadcast scalar operand.")]
        #[inline]
        fn $op_s(self, b: Self::Scalar) -> Self {
            $crate::emulation::zip_scalar(self, b, $lane)
        }

        #[doc = concat!("Masked [`", stringify!($op_s), "`](Self::", stringify!($op_s), ").")]
        #[inline]
        fn $op_ms(self, mask: &Self::Mask, b: Self::Scalar) -> Self {
            $crate::emulation::zip_scalar_masked(self, mask, b, $lane)
        }

        #[doc = concat!("In-place [`", stringify!($op), "`](Self::", stringify!($op), ").")]
        #[inline]
        fn $opa(&mut self, b: Self) -> &mut Self {
            *self = (*self).$op(b);
            self
        }

        #[inline]
        fn $opa_m(&mut self, mask: &Self::Mask, b: Self) -> &mut Self {
            *self = (*self).$op_m(mask, b);
            self
        }

        #[inline]
        fn $opa_s(&mut self, b: Self::Scalar) -> &mut Self {
            *self = (*self).$op_s(b);
            self
        }

        #[inline]
        fn $opa_ms(&mut self, mask: &Self::Mask, b: Self::Scalar) -> &mut Self {
            *self = (*self).$op_ms(mask, b);
            self
        }
    };
}

/// Emits the four methods of a unary operation family inside a trait.
macro_rules! unary_family {
    (
        $(#[$meta:meta])*
        $op:ident, $op_m:ident, $opa:ident, $opa_m:ident => $lane:expr
    ) => {
        $(#[$meta])*
        #[inline]
        fn $op(self) -> Self {
            $crate::emulation::map(self, $lane)
        }

        #[doc = concat!("Masked [`", stringify!($op), "`](Self::", stringify!($op), "); false lanes keep `self`.")]
        #[inline]
        fn $op_m(self, mask: &Self::Mask) -> Self {
            $crate::emulation::map_masked(self, mask, $lane)
        }

        #[inline]
        fn $opa(&mut self) -> &mut Self {
            *self = (*self).$op();
            self
        }

        #[inline]
        fn $opa_m(&mut self, mask: &Self::Mask) -> &mut Self {
            *self = (*self).$op_m(mask);
            self
        }
    };
}

/// Emits a lane comparison with vector and scalar forms.
macro_rules! compare_family {
    ($(#[$meta:meta])* $op:ident, $op_s:ident => $lane:expr) => {
        $(#[$meta])*
        #[inline]
        fn $op(self, b: Self) -> Self::Mask {
            $crate::emulation::compare(&self, &b, $lane)
        }

        #[inline]
        fn $op_s(self, b: Self::Scalar) -> Self::Mask {
            $crate::emulation::compare_scalar(&self, b, $lane)
        }
    };
}

/// Emits a horizontal reduction with masked and scalar-seeded forms.
///
/// `_s` folds the scalar in as the initial accumulator, `_m` starts from
/// the identity and skips false lanes.
macro_rules! reduce_family {
    (
        $(#[$meta:meta])*
        $op:ident, $op_m:ident, $op_s:ident, $op_ms:ident => $lane:expr, identity = $identity:expr
    ) => {
        $(#[$meta])*
        #[inline]
        fn $op(&self) -> Self::Scalar {
            $crate::emulation::reduce::fold_lanes(self, $lane)
        }

        #[inline]
        fn $op_m(&self, mask: &Self::Mask) -> Self::Scalar {
            $crate::emulation::reduce::fold_masked(self, mask, $identity, $lane)
        }

        #[inline]
        fn $op_s(&self, init: Self::Scalar) -> Self::Scalar {
            $crate::emulation::reduce::fold_from(self, init, $lane)
        }

        #[inline]
        fn $op_ms(&self, mask: &Self::Mask, init: Self::Scalar) -> Self::Scalar {
            $crate::emulation::reduce::fold_masked(self, mask, init, $lane)
        }
    };
}

/// Emits a shift or rotate family. The vector forms take per-lane amounts
/// in the unsigned counterpart, the scalar forms one `u32` amount.
macro_rules! shift_family {
    (
        $(#[$meta:meta])*
        $op:ident, $op_m:ident, $op_s:ident, $op_ms:ident,
        $opa:ident, $opa_m:ident, $opa_s:ident, $opa_ms:ident => $lane:path
    ) => {
        $(#[$meta])*
        #[inline]
        fn $op(self, amount: Self::Uint) -> Self {
            $crate::emulation::zip_amounts(self, &amount, |x, n| $lane(x, n.to_shift_amount()))
        }

        #[inline]
        fn $op_m(self, mask: &Self::Mask, amount: Self::Uint) -> Self {
            $crate::emulation::zip_amounts_masked(self, mask, &amount, |x, n| $lane(x, n.to_shift_amount()))
        }

        #[inline]
        fn $op_s(self, amount: u32) -> Self {
            $crate::emulation::map(self, |x| $lane(x, amount))
        }

        #[inline]
        fn $op_ms(self, mask: &Self::Mask, amount: u32) -> Self {
            $crate::emulation::map_masked(self, mask, |x| $lane(x, amount))
        }

        #[inline]
        fn $opa(&mut self, amount: Self::Uint) -> &mut Self {
            *self = (*self).$op(amount);
            self
        }

        #[inline]
        fn $opa_m(&mut self, mask: &Self::Mask, amount: Self::Uint) -> &mut Self {
            *self = (*self).$op_m(mask, amount);
            self
        }

        #[inline]
        fn $opa_s(&mut self, amount: u32) -> &mut Self {
            *self = (*self).$op_s(amount);
            self
        }

        #[inline]
        fn $opa_ms(&mut self, mask: &Self::Mask, amount: u32) -> &mut Self {
            *self = (*self).$op_ms(mask, amount);
            self
        }
    };
}

/// Emits a lane predicate returning a mask.
macro_rules! predicate {
    ($(#[$meta:meta])* $op:ident => $lane:expr) => {
        $(#[$meta])*
        #[inline]
        fn $op(self) -> Self::Mask {
            $crate::emulation::predicate(&self, $lane)
        }
    };
}

mod base;
mod bitwise;
mod convert;
mod float;
mod gather;
mod histogram;
mod integer;
mod mask;
mod pack;
mod shift;
mod sign;
mod swizzle;

pub use base::SimdVec;
pub use bitwise::SimdBitwise;
pub use convert::SimdConvert;
pub use float::SimdFloat;
pub use gather::SimdGather;
pub use histogram::SimdHistogram;
pub use integer::SimdInteger;
pub use mask::SimdMask;
pub use pack::SimdPack;
pub use shift::SimdShift;
pub use sign::SimdSign;
pub use swizzle::SimdSwizzle;

use crate::registry::{IntCounterpart, UintCounterpart};

/// Everything an unsigned integer vector supports.
pub trait SimdUintVec:
    SimdInteger + SimdShift + SimdGather + SimdHistogram + SimdConvert + IntCounterpart
{
}

impl<T> SimdUintVec for T where
    T: SimdInteger + SimdShift + SimdGather + SimdHistogram + SimdConvert + IntCounterpart
{
}

/// Everything a signed integer vector supports.
pub trait SimdIntVec:
    SimdInteger + SimdSign + SimdShift + SimdGather + SimdConvert + UintCounterpart
{
}

impl<T> SimdIntVec for T where
    T: SimdInteger + SimdSign + SimdShift + SimdGather + SimdConvert + UintCounterpart
{
}

/// Everything a float vector supports.
pub trait SimdFloatVec:
    SimdFloat + SimdGather + SimdConvert + IntCounterpart + UintCounterpart
{
}

impl<T> SimdFloatVec for T where
    T: SimdFloat + SimdGather + SimdConvert + IntCounterpart + UintCounterpart
{
}
