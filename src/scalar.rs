//! Lane scalar types
//!
//! Every vector lane holds one of `u8 u16 u32 u64 i8 i16 i32 i64 f32 f64`.
//! The traits here pin down the lane-level semantics that the emulation
//! engine applies one lane at a time, so that a backend override and the
//! emulated default agree bit for bit.
//!
//! ## Lane semantics
//!
//! - Integer `add`/`sub`/`mul` wrap, matching `paddd`/`vaddq` style
//!   instructions.
//! - Integer division never traps: `x / 0` is all ones for unsigned lanes
//!   and `-1` for signed lanes, `x % 0 == x`, and `MIN / -1` wraps to `MIN`.
//! - `lane_min`/`lane_max` return the second operand when the comparison is
//!   unordered or equal (`minps`/`maxps` behaviour for NaN and signed zero).
//! - Shifts by at least the bit width give 0, except arithmetic right
//!   shifts of signed lanes which fill with the sign bit.
//! - Rotates take the amount modulo the bit width.

use num_traits::{Bounded, Float, NumCast, One, PrimInt, Signed, Unsigned, Zero};
use std::fmt::Debug;
use std::hash::Hash;

/// Which family a lane scalar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Unsigned,
    Signed,
    Float,
}

/// A lane value widened to 64 bits without changing its family.
///
/// Conversions between lane types go through this so that every pair of
/// scalars converts with plain `as` semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaneValue {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

/// Scalar that may be stored in a vector lane.
pub trait SimdScalar:
    Copy + Default + Debug + PartialEq + PartialOrd + Send + Sync + 'static + Zero + One + Bounded + NumCast
{
    /// Width of the scalar in bits.
    const BITS: u32;
    const KIND: ScalarKind;
    /// Identity of `hmax`: `MIN` for integers, negative infinity for floats.
    const LOWEST: Self;
    /// Identity of `hmin`: `MAX` for integers, positive infinity for floats.
    const HIGHEST: Self;

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
    fn lane_div(self, rhs: Self) -> Self;

    #[inline]
    fn lane_min(self, rhs: Self) -> Self {
        if self < rhs { self } else { rhs }
    }

    #[inline]
    fn lane_max(self, rhs: Self) -> Self {
        if self > rhs { self } else { rhs }
    }

    fn to_lane_value(self) -> LaneValue;
    fn from_lane_value(value: LaneValue) -> Self;

    /// Convert with `as` semantics (wrapping between integers, saturating
    /// from float to integer, NaN to 0).
    #[inline]
    fn cast<T: SimdScalar>(self) -> T {
        T::from_lane_value(self.to_lane_value())
    }

    /// Raw bit pattern, zero extended. Used for bit-identical comparisons.
    fn to_bits_u64(self) -> u64;

    /// The lane as a memory index, when it is a non-negative integer that
    /// fits in `usize`.
    fn to_index(self) -> Option<usize>;
}

/// Integer lane scalar.
pub trait IntScalar: SimdScalar + PrimInt + Eq + Ord + Hash {
    /// Identity of `hband`.
    const ALL_ONES: Self;

    fn lane_rem(self, rhs: Self) -> Self;
    fn lane_sadd(self, rhs: Self) -> Self;
    fn lane_ssub(self, rhs: Self) -> Self;
    fn lane_shl(self, amount: u32) -> Self;
    fn lane_shr(self, amount: u32) -> Self;

    #[inline]
    fn lane_rotl(self, amount: u32) -> Self {
        self.rotate_left(amount % Self::BITS)
    }

    #[inline]
    fn lane_rotr(self, amount: u32) -> Self {
        self.rotate_right(amount % Self::BITS)
    }

    #[inline]
    fn lane_and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline]
    fn lane_or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline]
    fn lane_xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    /// `!self & rhs`, the `pandn` operand order.
    #[inline]
    fn lane_andnot(self, rhs: Self) -> Self {
        !self & rhs
    }

    #[inline]
    fn lane_not(self) -> Self {
        !self
    }

    /// Saturating conversion of a lane to a shift amount.
    #[inline]
    fn to_shift_amount(self) -> u32 {
        match self.to_lane_value() {
            LaneValue::Unsigned(u) => u32::try_from(u).unwrap_or(u32::MAX),
            LaneValue::Signed(i) => u32::try_from(i.max(0)).unwrap_or(u32::MAX),
            LaneValue::Float(_) => 0,
        }
    }
}

/// Unsigned integer lane scalar. Index vectors use these lanes.
pub trait UintScalar: IntScalar + Unsigned {
    /// The lane as a memory index, truncating on targets where it does not
    /// fit. Only meaningful for lanes already checked with
    /// [`SimdScalar::to_index`].
    fn as_index(self) -> usize;
}

/// Lane scalar with a sign: signed integers and floats.
pub trait SignedScalar: SimdScalar + Signed {
    fn lane_neg(self) -> Self;
    fn lane_abs(self) -> Self;
    /// Magnitude of `self` with the sign of `sign`.
    fn lane_copysign(self, sign: Self) -> Self;
}

/// Floating point lane scalar.
pub trait FloatScalar: SignedScalar + Float {
    #[inline]
    fn lane_is_subnormal(self) -> bool {
        self.classify() == std::num::FpCategory::Subnormal
    }

    /// Reciprocal square root, computed as `1 / sqrt(x)`.
    #[inline]
    fn lane_rsqrt(self) -> Self {
        <Self as One>::one() / self.sqrt()
    }
}

macro_rules! impl_uint_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl SimdScalar for $t {
                const BITS: u32 = <$t>::BITS;
                const KIND: ScalarKind = ScalarKind::Unsigned;
                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;

                #[inline]
                fn lane_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn lane_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn lane_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn lane_div(self, rhs: Self) -> Self {
                    self.checked_div(rhs).unwrap_or(<$t>::MAX)
                }

                #[inline]
                fn to_lane_value(self) -> LaneValue {
                    LaneValue::Unsigned(self as u64)
                }

                #[inline]
                fn from_lane_value(value: LaneValue) -> Self {
                    match value {
                        LaneValue::Unsigned(u) => u as $t,
                        LaneValue::Signed(i) => i as $t,
                        LaneValue::Float(f) => f as $t,
                    }
                }

                #[inline]
                fn to_bits_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }

            impl IntScalar for $t {
                const ALL_ONES: Self = <$t>::MAX;

                #[inline]
                fn lane_rem(self, rhs: Self) -> Self {
                    self.checked_rem(rhs).unwrap_or(self)
                }

                #[inline]
                fn lane_sadd(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }

                #[inline]
                fn lane_ssub(self, rhs: Self) -> Self {
                    self.saturating_sub(rhs)
                }

                #[inline]
                fn lane_shl(self, amount: u32) -> Self {
                    self.checked_shl(amount).unwrap_or(0)
                }

                #[inline]
                fn lane_shr(self, amount: u32) -> Self {
                    self.checked_shr(amount).unwrap_or(0)
                }
            }

            impl UintScalar for $t {
                #[inline]
                fn as_index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

macro_rules! impl_int_scalar {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl SimdScalar for $t {
                const BITS: u32 = <$t>::BITS;
                const KIND: ScalarKind = ScalarKind::Signed;
                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;

                #[inline]
                fn lane_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn lane_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn lane_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn lane_div(self, rhs: Self) -> Self {
                    if rhs == 0 { -1 } else { self.wrapping_div(rhs) }
                }

                #[inline]
                fn to_lane_value(self) -> LaneValue {
                    LaneValue::Signed(self as i64)
                }

                #[inline]
                fn from_lane_value(value: LaneValue) -> Self {
                    match value {
                        LaneValue::Unsigned(u) => u as $t,
                        LaneValue::Signed(i) => i as $t,
                        LaneValue::Float(f) => f as $t,
                    }
                }

                #[inline]
                fn to_bits_u64(self) -> u64 {
                    (self as $u) as u64
                }

                #[inline]
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }

            impl IntScalar for $t {
                const ALL_ONES: Self = -1;

                #[inline]
                fn lane_rem(self, rhs: Self) -> Self {
                    if rhs == 0 { self } else { self.wrapping_rem(rhs) }
                }

                #[inline]
                fn lane_sadd(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }

                #[inline]
                fn lane_ssub(self, rhs: Self) -> Self {
                    self.saturating_sub(rhs)
                }

                #[inline]
                fn lane_shl(self, amount: u32) -> Self {
                    self.checked_shl(amount).unwrap_or(0)
                }

                #[inline]
                fn lane_shr(self, amount: u32) -> Self {
                    // Arithmetic: saturate the amount so the sign bit fills.
                    self >> amount.min(<$t>::BITS - 1)
                }
            }

            impl SignedScalar for $t {
                #[inline]
                fn lane_neg(self) -> Self {
                    self.wrapping_neg()
                }

                #[inline]
                fn lane_abs(self) -> Self {
                    self.wrapping_abs()
                }

                #[inline]
                fn lane_copysign(self, sign: Self) -> Self {
                    let magnitude = self.wrapping_abs();
                    if sign < 0 { magnitude.wrapping_neg() } else { magnitude }
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($t:ty => $bits:ty),* $(,)?) => {
        $(
            impl SimdScalar for $t {
                const BITS: u32 = <$bits>::BITS;
                const KIND: ScalarKind = ScalarKind::Float;
                const LOWEST: Self = <$t>::NEG_INFINITY;
                const HIGHEST: Self = <$t>::INFINITY;

                #[inline]
                fn lane_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn lane_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn lane_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn lane_div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn to_lane_value(self) -> LaneValue {
                    LaneValue::Float(self as f64)
                }

                #[inline]
                fn from_lane_value(value: LaneValue) -> Self {
                    match value {
                        LaneValue::Unsigned(u) => u as $t,
                        LaneValue::Signed(i) => i as $t,
                        LaneValue::Float(f) => f as $t,
                    }
                }

                #[inline]
                fn to_bits_u64(self) -> u64 {
                    self.to_bits() as u64
                }

                #[inline]
                fn to_index(self) -> Option<usize> {
                    None
                }
            }

            impl SignedScalar for $t {
                #[inline]
                fn lane_neg(self) -> Self {
                    -self
                }

                #[inline]
                fn lane_abs(self) -> Self {
                    <$t>::abs(self)
                }

                #[inline]
                fn lane_copysign(self, sign: Self) -> Self {
                    <$t>::copysign(self, sign)
                }
            }

            impl FloatScalar for $t {}
        )*
    };
}

impl_uint_scalar!(u8, u16, u32, u64);
impl_int_scalar!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
impl_float_scalar!(f32 => u32, f64 => u64);
