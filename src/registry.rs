//! Trait binding registry
//!
//! Compile-time map from each concrete vector type to its related types:
//! scalar, mask, swizzle, unsigned/signed/float counterparts and the half
//! and double length siblings. Bindings that do not apply are absent impls,
//! so generic code requiring them does not compile for that type.
//!
//! The table is written out by hand, one row per concrete type. Adding a
//! type means adding a row; the const assertions emitted for every row catch
//! a row whose lengths disagree.

use crate::interface::{SimdMask, SimdSwizzle, SimdVec};
use crate::scalar::{FloatScalar, IntScalar, SignedScalar, SimdScalar, UintScalar};
use crate::types::*;

/// Scalar, mask, swizzle and length of a vector type.
pub trait VecBinding: Sized + Copy + 'static {
    type Scalar: SimdScalar;
    type Mask: SimdMask;
    type Swizzle: SimdSwizzle;

    const LENGTH: usize;
    /// Alignment required by `loada`/`storea`: the type's own alignment,
    /// which is its byte size capped at 64.
    const ALIGNMENT: usize = std::mem::align_of::<Self>();
}

/// Same-length unsigned vector. Shift amounts and gather/scatter indices
/// use it; unsigned vectors are their own counterpart.
pub trait UintCounterpart: VecBinding {
    type Uint: SimdVec + VecBinding<Scalar: UintScalar, Mask = Self::Mask>;
}

/// Same-length signed integer vector.
pub trait IntCounterpart: VecBinding {
    type Int: SimdVec + VecBinding<Scalar: IntScalar + SignedScalar, Mask = Self::Mask>;
}

/// Same-length float vector, for 32 and 64-bit lanes only.
pub trait FloatCounterpart: VecBinding {
    type Float: SimdVec + VecBinding<Scalar: FloatScalar, Mask = Self::Mask>;
}

/// Vector with half the lanes and the same scalar. Absent at width 1.
pub trait HalfLength: VecBinding {
    type Half: SimdVec + VecBinding<Scalar = Self::Scalar> + DoubleLength<Double = Self>;
}

/// Vector with twice the lanes and the same scalar. Absent for the widest
/// type of each scalar.
pub trait DoubleLength: VecBinding {
    type Double: SimdVec + VecBinding<Scalar = Self::Scalar>;
}

/// `(scalar, width) -> vector type`, for [`Vector`].
pub trait VectorOf<const N: usize>: SimdScalar {
    type Vector: SimdVec + VecBinding<Scalar = Self>;
}

/// The vector of `N` lanes of `T`, e.g. `Vector<u32, 4>` is `U32x4`.
pub type Vector<T, const N: usize> = <T as VectorOf<N>>::Vector;

/// Type-level lane count, for [`Mask`] and [`Swizzle`].
pub struct Width<const N: usize>;

pub trait MaskOf {
    type Mask: SimdMask;
    type Swizzle: SimdSwizzle;
}

/// The mask type of width `N`, e.g. `Mask<4>` is `M4`.
pub type Mask<const N: usize> = <Width<N> as MaskOf>::Mask;

/// The swizzle type of width `N`.
pub type Swizzle<const N: usize> = <Width<N> as MaskOf>::Swizzle;

macro_rules! widths {
    ($($len:literal => $mask:ident, $swizzle:ident;)*) => {
        $(
            impl MaskOf for Width<$len> {
                type Mask = $mask;
                type Swizzle = $swizzle;
            }

            const _: () = {
                assert!(<$mask as SimdMask>::LENGTH == $len);
                assert!(<$swizzle as SimdSwizzle>::LENGTH == $len);
            };
        )*
    };
}

widths! {
    1 => M1, Sw1;
    2 => M2, Sw2;
    4 => M4, Sw4;
    8 => M8, Sw8;
    16 => M16, Sw16;
    32 => M32, Sw32;
    64 => M64, Sw64;
    128 => M128, Sw128;
}

macro_rules! bindings {
    ($(
        $vec:ident: $scalar:ident x $len:literal => $mask:ident, $swizzle:ident {
            $(uint: $uint:ident,)?
            $(int: $int:ident,)?
            $(float: $float:ident,)?
            $(half: $half:ident,)?
            $(double: $double:ident,)?
        }
    )*) => {
        $(
            impl VecBinding for $vec {
                type Scalar = $scalar;
                type Mask = $mask;
                type Swizzle = $swizzle;
                const LENGTH: usize = $len;
            }

            impl VectorOf<$len> for $scalar {
                type Vector = $vec;
            }

            $(impl UintCounterpart for $vec {
                type Uint = $uint;
            })?

            $(impl IntCounterpart for $vec {
                type Int = $int;
            })?

            $(impl FloatCounterpart for $vec {
                type Float = $float;
            })?

            $(impl HalfLength for $vec {
                type Half = $half;
            })?

            $(impl DoubleLength for $vec {
                type Double = $double;
            })?

            const _: () = {
                assert!(<$mask as SimdMask>::LENGTH == $len);
                assert!(std::mem::size_of::<$vec>() == $len * std::mem::size_of::<$scalar>());
                assert!(<$vec as VecBinding>::ALIGNMENT.is_power_of_two());
                $(assert!(<$uint as VecBinding>::LENGTH == $len);)?
                $(assert!(<$int as VecBinding>::LENGTH == $len);)?
                $(assert!(<$float as VecBinding>::LENGTH == $len);)?
                $(assert!(<$half as VecBinding>::LENGTH * 2 == $len);)?
                $(assert!(<$double as VecBinding>::LENGTH == $len * 2);)?
            };
        )*
    };
}

bindings! {
    U8x1: u8 x 1 => M1, Sw1 { uint: U8x1, int: I8x1, double: U8x2, }
    U8x2: u8 x 2 => M2, Sw2 { uint: U8x2, int: I8x2, half: U8x1, double: U8x4, }
    U8x4: u8 x 4 => M4, Sw4 { uint: U8x4, int: I8x4, half: U8x2, double: U8x8, }
    U8x8: u8 x 8 => M8, Sw8 { uint: U8x8, int: I8x8, half: U8x4, double: U8x16, }
    U8x16: u8 x 16 => M16, Sw16 { uint: U8x16, int: I8x16, half: U8x8, double: U8x32, }
    U8x32: u8 x 32 => M32, Sw32 { uint: U8x32, int: I8x32, half: U8x16, double: U8x64, }
    U8x64: u8 x 64 => M64, Sw64 { uint: U8x64, int: I8x64, half: U8x32, double: U8x128, }
    U8x128: u8 x 128 => M128, Sw128 { uint: U8x128, int: I8x128, half: U8x64, }

    U16x1: u16 x 1 => M1, Sw1 { uint: U16x1, int: I16x1, double: U16x2, }
    U16x2: u16 x 2 => M2, Sw2 { uint: U16x2, int: I16x2, half: U16x1, double: U16x4, }
    U16x4: u16 x 4 => M4, Sw4 { uint: U16x4, int: I16x4, half: U16x2, double: U16x8, }
    U16x8: u16 x 8 => M8, Sw8 { uint: U16x8, int: I16x8, half: U16x4, double: U16x16, }
    U16x16: u16 x 16 => M16, Sw16 { uint: U16x16, int: I16x16, half: U16x8, double: U16x32, }
    U16x32: u16 x 32 => M32, Sw32 { uint: U16x32, int: I16x32, half: U16x16, double: U16x64, }
    U16x64: u16 x 64 => M64, Sw64 { uint: U16x64, int: I16x64, half: U16x32, }

    U32x1: u32 x 1 => M1, Sw1 { uint: U32x1, int: I32x1, float: F32x1, double: U32x2, }
    U32x2: u32 x 2 => M2, Sw2 { uint: U32x2, int: I32x2, float: F32x2, half: U32x1, double: U32x4, }
    U32x4: u32 x 4 => M4, Sw4 { uint: U32x4, int: I32x4, float: F32x4, half: U32x2, double: U32x8, }
    U32x8: u32 x 8 => M8, Sw8 { uint: U32x8, int: I32x8, float: F32x8, half: U32x4, double: U32x16, }
    U32x16: u32 x 16 => M16, Sw16 { uint: U32x16, int: I32x16, float: F32x16, half: U32x8, double: U32x32, }
    U32x32: u32 x 32 => M32, Sw32 { uint: U32x32, int: I32x32, float: F32x32, half: U32x16, }

    U64x1: u64 x 1 => M1, Sw1 { uint: U64x1, int: I64x1, float: F64x1, double: U64x2, }
    U64x2: u64 x 2 => M2, Sw2 { uint: U64x2, int: I64x2, float: F64x2, half: U64x1, double: U64x4, }
    U64x4: u64 x 4 => M4, Sw4 { uint: U64x4, int: I64x4, float: F64x4, half: U64x2, double: U64x8, }
    U64x8: u64 x 8 => M8, Sw8 { uint: U64x8, int: I64x8, float: F64x8, half: U64x4, double: U64x16, }
    U64x16: u64 x 16 => M16, Sw16 { uint: U64x16, int: I64x16, float: F64x16, half: U64x8, }

    I8x1: i8 x 1 => M1, Sw1 { uint: U8x1, int: I8x1, double: I8x2, }
    I8x2: i8 x 2 => M2, Sw2 { uint: U8x2, int: I8x2, half: I8x1, double: I8x4, }
    I8x4: i8 x 4 => M4, Sw4 { uint: U8x4, int: I8x4, half: I8x2, double: I8x8, }
    I8x8: i8 x 8 => M8, Sw8 { uint: U8x8, int: I8x8, half: I8x4, double: I8x16, }
    I8x16: i8 x 16 => M16, Sw16 { uint: U8x16, int: I8x16, half: I8x8, double: I8x32, }
    I8x32: i8 x 32 => M32, Sw32 { uint: U8x32, int: I8x32, half: I8x16, double: I8x64, }
    I8x64: i8 x 64 => M64, Sw64 { uint: U8x64, int: I8x64, half: I8x32, double: I8x128, }
    I8x128: i8 x 128 => M128, Sw128 { uint: U8x128, int: I8x128, half: I8x64, }

    I16x1: i16 x 1 => M1, Sw1 { uint: U16x1, int: I16x1, double: I16x2, }
    I16x2: i16 x 2 => M2, Sw2 { uint: U16x2, int: I16x2, half: I16x1, double: I16x4, }
    I16x4: i16 x 4 => M4, Sw4 { uint: U16x4, int: I16x4, half: I16x2, double: I16x8, }
    I16x8: i16 x 8 => M8, Sw8 { uint: U16x8, int: I16x8, half: I16x4, double: I16x16, }
    I16x16: i16 x 16 => M16, Sw16 { uint: U16x16, int: I16x16, half: I16x8, double: I16x32, }
    I16x32: i16 x 32 => M32, Sw32 { uint: U16x32, int: I16x32, half: I16x16, double: I16x64, }
    I16x64: i16 x 64 => M64, Sw64 { uint: U16x64, int: I16x64, half: I16x32, }

    I32x1: i32 x 1 => M1, Sw1 { uint: U32x1, int: I32x1, float: F32x1, double: I32x2, }
    I32x2: i32 x 2 => M2, Sw2 { uint: U32x2, int: I32x2, float: F32x2, half: I32x1, double: I32x4, }
    I32x4: i32 x 4 => M4, Sw4 { uint: U32x4, int: I32x4, float: F32x4, half: I32x2, double: I32x8, }
    I32x8: i32 x 8 => M8, Sw8 { uint: U32x8, int: I32x8, float: F32x8, half: I32x4, double: I32x16, }
    I32x16: i32 x 16 => M16, Sw16 { uint: U32x16, int: I32x16, float: F32x16, half: I32x8, double: I32x32, }
    I32x32: i32 x 32 => M32, Sw32 { uint: U32x32, int: I32x32, float: F32x32, half: I32x16, }

    I64x1: i64 x 1 => M1, Sw1 { uint: U64x1, int: I64x1, float: F64x1, double: I64x2, }
    I64x2: i64 x 2 => M2, Sw2 { uint: U64x2, int: I64x2, float: F64x2, half: I64x1, double: I64x4, }
    I64x4: i64 x 4 => M4, Sw4 { uint: U64x4, int: I64x4, float: F64x4, half: I64x2, double: I64x8, }
    I64x8: i64 x 8 => M8, Sw8 { uint: U64x8, int: I64x8, float: F64x8, half: I64x4, double: I64x16, }
    I64x16: i64 x 16 => M16, Sw16 { uint: U64x16, int: I64x16, float: F64x16, half: I64x8, }

    F32x1: f32 x 1 => M1, Sw1 { uint: U32x1, int: I32x1, float: F32x1, double: F32x2, }
    F32x2: f32 x 2 => M2, Sw2 { uint: U32x2, int: I32x2, float: F32x2, half: F32x1, double: F32x4, }
    F32x4: f32 x 4 => M4, Sw4 { uint: U32x4, int: I32x4, float: F32x4, half: F32x2, double: F32x8, }
    F32x8: f32 x 8 => M8, Sw8 { uint: U32x8, int: I32x8, float: F32x8, half: F32x4, double: F32x16, }
    F32x16: f32 x 16 => M16, Sw16 { uint: U32x16, int: I32x16, float: F32x16, half: F32x8, double: F32x32, }
    F32x32: f32 x 32 => M32, Sw32 { uint: U32x32, int: I32x32, float: F32x32, half: F32x16, }

    F64x1: f64 x 1 => M1, Sw1 { uint: U64x1, int: I64x1, float: F64x1, double: F64x2, }
    F64x2: f64 x 2 => M2, Sw2 { uint: U64x2, int: I64x2, float: F64x2, half: F64x1, double: F64x4, }
    F64x4: f64 x 4 => M4, Sw4 { uint: U64x4, int: I64x4, float: F64x4, half: F64x2, double: F64x8, }
    F64x8: f64 x 8 => M8, Sw8 { uint: U64x8, int: I64x8, float: F64x8, half: F64x4, double: F64x16, }
    F64x16: f64 x 16 => M16, Sw16 { uint: U64x16, int: I64x16, float: F64x16, half: F64x8, }
}
