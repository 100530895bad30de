//! `std::ops` operators for the concrete vectors.
//!
//! Every operator forwards to the matching capability method, so it picks
//! up backend overrides exactly as a direct method call would.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign, Mul, MulAssign,
    Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::*;
use crate::interface::{SimdBitwise, SimdInteger, SimdShift, SimdSign, SimdVec};
use crate::proxy::index_ops;
use crate::registry::VecBinding;

macro_rules! binary_op {
    ($vec:ident, $capability:ident: $trait:ident $method:ident, $assign:ident $assign_method:ident => $op:ident, $op_s:ident) => {
        impl $trait for $vec {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                $capability::$op(self, rhs)
            }
        }

        impl $trait<<$vec as VecBinding>::Scalar> for $vec {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: <$vec as VecBinding>::Scalar) -> Self {
                $capability::$op_s(self, rhs)
            }
        }

        impl $assign for $vec {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $capability::$op(*self, rhs);
            }
        }

        impl $assign<<$vec as VecBinding>::Scalar> for $vec {
            #[inline]
            fn $assign_method(&mut self, rhs: <$vec as VecBinding>::Scalar) {
                *self = $capability::$op_s(*self, rhs);
            }
        }
    };
}

macro_rules! arithmetic_ops {
    ($($vec:ident)*) => {
        $(
            binary_op!($vec, SimdVec: Add add, AddAssign add_assign => add, add_s);
            binary_op!($vec, SimdVec: Sub sub, SubAssign sub_assign => sub, sub_s);
            binary_op!($vec, SimdVec: Mul mul, MulAssign mul_assign => mul, mul_s);
            binary_op!($vec, SimdVec: Div div, DivAssign div_assign => div, div_s);
        )*
    };
}

macro_rules! integer_ops {
    ($($vec:ident)*) => {
        $(
            binary_op!($vec, SimdInteger: Rem rem, RemAssign rem_assign => rem, rem_s);
            binary_op!($vec, SimdBitwise: BitAnd bitand, BitAndAssign bitand_assign => band, band_s);
            binary_op!($vec, SimdBitwise: BitOr bitor, BitOrAssign bitor_assign => bor, bor_s);
            binary_op!($vec, SimdBitwise: BitXor bitxor, BitXorAssign bitxor_assign => bxor, bxor_s);

            impl Not for $vec {
                type Output = Self;

                #[inline]
                fn not(self) -> Self {
                    SimdBitwise::bnot(self)
                }
            }

            impl Shl<u32> for $vec {
                type Output = Self;

                #[inline]
                fn shl(self, amount: u32) -> Self {
                    SimdShift::lsh_s(self, amount)
                }
            }

            impl ShlAssign<u32> for $vec {
                #[inline]
                fn shl_assign(&mut self, amount: u32) {
                    SimdShift::lsha_s(self, amount);
                }
            }

            impl Shr<u32> for $vec {
                type Output = Self;

                #[inline]
                fn shr(self, amount: u32) -> Self {
                    SimdShift::rsh_s(self, amount)
                }
            }

            impl ShrAssign<u32> for $vec {
                #[inline]
                fn shr_assign(&mut self, amount: u32) {
                    SimdShift::rsha_s(self, amount);
                }
            }
        )*
    };
}

macro_rules! neg_op {
    ($($vec:ident)*) => {
        $(
            impl Neg for $vec {
                type Output = Self;

                #[inline]
                fn neg(self) -> Self {
                    SimdSign::neg(self)
                }
            }
        )*
    };
}

arithmetic_ops! {
    U8x1 U8x2 U8x4 U8x8 U8x16 U8x32 U8x64 U8x128
    U16x1 U16x2 U16x4 U16x8 U16x16 U16x32 U16x64
    U32x1 U32x2 U32x4 U32x8 U32x16 U32x32
    U64x1 U64x2 U64x4 U64x8 U64x16
    I8x1 I8x2 I8x4 I8x8 I8x16 I8x32 I8x64 I8x128
    I16x1 I16x2 I16x4 I16x8 I16x16 I16x32 I16x64
    I32x1 I32x2 I32x4 I32x8 I32x16 I32x32
    I64x1 I64x2 I64x4 I64x8 I64x16
    F32x1 F32x2 F32x4 F32x8 F32x16 F32x32
    F64x1 F64x2 F64x4 F64x8 F64x16
}

integer_ops! {
    U8x1 U8x2 U8x4 U8x8 U8x16 U8x32 U8x64 U8x128
    U16x1 U16x2 U16x4 U16x8 U16x16 U16x32 U16x64
    U32x1 U32x2 U32x4 U32x8 U32x16 U32x32
    U64x1 U64x2 U64x4 U64x8 U64x16
    I8x1 I8x2 I8x4 I8x8 I8x16 I8x32 I8x64 I8x128
    I16x1 I16x2 I16x4 I16x8 I16x16 I16x32 I16x64
    I32x1 I32x2 I32x4 I32x8 I32x16 I32x32
    I64x1 I64x2 I64x4 I64x8 I64x16
}

neg_op! {
    I8x1 I8x2 I8x4 I8x8 I8x16 I8x32 I8x64 I8x128
    I16x1 I16x2 I16x4 I16x8 I16x16 I16x32 I16x64
    I32x1 I32x2 I32x4 I32x8 I32x16 I32x32
    I64x1 I64x2 I64x4 I64x8 I64x16
    F32x1 F32x2 F32x4 F32x8 F32x16 F32x32
    F64x1 F64x2 F64x4 F64x8 F64x16
}

index_ops! {
    U8x1 U8x2 U8x4 U8x8 U8x16 U8x32 U8x64 U8x128
    U16x1 U16x2 U16x4 U16x8 U16x16 U16x32 U16x64
    U32x1 U32x2 U32x4 U32x8 U32x16 U32x32
    U64x1 U64x2 U64x4 U64x8 U64x16
    I8x1 I8x2 I8x4 I8x8 I8x16 I8x32 I8x64 I8x128
    I16x1 I16x2 I16x4 I16x8 I16x16 I16x32 I16x64
    I32x1 I32x2 I32x4 I32x8 I32x16 I32x32
    I64x1 I64x2 I64x4 I64x8 I64x16
    F32x1 F32x2 F32x4 F32x8 F32x16 F32x32
    F64x1 F64x2 F64x4 F64x8 F64x16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_match_methods() {
        let a = I16x8::from_array([1, -2, 3, -4, 5, -6, 7, i16::MIN]);
        let b = I16x8::splat(3);
        assert_eq!(a + b, SimdVec::add(a, b));
        assert_eq!(a * 2, SimdVec::mul_s(a, 2));
        assert_eq!(-a, SimdSign::neg(a));
        assert_eq!((a >> 1).to_array(), [0, -1, 1, -2, 2, -3, 3, -16384]);
        assert_eq!((!U8x4::splat(0x0f)).to_array(), [0xf0; 4]);
    }

    #[test]
    fn test_assign_operators() {
        let mut v = F32x4::from_array([1.0, 2.0, 4.0, 8.0]);
        v /= 2.0;
        v += F32x4::splat(1.0);
        assert_eq!(v.to_array(), [1.5, 2.0, 3.0, 5.0]);

        let mut w = U64x2::from_array([1, 2]);
        w <<= 63;
        assert_eq!(w.to_array(), [1 << 63, 0]);
    }
}
