//! Concrete vector, mask and swizzle types.
//!
//! A vector stores its lanes in a `#[repr(C)]` array aligned to its byte
//! size, capped at 64 bytes, so the whole value can be moved into a
//! register with one aligned load. Trait impls for the vectors live in
//! [`crate::backend`]; masks and swizzles are backend independent and are
//! implemented here.

mod ops;

use std::fmt;

use crate::error::IndexOutOfRange;
use crate::interface::{SimdMask, SimdSwizzle};

macro_rules! vector_type {
    ($($name:ident: $scalar:ty, $len:literal, align $align:tt;)*) => {
        $(
            #[doc = concat!("`", stringify!($len), "` lanes of `", stringify!($scalar), "`.")]
            #[derive(Clone, Copy, PartialEq)]
            #[repr(C, align($align))]
            pub struct $name {
                pub(crate) lanes: [$scalar; $len],
            }

            impl $name {
                pub const LANES: usize = $len;

                #[inline]
                pub const fn from_array(lanes: [$scalar; $len]) -> Self {
                    Self { lanes }
                }

                #[inline]
                pub const fn to_array(self) -> [$scalar; $len] {
                    self.lanes
                }

                #[inline]
                pub const fn as_array(&self) -> &[$scalar; $len] {
                    &self.lanes
                }
            }

            impl Default for $name {
                #[inline]
                fn default() -> Self {
                    Self { lanes: [0 as $scalar; $len] }
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($name)).field(&self.lanes).finish()
                }
            }

            impl From<[$scalar; $len]> for $name {
                #[inline]
                fn from(lanes: [$scalar; $len]) -> Self {
                    Self { lanes }
                }
            }

            impl From<$name> for [$scalar; $len] {
                #[inline]
                fn from(v: $name) -> Self {
                    v.lanes
                }
            }
        )*
    };
}

vector_type! {
    U8x1: u8, 1, align 1;
    U8x2: u8, 2, align 2;
    U8x4: u8, 4, align 4;
    U8x8: u8, 8, align 8;
    U8x16: u8, 16, align 16;
    U8x32: u8, 32, align 32;
    U8x64: u8, 64, align 64;
    U8x128: u8, 128, align 64;

    U16x1: u16, 1, align 2;
    U16x2: u16, 2, align 4;
    U16x4: u16, 4, align 8;
    U16x8: u16, 8, align 16;
    U16x16: u16, 16, align 32;
    U16x32: u16, 32, align 64;
    U16x64: u16, 64, align 64;

    U32x1: u32, 1, align 4;
    U32x2: u32, 2, align 8;
    U32x4: u32, 4, align 16;
    U32x8: u32, 8, align 32;
    U32x16: u32, 16, align 64;
    U32x32: u32, 32, align 64;

    U64x1: u64, 1, align 8;
    U64x2: u64, 2, align 16;
    U64x4: u64, 4, align 32;
    U64x8: u64, 8, align 64;
    U64x16: u64, 16, align 64;

    I8x1: i8, 1, align 1;
    I8x2: i8, 2, align 2;
    I8x4: i8, 4, align 4;
    I8x8: i8, 8, align 8;
    I8x16: i8, 16, align 16;
    I8x32: i8, 32, align 32;
    I8x64: i8, 64, align 64;
    I8x128: i8, 128, align 64;

    I16x1: i16, 1, align 2;
    I16x2: i16, 2, align 4;
    I16x4: i16, 4, align 8;
    I16x8: i16, 8, align 16;
    I16x16: i16, 16, align 32;
    I16x32: i16, 32, align 64;
    I16x64: i16, 64, align 64;

    I32x1: i32, 1, align 4;
    I32x2: i32, 2, align 8;
    I32x4: i32, 4, align 16;
    I32x8: i32, 8, align 32;
    I32x16: i32, 16, align 64;
    I32x32: i32, 32, align 64;

    I64x1: i64, 1, align 8;
    I64x2: i64, 2, align 16;
    I64x4: i64, 4, align 32;
    I64x8: i64, 8, align 64;
    I64x16: i64, 16, align 64;

    F32x1: f32, 1, align 4;
    F32x2: f32, 2, align 8;
    F32x4: f32, 4, align 16;
    F32x8: f32, 8, align 32;
    F32x16: f32, 16, align 64;
    F32x32: f32, 32, align 64;

    F64x1: f64, 1, align 8;
    F64x2: f64, 2, align 16;
    F64x4: f64, 4, align 32;
    F64x8: f64, 8, align 64;
    F64x16: f64, 16, align 64;
}

macro_rules! mask_type {
    ($($name:ident: $len:literal;)*) => {
        $(
            #[doc = concat!("Lane mask for vectors of ", stringify!($len), " lanes.")]
            #[derive(Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name {
                lanes: [bool; $len],
            }

            impl $name {
                #[inline]
                pub const fn from_array(lanes: [bool; $len]) -> Self {
                    Self { lanes }
                }

                #[inline]
                pub const fn to_array(self) -> [bool; $len] {
                    self.lanes
                }
            }

            impl SimdMask for $name {
                const LENGTH: usize = $len;

                #[inline]
                fn splat(value: bool) -> Self {
                    Self { lanes: [value; $len] }
                }

                #[inline]
                fn extract_lane(&self, index: usize) -> bool {
                    self.lanes[index]
                }

                #[inline]
                fn insert_lane(&mut self, index: usize, value: bool) {
                    self.lanes[index] = value;
                }

                #[inline]
                fn count(&self) -> usize {
                    self.lanes.iter().filter(|&&lane| lane).count()
                }
            }

            impl Default for $name {
                #[inline]
                fn default() -> Self {
                    Self { lanes: [false; $len] }
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}(", stringify!($name))?;
                    for lane in &self.lanes {
                        f.write_str(if *lane { "1" } else { "0" })?;
                    }
                    f.write_str(")")
                }
            }

            impl From<[bool; $len]> for $name {
                #[inline]
                fn from(lanes: [bool; $len]) -> Self {
                    Self { lanes }
                }
            }

            impl std::ops::BitAnd for $name {
                type Output = Self;

                #[inline]
                fn bitand(self, rhs: Self) -> Self {
                    SimdMask::land(self, rhs)
                }
            }

            impl std::ops::BitOr for $name {
                type Output = Self;

                #[inline]
                fn bitor(self, rhs: Self) -> Self {
                    SimdMask::lor(self, rhs)
                }
            }

            impl std::ops::BitXor for $name {
                type Output = Self;

                #[inline]
                fn bitxor(self, rhs: Self) -> Self {
                    SimdMask::lxor(self, rhs)
                }
            }

            impl std::ops::Not for $name {
                type Output = Self;

                #[inline]
                fn not(self) -> Self {
                    SimdMask::lnot(self)
                }
            }
        )*
    };
}

mask_type! {
    M1: 1;
    M2: 2;
    M4: 4;
    M8: 8;
    M16: 16;
    M32: 32;
    M64: 64;
    M128: 128;
}

macro_rules! swizzle_type {
    ($($name:ident: $len:literal;)*) => {
        $(
            #[doc = concat!("Lane permutation for vectors of ", stringify!($len), " lanes.")]
            #[derive(Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name {
                targets: [u8; $len],
            }

            impl $name {
                /// Build from explicit targets, each below the lane count.
                #[inline]
                pub fn new(targets: [usize; $len]) -> Result<Self, IndexOutOfRange> {
                    SimdSwizzle::from_slice(&targets)
                }

                #[inline]
                pub fn to_array(self) -> [usize; $len] {
                    self.targets.map(usize::from)
                }
            }

            impl SimdSwizzle for $name {
                const LENGTH: usize = $len;

                #[inline]
                fn identity() -> Self {
                    let mut targets = [0u8; $len];
                    for (lane, target) in targets.iter_mut().enumerate() {
                        *target = lane as u8;
                    }
                    Self { targets }
                }

                #[inline]
                fn extract_lane(&self, index: usize) -> usize {
                    usize::from(self.targets[index])
                }

                #[inline]
                fn insert_lane(&mut self, index: usize, target: usize) {
                    debug_assert!(target < $len, "swizzle target {target} out of range for {} lanes", $len);
                    self.targets[index] = (target % $len) as u8;
                }
            }

            impl Default for $name {
                #[inline]
                fn default() -> Self {
                    <Self as SimdSwizzle>::identity()
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($name)).field(&self.targets).finish()
                }
            }

            impl TryFrom<[usize; $len]> for $name {
                type Error = IndexOutOfRange;

                #[inline]
                fn try_from(targets: [usize; $len]) -> Result<Self, IndexOutOfRange> {
                    Self::new(targets)
                }
            }
        )*
    };
}

swizzle_type! {
    Sw1: 1;
    Sw2: 2;
    Sw4: 4;
    Sw8: 8;
    Sw16: 16;
    Sw32: 32;
    Sw64: 64;
    Sw128: 128;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(std::mem::align_of::<U8x1>(), 1);
        assert_eq!(std::mem::align_of::<U32x4>(), 16);
        assert_eq!(std::mem::align_of::<F64x4>(), 32);
        assert_eq!(std::mem::align_of::<U8x128>(), 64);
        assert_eq!(std::mem::size_of::<U8x128>(), 128);
        assert_eq!(std::mem::size_of::<I64x16>(), 128);
    }

    #[test]
    fn test_swizzle_construction_validates() {
        assert!(Sw4::new([3, 2, 1, 0]).is_ok());
        assert_eq!(Sw4::new([0, 4, 1, 2]), Err(IndexOutOfRange::new(4, 4)));
        assert_eq!(Sw8::identity().to_array(), [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_swizzle_insert_lane_in_range() {
        let mut sw = Sw4::identity();
        sw.insert_lane(0, 3);
        assert_eq!(sw.to_array(), [3, 1, 2, 3]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "swizzle target 4 out of range")]
    fn test_swizzle_insert_lane_rejects_wide_target() {
        let mut sw = Sw4::identity();
        sw.insert_lane(1, 4);
    }

    #[test]
    fn test_mask_debug_and_count() {
        let m = M4::from_array([true, false, true, true]);
        assert_eq!(format!("{m:?}"), "M4(1011)");
        assert_eq!(m.count(), 3);
        assert_eq!((!m).to_array(), [false, true, false, false]);
    }
}
