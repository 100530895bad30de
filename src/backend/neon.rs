//! NEON overrides for the 128-bit vectors.
//!
//! NEON is part of the aarch64 baseline. Lanes go through `vld1q`/`vst1q`
//! on the lane array, so no alignment requirement is placed on the
//! register transfer. Float `min`/`max` stay emulated: `vminq`/`vmaxq`
//! propagate NaN from either operand, while the lane semantics return the
//! second operand.

use std::arch::aarch64::*;

use crate::interface::SimdMask;
use crate::types::*;

macro_rules! neon_binary {
    ($ld:ident, $st:ident; $($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self {
                let mut out = self;
                // SAFETY: NEON is enabled for this module and both lane
                // arrays are exactly one register wide.
                unsafe {
                    $st(
                        out.lanes.as_mut_ptr(),
                        $intrinsic($ld(self.lanes.as_ptr()), $ld(b.lanes.as_ptr())),
                    )
                };
                out
            }
        )*
    };
}

/// `bandnot` is `!self & b`, and `vbicq(x, y)` is `x & !y`.
macro_rules! neon_bandnot {
    ($ld:ident, $st:ident, $bic:ident) => {
        #[inline]
        fn bandnot(self, b: Self) -> Self {
            let mut out = self;
            // SAFETY: as in `neon_binary`.
            unsafe { $st(out.lanes.as_mut_ptr(), $bic($ld(b.lanes.as_ptr()), $ld(self.lanes.as_ptr()))) };
            out
        }
    };
}

macro_rules! neon_unary {
    ($ld:ident, $st:ident; $($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self) -> Self {
                let mut out = self;
                // SAFETY: as in `neon_binary`.
                unsafe { $st(out.lanes.as_mut_ptr(), $intrinsic($ld(self.lanes.as_ptr()))) };
                out
            }
        )*
    };
}

/// Compares produce an all-ones unsigned lane per true result.
macro_rules! neon_compare {
    ($ld:ident, $ust:ident, $u:ty, $n:literal; $($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self::Mask {
                let mut bits: [$u; $n] = [0; $n];
                // SAFETY: as in `neon_binary`; `bits` is one register wide.
                unsafe {
                    $ust(bits.as_mut_ptr(), $intrinsic($ld(self.lanes.as_ptr()), $ld(b.lanes.as_ptr())))
                };
                <Self::Mask as SimdMask>::from_fn(|i| bits[i] != 0)
            }
        )*
    };
}

macro_rules! neon_bitwise {
    ($ld:ident, $st:ident, $and:ident, $orr:ident, $eor:ident, $bic:ident) => {
        neon_binary! {
            $ld, $st;
            band => $and;
            bor => $orr;
            bxor => $eor;
        }
        neon_bandnot!($ld, $st, $bic);
    };
}

// ===== Unsigned =====

uint_vector!(U8x16,
    base {
        neon_binary! {
            vld1q_u8, vst1q_u8;
            add => vaddq_u8;
            sub => vsubq_u8;
            mul => vmulq_u8;
            min => vminq_u8;
            max => vmaxq_u8;
        }
        neon_compare! {
            vld1q_u8, vst1q_u8, u8, 16;
            cmpeq => vceqq_u8;
            cmpgt => vcgtq_u8;
            cmplt => vcltq_u8;
            cmpge => vcgeq_u8;
            cmple => vcleq_u8;
        }
    },
    bitwise { neon_bitwise!(vld1q_u8, vst1q_u8, vandq_u8, vorrq_u8, veorq_u8, vbicq_u8); },
    integer {
        neon_binary! {
            vld1q_u8, vst1q_u8;
            sadd => vqaddq_u8;
            ssub => vqsubq_u8;
        }
    },
);

uint_vector!(U16x8,
    base {
        neon_binary! {
            vld1q_u16, vst1q_u16;
            add => vaddq_u16;
            sub => vsubq_u16;
            mul => vmulq_u16;
            min => vminq_u16;
            max => vmaxq_u16;
        }
        neon_compare! {
            vld1q_u16, vst1q_u16, u16, 8;
            cmpeq => vceqq_u16;
            cmpgt => vcgtq_u16;
            cmplt => vcltq_u16;
            cmpge => vcgeq_u16;
            cmple => vcleq_u16;
        }
    },
    bitwise { neon_bitwise!(vld1q_u16, vst1q_u16, vandq_u16, vorrq_u16, veorq_u16, vbicq_u16); },
    integer {
        neon_binary! {
            vld1q_u16, vst1q_u16;
            sadd => vqaddq_u16;
            ssub => vqsubq_u16;
        }
    },
);

uint_vector!(U32x4,
    base {
        neon_binary! {
            vld1q_u32, vst1q_u32;
            add => vaddq_u32;
            sub => vsubq_u32;
            mul => vmulq_u32;
            min => vminq_u32;
            max => vmaxq_u32;
        }
        neon_compare! {
            vld1q_u32, vst1q_u32, u32, 4;
            cmpeq => vceqq_u32;
            cmpgt => vcgtq_u32;
            cmplt => vcltq_u32;
            cmpge => vcgeq_u32;
            cmple => vcleq_u32;
        }
    },
    bitwise { neon_bitwise!(vld1q_u32, vst1q_u32, vandq_u32, vorrq_u32, veorq_u32, vbicq_u32); },
    integer {
        neon_binary! {
            vld1q_u32, vst1q_u32;
            sadd => vqaddq_u32;
            ssub => vqsubq_u32;
        }
    },
);

uint_vector!(U64x2,
    base {
        neon_binary! {
            vld1q_u64, vst1q_u64;
            add => vaddq_u64;
            sub => vsubq_u64;
        }
        neon_compare! {
            vld1q_u64, vst1q_u64, u64, 2;
            cmpeq => vceqq_u64;
            cmpgt => vcgtq_u64;
            cmplt => vcltq_u64;
        }
    },
    bitwise { neon_bitwise!(vld1q_u64, vst1q_u64, vandq_u64, vorrq_u64, veorq_u64, vbicq_u64); },
    integer {
        neon_binary! {
            vld1q_u64, vst1q_u64;
            sadd => vqaddq_u64;
            ssub => vqsubq_u64;
        }
    },
);

// ===== Signed =====

int_vector!(I8x16,
    base {
        neon_binary! {
            vld1q_s8, vst1q_s8;
            add => vaddq_s8;
            sub => vsubq_s8;
            mul => vmulq_s8;
            min => vminq_s8;
            max => vmaxq_s8;
        }
        neon_compare! {
            vld1q_s8, vst1q_u8, u8, 16;
            cmpeq => vceqq_s8;
            cmpgt => vcgtq_s8;
            cmplt => vcltq_s8;
        }
    },
    bitwise { neon_bitwise!(vld1q_s8, vst1q_s8, vandq_s8, vorrq_s8, veorq_s8, vbicq_s8); },
    integer {
        neon_binary! {
            vld1q_s8, vst1q_s8;
            sadd => vqaddq_s8;
            ssub => vqsubq_s8;
        }
    },
    sign {
        neon_unary! {
            vld1q_s8, vst1q_s8;
            neg => vnegq_s8;
            abs => vabsq_s8;
        }
    },
);

int_vector!(I16x8,
    base {
        neon_binary! {
            vld1q_s16, vst1q_s16;
            add => vaddq_s16;
            sub => vsubq_s16;
            mul => vmulq_s16;
            min => vminq_s16;
            max => vmaxq_s16;
        }
        neon_compare! {
            vld1q_s16, vst1q_u16, u16, 8;
            cmpeq => vceqq_s16;
            cmpgt => vcgtq_s16;
            cmplt => vcltq_s16;
        }
    },
    bitwise { neon_bitwise!(vld1q_s16, vst1q_s16, vandq_s16, vorrq_s16, veorq_s16, vbicq_s16); },
    integer {
        neon_binary! {
            vld1q_s16, vst1q_s16;
            sadd => vqaddq_s16;
            ssub => vqsubq_s16;
        }
    },
    sign {
        neon_unary! {
            vld1q_s16, vst1q_s16;
            neg => vnegq_s16;
            abs => vabsq_s16;
        }
    },
);

int_vector!(I32x4,
    base {
        neon_binary! {
            vld1q_s32, vst1q_s32;
            add => vaddq_s32;
            sub => vsubq_s32;
            mul => vmulq_s32;
            min => vminq_s32;
            max => vmaxq_s32;
        }
        neon_compare! {
            vld1q_s32, vst1q_u32, u32, 4;
            cmpeq => vceqq_s32;
            cmpgt => vcgtq_s32;
            cmplt => vcltq_s32;
        }
    },
    bitwise { neon_bitwise!(vld1q_s32, vst1q_s32, vandq_s32, vorrq_s32, veorq_s32, vbicq_s32); },
    integer {
        neon_binary! {
            vld1q_s32, vst1q_s32;
            sadd => vqaddq_s32;
            ssub => vqsubq_s32;
        }
    },
    sign {
        neon_unary! {
            vld1q_s32, vst1q_s32;
            neg => vnegq_s32;
            abs => vabsq_s32;
        }
    },
);

int_vector!(I64x2,
    base {
        neon_binary! {
            vld1q_s64, vst1q_s64;
            add => vaddq_s64;
            sub => vsubq_s64;
        }
        neon_compare! {
            vld1q_s64, vst1q_u64, u64, 2;
            cmpeq => vceqq_s64;
            cmpgt => vcgtq_s64;
            cmplt => vcltq_s64;
        }
    },
    bitwise { neon_bitwise!(vld1q_s64, vst1q_s64, vandq_s64, vorrq_s64, veorq_s64, vbicq_s64); },
    integer {
        neon_binary! {
            vld1q_s64, vst1q_s64;
            sadd => vqaddq_s64;
            ssub => vqsubq_s64;
        }
    },
    sign {
        neon_unary! {
            vld1q_s64, vst1q_s64;
            neg => vnegq_s64;
            abs => vabsq_s64;
        }
    },
);

// ===== Float =====

float_vector!(F32x4,
    base {
        neon_binary! {
            vld1q_f32, vst1q_f32;
            add => vaddq_f32;
            sub => vsubq_f32;
            mul => vmulq_f32;
            div => vdivq_f32;
        }
        neon_compare! {
            vld1q_f32, vst1q_u32, u32, 4;
            cmpeq => vceqq_f32;
            cmpgt => vcgtq_f32;
            cmplt => vcltq_f32;
            cmpge => vcgeq_f32;
            cmple => vcleq_f32;
        }
    },
    sign {
        neon_unary! {
            vld1q_f32, vst1q_f32;
            neg => vnegq_f32;
            abs => vabsq_f32;
        }
    },
    float {
        neon_unary! {
            vld1q_f32, vst1q_f32;
            sqrt => vsqrtq_f32;
            floor => vrndmq_f32;
            ceil => vrndpq_f32;
            round => vrndaq_f32;
            trunc => vrndq_f32;
        }
    },
);

float_vector!(F64x2,
    base {
        neon_binary! {
            vld1q_f64, vst1q_f64;
            add => vaddq_f64;
            sub => vsubq_f64;
            mul => vmulq_f64;
            div => vdivq_f64;
        }
        neon_compare! {
            vld1q_f64, vst1q_u64, u64, 2;
            cmpeq => vceqq_f64;
            cmpgt => vcgtq_f64;
            cmplt => vcltq_f64;
            cmpge => vcgeq_f64;
            cmple => vcleq_f64;
        }
    },
    sign {
        neon_unary! {
            vld1q_f64, vst1q_f64;
            neg => vnegq_f64;
            abs => vabsq_f64;
        }
    },
    float {
        neon_unary! {
            vld1q_f64, vst1q_f64;
            sqrt => vsqrtq_f64;
            floor => vrndmq_f64;
            ceil => vrndpq_f64;
            round => vrndaq_f64;
            trunc => vrndq_f64;
        }
    },
);

#[cfg(test)]
mod tests {
    use crate::emulation;
    use crate::interface::*;
    use crate::types::*;

    #[test]
    fn test_neon_saturating_and_bandnot() {
        let a = I8x16::from_fn(|i| (i as i8).wrapping_mul(19));
        let b = I8x16::splat(100);
        assert_eq!(a.sadd(b), emulation::zip(a, b, |x: i8, y| x.saturating_add(y)));
        assert_eq!(a.bandnot(b), emulation::zip(a, b, |x: i8, y| !x & y));
    }

    #[test]
    fn test_neon_compare_masks() {
        let a = U32x4::from_array([1, 5, 3, 7]);
        let b = U32x4::from_array([2, 5, 1, 9]);
        assert_eq!(a.cmplt(b).to_array(), [true, false, false, true]);
        assert_eq!(a.cmpge(b).to_array(), [false, true, true, false]);
    }

    #[test]
    fn test_neon_round_half_away() {
        let a = F64x2::from_array([2.5, -2.5]);
        assert_eq!(a.round().to_array(), [3.0, -3.0]);
        assert_eq!(I16x8::splat(i16::MIN).abs(), I16x8::splat(i16::MIN));
    }
}
