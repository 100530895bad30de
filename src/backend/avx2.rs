//! AVX2 overrides for the 256-bit vectors.
//!
//! Compiled only when the build enables `target_feature = "avx2"` (for
//! example `-C target-cpu=native` on a capable host). AVX2 adds what SSE2
//! lacks for the narrower types: 32-bit `mullo`, unsigned min/max, 64-bit
//! compares and per-lane variable shifts.

use std::arch::x86_64::*;

use crate::interface::SimdMask;
use crate::types::*;

// ===== Register transfer =====

#[inline(always)]
fn load_si256<V: Copy>(v: &V) -> __m256i {
    const { assert!(size_of::<V>() == 32 && align_of::<V>() == 32) };
    // SAFETY: `V` is a 32-byte lane array aligned to 32.
    unsafe { _mm256_load_si256((v as *const V).cast()) }
}

#[inline(always)]
fn store_si256<V: Copy>(mut out: V, r: __m256i) -> V {
    const { assert!(size_of::<V>() == 32 && align_of::<V>() == 32) };
    // SAFETY: as in `load_si256`.
    unsafe { _mm256_store_si256((&mut out as *mut V).cast(), r) };
    out
}

#[inline(always)]
fn load_ps<V: Copy>(v: &V) -> __m256 {
    // SAFETY: bit cast between register types.
    unsafe { _mm256_castsi256_ps(load_si256(v)) }
}

#[inline(always)]
fn store_ps<V: Copy>(out: V, r: __m256) -> V {
    // SAFETY: bit cast between register types.
    store_si256(out, unsafe { _mm256_castps_si256(r) })
}

#[inline(always)]
fn load_pd<V: Copy>(v: &V) -> __m256d {
    // SAFETY: bit cast between register types.
    unsafe { _mm256_castsi256_pd(load_si256(v)) }
}

#[inline(always)]
fn store_pd<V: Copy>(out: V, r: __m256d) -> V {
    // SAFETY: bit cast between register types.
    store_si256(out, unsafe { _mm256_castpd_si256(r) })
}

#[inline(always)]
fn zip_si256<V: Copy>(a: V, b: V, f: impl FnOnce(__m256i, __m256i) -> __m256i) -> V {
    store_si256(a, f(load_si256(&a), load_si256(&b)))
}

/// Like [`zip_si256`], with the second operand in another 256-bit type
/// (the unsigned amounts of a signed shift).
#[inline(always)]
fn zip_amounts_si256<V: Copy, U: Copy>(a: V, amounts: U, f: impl FnOnce(__m256i, __m256i) -> __m256i) -> V {
    store_si256(a, f(load_si256(&a), load_si256(&amounts)))
}

#[inline(always)]
fn shift_si256<V: Copy>(a: V, amount: u32, f: impl FnOnce(__m256i, __m128i) -> __m256i) -> V {
    // SAFETY: SSE2 is implied by AVX2.
    let count = unsafe { _mm_cvtsi32_si128(amount as i32) };
    store_si256(a, f(load_si256(&a), count))
}

// ===== Compare results to masks =====

#[inline(always)]
fn mask_epi8<M: SimdMask>(r: __m256i) -> M {
    // SAFETY: AVX2 is enabled for this module.
    let bits = unsafe { _mm256_movemask_epi8(r) };
    M::from_bitmask(bits as u32 as u128)
}

/// `packs` works within 128-bit halves, so the 16-bit case takes every
/// other byte bit of the full movemask instead.
#[inline(always)]
fn mask_epi16<M: SimdMask>(r: __m256i) -> M {
    // SAFETY: AVX2 is enabled for this module.
    let bytes = unsafe { _mm256_movemask_epi8(r) } as u32;
    let mut bits = 0u128;
    for lane in 0..16 {
        bits |= u128::from((bytes >> (2 * lane)) & 1) << lane;
    }
    M::from_bitmask(bits)
}

#[inline(always)]
fn mask_epi32<M: SimdMask>(r: __m256i) -> M {
    // SAFETY: AVX2 is enabled for this module.
    let bits = unsafe { _mm256_movemask_ps(_mm256_castsi256_ps(r)) };
    M::from_bitmask(bits as u32 as u128)
}

#[inline(always)]
fn mask_epi64<M: SimdMask>(r: __m256i) -> M {
    // SAFETY: AVX2 is enabled for this module.
    let bits = unsafe { _mm256_movemask_pd(_mm256_castsi256_pd(r)) };
    M::from_bitmask(bits as u32 as u128)
}

#[inline(always)]
fn mask_ps<M: SimdMask>(r: __m256) -> M {
    // SAFETY: AVX2 is enabled for this module.
    let bits = unsafe { _mm256_movemask_ps(r) };
    M::from_bitmask(bits as u32 as u128)
}

#[inline(always)]
fn mask_pd<M: SimdMask>(r: __m256d) -> M {
    // SAFETY: AVX2 is enabled for this module.
    let bits = unsafe { _mm256_movemask_pd(r) };
    M::from_bitmask(bits as u32 as u128)
}

// ===== Method emitters =====

macro_rules! si256 {
    ($($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self {
                zip_si256(self, b, |x, y| unsafe { $intrinsic(x, y) })
            }
        )*
    };
}

/// The `swapped` form passes the operands in reverse, e.g. `cmplt` from
/// `cmpgt`.
macro_rules! si256_compare {
    ($($method:ident => $intrinsic:ident, $mask:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self::Mask {
                $mask(unsafe { $intrinsic(load_si256(&self), load_si256(&b)) })
            }
        )*
    };
    ($(swapped $method:ident => $intrinsic:ident, $mask:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self::Mask {
                $mask(unsafe { $intrinsic(load_si256(&b), load_si256(&self)) })
            }
        )*
    };
}

macro_rules! si256_shift {
    ($($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self, amount: u32) -> Self {
                shift_si256(self, amount, |x, n| unsafe { $intrinsic(x, n) })
            }
        )*
    };
}

/// Per-lane variable shifts. The instructions zero (or sign fill) lanes
/// whose amount is at least the lane width, like the scalar semantics.
macro_rules! si256_shiftv {
    ($($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self, amount: Self::Uint) -> Self {
                zip_amounts_si256(self, amount, |x, n| unsafe { $intrinsic(x, n) })
            }
        )*
    };
}

macro_rules! si256_abs {
    ($intrinsic:ident) => {
        #[inline]
        fn abs(self) -> Self {
            store_si256(self, unsafe { $intrinsic(load_si256(&self)) })
        }
    };
}

macro_rules! bitwise_si256 {
    () => {
        si256! {
            band => _mm256_and_si256;
            bor => _mm256_or_si256;
            bxor => _mm256_xor_si256;
            bandnot => _mm256_andnot_si256;
        }
    };
}

// ===== 8-bit lanes =====

uint_vector!(U8x32,
    base {
        si256! {
            add => _mm256_add_epi8;
            sub => _mm256_sub_epi8;
            min => _mm256_min_epu8;
            max => _mm256_max_epu8;
        }
        si256_compare! {
            cmpeq => _mm256_cmpeq_epi8, mask_epi8;
        }
    },
    bitwise { bitwise_si256!(); },
    integer {
        si256! {
            sadd => _mm256_adds_epu8;
            ssub => _mm256_subs_epu8;
        }
    },
);

int_vector!(I8x32,
    base {
        si256! {
            add => _mm256_add_epi8;
            sub => _mm256_sub_epi8;
            min => _mm256_min_epi8;
            max => _mm256_max_epi8;
        }
        si256_compare! {
            cmpeq => _mm256_cmpeq_epi8, mask_epi8;
            cmpgt => _mm256_cmpgt_epi8, mask_epi8;
        }
        si256_compare! {
            swapped cmplt => _mm256_cmpgt_epi8, mask_epi8;
        }
    },
    bitwise { bitwise_si256!(); },
    integer {
        si256! {
            sadd => _mm256_adds_epi8;
            ssub => _mm256_subs_epi8;
        }
    },
    sign { si256_abs!(_mm256_abs_epi8); },
);

// ===== 16-bit lanes =====

uint_vector!(U16x16,
    base {
        si256! {
            add => _mm256_add_epi16;
            sub => _mm256_sub_epi16;
            mul => _mm256_mullo_epi16;
            min => _mm256_min_epu16;
            max => _mm256_max_epu16;
        }
        si256_compare! {
            cmpeq => _mm256_cmpeq_epi16, mask_epi16;
        }
    },
    bitwise { bitwise_si256!(); },
    integer {
        si256! {
            sadd => _mm256_adds_epu16;
            ssub => _mm256_subs_epu16;
        }
    },
    shift {
        si256_shift! {
            lsh_s => _mm256_sll_epi16;
            rsh_s => _mm256_srl_epi16;
        }
    },
);

int_vector!(I16x16,
    base {
        si256! {
            add => _mm256_add_epi16;
            sub => _mm256_sub_epi16;
            mul => _mm256_mullo_epi16;
            min => _mm256_min_epi16;
            max => _mm256_max_epi16;
        }
        si256_compare! {
            cmpeq => _mm256_cmpeq_epi16, mask_epi16;
            cmpgt => _mm256_cmpgt_epi16, mask_epi16;
        }
        si256_compare! {
            swapped cmplt => _mm256_cmpgt_epi16, mask_epi16;
        }
    },
    bitwise { bitwise_si256!(); },
    integer {
        si256! {
            sadd => _mm256_adds_epi16;
            ssub => _mm256_subs_epi16;
        }
    },
    sign { si256_abs!(_mm256_abs_epi16); },
    shift {
        si256_shift! {
            lsh_s => _mm256_sll_epi16;
            rsh_s => _mm256_sra_epi16;
        }
    },
);

// ===== 32-bit lanes =====

uint_vector!(U32x8,
    base {
        si256! {
            add => _mm256_add_epi32;
            sub => _mm256_sub_epi32;
            mul => _mm256_mullo_epi32;
            min => _mm256_min_epu32;
            max => _mm256_max_epu32;
        }
        si256_compare! {
            cmpeq => _mm256_cmpeq_epi32, mask_epi32;
        }
    },
    bitwise { bitwise_si256!(); },
    shift {
        si256_shift! {
            lsh_s => _mm256_sll_epi32;
            rsh_s => _mm256_srl_epi32;
        }
        si256_shiftv! {
            lsh => _mm256_sllv_epi32;
            rsh => _mm256_srlv_epi32;
        }
    },
);

int_vector!(I32x8,
    base {
        si256! {
            add => _mm256_add_epi32;
            sub => _mm256_sub_epi32;
            mul => _mm256_mullo_epi32;
            min => _mm256_min_epi32;
            max => _mm256_max_epi32;
        }
        si256_compare! {
            cmpeq => _mm256_cmpeq_epi32, mask_epi32;
            cmpgt => _mm256_cmpgt_epi32, mask_epi32;
        }
        si256_compare! {
            swapped cmplt => _mm256_cmpgt_epi32, mask_epi32;
        }
    },
    bitwise { bitwise_si256!(); },
    sign { si256_abs!(_mm256_abs_epi32); },
    shift {
        si256_shift! {
            lsh_s => _mm256_sll_epi32;
            rsh_s => _mm256_sra_epi32;
        }
        si256_shiftv! {
            lsh => _mm256_sllv_epi32;
            rsh => _mm256_srav_epi32;
        }
    },
);

// ===== 64-bit lanes =====

uint_vector!(U64x4,
    base {
        si256! {
            add => _mm256_add_epi64;
            sub => _mm256_sub_epi64;
        }
        si256_compare! {
            cmpeq => _mm256_cmpeq_epi64, mask_epi64;
        }
    },
    bitwise { bitwise_si256!(); },
    shift {
        si256_shift! {
            lsh_s => _mm256_sll_epi64;
            rsh_s => _mm256_srl_epi64;
        }
        si256_shiftv! {
            lsh => _mm256_sllv_epi64;
            rsh => _mm256_srlv_epi64;
        }
    },
);

int_vector!(I64x4,
    base {
        si256! {
            add => _mm256_add_epi64;
            sub => _mm256_sub_epi64;
        }
        si256_compare! {
            cmpeq => _mm256_cmpeq_epi64, mask_epi64;
            cmpgt => _mm256_cmpgt_epi64, mask_epi64;
        }
        si256_compare! {
            swapped cmplt => _mm256_cmpgt_epi64, mask_epi64;
        }
    },
    bitwise { bitwise_si256!(); },
    shift {
        si256_shift! {
            lsh_s => _mm256_sll_epi64;
        }
        si256_shiftv! {
            lsh => _mm256_sllv_epi64;
        }
    },
);

// ===== Float lanes =====

macro_rules! ps {
    ($($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self {
                store_ps(self, unsafe { $intrinsic(load_ps(&self), load_ps(&b)) })
            }
        )*
    };
}

macro_rules! pd {
    ($($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self {
                store_pd(self, unsafe { $intrinsic(load_pd(&self), load_pd(&b)) })
            }
        )*
    };
}

/// Ordered predicates are false on NaN, `NEQ_UQ` is true, matching the
/// scalar comparison operators.
macro_rules! float_compare {
    ($load:ident, $cmp:ident, $mask:ident; $($method:ident => $predicate:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self::Mask {
                $mask(unsafe { $cmp::<$predicate>($load(&self), $load(&b)) })
            }
        )*
    };
}

/// Rounding with exceptions suppressed. Only the directed modes are used:
/// `round` rounds half away from zero, which no immediate encodes.
macro_rules! float_round {
    ($load:ident, $store:ident, $round:ident; $($method:ident => $mode:ident;)*) => {
        $(
            #[inline]
            fn $method(self) -> Self {
                $store(self, unsafe { $round::<{ $mode | _MM_FROUND_NO_EXC }>($load(&self)) })
            }
        )*
    };
}

float_vector!(F32x8,
    base {
        ps! {
            add => _mm256_add_ps;
            sub => _mm256_sub_ps;
            mul => _mm256_mul_ps;
            div => _mm256_div_ps;
            min => _mm256_min_ps;
            max => _mm256_max_ps;
        }
        float_compare! {
            load_ps, _mm256_cmp_ps, mask_ps;
            cmpeq => _CMP_EQ_OQ;
            cmpne => _CMP_NEQ_UQ;
            cmplt => _CMP_LT_OQ;
            cmple => _CMP_LE_OQ;
            cmpgt => _CMP_GT_OQ;
            cmpge => _CMP_GE_OQ;
        }
    },
    float {
        #[inline]
        fn sqrt(self) -> Self {
            store_ps(self, unsafe { _mm256_sqrt_ps(load_ps(&self)) })
        }

        float_round! {
            load_ps, store_ps, _mm256_round_ps;
            floor => _MM_FROUND_TO_NEG_INF;
            ceil => _MM_FROUND_TO_POS_INF;
            trunc => _MM_FROUND_TO_ZERO;
        }
    },
);

float_vector!(F64x4,
    base {
        pd! {
            add => _mm256_add_pd;
            sub => _mm256_sub_pd;
            mul => _mm256_mul_pd;
            div => _mm256_div_pd;
            min => _mm256_min_pd;
            max => _mm256_max_pd;
        }
        float_compare! {
            load_pd, _mm256_cmp_pd, mask_pd;
            cmpeq => _CMP_EQ_OQ;
            cmpne => _CMP_NEQ_UQ;
            cmplt => _CMP_LT_OQ;
            cmple => _CMP_LE_OQ;
            cmpgt => _CMP_GT_OQ;
            cmpge => _CMP_GE_OQ;
        }
    },
    float {
        #[inline]
        fn sqrt(self) -> Self {
            store_pd(self, unsafe { _mm256_sqrt_pd(load_pd(&self)) })
        }

        float_round! {
            load_pd, store_pd, _mm256_round_pd;
            floor => _MM_FROUND_TO_NEG_INF;
            ceil => _MM_FROUND_TO_POS_INF;
            trunc => _MM_FROUND_TO_ZERO;
        }
    },
);

#[cfg(test)]
mod tests {
    use crate::emulation;
    use crate::interface::*;
    use crate::types::*;

    #[test]
    fn test_avx2_mullo_and_minmax() {
        let a = U32x8::from_fn(|i| (i as u32 + 1) * 0x1000_0001);
        let b = U32x8::splat(0x8000_0003);
        assert_eq!(a.mul(b), emulation::zip(a, b, |x: u32, y| x.wrapping_mul(y)));
        assert_eq!(a.min(b), emulation::zip(a, b, |x: u32, y| x.min(y)));
    }

    #[test]
    fn test_avx2_epi16_mask_order() {
        let a = I16x16::from_fn(|i| if i % 3 == 0 { 5 } else { -5 });
        let m = a.cmpgt(I16x16::zero());
        for i in 0..16 {
            assert_eq!(m.extract_lane(i), i % 3 == 0, "lane {i}");
        }
        let lt = a.cmplt(I16x16::zero());
        assert_eq!(lt, m.lnot());
    }

    #[test]
    fn test_avx2_variable_shifts() {
        let a = I32x8::splat(-64);
        let n = U32x8::from_array([0, 1, 2, 3, 31, 32, 100, u32::MAX]);
        assert_eq!(a.rsh(n).to_array(), [-64, -32, -16, -8, -1, -1, -1, -1]);
        assert_eq!(U32x8::splat(1).lsh(n).to_array(), [1, 2, 4, 8, 1 << 31, 0, 0, 0]);
    }

    #[test]
    fn test_avx2_float_compare_nan() {
        let a = F64x4::from_array([1.0, f64::NAN, 3.0, -0.0]);
        let b = F64x4::from_array([1.0, f64::NAN, 2.0, 0.0]);
        assert_eq!(a.cmpeq(b).to_array(), [true, false, false, true]);
        assert_eq!(a.cmpne(b).to_array(), [false, true, true, false]);
        assert_eq!(a.cmpge(b).to_array(), [true, false, true, true]);
    }

    #[test]
    fn test_avx2_rounding() {
        let a = F32x8::from_array([1.5, -1.5, 2.5, -0.4, 0.0, 7.0, -7.9, 1e30]);
        assert_eq!(a.floor(), emulation::map(a, f32::floor));
        assert_eq!(a.ceil(), emulation::map(a, f32::ceil));
        assert_eq!(a.trunc(), emulation::map(a, f32::trunc));
    }
}
