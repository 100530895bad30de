//! SSE2 overrides for the 128-bit vectors.
//!
//! SSE2 is part of the x86_64 baseline, so these are compiled in whenever
//! the target is x86_64 and `force-scalar` is off. Only operations with a
//! single instruction (or a short fixed sequence) that matches the lane
//! semantics exactly are overridden; the rest stay emulated. In particular
//! there is no 32-bit `mullo`, no unsigned compare and no 64-bit compare in
//! SSE2.

use std::arch::x86_64::*;

use crate::interface::SimdMask;
use crate::types::*;

// ===== Register transfer =====

#[inline(always)]
fn load_si128<V: Copy>(v: &V) -> __m128i {
    const { assert!(size_of::<V>() == 16 && align_of::<V>() == 16) };
    // SAFETY: `V` is a 16-byte lane array aligned to 16.
    unsafe { _mm_load_si128((v as *const V).cast()) }
}

#[inline(always)]
fn store_si128<V: Copy>(mut out: V, r: __m128i) -> V {
    const { assert!(size_of::<V>() == 16 && align_of::<V>() == 16) };
    // SAFETY: as in `load_si128`.
    unsafe { _mm_store_si128((&mut out as *mut V).cast(), r) };
    out
}

#[inline(always)]
fn load_ps<V: Copy>(v: &V) -> __m128 {
    // SAFETY: bit cast between register types.
    unsafe { _mm_castsi128_ps(load_si128(v)) }
}

#[inline(always)]
fn store_ps<V: Copy>(out: V, r: __m128) -> V {
    // SAFETY: bit cast between register types.
    store_si128(out, unsafe { _mm_castps_si128(r) })
}

#[inline(always)]
fn load_pd<V: Copy>(v: &V) -> __m128d {
    // SAFETY: bit cast between register types.
    unsafe { _mm_castsi128_pd(load_si128(v)) }
}

#[inline(always)]
fn store_pd<V: Copy>(out: V, r: __m128d) -> V {
    // SAFETY: bit cast between register types.
    store_si128(out, unsafe { _mm_castpd_si128(r) })
}

#[inline(always)]
fn zip_si128<V: Copy>(a: V, b: V, f: impl FnOnce(__m128i, __m128i) -> __m128i) -> V {
    store_si128(a, f(load_si128(&a), load_si128(&b)))
}

#[inline(always)]
fn zip_ps<V: Copy>(a: V, b: V, f: impl FnOnce(__m128, __m128) -> __m128) -> V {
    store_ps(a, f(load_ps(&a), load_ps(&b)))
}

#[inline(always)]
fn zip_pd<V: Copy>(a: V, b: V, f: impl FnOnce(__m128d, __m128d) -> __m128d) -> V {
    store_pd(a, f(load_pd(&a), load_pd(&b)))
}

/// Shift every lane by one scalar amount. The count register holds the
/// amount zero extended to 64 bits, so amounts past the lane width behave
/// like the scalar semantics (zero, or sign fill for `sra`).
#[inline(always)]
fn shift_si128<V: Copy>(a: V, amount: u32, f: impl FnOnce(__m128i, __m128i) -> __m128i) -> V {
    // SAFETY: SSE2 is enabled for this module.
    let count = unsafe { _mm_cvtsi32_si128(amount as i32) };
    store_si128(a, f(load_si128(&a), count))
}

// ===== Compare results to masks =====

#[inline(always)]
fn mask_epi8<M: SimdMask>(r: __m128i) -> M {
    // SAFETY: SSE2 is enabled for this module.
    let bits = unsafe { _mm_movemask_epi8(r) };
    M::from_bitmask(bits as u32 as u128)
}

#[inline(always)]
fn mask_epi16<M: SimdMask>(r: __m128i) -> M {
    // Saturating pack keeps 0 and -1, leaving one byte per lane.
    // SAFETY: SSE2 is enabled for this module.
    let bits = unsafe { _mm_movemask_epi8(_mm_packs_epi16(r, _mm_setzero_si128())) };
    M::from_bitmask((bits & 0xff) as u32 as u128)
}

#[inline(always)]
fn mask_epi32<M: SimdMask>(r: __m128i) -> M {
    // SAFETY: SSE2 is enabled for this module.
    let bits = unsafe { _mm_movemask_ps(_mm_castsi128_ps(r)) };
    M::from_bitmask(bits as u32 as u128)
}

#[inline(always)]
fn mask_ps<M: SimdMask>(r: __m128) -> M {
    // SAFETY: SSE2 is enabled for this module.
    let bits = unsafe { _mm_movemask_ps(r) };
    M::from_bitmask(bits as u32 as u128)
}

#[inline(always)]
fn mask_pd<M: SimdMask>(r: __m128d) -> M {
    // SAFETY: SSE2 is enabled for this module.
    let bits = unsafe { _mm_movemask_pd(r) };
    M::from_bitmask(bits as u32 as u128)
}

// ===== Method emitters =====

macro_rules! si128 {
    ($($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self {
                zip_si128(self, b, |x, y| unsafe { $intrinsic(x, y) })
            }
        )*
    };
}

macro_rules! si128_compare {
    ($($method:ident => $intrinsic:ident, $mask:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self::Mask {
                $mask(unsafe { $intrinsic(load_si128(&self), load_si128(&b)) })
            }
        )*
    };
}

macro_rules! si128_shift {
    ($($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self, amount: u32) -> Self {
                shift_si128(self, amount, |x, n| unsafe { $intrinsic(x, n) })
            }
        )*
    };
}

macro_rules! bitwise_si128 {
    () => {
        si128! {
            band => _mm_and_si128;
            bor => _mm_or_si128;
            bxor => _mm_xor_si128;
            bandnot => _mm_andnot_si128;
        }
    };
}

// ===== 8-bit lanes =====

uint_vector!(U8x16,
    base {
        si128! {
            add => _mm_add_epi8;
            sub => _mm_sub_epi8;
            min => _mm_min_epu8;
            max => _mm_max_epu8;
        }
        si128_compare! {
            cmpeq => _mm_cmpeq_epi8, mask_epi8;
        }
    },
    bitwise { bitwise_si128!(); },
    integer {
        si128! {
            sadd => _mm_adds_epu8;
            ssub => _mm_subs_epu8;
        }
    },
);

int_vector!(I8x16,
    base {
        si128! {
            add => _mm_add_epi8;
            sub => _mm_sub_epi8;
        }
        si128_compare! {
            cmpeq => _mm_cmpeq_epi8, mask_epi8;
            cmpgt => _mm_cmpgt_epi8, mask_epi8;
            cmplt => _mm_cmplt_epi8, mask_epi8;
        }
    },
    bitwise { bitwise_si128!(); },
    integer {
        si128! {
            sadd => _mm_adds_epi8;
            ssub => _mm_subs_epi8;
        }
    },
);

// ===== 16-bit lanes =====

uint_vector!(U16x8,
    base {
        si128! {
            add => _mm_add_epi16;
            sub => _mm_sub_epi16;
            mul => _mm_mullo_epi16;
        }
        si128_compare! {
            cmpeq => _mm_cmpeq_epi16, mask_epi16;
        }
    },
    bitwise { bitwise_si128!(); },
    integer {
        si128! {
            sadd => _mm_adds_epu16;
            ssub => _mm_subs_epu16;
        }
    },
    shift {
        si128_shift! {
            lsh_s => _mm_sll_epi16;
            rsh_s => _mm_srl_epi16;
        }
    },
);

int_vector!(I16x8,
    base {
        si128! {
            add => _mm_add_epi16;
            sub => _mm_sub_epi16;
            mul => _mm_mullo_epi16;
            min => _mm_min_epi16;
            max => _mm_max_epi16;
        }
        si128_compare! {
            cmpeq => _mm_cmpeq_epi16, mask_epi16;
            cmpgt => _mm_cmpgt_epi16, mask_epi16;
            cmplt => _mm_cmplt_epi16, mask_epi16;
        }
    },
    bitwise { bitwise_si128!(); },
    integer {
        si128! {
            sadd => _mm_adds_epi16;
            ssub => _mm_subs_epi16;
        }
    },
    shift {
        si128_shift! {
            lsh_s => _mm_sll_epi16;
            rsh_s => _mm_sra_epi16;
        }
    },
);

// ===== 32-bit lanes =====

uint_vector!(U32x4,
    base {
        si128! {
            add => _mm_add_epi32;
            sub => _mm_sub_epi32;
        }
        si128_compare! {
            cmpeq => _mm_cmpeq_epi32, mask_epi32;
        }
    },
    bitwise { bitwise_si128!(); },
    shift {
        si128_shift! {
            lsh_s => _mm_sll_epi32;
            rsh_s => _mm_srl_epi32;
        }
    },
);

int_vector!(I32x4,
    base {
        si128! {
            add => _mm_add_epi32;
            sub => _mm_sub_epi32;
        }
        si128_compare! {
            cmpeq => _mm_cmpeq_epi32, mask_epi32;
            cmpgt => _mm_cmpgt_epi32, mask_epi32;
            cmplt => _mm_cmplt_epi32, mask_epi32;
        }
    },
    bitwise { bitwise_si128!(); },
    shift {
        si128_shift! {
            lsh_s => _mm_sll_epi32;
            rsh_s => _mm_sra_epi32;
        }
    },
);

// ===== 64-bit lanes =====

uint_vector!(U64x2,
    base {
        si128! {
            add => _mm_add_epi64;
            sub => _mm_sub_epi64;
        }
    },
    bitwise { bitwise_si128!(); },
    shift {
        si128_shift! {
            lsh_s => _mm_sll_epi64;
            rsh_s => _mm_srl_epi64;
        }
    },
);

int_vector!(I64x2,
    base {
        si128! {
            add => _mm_add_epi64;
            sub => _mm_sub_epi64;
        }
    },
    bitwise { bitwise_si128!(); },
    shift {
        si128_shift! {
            lsh_s => _mm_sll_epi64;
        }
    },
);

// ===== Float lanes =====

macro_rules! ps {
    ($($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self {
                zip_ps(self, b, |x, y| unsafe { $intrinsic(x, y) })
            }
        )*
    };
}

macro_rules! pd {
    ($($method:ident => $intrinsic:ident;)*) => {
        $(
            #[inline]
            fn $method(self, b: Self) -> Self {
                zip_pd(self, b, |x, y| unsafe { $intrinsic(x, y) })
            }
        )*
    };
}

float_vector!(F32x4,
    base {
        // `minps`/`maxps` return the second operand on NaN and on equal
        // zeros, which is the lane semantics of `min`/`max`.
        ps! {
            add => _mm_add_ps;
            sub => _mm_sub_ps;
            mul => _mm_mul_ps;
            div => _mm_div_ps;
            min => _mm_min_ps;
            max => _mm_max_ps;
        }

        #[inline]
        fn cmpeq(self, b: Self) -> Self::Mask {
            mask_ps(unsafe { _mm_cmpeq_ps(load_ps(&self), load_ps(&b)) })
        }

        #[inline]
        fn cmpne(self, b: Self) -> Self::Mask {
            mask_ps(unsafe { _mm_cmpneq_ps(load_ps(&self), load_ps(&b)) })
        }

        #[inline]
        fn cmplt(self, b: Self) -> Self::Mask {
            mask_ps(unsafe { _mm_cmplt_ps(load_ps(&self), load_ps(&b)) })
        }

        #[inline]
        fn cmple(self, b: Self) -> Self::Mask {
            mask_ps(unsafe { _mm_cmple_ps(load_ps(&self), load_ps(&b)) })
        }
    },
    float {
        #[inline]
        fn sqrt(self) -> Self {
            store_ps(self, unsafe { _mm_sqrt_ps(load_ps(&self)) })
        }
    },
);

float_vector!(F64x2,
    base {
        pd! {
            add => _mm_add_pd;
            sub => _mm_sub_pd;
            mul => _mm_mul_pd;
            div => _mm_div_pd;
            min => _mm_min_pd;
            max => _mm_max_pd;
        }

        #[inline]
        fn cmpeq(self, b: Self) -> Self::Mask {
            mask_pd(unsafe { _mm_cmpeq_pd(load_pd(&self), load_pd(&b)) })
        }

        #[inline]
        fn cmplt(self, b: Self) -> Self::Mask {
            mask_pd(unsafe { _mm_cmplt_pd(load_pd(&self), load_pd(&b)) })
        }
    },
    float {
        #[inline]
        fn sqrt(self) -> Self {
            store_pd(self, unsafe { _mm_sqrt_pd(load_pd(&self)) })
        }
    },
);
