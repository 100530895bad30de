// tests/registry.rs
use std::any::TypeId;

use ferrous_lanes::prelude::*;
use ferrous_lanes::{ACTIVE, Backend, is_accelerated};

fn same<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

#[test]
fn test_vector_alias_resolves() {
    assert!(same::<Vector<u32, 4>, U32x4>());
    assert!(same::<Vector<i8, 128>, I8x128>());
    assert!(same::<Vector<f64, 1>, F64x1>());
    assert!(same::<Mask<16>, M16>());
    assert!(same::<Swizzle<8>, Sw8>());
}

#[test]
fn test_counterparts_share_length_and_mask() {
    assert!(same::<<F32x8 as UintCounterpart>::Uint, U32x8>());
    assert!(same::<<F32x8 as IntCounterpart>::Int, I32x8>());
    assert!(same::<<I64x2 as FloatCounterpart>::Float, F64x2>());
    assert!(same::<<U16x4 as IntCounterpart>::Int, I16x4>());
    assert!(same::<<U16x4 as UintCounterpart>::Uint, U16x4>());
    assert!(same::<<I8x32 as VecBinding>::Mask, M32>());
}

#[test]
fn test_half_and_double() {
    assert!(same::<<U8x16 as HalfLength>::Half, U8x8>());
    assert!(same::<<U8x16 as DoubleLength>::Double, U8x32>());
    assert!(same::<<<F64x4 as HalfLength>::Half as DoubleLength>::Double, F64x4>());
}

#[test]
fn test_length_and_alignment() {
    assert_eq!(<U8x1 as VecBinding>::LENGTH, 1);
    assert_eq!(<I16x64 as VecBinding>::LENGTH, 64);
    assert_eq!(U32x4::zero().length(), 4);

    assert_eq!(<U8x1 as VecBinding>::ALIGNMENT, 1);
    assert_eq!(<U32x4 as VecBinding>::ALIGNMENT, 16);
    assert_eq!(<F32x8 as VecBinding>::ALIGNMENT, 32);
    // Capped at a cache line
    assert_eq!(<U8x128 as VecBinding>::ALIGNMENT, 64);
    assert_eq!(<I64x16 as VecBinding>::ALIGNMENT, 64);
}

#[test]
fn test_generic_code_through_aliases() {
    fn lane_sum<const N: usize>() -> u32
    where
        u32: VectorOf<N>,
    {
        let v = Vector::<u32, N>::from_fn(|i| i as u32);
        (0..N).map(|i| v.extract_lane(i)).sum()
    }

    assert_eq!(lane_sum::<4>(), 6);
    assert_eq!(lane_sum::<32>(), 496);
}

#[test]
fn test_active_backend_matches_build() {
    let expected = if cfg!(feature = "force-scalar") {
        Backend::Scalar
    } else if cfg!(all(target_arch = "x86_64", target_feature = "avx2")) {
        Backend::Avx2
    } else if cfg!(all(target_arch = "x86_64", target_feature = "sse2")) {
        Backend::Sse2
    } else if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
        Backend::Neon
    } else {
        Backend::Scalar
    };
    assert_eq!(ACTIVE, expected);

    let names = ACTIVE.accelerated_types();
    assert_eq!(names.contains(&"U32x4"), is_accelerated::<U32x4>());
    assert_eq!(names.contains(&"F64x4"), is_accelerated::<F64x4>());
    assert!(!is_accelerated::<U8x64>(), "no 512-bit backend");
    assert!(!is_accelerated::<I32x1>());
}
