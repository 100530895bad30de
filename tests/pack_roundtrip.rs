// tests/pack_roundtrip.rs
use ferrous_lanes::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn check_roundtrip<V>(seed: u64)
where
    V: SimdPack,
    rand::distributions::Standard: rand::distributions::Distribution<V::Scalar>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..32 {
        let lo = <V::Half as SimdVec>::from_fn(|_| rng.r#gen());
        let hi = <V::Half as SimdVec>::from_fn(|_| rng.r#gen());

        let v = V::from_halves(lo, hi);
        let (a, b) = v.unpack();
        assert_eq!(a, lo, "{}", std::any::type_name::<V>());
        assert_eq!(b, hi, "{}", std::any::type_name::<V>());

        // Lane layout: low half first
        let half = V::LENGTH / 2;
        for i in 0..half {
            assert_eq!(v.extract_lane(i), lo.extract_lane(i));
            assert_eq!(v.extract_lane(half + i), hi.extract_lane(i));
        }
    }
}

#[test]
fn test_pack_roundtrip_every_scalar() {
    check_roundtrip::<U8x2>(1);
    check_roundtrip::<U8x32>(2);
    check_roundtrip::<U8x128>(3);
    check_roundtrip::<I16x8>(4);
    check_roundtrip::<I16x64>(5);
    check_roundtrip::<U32x4>(6);
    check_roundtrip::<I32x32>(7);
    check_roundtrip::<U64x16>(8);
    check_roundtrip::<I64x2>(9);
    check_roundtrip::<F32x8>(10);
    check_roundtrip::<F64x4>(11);
}

#[test]
fn test_packlo_packhi_keep_the_other_half() {
    let mut v = I32x8::from_array([0, 1, 2, 3, 4, 5, 6, 7]);
    v.packlo(I32x4::splat(-1));
    assert_eq!(v.to_array(), [-1, -1, -1, -1, 4, 5, 6, 7]);
    v.packhi(I32x4::splat(-2));
    assert_eq!(v.to_array(), [-1, -1, -1, -1, -2, -2, -2, -2]);
}

#[test]
fn test_nested_halves() {
    let v = U16x8::from_fn(|i| i as u16 * 11);
    let (lo, hi) = v.unpack();
    let (lolo, lohi) = lo.unpack();
    let (hilo, hihi) = hi.unpack();
    assert_eq!(lolo.to_array(), [0, 11]);
    assert_eq!(lohi.to_array(), [22, 33]);
    assert_eq!(hilo.to_array(), [44, 55]);
    assert_eq!(hihi.to_array(), [66, 77]);

    let rebuilt = U16x8::from_halves(U16x4::from_halves(lolo, lohi), U16x4::from_halves(hilo, hihi));
    assert_eq!(rebuilt, v);
}
