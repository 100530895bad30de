// tests/mask_algebra.rs
use ferrous_lanes::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_mask<M: SimdMask>(rng: &mut StdRng) -> M {
    M::from_fn(|_| rng.gen_bool(0.5))
}

fn check_laws<M: SimdMask>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..100 {
        let a: M = random_mask(&mut rng);
        let b: M = random_mask(&mut rng);
        let c: M = random_mask(&mut rng);

        // Commutativity and involution
        assert_eq!(a.land(b), b.land(a));
        assert_eq!(a.lor(b), b.lor(a));
        assert_eq!(a.lnot().lnot(), a);

        // Contradiction and excluded middle
        assert!(!a.land(a.lnot()).hlor());
        assert!(a.lor(a.lnot()).hland());

        // Distributivity and De Morgan
        assert_eq!(a.land(b.lor(c)), a.land(b).lor(a.land(c)));
        assert_eq!(a.land(b).lnot(), a.lnot().lor(b.lnot()));

        // Derived connectives
        assert_eq!(a.lxor(b), a.lor(b).land(a.land(b).lnot()));
        assert_eq!(a.landnot(b), a.lnot().land(b));

        // Scalar forms broadcast
        assert_eq!(a.land_s(true), a);
        assert_eq!(a.lor_s(true), M::splat(true));
        assert_eq!(a.lxor_s(true), a.lnot());

        // Bitmask round trip
        assert_eq!(M::from_bitmask(a.to_bitmask()), a);
        assert_eq!(a.count(), a.to_bitmask().count_ones() as usize);
    }
}

#[test]
fn test_mask_laws_all_widths() {
    check_laws::<M1>(1);
    check_laws::<M2>(2);
    check_laws::<M4>(4);
    check_laws::<M8>(8);
    check_laws::<M16>(16);
    check_laws::<M32>(32);
    check_laws::<M64>(64);
    check_laws::<M128>(128);
}

#[test]
fn test_horizontal_reductions() {
    let m = M8::from_array([true, false, true, true, false, false, false, false]);
    assert!(m.hlor());
    assert!(!m.hland());
    assert!(m.hlxor(), "three true lanes");
    assert_eq!(m.count(), 3);

    assert!(M4::splat(true).hland());
    assert!(!M4::zero().hlor());
    assert!(!M4::zero().hlxor());
}

#[test]
fn test_cmpe_is_exact() {
    let a = M4::from_array([true, false, true, false]);
    let mut b = a;
    assert!(a.cmpe(&b));
    b.insert(3, true).unwrap();
    assert!(!a.cmpe(&b));
}

#[test]
fn test_in_place_forms() {
    let mut m = M4::from_array([true, true, false, false]);
    m.landa(M4::from_array([true, false, true, false]))
        .lora_s(false)
        .lnota();
    assert_eq!(m.to_array(), [false, true, true, true]);
}

#[test]
fn test_checked_mask_access() {
    let mut m = M2::zero();
    assert_eq!(m.extract(2), Err(IndexOutOfRange::new(2, 2)));
    assert!(m.insert(1, true).is_ok());
    assert_eq!(m.to_array(), [false, true]);
    assert_eq!(M4::from_slice(&[true; 3]), Err(IndexOutOfRange::new(3, 3)));
    assert_eq!(M4::from_slice(&[true; 6]).map(|m| m.count()), Ok(4));
}

#[test]
fn test_masks_from_vector_comparisons() {
    let a = I32x8::from_fn(|i| i as i32 - 4);
    let negative = a.cmplt_s(0);
    let even = a.band_s(1).cmpeq_s(0);

    assert_eq!(negative.count(), 4);
    assert_eq!(negative.land(even).to_bitmask(), 0b0101);
    assert_eq!((negative & even).to_bitmask(), 0b0101);
    assert_eq!((!negative).count(), 4);
}
