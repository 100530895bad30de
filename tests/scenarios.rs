// tests/scenarios.rs
use ferrous_lanes::prelude::*;

#[test]
fn test_add_width4_u32() {
    let a = U32x4::from_array([1, 2, 3, 4]);
    let b = U32x4::from_array([10, 20, 30, 40]);
    assert_eq!(a.add(b).to_array(), [11, 22, 33, 44]);

    // Operator form goes through the same method
    assert_eq!((a + b).to_array(), [11, 22, 33, 44]);
}

#[test]
fn test_blend_width4() {
    let v = U32x4::from_array([1, 2, 3, 4]);
    let mask = M4::from_array([true, false, true, false]);
    let out = v.blend(&mask, U32x4::splat(9));
    assert_eq!(out.to_array(), [9, 2, 9, 4]);

    // Scalar form
    assert_eq!(v.blend_s(&mask, 9), out);
}

#[test]
fn test_pack_then_unpacklo() {
    let lo = U32x2::from_array([1, 2]);
    let hi = U32x2::from_array([3, 4]);

    let mut packed = U32x4::zero();
    packed.pack(lo, hi);
    assert_eq!(packed.to_array(), [1, 2, 3, 4]);
    assert_eq!(packed.unpacklo().to_array(), [1, 2]);
    assert_eq!(packed.unpackhi().to_array(), [3, 4]);
}

#[test]
fn test_wrapping_and_saturating_boundaries() {
    let a = U8x16::splat(250);
    assert_eq!(a.add_s(10), U8x16::splat(4), "plain add wraps");
    assert_eq!(a.sadd_s(10), U8x16::splat(u8::MAX), "saturating add clamps");
    assert_eq!(U8x16::splat(3).ssub_s(10), U8x16::zero());

    let b = I16x8::splat(i16::MIN);
    assert_eq!(b.neg(), b, "MIN negates to itself");
    assert_eq!(b.ssub_s(1), b);
    assert_eq!(b.div_s(-1), b, "MIN / -1 wraps");
}

#[test]
fn test_division_by_zero_is_total() {
    let a = U32x4::from_array([7, 0, 1, u32::MAX]);
    assert_eq!(a.div_s(0), U32x4::splat(u32::MAX));
    assert_eq!(a.rem_s(0), a);

    let b = I32x4::from_array([7, -7, 0, i32::MIN]);
    assert_eq!(b.div_s(0), I32x4::splat(-1));
    assert_eq!(b.rem_s(0), b);
}

#[test]
fn test_masked_ops_merge_on_true() {
    let a = F32x4::from_array([1.0, 4.0, 9.0, 16.0]);
    let m = M4::from_array([false, true, false, true]);
    assert_eq!(a.sqrt_m(&m).to_array(), [1.0, 2.0, 9.0, 4.0]);
    assert_eq!(a.mul_ms(&m, 0.5).to_array(), [1.0, 2.0, 9.0, 8.0]);

    let all = M4::splat(true);
    let none = M4::splat(false);
    assert_eq!(a.sqrt_m(&all), a.sqrt());
    assert_eq!(a.sqrt_m(&none), a);
}

#[test]
fn test_in_place_chaining() {
    let mut v = I32x8::from_fn(|i| i as i32);
    v.adda_s(1).mula_s(2).suba(I32x8::splat(2));
    assert_eq!(v.to_array(), [0, 2, 4, 6, 8, 10, 12, 14]);

    let before = v.postinc();
    assert_eq!(before.extract_lane(0), 0);
    assert_eq!(v.extract_lane(0), 1);
    v.predec();
    assert_eq!(v.extract_lane(7), 14);
}

#[test]
fn test_reductions() {
    let v = I32x4::from_array([3, -1, 4, -1]);
    assert_eq!(v.hadd(), 5);
    assert_eq!(v.hmul(), 12);
    assert_eq!(v.hmax(), 4);
    assert_eq!(v.hmin(), -1);

    let m = M4::from_array([true, false, false, true]);
    assert_eq!(v.hadd_m(&m), 2);
    assert_eq!(v.hmax_m(&M4::splat(false)), i32::MIN, "empty mask yields the identity");
    assert_eq!(v.hadd_s(100), 105);

    let bits = U8x4::from_array([0b1110_0110, 0b0111_0011, 0b1111_0010, 0b0110_1010]);
    let all = M4::splat(true);
    let none = M4::splat(false);
    assert_eq!(bits.hband(), 0b0110_0010);
    assert_eq!(bits.hbor(), 0b1111_1111);
    assert_eq!(bits.hbxor(), 0b0000_1101);
    assert_eq!(bits.hband_m(&all), bits.hband());
    assert_eq!(bits.hbor_m(&all), bits.hbor());
    assert_eq!(bits.hbxor_m(&all), bits.hbxor());

    // Empty mask: and starts from all ones, or/xor from zero
    assert_eq!(bits.hband_m(&none), u8::MAX);
    assert_eq!(bits.hbor_m(&none), 0);
    assert_eq!(bits.hbxor_m(&none), 0);
    assert_eq!(I16x8::splat(-1).hband_m(&M8::zero()), -1);

    let first_and_last = M4::from_array([true, false, false, true]);
    assert_eq!(bits.hband_m(&first_and_last), 0b0110_0010);
    assert_eq!(bits.hbor_ms(&first_and_last, 0b1_0000), 0b1111_1110);
    assert_eq!(bits.hbxor_s(0b1000_0000), 0b1000_1101);
}

#[test]
fn test_copysign_family() {
    let a = I32x4::from_array([5, -5, 7, i32::MIN]);
    let signs = I32x4::from_array([-1, 1, 0, 1]);
    assert_eq!(a.copysign(signs).to_array(), [-5, 5, 7, i32::MIN]);
    assert_eq!(a.copysign_s(-2).to_array(), [-5, -5, -7, i32::MIN]);

    // Merge-on-true: false lanes keep the receiver
    let m = M4::from_array([true, false, true, false]);
    assert_eq!(a.copysign_m(&m, signs).to_array(), [-5, -5, 7, i32::MIN]);
    assert_eq!(a.copysign_ms(&m, -1).to_array(), [-5, -5, -7, i32::MIN]);

    let mut f = F64x2::from_array([1.5, -2.5]);
    f.copysigna_s(-0.0);
    assert_eq!(f.to_array(), [-1.5, -2.5]);
    f.copysigna_m(&M2::from_array([false, true]), F64x2::splat(3.0));
    assert_eq!(f.to_array(), [-1.5, 2.5]);
}

#[test]
fn test_pow_and_reciprocal_families() {
    let a = F32x4::from_array([2.0, 8.0, 4.0, 0.5]);
    let m = M4::from_array([true, false, true, false]);

    assert_eq!(a.pow(F32x4::splat(2.0)).to_array(), [4.0, 64.0, 16.0, 0.25]);
    assert_eq!(a.pow_m(&m, a).to_array(), [4.0, 8.0, 256.0, 0.5]);
    assert_eq!(a.pow_ms(&m, 0.0).to_array(), [1.0, 8.0, 1.0, 0.5]);

    let mut b = a;
    b.powa_s(3.0);
    assert_eq!(b.to_array(), [8.0, 512.0, 64.0, 0.125]);
    b.powa_m(&m, F32x4::splat(0.0)).powa_ms(&m.lnot(), 1.0);
    assert_eq!(b.to_array(), [1.0, 512.0, 1.0, 0.125]);

    let mut r = a;
    r.rcpa();
    assert_eq!(r.to_array(), [0.5, 0.125, 0.25, 2.0]);
    r.rcpa_m(&m);
    assert_eq!(r.to_array(), [2.0, 0.125, 4.0, 2.0]);
    r.rcpa_s(8.0);
    assert_eq!(r.to_array(), [4.0, 64.0, 2.0, 4.0]);
    r.rcpa_ms(&m, 1.0);
    assert_eq!(r.to_array(), [0.25, 64.0, 0.5, 4.0]);
}

#[test]
fn test_float_min_max_unordered() {
    let a = F64x2::from_array([f64::NAN, 1.0]);
    let b = F64x2::from_array([2.0, f64::NAN]);

    // Unordered lanes yield the second operand
    let lo = a.min(b);
    assert_eq!(lo.extract_lane(0), 2.0);
    assert!(lo.extract_lane(1).is_nan());

    let hi = a.max(b);
    assert_eq!(hi.extract_lane(0), 2.0);
    assert!(hi.extract_lane(1).is_nan());
}

#[test]
fn test_compare_and_predicates() {
    let a = F32x4::from_array([1.0, f32::NAN, f32::INFINITY, 1e-40]);
    assert_eq!(a.isnan().to_array(), [false, true, false, false]);
    assert_eq!(a.isinf().to_array(), [false, false, true, false]);
    assert_eq!(a.issub().to_array(), [false, false, false, true]);
    assert_eq!(a.cmpeq(a).to_array(), [true, false, true, true]);
    assert_eq!(a.cmpne(a).to_array(), [false, true, false, false]);

    assert!(!a.cmpe(&a), "NaN lane is never equal");
    assert!(U16x4::splat(3).cmpe_s(3));
}

#[test]
fn test_checked_lane_access() {
    let mut v = U64x2::from_array([5, 6]);
    assert_eq!(v.extract(1), Ok(6));
    assert_eq!(v.extract(2), Err(IndexOutOfRange::new(2, 2)));
    assert!(v.insert(2, 0).is_err());
    assert_eq!(v.to_array(), [5, 6], "failed insert leaves the vector unchanged");

    let lane = TrustedIndex::<U64x2>::new(0).unwrap();
    v.insert_trusted(lane, 9);
    assert_eq!(v.extract_trusted(lane), 9);
}

#[test]
fn test_swizzle_and_conversion() {
    let v = I32x4::from_array([10, -20, 30, -40]);
    let reverse = Sw4::new([3, 2, 1, 0]).unwrap();
    assert_eq!(v.swizzle(&reverse).to_array(), [-40, 30, -20, 10]);

    assert_eq!(v.to_float().to_array(), [10.0, -20.0, 30.0, -40.0]);
    assert_eq!(v.to_uint().to_array(), [10, (-20i32) as u32, 30, (-40i32) as u32]);

    let f = F32x4::from_array([2.7, -2.7, f32::NAN, -1e20]);
    assert_eq!(f.to_int().to_array(), [2, -2, 0, i32::MIN]);
}

#[test]
fn test_shift_semantics() {
    let u = U32x4::from_array([1, 2, 0x8000_0000, 7]);
    assert_eq!(u.lsh_s(31).to_array(), [0x8000_0000, 0, 0, 0x8000_0000]);
    assert_eq!(u.rsh_s(40), U32x4::zero(), "amount past the width gives zero");
    assert_eq!(u.rol_s(33), u.rol_s(1), "rotates are modulo the width");

    let s = I32x4::splat(-8);
    assert_eq!(s.rsh_s(1), I32x4::splat(-4));
    assert_eq!(s.rsh_s(200), I32x4::splat(-1), "arithmetic shift fills with the sign");
    assert_eq!(s.rsh(U32x4::from_array([0, 1, 2, 3])).to_array(), [-8, -4, -2, -1]);
}

#[test]
fn test_fused_family() {
    let a = F32x4::splat(2.0);
    let b = F32x4::splat(3.0);
    let c = F32x4::splat(1.0);
    assert_eq!(a.fmuladd(b, c), F32x4::splat(7.0));
    assert_eq!(a.fmulsub(b, c), F32x4::splat(5.0));
    assert_eq!(a.faddmul(b, c), F32x4::splat(5.0));
    assert_eq!(a.fsubmul(b, c), F32x4::splat(-1.0));
}
