// tests/proxy.rs
use ferrous_lanes::prelude::*;

#[test]
fn test_masked_view_chains() {
    let mut v = I32x4::from_array([10, 20, 30, 40]);
    let m = M4::from_array([true, false, false, true]);

    v.masked(m).add_s(5).mul_s(2).sub(I32x4::splat(1));
    assert_eq!(v.to_array(), [29, 20, 30, 89]);

    v.masked(m).div_s(0);
    assert_eq!(v.to_array(), [-1, 20, 30, -1], "signed division by zero yields -1");

    v.masked(m.lnot()).assign_s(-7);
    assert_eq!(v.to_array(), [-1, -7, -7, -1]);
}

#[test]
fn test_masked_view_operators() {
    let mut v = U16x8::splat(0b1100);
    let m = M8::from_fn(|i| i < 4);
    {
        let mut view = v.masked(m);
        assert_eq!(view.mask().count(), 4);
        view += U16x8::splat(1);
        view &= U16x8::splat(0b0101);
        view |= U16x8::splat(0b1000_0000);
        view ^= U16x8::splat(0b1);
    }
    // 0b1100 + 1 = 0b1101, & 0b0101 = 0b0101, | 0x80, ^ 1
    assert_eq!(v.to_array(), [0x84, 0x84, 0x84, 0x84, 0b1100, 0b1100, 0b1100, 0b1100]);
}

#[test]
fn test_masked_view_float_lanes() {
    let mut v = F32x4::from_array([1.0, 2.0, 3.0, 4.0]);
    {
        let mut view = v.masked(M4::from_array([false, true, false, true]));
        view /= F32x4::splat(2.0);
        view -= F32x4::splat(0.5);
    }
    assert_eq!(v.to_array(), [1.0, 0.5, 3.0, 1.5]);
}

#[test]
fn test_lane_view_read_write() {
    let mut v = I64x4::from_array([1, 2, 3, 4]);
    {
        let mut lane = v.at(2).unwrap();
        assert_eq!(lane.index(), 2);
        assert_eq!(lane.get(), 3);
        lane.set(30);
        lane += 3;
        lane *= 2;
        lane -= 1;
        lane /= 5;
        assert!(lane == 13i64);
        assert!(lane > 12i64 && lane < 14i64);
    }
    assert_eq!(v.to_array(), [1, 2, 13, 4]);

    assert_eq!(v.at(4).unwrap_err(), IndexOutOfRange::new(4, 4));
}

#[test]
fn test_lane_view_compares_against_other_lane_view() {
    let mut a = U8x16::from_fn(|i| i as u8);
    let mut b = U8x16::splat(5);

    let x = a.at(5).unwrap();
    let y = b.at(0).unwrap();
    assert!(x == y);

    let x = a.at(9).unwrap();
    let y = b.at(15).unwrap();
    assert!(x > y);
    assert!(y < x);
}

#[test]
fn test_trusted_lane_view() {
    let mut v = F64x2::from_array([0.25, -1.0]);
    let idx = TrustedIndex::<F64x2>::new(1).unwrap();
    v.at_trusted(idx).set(8.0);
    assert_eq!(v.extract_trusted(idx), 8.0);

    // NaN lanes compare unordered
    v.insert(0, f64::NAN).unwrap();
    let lane = v.at(0).unwrap();
    assert!(lane != 0.0f64);
    assert_eq!(lane.partial_cmp(&0.0f64), None);
}

#[test]
fn test_lane_view_arithmetic_with_scalars() {
    let mut v = U32x4::from_array([7, 0, 9, 1]);

    assert_eq!(v.at(0).unwrap() + 1u32, 8);
    assert_eq!(v.at(0).unwrap() - 10u32, 7u32.wrapping_sub(10));
    assert_eq!(v.at(2).unwrap() * 3u32, 27);
    assert_eq!(v.at(2).unwrap() / 0u32, u32::MAX, "unsigned division by zero");

    // Reading through a lane view leaves the vector untouched
    assert_eq!(v.to_array(), [7, 0, 9, 1]);
}

#[test]
fn test_lane_view_arithmetic_between_views() {
    let mut a = I16x8::from_fn(|i| i as i16 * 10);
    let mut b = I16x8::splat(-4);

    assert_eq!(a.at(3).unwrap() + b.at(0).unwrap(), 26);
    assert_eq!(a.at(3).unwrap() - b.at(1).unwrap(), 34);
    assert_eq!(a.at(2).unwrap() * b.at(2).unwrap(), -80);
    assert_eq!(a.at(7).unwrap() / b.at(7).unwrap(), -17);

    // Two lanes of the same vector through copies of it
    let mut c = a;
    let sum = a.at(1).unwrap() + c.at(6).unwrap();
    assert_eq!(sum, 70);

    let mut f = F32x4::from_array([1.5, 2.0, 0.0, 4.0]);
    let mut g = F32x4::splat(0.5);
    assert_eq!(f.at(0).unwrap() * g.at(0).unwrap(), 0.75);
    assert_eq!(f.at(3).unwrap() / 8.0f32, 0.5);
}
