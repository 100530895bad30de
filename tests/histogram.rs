// tests/histogram.rs
//
// The recursive histogram update must match a lane-by-lane loop for every
// duplicate pattern: all distinct, all identical, and random collisions.

use ferrous_lanes::emulation::histogram::reference_add;
use ferrous_lanes::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BINS: usize = 40;

fn run_pattern<V>(indices: V) -> (Vec<u32>, Vec<u32>)
where
    V: SimdHistogram<Scalar = u32>,
{
    let mut bins = vec![0u32; BINS];
    let mut expected = vec![0u32; BINS];
    indices.histogram_add(&mut bins, 3).unwrap();
    reference_add(&indices, &mut expected, 3).unwrap();
    (bins, expected)
}

fn check_width<V>(seed: u64)
where
    V: SimdHistogram<Scalar = u32>,
{
    let name = std::any::type_name::<V>();

    // All distinct
    let distinct = V::from_fn(|i| i as u32);
    let (got, want) = run_pattern(distinct);
    assert_eq!(got, want, "{name} distinct");

    // All identical: one bin collects every lane
    let identical = V::splat(7);
    let (got, want) = run_pattern(identical);
    assert_eq!(got, want, "{name} identical");
    assert_eq!(got[7], 3 * V::LENGTH as u32);

    // Pairs: lane i and i + 1 share a bin
    let pairs = V::from_fn(|i| (i / 2) as u32);
    let (got, want) = run_pattern(pairs);
    assert_eq!(got, want, "{name} pairs");

    // Random collisions, accumulated across many updates
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bins = vec![0u32; BINS];
    let mut expected = vec![0u32; BINS];
    for _ in 0..200 {
        let idx = V::from_fn(|_| rng.gen_range(0..8));
        idx.histogram_increment(&mut bins).unwrap();
        reference_add(&idx, &mut expected, 1).unwrap();
    }
    assert_eq!(bins, expected, "{name} random");
    assert_eq!(bins.iter().sum::<u32>(), 200 * V::LENGTH as u32);
}

#[test]
fn test_histogram_width_1() {
    check_width::<U32x1>(1);
}

#[test]
fn test_histogram_width_2() {
    check_width::<U32x2>(2);
}

#[test]
fn test_histogram_width_4() {
    check_width::<U32x4>(4);
}

#[test]
fn test_histogram_width_8() {
    check_width::<U32x8>(8);
}

#[test]
fn test_histogram_width_16() {
    check_width::<U32x16>(16);
}

#[test]
fn test_histogram_width_32() {
    check_width::<U32x32>(32);
}

#[test]
fn test_histogram_narrow_lanes_wrap() {
    // u8 bins wrap like the scalar loop does
    let idx = U8x16::splat(0);
    let mut bins = [250u8; 2];
    idx.histogram_increment(&mut bins).unwrap();
    assert_eq!(bins, [250u8.wrapping_add(16), 250]);
}

#[test]
fn test_histogram_rejects_bad_index_before_writing() {
    let idx = U16x8::from_array([0, 1, 2, 3, 4, 5, 6, 99]);
    let mut bins = vec![0u16; 8];
    assert_eq!(idx.histogram_increment(&mut bins), Err(IndexOutOfRange::new(99, 8)));
    assert!(bins.iter().all(|&b| b == 0));
}

#[test]
fn test_histogram_trusted_reuse() {
    let idx = TrustedIndices::new(U64x4::from_array([1, 1, 0, 3]), 4).unwrap();
    let mut bins = [0u64; 4];
    for _ in 0..10 {
        U64x4::histogram_add_trusted(&idx, &mut bins, 2).unwrap();
    }
    assert_eq!(bins, [20, 40, 0, 20]);
}
