use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ferrous_lanes::emulation;
use ferrous_lanes::emulation::histogram::reference_add;
use ferrous_lanes::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BLOCK: usize = 4096;

fn random_block<V>(seed: u64) -> Vec<V>
where
    V: SimdVec,
    rand::distributions::Standard: rand::distributions::Distribution<V::Scalar>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    (0..BLOCK).map(|_| V::from_fn(|_| rng.r#gen())).collect()
}

/// Backend method against the lane-by-lane reference on the same inputs.
/// On builds without an override for `V` both lines measure the same code.
fn bench_lane_ops_for<V>(c: &mut Criterion, name: &str)
where
    V: SimdVec,
    rand::distributions::Standard: rand::distributions::Distribution<V::Scalar>,
{
    let a = random_block::<V>(1);
    let b = random_block::<V>(2);

    let mut group = c.benchmark_group(format!("lane_ops/{name}"));
    group.throughput(Throughput::Elements((BLOCK * V::LENGTH) as u64));

    group.bench_function("add/backend", |bench| {
        bench.iter(|| {
            let mut acc = V::zero();
            for (x, y) in a.iter().zip(&b) {
                acc.adda(x.add(*y));
            }
            black_box(acc)
        })
    });
    group.bench_function("add/emulated", |bench| {
        bench.iter(|| {
            let mut acc = V::zero();
            for (x, y) in a.iter().zip(&b) {
                acc = emulation::zip(acc, emulation::zip(*x, *y, SimdScalar::lane_add), SimdScalar::lane_add);
            }
            black_box(acc)
        })
    });

    group.bench_function("max/backend", |bench| {
        bench.iter(|| a.iter().zip(&b).fold(V::zero(), |acc, (x, y)| acc.max(x.max(*y))))
    });
    group.bench_function("max/emulated", |bench| {
        bench.iter(|| {
            a.iter().zip(&b).fold(V::zero(), |acc, (x, y)| {
                emulation::zip(acc, emulation::zip(*x, *y, SimdScalar::lane_max), SimdScalar::lane_max)
            })
        })
    });

    group.bench_function("cmplt/backend", |bench| {
        bench.iter(|| a.iter().zip(&b).map(|(x, y)| x.cmplt(*y).count()).sum::<usize>())
    });
    group.bench_function("cmplt/emulated", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(x, y)| emulation::compare(x, y, |p, q| p < q).count())
                .sum::<usize>()
        })
    });

    group.finish();
}

fn bench_lane_ops(c: &mut Criterion) {
    ferrous_lanes::log_active_backend();
    bench_lane_ops_for::<U8x16>(c, "U8x16");
    bench_lane_ops_for::<I16x16>(c, "I16x16");
    bench_lane_ops_for::<I32x4>(c, "I32x4");
    bench_lane_ops_for::<I32x8>(c, "I32x8");
    bench_lane_ops_for::<F32x8>(c, "F32x8");
    bench_lane_ops_for::<F64x2>(c, "F64x2");
    bench_lane_ops_for::<I32x16>(c, "I32x16");
}

fn bench_reductions(c: &mut Criterion) {
    let block = random_block::<I32x8>(3);
    let mut group = c.benchmark_group("reductions");
    group.throughput(Throughput::Elements((BLOCK * 8) as u64));

    group.bench_function("hadd", |bench| {
        bench.iter(|| block.iter().fold(0i32, |acc, v| acc.wrapping_add(v.hadd())))
    });
    group.bench_function("hmax", |bench| {
        bench.iter(|| block.iter().map(|v| v.hmax()).max())
    });
    group.finish();
}

/// Index vectors with a controlled number of distinct bins, from fully
/// unique (one bulk update) down to a single bin (full recursion).
fn index_block(distinct: u32, seed: u64) -> Vec<U32x16> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..BLOCK / 16)
        .map(|_| {
            if distinct >= 16 {
                let base = rng.gen_range(0..64) * 16;
                U32x16::from_fn(|i| base + i as u32)
            } else {
                U32x16::from_fn(|_| rng.gen_range(0..distinct))
            }
        })
        .collect()
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    group.throughput(Throughput::Elements(BLOCK as u64));

    for distinct in [16u32, 8, 2, 1] {
        let block = index_block(distinct, 4);
        let mut bins = vec![0u32; 1024];

        group.bench_with_input(BenchmarkId::new("recursive", distinct), &block, |bench, block| {
            bench.iter(|| {
                for idx in block {
                    idx.histogram_increment(&mut bins).unwrap();
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("lane_by_lane", distinct), &block, |bench, block| {
            bench.iter(|| {
                for idx in block {
                    reference_add(idx, &mut bins, 1).unwrap();
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lane_ops, bench_reductions, bench_histogram);
criterion_main!(benches);
