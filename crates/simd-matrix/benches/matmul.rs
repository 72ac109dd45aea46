//! Benchmark for lane-parallel matrix products.
//!
//! This benchmark compares:
//! - Default vector lanes (`wide`)
//! - Portable scalar-array lanes at the same width
//! - A naive i-k-j scalar loop on row-major buffers
//! - Batched products (rayon when `parallel` is enabled)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use simd_matrix::{matmul_batched, BatchedMatrix, Portable};

fn input(len: usize, offset: usize) -> Vec<f32> {
    (0..len)
        .map(|i| (((i + offset) % 1000) as f32) * 0.01)
        .collect()
}

fn naive_matmul(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    c.fill(0.0);
    for i in 0..n {
        for k in 0..n {
            let aik = a[i * n + k];
            for j in 0..n {
                c[i * n + j] += aik * b[k * n + j];
            }
        }
    }
}

macro_rules! bench_square {
    ($group:expr, $n:literal) => {{
        let n: usize = $n;
        let a = input(n * n, 0);
        let b = input(n * n, 500);
        let elements = (n * n * n) as u64;
        $group.throughput(Throughput::Elements(elements));

        let va = BatchedMatrix::<f32, $n, $n>::from_row_major(&a).unwrap();
        let vb = BatchedMatrix::<f32, $n, $n>::from_row_major(&b).unwrap();
        $group.bench_with_input(BenchmarkId::new("vector", n), &n, |bench, _| {
            bench.iter(|| black_box(&va * &vb));
        });

        let pa = BatchedMatrix::<f32, $n, $n, Portable<f32, 4>>::from_row_major(&a).unwrap();
        let pb = BatchedMatrix::<f32, $n, $n, Portable<f32, 4>>::from_row_major(&b).unwrap();
        $group.bench_with_input(BenchmarkId::new("portable", n), &n, |bench, _| {
            bench.iter(|| black_box(&pa * &pb));
        });

        let mut c = vec![0.0f32; n * n];
        $group.bench_with_input(BenchmarkId::new("naive", n), &n, |bench, &n| {
            bench.iter(|| {
                naive_matmul(&a, &b, &mut c, n);
                black_box(c[0])
            });
        });
    }};
}

/// Square products at several sizes
fn bench_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("Matmul_f32");

    bench_square!(group, 8);
    bench_square!(group, 16);
    bench_square!(group, 32);
    bench_square!(group, 64);

    group.finish();
}

/// Many small products
fn bench_batched(c: &mut Criterion) {
    let mut group = c.benchmark_group("Matmul_Batched_f32");
    group.sample_size(20);

    for batch in [16usize, 256, 1024].iter() {
        let batch = *batch;
        let a: Vec<_> = (0..batch)
            .map(|i| BatchedMatrix::<f32, 16, 16>::from_row_major(&input(256, i)).unwrap())
            .collect();
        let b: Vec<_> = (0..batch)
            .map(|i| BatchedMatrix::<f32, 16, 16>::from_row_major(&input(256, i + 7)).unwrap())
            .collect();

        group.throughput(Throughput::Elements((batch * 16 * 16 * 16) as u64));
        group.bench_with_input(BenchmarkId::new("16x16", batch), &batch, |bench, _| {
            bench.iter(|| black_box(matmul_batched(&a, &b).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_square, bench_batched);
criterion_main!(benches);
