//! Criterion micro-benchmarks for the four fill strategies.
//!
//! Each iteration allocates, fills and drops, matching one repetition
//! of the corresponding benchmark phase.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fillbench_bench::{criterion_sizes, single_pass_profile};
use fillbench_buffer::fill::{fill_raw, fill_reserved, fill_resized_iter, fill_resized_ptr};
use fillbench_buffer::{DynamicArray, RawBlock};
use fillbench_runner::{Phase, Runner};

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for n in criterion_sizes() {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("raw_block", n), &n, |b, &n| {
            b.iter(|| {
                let mut block = RawBlock::allocate(n).unwrap();
                black_box(fill_raw(&mut block));
            });
        });

        group.bench_with_input(BenchmarkId::new("vec_reserve_push", n), &n, |b, &n| {
            b.iter(|| {
                let mut v: Vec<i32> = DynamicArray::new_empty();
                fill_reserved(&mut v, n);
                black_box(v);
            });
        });

        group.bench_with_input(BenchmarkId::new("vec_resize_iter", n), &n, |b, &n| {
            b.iter(|| {
                let mut v: Vec<i32> = DynamicArray::new_empty();
                fill_resized_iter(&mut v, n);
                black_box(v);
            });
        });

        group.bench_with_input(BenchmarkId::new("vec_resize_ptr", n), &n, |b, &n| {
            b.iter(|| {
                let mut v: Vec<i32> = DynamicArray::new_empty();
                fill_resized_ptr(&mut v, n).unwrap();
                black_box(v);
            });
        });
    }

    group.finish();
}

/// One full runner repetition per phase, including the capacity check
/// and release that the fill-only benches leave out.
fn bench_phase(c: &mut Criterion) {
    let n = fillbench_runner::BenchConfig::DEFAULT_ELEMENT_COUNT;
    let mut runner = Runner::new(single_pass_profile(n)).unwrap();
    let mut group = c.benchmark_group("phase");

    for phase in Phase::ALL {
        group.bench_function(BenchmarkId::from_parameter(format!("{phase:?}")), |b| {
            b.iter(|| {
                let report = runner.run_phase::<Vec<i32>>(phase).unwrap();
                black_box(report);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fill, bench_phase);
criterion_main!(benches);
