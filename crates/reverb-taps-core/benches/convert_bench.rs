//! Criterion benchmarks for reverb-taps-core
//!
//! Run with: cargo bench -p reverb-taps-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use reverb_taps_core::{DelayPlan, SampleRate, convert};

const TAP_COUNTS: &[usize] = &[8, 64, 512];

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let rate = SampleRate::new(48000).unwrap();

    for &count in TAP_COUNTS {
        let delays: Vec<f64> = (0..count).map(|i| 0.48 + i as f64 * 0.37).collect();
        group.bench_with_input(BenchmarkId::new("delays", count), &delays, |b, delays| {
            b.iter(|| black_box(convert(black_box(rate), black_box(delays))));
        });
    }

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let rate = SampleRate::new(48000).unwrap();
    c.bench_function("schroeder_plan", |b| {
        b.iter(|| {
            let plan = DelayPlan::new(black_box(rate))
                .with_group("comb", black_box(&[36.04, 31.12, 40.44, 44.92]))
                .and_then(|plan| plan.with_group("allp", black_box(&[5.0, 1.68, 0.48])));
            black_box(plan)
        });
    });
}

criterion_group!(benches, bench_convert, bench_plan);
criterion_main!(benches);
