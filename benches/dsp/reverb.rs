//! Benchmarks for the comb reverb bank.

use std::hint::black_box;

use biome_dsp::dsp::reverb::CombBank;
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_reverb(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/reverb");

    let sample_rate = 48_000.0;

    for &size in BLOCK_SIZES {
        let template: Vec<f32> = (0..size)
            .map(|i| {
                if i < 10 {
                    1.0 - (i as f32 / 10.0)
                } else {
                    (i as f32 * 0.05).sin() * 0.1
                }
            })
            .collect();

        let mut small = CombBank::new(sample_rate);
        group.bench_with_input(BenchmarkId::new("small_room", size), &size, |b, _| {
            b.iter(|| {
                let mut left = template.clone();
                let mut right = template.clone();
                small.process(black_box(&mut left), black_box(&mut right), 0.3, 0.3, 0.5);
                left[0] + right[0]
            })
        });

        let mut large = CombBank::new(sample_rate);
        group.bench_with_input(BenchmarkId::new("large_room", size), &size, |b, _| {
            b.iter(|| {
                let mut left = template.clone();
                let mut right = template.clone();
                large.process(black_box(&mut left), black_box(&mut right), 0.5, 0.9, 0.3);
                left[0] + right[0]
            })
        });

        let mut mono = CombBank::new(sample_rate);
        group.bench_with_input(BenchmarkId::new("mono", size), &size, |b, _| {
            b.iter(|| {
                let mut buffer = template.clone();
                mono.process_mono(black_box(&mut buffer), 0.3, 0.5, 0.5);
                buffer[0]
            })
        });
    }

    group.finish();
}
