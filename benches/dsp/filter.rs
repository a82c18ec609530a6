//! Benchmarks for the shared filter toolkit.

use std::hint::black_box;

use biome_dsp::dsp::filter::{BandPass, OnePoleLp};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    let sample_rate = 48_000.0;

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.07).sin()).collect();

        let mut lowpass = OnePoleLp::new();
        group.bench_with_input(BenchmarkId::new("one_pole_lp", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0.0f32;
                for &sample in &input {
                    sum += lowpass.process(black_box(sample), 3_000.0, sample_rate);
                }
                sum
            })
        });

        let mut bandpass = BandPass::new();
        group.bench_with_input(BenchmarkId::new("band_pass", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0.0f32;
                for &sample in &input {
                    sum += bandpass.process(black_box(sample), 800.0, 2.0, sample_rate);
                }
                sum
            })
        });

        // Modulated cutoff, as the wind and water generators drive it
        let mut swept = BandPass::new();
        group.bench_with_input(BenchmarkId::new("band_pass_swept", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0.0f32;
                for (i, &sample) in input.iter().enumerate() {
                    let cutoff = 400.0 + (i as f32 * 0.01).sin() * 200.0;
                    sum += swept.process(black_box(sample), cutoff, 1.0, sample_rate);
                }
                sum
            })
        });
    }

    group.finish();
}
