//! Benchmarks for the full polyphonic engine.
//!
//! The 16-voice case is the worst-case block cost the audio callback has to
//! absorb; the deadline figures in the crate-level bench doc apply here.

use std::hint::black_box;

use biome_dsp::engine::EventKind;
use biome_dsp::{BiomeEngine, MAX_VOICES};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

fn engine_with_notes(notes: &[i32]) -> BiomeEngine {
    let mut engine = BiomeEngine::new();
    engine.prepare(48_000.0, 512);
    for &note in notes {
        engine.handle_event(
            EventKind::NoteOn {
                note,
                velocity: 0.8,
            }
            .into(),
        );
    }
    engine
}

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");

    for &size in BLOCK_SIZES {
        let mut left = vec![0.0f32; size];
        let mut right = vec![0.0f32; size];

        let mut single = engine_with_notes(&[38]);
        group.bench_with_input(BenchmarkId::new("one_voice", size), &size, |b, _| {
            b.iter(|| {
                left.fill(0.0);
                right.fill(0.0);
                let mut outputs: [&mut [f32]; 2] = [&mut left, &mut right];
                single.process(black_box(&mut outputs));
            })
        });

        // One note per family, all six generators active
        let mut mixed = engine_with_notes(&[38, 44, 50, 56, 62, 68]);
        group.bench_with_input(BenchmarkId::new("six_families", size), &size, |b, _| {
            b.iter(|| {
                left.fill(0.0);
                right.fill(0.0);
                let mut outputs: [&mut [f32]; 2] = [&mut left, &mut right];
                mixed.process(black_box(&mut outputs));
            })
        });

        let notes: Vec<i32> = (0..MAX_VOICES as i32).map(|i| 36 + i * 2).collect();
        let mut full = engine_with_notes(&notes);
        group.bench_with_input(BenchmarkId::new("full_polyphony", size), &size, |b, _| {
            b.iter(|| {
                left.fill(0.0);
                right.fill(0.0);
                let mut outputs: [&mut [f32]; 2] = [&mut left, &mut right];
                full.process(black_box(&mut outputs));
            })
        });
    }

    group.finish();
}
