//! Benchmarks for the individual generator families.
//!
//! One representative sound per family, rendered at full amplitude. The
//! expensive ones are the filtered-noise families (water, wind); the FM and
//! pulse families are mostly sine evaluations.

use std::hint::black_box;

use biome_dsp::dsp::NoiseSource;
use biome_dsp::sounds::amphibian::AmphibianSound;
use biome_dsp::sounds::bird::BirdSound;
use biome_dsp::sounds::insect::InsectSound;
use biome_dsp::sounds::mammal::MammalSound;
use biome_dsp::sounds::water::WaterSound;
use biome_dsp::sounds::wind::WindSound;
use biome_dsp::sounds::{
    AmphibianSynth, BirdSynth, InsectSynth, MammalSynth, WaterSynth, WindSynth,
};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/families");
    let mut noise = NoiseSource::default();

    for &size in BLOCK_SIZES {
        let mut left = vec![0.0f32; size];
        let mut right = vec![0.0f32; size];

        macro_rules! bench_family {
            ($name:literal, $synth:expr, $sound:expr) => {{
                let mut synth = $synth;
                synth.init(SAMPLE_RATE);
                group.bench_with_input(BenchmarkId::new($name, size), &size, |b, _| {
                    b.iter(|| {
                        left.fill(0.0);
                        right.fill(0.0);
                        let mut outputs: [&mut [f32]; 2] = [&mut left, &mut right];
                        synth.process(
                            black_box(&mut outputs),
                            $sound,
                            black_box(0.8),
                            black_box(0.5),
                            &mut noise,
                        );
                    })
                });
            }};
        }

        bench_family!("water_rain", WaterSynth::new(), WaterSound::Rain);
        bench_family!("wind_storm", WindSynth::new(), WindSound::Storm);
        bench_family!("insect_cricket", InsectSynth::new(), InsectSound::Cricket);
        bench_family!("bird_songbird", BirdSynth::new(), BirdSound::Songbird);
        bench_family!("amphibian_frog", AmphibianSynth::new(), AmphibianSound::Frog);
        bench_family!("mammal_wolf", MammalSynth::new(), MammalSound::Wolf);
    }

    group.finish();
}
