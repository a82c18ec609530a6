//! Offline bounce: render a short scripted soundscape to a stereo WAV.
//!
//! ```sh
//! cargo run --bin bounce -- out.wav
//! ```

use biome_dsp::engine::EventKind;
use biome_dsp::BiomeEngine;
use color_eyre::eyre::{eyre, Result};

const SAMPLE_RATE: u32 = 48_000;
const BLOCK_SIZE: usize = 512;

/// (time in seconds, event) pairs, sorted by time.
fn score() -> Vec<(f64, EventKind)> {
    let on = |note, velocity| EventKind::NoteOn { note, velocity };
    let off = |note| EventKind::NoteOff { note };

    vec![
        (0.0, on(36, 0.7)),  // rain
        (0.5, on(44, 0.4)),  // whistling wind
        (2.0, on(48, 0.6)),  // cricket
        (3.5, on(60, 0.8)),  // songbird
        (5.0, off(60)),
        (5.5, on(54, 0.7)),  // frog
        (8.0, off(48)),
        (9.0, off(54)),
        (10.0, off(44)),
        (11.0, off(36)),
    ]
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "bounce.wav".to_string());

    let mut engine = BiomeEngine::new();
    if !engine.prepare(SAMPLE_RATE as f64, BLOCK_SIZE) {
        return Err(eyre!("engine rejected the stream format"));
    }
    engine.set_parameter("reverb_mix", 0.25);
    engine.set_parameter("reverb_room_size", 0.7);

    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(&path, spec)?;

    let events = score();
    let mut next_event = 0;
    let total_samples = (SAMPLE_RATE as usize) * 12;

    let mut left = [0.0f32; BLOCK_SIZE];
    let mut right = [0.0f32; BLOCK_SIZE];

    let mut rendered = 0usize;
    while rendered < total_samples {
        let block_start = rendered as f64 / SAMPLE_RATE as f64;
        while next_event < events.len() && events[next_event].0 <= block_start {
            engine.handle_event(events[next_event].1.into());
            next_event += 1;
        }

        left.fill(0.0);
        right.fill(0.0);
        let mut outputs: [&mut [f32]; 2] = [&mut left, &mut right];
        engine.process(&mut outputs);

        for i in 0..BLOCK_SIZE {
            writer.write_sample(left[i])?;
            writer.write_sample(right[i])?;
        }
        rendered += BLOCK_SIZE;
    }

    writer.finalize()?;
    println!("wrote {path} ({total_samples} samples per channel)");
    Ok(())
}
