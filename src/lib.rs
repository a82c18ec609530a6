pub mod dsp;
pub mod engine; // Engine facade: events, parameters, presets
pub mod sounds; // Procedural generator families
pub mod synth; // Voice pool and envelopes

pub use engine::BiomeEngine;

pub const MAX_BLOCK_SIZE: usize = 2048;
/// Fixed polyphony; voice slots are reused, never reallocated.
pub const MAX_VOICES: usize = 16;
