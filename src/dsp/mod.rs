//! Low-level DSP primitives used by the generator families and the engine.
//!
//! These components are allocation-free and realtime-safe. They intentionally
//! stay focused on the signal-processing math; voice orchestration and event
//! handling live in `synth` and `engine`.

/// One-pole low-pass and resonant band-pass building blocks.
pub mod filter;
/// Shared uniform random source for stochastic generators.
pub mod noise;
/// 8-line parallel comb reverb with a shared ring cursor.
pub mod reverb;

pub use noise::NoiseSource;
