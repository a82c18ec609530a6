//! Benchmarks for low-level DSP primitives.

mod filter;
mod reverb;

pub use filter::bench_filter;
pub use reverb::bench_reverb;
