//! Benchmarks for full signal paths.

mod engine;
mod families;

pub use engine::bench_engine;
pub use families::bench_families;
