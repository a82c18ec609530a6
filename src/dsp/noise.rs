use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Shared uniform random source.
///
/// One instance is owned by the engine and threaded `&mut` into every
/// generator that needs broadband noise or randomized pitch/pan. It carries
/// no synchronization; callers must confine it to the processing thread.
pub struct NoiseSource {
    rng: SmallRng,
}

impl NoiseSource {
    /// Fixed default seed so a scripted event list renders deterministically.
    pub const DEFAULT_SEED: u64 = 0x5eed_b10e;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform sample in `[0, 1)`.
    #[inline]
    pub fn next_unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// Uniform sample in `[-1, 1)`, the usual white-noise form.
    #[inline]
    pub fn next_bipolar(&mut self) -> f32 {
        self.rng.gen::<f32>() * 2.0 - 1.0
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}
