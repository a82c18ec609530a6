//! Multi-tap comb reverb.
//!
//! Eight parallel comb filters fed by the mono sum of the block. Each line
//! has its own delay tap and one-pole damping filter, but all lines share a
//! single write cursor into fixed 65 536-sample rings. The delay times are
//! distinct prime-ish millisecond offsets so the echo patterns of the lines
//! never line up on a common period.
//!
//! ```text
//! in ──┬──→ [comb 30ms] ──┐
//!      ├──→ [comb 37ms] ──┤
//!      ⋮        ⋮          ├──→ (Σ × 1/8) ──→ wet/dry mix
//!      └──→ [comb 87ms] ──┘
//! ```
//!
//! Per line and sample: `y = buf[cursor - delay]`, the damped feedback
//! `d = y*(1-damp) + d*damp` is written back as `in + d*feedback`, with
//! `feedback = room_size * 0.5` and `damp = damping * 0.5`.

/// Ring capacity of each delay line, in samples.
pub const RING_SIZE: usize = 65_536;
/// Number of parallel comb lines.
pub const NUM_LINES: usize = 8;

/// Per-line delay taps in seconds. Chosen to avoid common factors.
const DELAY_SECONDS: [f32; NUM_LINES] = [0.030, 0.037, 0.047, 0.053, 0.061, 0.071, 0.079, 0.087];

/// Parallel comb-filter bank (pre-allocated, RT-safe).
pub struct CombBank {
    /// `NUM_LINES` rings of `RING_SIZE` samples, laid out line-major.
    /// Allocated once at construction, never resized.
    lines: Box<[f32]>,
    damping_state: [f32; NUM_LINES],
    delays: [usize; NUM_LINES],
    cursor: usize,
}

impl CombBank {
    pub fn new(sample_rate: f64) -> Self {
        let mut bank = Self {
            lines: vec![0.0; NUM_LINES * RING_SIZE].into_boxed_slice(),
            damping_state: [0.0; NUM_LINES],
            delays: [1; NUM_LINES],
            cursor: 0,
        };
        bank.configure(sample_rate);
        bank
    }

    /// Retune the delay taps for a new sample rate (RT-safe, no allocation).
    pub fn configure(&mut self, sample_rate: f64) {
        for (delay, &seconds) in self.delays.iter_mut().zip(DELAY_SECONDS.iter()) {
            *delay = ((sample_rate * seconds as f64) as usize).clamp(1, RING_SIZE - 1);
        }
        self.reset();
    }

    pub fn reset(&mut self) {
        self.lines.fill(0.0);
        self.damping_state.fill(0.0);
        self.cursor = 0;
    }

    /// Shared write cursor, always in `[0, RING_SIZE)`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Run one mono input sample through all 8 lines; returns the wet sum.
    #[inline]
    fn tick(&mut self, input: f32, feedback: f32, damp: f32) -> f32 {
        let mut wet = 0.0;
        for line in 0..NUM_LINES {
            let base = line * RING_SIZE;
            let read = (self.cursor + RING_SIZE - self.delays[line]) % RING_SIZE;
            let delayed = self.lines[base + read];

            // One-pole low-pass in the feedback path absorbs high frequencies
            self.damping_state[line] = delayed * (1.0 - damp) + self.damping_state[line] * damp;
            self.lines[base + self.cursor] = input + self.damping_state[line] * feedback;

            wet += delayed;
        }
        self.cursor = (self.cursor + 1) % RING_SIZE;

        wet * 0.125
    }

    /// Process a stereo block in place, mixing wet/dry by `mix`.
    pub fn process(
        &mut self,
        left: &mut [f32],
        right: &mut [f32],
        mix: f32,
        room_size: f32,
        damping: f32,
    ) {
        let feedback = room_size * 0.5;
        let damp = damping * 0.5;

        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let input = (*l + *r) * 0.5;
            let wet = self.tick(input, feedback, damp);

            *l = *l * (1.0 - mix) + wet * mix;
            *r = *r * (1.0 - mix) + wet * mix;
        }
    }

    /// Mono variant of [`CombBank::process`].
    pub fn process_mono(&mut self, buffer: &mut [f32], mix: f32, room_size: f32, damping: f32) {
        let feedback = room_size * 0.5;
        let damp = damping * 0.5;

        for sample in buffer.iter_mut() {
            let wet = self.tick(*sample, feedback, damp);
            *sample = *sample * (1.0 - mix) + wet * mix;
        }
    }
}
