use std::f32::consts::TAU;

/*
| type      | state    | passes           | used by                      |
| --------- | -------- | ---------------- | ---------------------------- |
| one-pole  | z1       | below cutoff     | rain body, ocean swell       |
| band-pass | z1, z2   | around cutoff    | wind, stream, waterfall roar |
*/

/// First-order RC-style low-pass. Coefficients are recomputed from the
/// cutoff on every call so generators can sweep it per sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnePoleLp {
    z1: f32,
}

impl OnePoleLp {
    pub fn new() -> Self {
        Self { z1: 0.0 }
    }

    #[inline]
    pub fn process(&mut self, input: f32, cutoff_hz: f32, sample_rate: f32) -> f32 {
        let rc = 1.0 / (cutoff_hz * TAU);
        let dt = 1.0 / sample_rate;
        let alpha = dt / (rc + dt);

        self.z1 += alpha * (input - self.z1);
        self.z1
    }

    pub fn reset(&mut self) {
        self.z1 = 0.0;
    }
}

/// Resonant band-pass biquad. Two feedback terms persist across calls;
/// cutoff and resonance are free to move every sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct BandPass {
    z1: f32,
    z2: f32,
}

impl BandPass {
    pub fn new() -> Self {
        Self { z1: 0.0, z2: 0.0 }
    }

    #[inline]
    pub fn process(&mut self, input: f32, cutoff_hz: f32, resonance: f32, sample_rate: f32) -> f32 {
        let omega = TAU * cutoff_hz / sample_rate;
        let alpha = omega.sin() / (2.0 * resonance);

        let b0 = alpha;
        let b2 = -alpha;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * omega.cos();
        let a2 = 1.0 - alpha;

        let output = (b0 * input + b2 * self.z2 - a1 * self.z1 - a2 * self.z2) / a0;

        self.z2 = self.z1;
        self.z1 = output;

        output
    }

    pub fn reset(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }
}
