//! Bird sounds: FM song, pulse-gated hoots, and noisy caws.

use std::f32::consts::TAU;

use crate::dsp::NoiseSource;
use crate::sounds::add_stereo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdSound {
    Songbird,
    Owl,
    Crow,
    Flock,
}

impl BirdSound {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Songbird,
            1 => Self::Owl,
            2 => Self::Crow,
            3 => Self::Flock,
            _ => Self::Songbird,
        }
    }
}

pub struct BirdSynth {
    sample_rate: f32,
    carrier_phase: f32,
    modulator_phase: f32,
    /// Slow gate phase for the owl's hoot pulse train.
    formant_phase: f32,
}

impl BirdSynth {
    pub fn new() -> Self {
        Self {
            sample_rate: 48_000.0,
            carrier_phase: 0.0,
            modulator_phase: 0.0,
            formant_phase: 0.0,
        }
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.carrier_phase = 0.0;
        self.modulator_phase = 0.0;
        self.formant_phase = 0.0;
    }

    pub fn process(
        &mut self,
        outputs: &mut [&mut [f32]],
        sound: BirdSound,
        amplitude: f32,
        texture: f32,
        noise: &mut NoiseSource,
    ) {
        match sound {
            BirdSound::Songbird => self.songbird(outputs, amplitude, texture),
            BirdSound::Owl => self.owl(outputs, amplitude, texture),
            BirdSound::Crow => self.crow(outputs, amplitude, texture, noise),
            BirdSound::Flock => self.flock(outputs, amplitude, texture, noise),
        }
    }

    #[inline]
    fn wrap(phase: &mut f32) {
        if *phase >= 1.0 {
            *phase -= 1.0;
        }
    }

    fn songbird(&mut self, outputs: &mut [&mut [f32]], intensity: f32, pitch: f32) {
        let carrier_freq = 2_000.0 + pitch * 1_000.0;
        let modulator_freq = 500.0;
        let modulation_index = 10.0;

        for i in 0..outputs[0].len() {
            let modulator = (TAU * self.modulator_phase).sin();
            let carrier = (TAU * self.carrier_phase + modulation_index * modulator).sin();

            self.carrier_phase += carrier_freq / self.sample_rate;
            self.modulator_phase += modulator_freq / self.sample_rate;
            Self::wrap(&mut self.carrier_phase);
            Self::wrap(&mut self.modulator_phase);

            let song = carrier * intensity * 0.2;
            add_stereo(outputs, i, song, song * 0.9);
        }
    }

    fn owl(&mut self, outputs: &mut [&mut [f32]], intensity: f32, pitch: f32) {
        let formant_freq = 400.0 + pitch * 200.0;
        let pulse_rate = 2.0; // hoots per second

        for i in 0..outputs[0].len() {
            // 10% duty-cycle gate over a steady carrier
            let gate = if self.formant_phase < 0.1 { 1.0 } else { 0.0 };
            self.formant_phase += pulse_rate / self.sample_rate;
            Self::wrap(&mut self.formant_phase);

            let tone = (TAU * self.carrier_phase).sin();
            self.carrier_phase += formant_freq / self.sample_rate;
            Self::wrap(&mut self.carrier_phase);

            let hoot = gate * tone * intensity * 0.3;
            add_stereo(outputs, i, hoot, hoot);
        }
    }

    fn crow(
        &mut self,
        outputs: &mut [&mut [f32]],
        intensity: f32,
        pitch: f32,
        noise: &mut NoiseSource,
    ) {
        let base_freq = 800.0 + pitch * 400.0;

        for i in 0..outputs[0].len() {
            let saw = 2.0 * self.carrier_phase - 1.0;
            self.carrier_phase += base_freq / self.sample_rate;
            Self::wrap(&mut self.carrier_phase);

            // Sawtooth rasp plus breath noise makes the caw harsh
            let caw = (saw * 0.7 + noise.next_bipolar() * 0.3) * intensity * 0.25;
            add_stereo(outputs, i, caw, caw);
        }
    }

    /// 2-10 transient chirpers, redrawn every block.
    fn flock(
        &mut self,
        outputs: &mut [&mut [f32]],
        intensity: f32,
        density: f32,
        noise: &mut NoiseSource,
    ) {
        let num_birds = 2 + (density * 8.0) as usize;

        for _ in 0..num_birds {
            let freq = 1_500.0 + noise.next_unit() * 2_000.0;
            let mut phase = noise.next_unit();

            for i in 0..outputs[0].len() {
                let out = (TAU * phase).sin() * intensity * 0.05;
                phase += freq / self.sample_rate;
                if phase >= 1.0 {
                    phase -= 1.0;
                }
                add_stereo(outputs, i, out, out);
            }
        }
    }
}

impl Default for BirdSynth {
    fn default() -> Self {
        Self::new()
    }
}
