//! Mammal sounds: vibrato-modulated tones plus one pure noise burst.

use std::f32::consts::TAU;

use crate::dsp::NoiseSource;
use crate::sounds::add_stereo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MammalSound {
    Wolf,
    Coyote,
    Deer,
    Fox,
}

impl MammalSound {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Wolf,
            1 => Self::Coyote,
            2 => Self::Deer,
            3 => Self::Fox,
            _ => Self::Wolf,
        }
    }
}

pub struct MammalSynth {
    sample_rate: f32,
    carrier_phase: f32,
    vibrato_phase: f32,
}

impl MammalSynth {
    pub fn new() -> Self {
        Self {
            sample_rate: 48_000.0,
            carrier_phase: 0.0,
            vibrato_phase: 0.0,
        }
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.carrier_phase = 0.0;
        self.vibrato_phase = 0.0;
    }

    pub fn process(
        &mut self,
        outputs: &mut [&mut [f32]],
        sound: MammalSound,
        amplitude: f32,
        texture: f32,
        noise: &mut NoiseSource,
    ) {
        match sound {
            // Howl with 5 Hz vibrato
            MammalSound::Wolf => {
                self.tone(outputs, 200.0 + texture * 100.0, 20.0, amplitude * 0.2)
            }
            MammalSound::Coyote => {
                self.tone(outputs, 300.0 + texture * 150.0, 0.0, amplitude * 0.15)
            }
            MammalSound::Deer => self.snort(outputs, amplitude * 0.2, noise),
            MammalSound::Fox => {
                self.tone(outputs, 400.0 + texture * 200.0, 0.0, amplitude * 0.2)
            }
        }
    }

    fn tone(
        &mut self,
        outputs: &mut [&mut [f32]],
        base_freq: f32,
        vibrato_depth: f32,
        level: f32,
    ) {
        let vibrato_rate = 5.0;

        for i in 0..outputs[0].len() {
            let vibrato = (TAU * self.vibrato_phase).sin();
            self.vibrato_phase += vibrato_rate / self.sample_rate;
            if self.vibrato_phase >= 1.0 {
                self.vibrato_phase -= 1.0;
            }

            let out = (TAU * self.carrier_phase).sin() * level;
            self.carrier_phase += (base_freq + vibrato * vibrato_depth) / self.sample_rate;
            if self.carrier_phase >= 1.0 {
                self.carrier_phase -= 1.0;
            }

            add_stereo(outputs, i, out, out);
        }
    }

    fn snort(&mut self, outputs: &mut [&mut [f32]], level: f32, noise: &mut NoiseSource) {
        for i in 0..outputs[0].len() {
            let out = noise.next_bipolar() * level;
            add_stereo(outputs, i, out, out);
        }
    }
}

impl Default for MammalSynth {
    fn default() -> Self {
        Self::new()
    }
}
