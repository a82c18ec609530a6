//! Amphibian sounds: narrow pulse trains gating a low formant carrier.

use std::f32::consts::TAU;

use crate::dsp::NoiseSource;
use crate::sounds::add_stereo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmphibianSound {
    Frog,
    Toad,
    TreeFrog,
}

impl AmphibianSound {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Frog,
            1 => Self::Toad,
            2 => Self::TreeFrog,
            _ => Self::Frog,
        }
    }
}

pub struct AmphibianSynth {
    sample_rate: f32,
    pulse_phase: f32,
    carrier_phase: f32,
}

impl AmphibianSynth {
    pub fn new() -> Self {
        Self {
            sample_rate: 48_000.0,
            pulse_phase: 0.0,
            carrier_phase: 0.0,
        }
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.pulse_phase = 0.0;
        self.carrier_phase = 0.0;
    }

    pub fn process(
        &mut self,
        outputs: &mut [&mut [f32]],
        sound: AmphibianSound,
        amplitude: f32,
        texture: f32,
        _noise: &mut NoiseSource,
    ) {
        // (formant Hz, croaks per second, duty cycle, level)
        let (formant_freq, pulse_rate, duty, level) = match sound {
            AmphibianSound::Frog => (150.0 + texture * 100.0, 3.0, 0.05, amplitude * 0.3),
            AmphibianSound::Toad => (100.0 + texture * 50.0, 2.0, 0.08, amplitude * 0.3),
            AmphibianSound::TreeFrog => (2_000.0 + texture * 1_000.0, 5.0, 0.03, amplitude * 0.2),
        };

        self.croak(outputs, formant_freq, pulse_rate, duty, level);
    }

    fn croak(
        &mut self,
        outputs: &mut [&mut [f32]],
        formant_freq: f32,
        pulse_rate: f32,
        duty: f32,
        level: f32,
    ) {
        for i in 0..outputs[0].len() {
            let gate = if self.pulse_phase < duty { 1.0 } else { 0.0 };
            self.pulse_phase += pulse_rate / self.sample_rate;
            if self.pulse_phase >= 1.0 {
                self.pulse_phase -= 1.0;
            }

            let tone = (TAU * self.carrier_phase).sin();
            self.carrier_phase += formant_freq / self.sample_rate;
            if self.carrier_phase >= 1.0 {
                self.carrier_phase -= 1.0;
            }

            let croak = gate * tone * level;
            add_stereo(outputs, i, croak, croak);
        }
    }
}

impl Default for AmphibianSynth {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sound_produces_finite_output() {
        let mut synth = AmphibianSynth::new();
        synth.init(48_000.0);
        let mut noise = NoiseSource::default();

        for sound in [
            AmphibianSound::Frog,
            AmphibianSound::Toad,
            AmphibianSound::TreeFrog,
        ] {
            let mut left = vec![0.0f32; 24_000];
            let mut right = vec![0.0f32; 24_000];
            let mut outputs: Vec<&mut [f32]> = vec![&mut left[..], &mut right[..]];
            synth.process(&mut outputs, sound, 0.8, 0.5, &mut noise);
            drop(outputs);

            assert!(left.iter().chain(right.iter()).all(|x| x.is_finite()));
            assert!(left.iter().any(|x| x.abs() > 1e-5), "{sound:?} was silent");
        }
    }

    #[test]
    fn index_fallback_maps_out_of_range_to_frog() {
        assert_eq!(AmphibianSound::from_index(2), AmphibianSound::TreeFrog);
        assert_eq!(AmphibianSound::from_index(3), AmphibianSound::Frog);
    }
}
