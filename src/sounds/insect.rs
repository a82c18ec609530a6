//! Insect sounds: FM pairs for stridulation, sawtooth + AM for wingbeats.
//!
//! Crickets and cicadas are classic two-operator FM — a slow modulator
//! driving a high carrier with a large index reads as chirping. The flying
//! insects are a sawtooth wingbeat with a slow amplitude wobble.

use std::f32::consts::TAU;

use crate::dsp::NoiseSource;
use crate::sounds::add_stereo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsectSound {
    Cricket,
    Cicada,
    Bee,
    Fly,
    Mosquito,
    Swarm,
}

impl InsectSound {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Cricket,
            1 => Self::Cicada,
            2 => Self::Bee,
            3 => Self::Fly,
            4 => Self::Mosquito,
            5 => Self::Swarm,
            _ => Self::Cricket,
        }
    }
}

/// Carrier/modulator phase pair; both wrap at 1.0.
#[derive(Debug, Default, Clone, Copy)]
struct PhasePair {
    carrier: f32,
    modulator: f32,
}

impl PhasePair {
    #[inline]
    fn advance(&mut self, carrier_freq: f32, modulator_freq: f32, sample_rate: f32) {
        self.carrier += carrier_freq / sample_rate;
        self.modulator += modulator_freq / sample_rate;
        if self.carrier >= 1.0 {
            self.carrier -= 1.0;
        }
        if self.modulator >= 1.0 {
            self.modulator -= 1.0;
        }
    }
}

#[inline]
fn sawtooth(phase: f32) -> f32 {
    2.0 * phase - 1.0
}

pub struct InsectSynth {
    sample_rate: f32,
    fm: PhasePair,
    am: PhasePair,
}

impl InsectSynth {
    pub fn new() -> Self {
        Self {
            sample_rate: 48_000.0,
            fm: PhasePair::default(),
            am: PhasePair::default(),
        }
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.fm = PhasePair::default();
        self.am = PhasePair::default();
    }

    pub fn process(
        &mut self,
        outputs: &mut [&mut [f32]],
        sound: InsectSound,
        amplitude: f32,
        texture: f32,
        noise: &mut NoiseSource,
    ) {
        match sound {
            // FM stridulation: (carrier Hz, modulator Hz, index, level, R gain)
            InsectSound::Cricket => {
                self.fm_chirp(outputs, 4_000.0 + texture * 1_000.0, 80.0, 50.0, amplitude * 0.3, 0.8)
            }
            InsectSound::Cicada => {
                self.fm_chirp(outputs, 5_000.0 + texture * 1_500.0, 100.0, 80.0, amplitude * 0.25, 0.9)
            }
            // Wingbeats: (carrier Hz, wobble Hz, wobble depth, level)
            InsectSound::Bee => {
                self.wingbeat(outputs, 150.0 + texture * 50.0, 20.0, 0.5, amplitude * 0.2)
            }
            InsectSound::Fly => {
                self.wingbeat(outputs, 100.0 + texture * 30.0, 15.0, 0.8, amplitude * 0.15)
            }
            InsectSound::Mosquito => {
                self.wingbeat(outputs, 800.0 + texture * 200.0, 25.0, 0.3, amplitude * 0.1)
            }
            InsectSound::Swarm => self.swarm(outputs, amplitude, texture, noise),
        }
    }

    fn fm_chirp(
        &mut self,
        outputs: &mut [&mut [f32]],
        carrier_freq: f32,
        modulator_freq: f32,
        index: f32,
        level: f32,
        right_gain: f32,
    ) {
        for i in 0..outputs[0].len() {
            let modulator = (TAU * self.fm.modulator).sin();
            let carrier = (TAU * self.fm.carrier + index * modulator).sin();
            self.fm.advance(carrier_freq, modulator_freq, self.sample_rate);

            let out = carrier * level;
            add_stereo(outputs, i, out, out * right_gain);
        }
    }

    fn wingbeat(
        &mut self,
        outputs: &mut [&mut [f32]],
        carrier_freq: f32,
        wobble_freq: f32,
        wobble_depth: f32,
        level: f32,
    ) {
        for i in 0..outputs[0].len() {
            let saw = sawtooth(self.am.carrier);
            let wobble = (TAU * self.am.modulator).sin();
            self.am.advance(carrier_freq, wobble_freq, self.sample_rate);

            let out = saw * (1.0 + wobble_depth * wobble) * level;
            add_stereo(outputs, i, out, out);
        }
    }

    /// Density-scaled cloud of 3-10 transient oscillators. Frequencies and
    /// phases are redrawn every block; the shimmer is the point.
    fn swarm(
        &mut self,
        outputs: &mut [&mut [f32]],
        intensity: f32,
        density: f32,
        noise: &mut NoiseSource,
    ) {
        let num_insects = 3 + (density * 7.0) as usize;

        for _ in 0..num_insects {
            let freq = 100.0 + noise.next_unit() * 4_000.0;
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

impl Default for InsectSynth {
    fn default() -> Self {
        Self::new()
    }
}
