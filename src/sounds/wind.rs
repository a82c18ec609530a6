//! Wind sounds: band-passed noise with slow LFO movement.

use std::f32::consts::TAU;

use crate::dsp::filter::BandPass;
use crate::dsp::NoiseSource;
use crate::sounds::add_stereo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindSound {
    Breeze,
    Gusts,
    Whistle,
    Storm,
}

impl WindSound {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Breeze,
            1 => Self::Gusts,
            2 => Self::Whistle,
            3 => Self::Storm,
            _ => Self::Breeze,
        }
    }
}

pub struct WindSynth {
    sample_rate: f32,
    lfo_phase: f32,
    lfo_freq: f32,
    bandpass: BandPass,
}

impl WindSynth {
    pub fn new() -> Self {
        Self {
            sample_rate: 48_000.0,
            lfo_phase: 0.0,
            lfo_freq: 0.2,
            bandpass: BandPass::new(),
        }
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.lfo_phase = 0.0;
        self.lfo_freq = 0.2;
        self.bandpass.reset();
    }

    pub fn process(
        &mut self,
        outputs: &mut [&mut [f32]],
        sound: WindSound,
        amplitude: f32,
        texture: f32,
        noise: &mut NoiseSource,
    ) {
        match sound {
            WindSound::Breeze => self.breeze(outputs, amplitude, texture, noise),
            WindSound::Gusts => self.gusts(outputs, amplitude, texture, noise),
            WindSound::Whistle => self.whistle(outputs, amplitude, texture, noise),
            WindSound::Storm => self.storm(outputs, amplitude, texture, noise),
        }
    }

    #[inline]
    fn advance_lfo(&mut self, freq: f32) -> f32 {
        let value = (TAU * self.lfo_phase).sin();
        self.lfo_phase += freq / self.sample_rate;
        if self.lfo_phase >= 1.0 {
            self.lfo_phase -= 1.0;
        }
        value
    }

    fn breeze(
        &mut self,
        outputs: &mut [&mut [f32]],
        intensity: f32,
        texture: f32,
        noise: &mut NoiseSource,
    ) {
        let base_freq = 400.0 + texture * 200.0;
        let noise_level = intensity * 0.15;
        let lfo_freq = self.lfo_freq;

        for i in 0..outputs[0].len() {
            // LFO sways the band center by ±50 Hz
            let mod_freq = base_freq + 50.0 * self.advance_lfo(lfo_freq);
            let filtered =
                self.bandpass
                    .process(noise.next_bipolar(), mod_freq, 1.0, self.sample_rate);

            let out = filtered * noise_level;
            add_stereo(outputs, i, out, out);
        }
    }

    fn gusts(
        &mut self,
        outputs: &mut [&mut [f32]],
        intensity: f32,
        gust_speed: f32,
        noise: &mut NoiseSource,
    ) {
        let base_freq = 300.0;
        let noise_level = intensity * 0.2;
        let gust_freq = 0.5 + gust_speed;

        for i in 0..outputs[0].len() {
            // The same slow LFO both swells the level and brightens the band
            let gust_envelope = 0.5 + 0.5 * self.advance_lfo(gust_freq);
            let mod_freq = base_freq + gust_envelope * 200.0;
            let filtered =
                self.bandpass
                    .process(noise.next_bipolar(), mod_freq, 1.0, self.sample_rate);

            let out = filtered * noise_level * gust_envelope;
            add_stereo(outputs, i, out, out);
        }
    }

    fn whistle(
        &mut self,
        outputs: &mut [&mut [f32]],
        intensity: f32,
        frequency: f32,
        noise: &mut NoiseSource,
    ) {
        let base_freq = 800.0 + frequency * 400.0;
        let noise_level = intensity * 0.1;

        for i in 0..outputs[0].len() {
            // Narrow band turns the hiss into a tone
            let filtered =
                self.bandpass
                    .process(noise.next_bipolar(), base_freq, 5.0, self.sample_rate);

            let out = filtered * noise_level;
            add_stereo(outputs, i, out, out);
        }
    }

    fn storm(
        &mut self,
        outputs: &mut [&mut [f32]],
        intensity: f32,
        turbulence: f32,
        noise: &mut NoiseSource,
    ) {
        let base_freq = 200.0;
        let noise_level = intensity * 0.3;

        for i in 0..outputs[0].len() {
            let mod_freq = base_freq + turbulence * 300.0 * self.advance_lfo(3.0);
            let filtered =
                self.bandpass
                    .process(noise.next_bipolar(), mod_freq.max(20.0), 0.5, self.sample_rate);

            let out = filtered * noise_level;
            add_stereo(outputs, i, out, out);
        }
    }
}

impl Default for WindSynth {
    fn default() -> Self {
        Self::new()
    }
}
