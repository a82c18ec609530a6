//! The engine facade: voice pool, generator families, reverb, parameters.
//!
//! One `BiomeEngine` per audio stream. All state is allocated at construction
//! time; `prepare` and `process` are allocation-free, so the engine can live
//! on the audio thread once built. Control events arrive either directly via
//! [`BiomeEngine::handle_event`] or through an SPSC ring drained at the top
//! of each block.

pub mod event;
pub mod params;

pub use event::{EventKind, ScheduledEvent};
pub use params::{ParamId, Params};

use crate::dsp::reverb::CombBank;
use crate::dsp::NoiseSource;
use crate::sounds::amphibian::AmphibianSound;
use crate::sounds::bird::BirdSound;
use crate::sounds::insect::InsectSound;
use crate::sounds::mammal::MammalSound;
use crate::sounds::water::WaterSound;
use crate::sounds::wind::WindSound;
use crate::sounds::{
    AmphibianSynth, BirdSynth, InsectSynth, MammalSynth, SoundCategory, WaterSynth, WindSynth,
};
use crate::synth::VoicePool;
use crate::{MAX_BLOCK_SIZE, MAX_VOICES};

/// Latched performance controllers. Stored for hosts that want to inspect
/// them; the generators themselves are driven by note and velocity alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerState {
    pub pitch_bend: f32,
    pub channel_pressure: f32,
    pub last_control: Option<(u8, f32)>,
    pub program: u8,
}

pub struct BiomeEngine {
    sample_rate: f64,
    block_size: usize,
    pool: VoicePool,
    water: WaterSynth,
    wind: WindSynth,
    insect: InsectSynth,
    bird: BirdSynth,
    amphibian: AmphibianSynth,
    mammal: MammalSynth,
    reverb: CombBank,
    params: Params,
    noise: NoiseSource,
    controllers: ControllerState,
}

impl BiomeEngine {
    pub fn new() -> Self {
        Self {
            sample_rate: 48_000.0,
            block_size: 512,
            pool: VoicePool::new(),
            water: WaterSynth::new(),
            wind: WindSynth::new(),
            insect: InsectSynth::new(),
            bird: BirdSynth::new(),
            amphibian: AmphibianSynth::new(),
            mammal: MammalSynth::new(),
            reverb: CombBank::new(48_000.0),
            params: Params::default(),
            noise: NoiseSource::default(),
            controllers: ControllerState::default(),
        }
    }

    /// Bind the engine to a stream format. Returns false (and changes
    /// nothing) on a non-positive sample rate or a zero block size.
    pub fn prepare(&mut self, sample_rate: f64, block_size: usize) -> bool {
        if !sample_rate.is_finite() || sample_rate <= 0.0 || block_size == 0 {
            return false;
        }
        self.sample_rate = sample_rate;
        self.block_size = block_size.min(MAX_BLOCK_SIZE);

        self.pool.prepare(sample_rate as f32);
        self.water.init(sample_rate as f32);
        self.wind.init(sample_rate as f32);
        self.insect.init(sample_rate as f32);
        self.bird.init(sample_rate as f32);
        self.amphibian.init(sample_rate as f32);
        self.mammal.init(sample_rate as f32);
        self.reverb.configure(sample_rate);
        true
    }

    /// Return to the just-prepared state: all voices silent, all generator
    /// and reverb state cleared, controllers zeroed. Parameters are kept.
    pub fn reset(&mut self) {
        self.pool.silence_all();
        self.water.reset();
        self.wind.reset();
        self.insect.reset();
        self.bird.reset();
        self.amphibian.reset();
        self.mammal.reset();
        self.reverb.reset();
        self.controllers = ControllerState::default();
    }

    /// Render one block into the caller's buffers.
    ///
    /// Purely additive over whatever the buffers already hold: voices
    /// accumulate, then the reverb and master gain transform the buffers in
    /// place. The caller clears (or pre-fills) the block.
    pub fn process(&mut self, outputs: &mut [&mut [f32]]) {
        if outputs.is_empty() {
            return;
        }
        let num_samples = outputs[0].len();
        if num_samples == 0 {
            return;
        }
        debug_assert!(num_samples <= MAX_BLOCK_SIZE);

        for slot in 0..self.pool.capacity() {
            if !self.pool.voice(slot).is_active() {
                continue;
            }
            self.pool.voice_mut(slot).advance_envelope(num_samples);
            let voice = *self.pool.voice(slot);

            let amplitude = voice.amplitude() * voice.velocity();
            let texture = voice.velocity();
            if amplitude > 0.0 {
                let index = voice.sound_index();
                match voice.category() {
                    SoundCategory::Water => self.water.process(
                        outputs,
                        WaterSound::from_index(index),
                        amplitude,
                        texture,
                        &mut self.noise,
                    ),
                    SoundCategory::Wind => self.wind.process(
                        outputs,
                        WindSound::from_index(index),
                        amplitude,
                        texture,
                        &mut self.noise,
                    ),
                    SoundCategory::Insect => self.insect.process(
                        outputs,
                        InsectSound::from_index(index),
                        amplitude,
                        texture,
                        &mut self.noise,
                    ),
                    SoundCategory::Bird => self.bird.process(
                        outputs,
                        BirdSound::from_index(index),
                        amplitude,
                        texture,
                        &mut self.noise,
                    ),
                    SoundCategory::Amphibian => self.amphibian.process(
                        outputs,
                        AmphibianSound::from_index(index),
                        amplitude,
                        texture,
                        &mut self.noise,
                    ),
                    SoundCategory::Mammal => self.mammal.process(
                        outputs,
                        MammalSound::from_index(index),
                        amplitude,
                        texture,
                        &mut self.noise,
                    ),
                }
            }

            self.pool.free_if_finished(slot);
        }

        let mix = self.params.get(ParamId::ReverbMix);
        let room_size = self.params.get(ParamId::ReverbRoomSize);
        let damping = self.params.get(ParamId::ReverbDamping);
        match outputs {
            [left, right, ..] => self.reverb.process(left, right, mix, room_size, damping),
            [mono] => self.reverb.process_mono(mono, mix, room_size, damping),
            [] => unreachable!(),
        }

        let master = self.params.get(ParamId::MasterLevel);
        for channel in outputs.iter_mut() {
            for sample in channel.iter_mut() {
                *sample *= master;
            }
        }
    }

    pub fn handle_event(&mut self, event: ScheduledEvent) {
        match event.kind {
            EventKind::NoteOn { note, velocity } => self.pool.note_on(note, velocity),
            EventKind::NoteOff { note } => self.pool.note_off(note),
            EventKind::PitchBend { value } => self.controllers.pitch_bend = value,
            EventKind::ChannelPressure { value } => self.controllers.channel_pressure = value,
            EventKind::ControlChange { controller, value } => {
                self.controllers.last_control = Some((controller, value));
            }
            EventKind::ProgramChange { program } => self.controllers.program = program,
            EventKind::ParamChange { id, value } => self.params.set(id, value),
            EventKind::Reset => self.reset(),
        }
    }

    /// Drain every pending event from a lock-free ring. Called at the top of
    /// the block, before rendering.
    #[cfg(feature = "rtrb")]
    pub fn drain_events(&mut self, queue: &mut rtrb::Consumer<ScheduledEvent>) {
        while let Ok(event) = queue.pop() {
            self.handle_event(event);
        }
    }

    pub fn set_parameter(&mut self, key: &str, value: f32) {
        self.params.set_by_key(key, value);
    }

    /// Unknown keys read 0.0.
    pub fn get_parameter(&self, key: &str) -> f32 {
        self.params.get_by_key(key)
    }

    pub fn save_preset(&self) -> String {
        self.params.save_preset()
    }

    /// Strict, fail-closed: on a malformed preset nothing changes and this
    /// returns false.
    pub fn load_preset(&mut self, text: &str) -> bool {
        self.params.load_preset(text)
    }

    /// Hard stop every voice, no release tails.
    pub fn panic(&mut self) {
        self.pool.silence_all();
    }

    pub fn active_voice_count(&self) -> usize {
        self.pool.active_count()
    }

    pub fn max_polyphony(&self) -> usize {
        MAX_VOICES
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn controllers(&self) -> ControllerState {
        self.controllers
    }

    pub(crate) fn voice_pool(&self) -> &VoicePool {
        &self.pool
    }
}

impl Default for BiomeEngine {
    fn default() -> Self {
        Self::new()
    }
}
