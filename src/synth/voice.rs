use crate::sounds::SoundCategory;

/// Envelope timing shared by every voice. Rates are baked into per-voice
/// per-sample scalars at trigger time so the block loop is add-and-compare.
const ATTACK_TIME: f32 = 0.01;
const DECAY_TIME: f32 = 0.1;
const SUSTAIN_LEVEL: f32 = 0.7;
const RELEASE_TIME: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoicePhase {
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
}

/// One slot in the fixed pool. Constructed once at engine build time and
/// reused for the life of the engine; never destroyed.
#[derive(Debug, Clone, Copy)]
pub struct Voice {
    pub(crate) active: bool,
    phase: VoicePhase,
    amplitude: f32,
    note: i32,
    velocity: f32,
    category: SoundCategory,
    sound_index: usize,
    attack_rate: f32,
    decay_rate: f32,
    sustain_level: f32,
    release_rate: f32,
}

impl Voice {
    pub fn new() -> Self {
        Self {
            active: false,
            phase: VoicePhase::Idle,
            amplitude: 0.0,
            note: -1,
            velocity: 0.0,
            category: SoundCategory::Water,
            sound_index: 0,
            attack_rate: 0.0,
            decay_rate: 0.0,
            sustain_level: SUSTAIN_LEVEL,
            release_rate: 0.0,
        }
    }

    /// (Re)start the voice on a note. Used for both fresh allocations and
    /// retriggers; the envelope always restarts from zero for a clean attack.
    pub fn trigger(&mut self, note: i32, velocity: f32, sample_rate: f32) {
        let (category, sound_index) = route_note(note);

        self.active = true;
        self.note = note;
        self.velocity = velocity.clamp(0.0, 1.0);
        self.category = category;
        self.sound_index = sound_index;

        self.attack_rate = 1.0 / (ATTACK_TIME * sample_rate);
        self.decay_rate = (1.0 - SUSTAIN_LEVEL) / (DECAY_TIME * sample_rate);
        self.sustain_level = SUSTAIN_LEVEL;
        self.release_rate = SUSTAIN_LEVEL / (RELEASE_TIME * sample_rate);

        self.phase = VoicePhase::Attack;
        self.amplitude = 0.0;
    }

    /// Key released: ramp down from wherever the envelope currently is.
    pub fn release(&mut self) {
        self.phase = VoicePhase::Release;
    }

    /// Hard stop, no fade. Used by panic/reset.
    pub fn silence(&mut self) {
        self.active = false;
        self.phase = VoicePhase::Idle;
        self.amplitude = 0.0;
    }

    /// Advance the ADSR state machine one sample at a time across the block.
    /// Amplitude is clamped to the target bound on every phase transition.
    pub fn advance_envelope(&mut self, num_samples: usize) {
        for _ in 0..num_samples {
            match self.phase {
                VoicePhase::Attack => {
                    self.amplitude += self.attack_rate;
                    if self.amplitude >= 1.0 {
                        self.amplitude = 1.0;
                        self.phase = VoicePhase::Decay;
                    }
                }
                VoicePhase::Decay => {
                    self.amplitude -= self.decay_rate;
                    if self.amplitude <= self.sustain_level {
                        self.amplitude = self.sustain_level;
                        self.phase = VoicePhase::Sustain;
                    }
                }
                VoicePhase::Sustain => {}
                VoicePhase::Release => {
                    self.amplitude -= self.release_rate;
                    if self.amplitude <= 0.0 {
                        self.amplitude = 0.0;
                        self.phase = VoicePhase::Idle;
                    }
                }
                VoicePhase::Idle => {}
            }

            debug_assert!((0.0..=1.0).contains(&self.amplitude));
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> VoicePhase {
        self.phase
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn note(&self) -> i32 {
        self.note
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn category(&self) -> SoundCategory {
        self.category
    }

    pub fn sound_index(&self) -> usize {
        self.sound_index
    }
}

impl Default for Voice {
    fn default() -> Self {
        Self::new()
    }
}

/// Static note → (category, sound index) table.
///
/// Three octave-wide ranges, each split into two six-note families; anything
/// outside the mapped span falls back to Water index 0. Each family clamps
/// the index to its own enum span, so six-note ranges feeding four-variant
/// families are fine.
pub fn route_note(note: i32) -> (SoundCategory, usize) {
    match note {
        36..=47 => {
            if note < 42 {
                (SoundCategory::Water, (note - 36) as usize)
            } else {
                (SoundCategory::Wind, (note - 42) as usize)
            }
        }
        48..=59 => {
            if note < 54 {
                (SoundCategory::Insect, (note - 48) as usize)
            } else {
                (SoundCategory::Amphibian, (note - 54) as usize)
            }
        }
        60..=71 => {
            if note < 66 {
                (SoundCategory::Bird, (note - 60) as usize)
            } else {
                (SoundCategory::Mammal, (note - 66) as usize)
            }
        }
        _ => (SoundCategory::Water, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    #[test]
    fn attack_reaches_full_level_then_decays() {
        let mut voice = Voice::new();
        voice.trigger(40, 0.8, SAMPLE_RATE);

        voice.advance_envelope((ATTACK_TIME * SAMPLE_RATE) as usize);
        assert!(voice.amplitude() >= 0.99);
        assert_eq!(voice.phase(), VoicePhase::Decay);
    }

    #[test]
    fn decay_settles_on_sustain_level() {
        let mut voice = Voice::new();
        voice.trigger(40, 0.8, SAMPLE_RATE);

        voice.advance_envelope(((ATTACK_TIME + DECAY_TIME) * SAMPLE_RATE) as usize + 5);
        assert_eq!(voice.phase(), VoicePhase::Sustain);
        assert!((voice.amplitude() - SUSTAIN_LEVEL).abs() < 1e-6);
    }

    #[test]
    fn release_returns_to_idle_at_zero() {
        let mut voice = Voice::new();
        voice.trigger(40, 0.8, SAMPLE_RATE);
        voice.advance_envelope(((ATTACK_TIME + DECAY_TIME) * SAMPLE_RATE) as usize + 5);

        voice.release();
        voice.advance_envelope((RELEASE_TIME * SAMPLE_RATE) as usize + 5);

        assert_eq!(voice.phase(), VoicePhase::Idle);
        assert_eq!(voice.amplitude(), 0.0);
    }

    #[test]
    fn amplitude_never_leaves_unit_range() {
        let mut voice = Voice::new();
        voice.trigger(50, 1.0, SAMPLE_RATE);

        for _ in 0..2_000 {
            voice.advance_envelope(1);
            assert!((0.0..=1.0).contains(&voice.amplitude()));
        }
        voice.release();
        for _ in 0..2_000 {
            voice.advance_envelope(1);
            assert!((0.0..=1.0).contains(&voice.amplitude()));
        }
    }

    #[test]
    fn routing_table_matches_note_ranges() {
        assert_eq!(route_note(36), (SoundCategory::Water, 0));
        assert_eq!(route_note(40), (SoundCategory::Water, 4));
        assert_eq!(route_note(42), (SoundCategory::Wind, 0));
        assert_eq!(route_note(47), (SoundCategory::Wind, 5));
        assert_eq!(route_note(50), (SoundCategory::Insect, 2));
        assert_eq!(route_note(54), (SoundCategory::Amphibian, 0));
        assert_eq!(route_note(60), (SoundCategory::Bird, 0));
        assert_eq!(route_note(65), (SoundCategory::Bird, 5));
        assert_eq!(route_note(66), (SoundCategory::Mammal, 0));
        assert_eq!(route_note(71), (SoundCategory::Mammal, 5));
    }

    #[test]
    fn routing_falls_back_to_water_outside_the_span() {
        assert_eq!(route_note(35), (SoundCategory::Water, 0));
        assert_eq!(route_note(72), (SoundCategory::Water, 0));
        assert_eq!(route_note(90), (SoundCategory::Water, 0));
        assert_eq!(route_note(-3), (SoundCategory::Water, 0));
    }
}
