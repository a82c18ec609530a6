use crate::synth::voice::{Voice, VoicePhase};
use crate::MAX_VOICES;

/// Fixed-capacity voice pool.
///
/// Allocation order on note-on:
/// 1. a voice already bound to the same note is retriggered (count unchanged);
/// 2. any free slot;
/// 3. any voice already in its release phase (stolen);
/// 4. slot 0, stolen unconditionally.
///
/// Stealing replaces the voice with no crossfade; the discontinuity is an
/// accepted trade-off. The active count is tracked explicitly and only moves
/// when a previously-free slot is claimed or a finished voice is freed.
pub struct VoicePool {
    voices: [Voice; MAX_VOICES],
    active_count: usize,
    sample_rate: f32,
}

impl VoicePool {
    pub fn new() -> Self {
        Self {
            voices: [Voice::new(); MAX_VOICES],
            active_count: 0,
            sample_rate: 48_000.0,
        }
    }

    pub fn prepare(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.silence_all();
    }

    pub fn note_on(&mut self, note: i32, velocity: f32) {
        let slot = match self.find_note(note) {
            Some(slot) => slot, // retrigger, count unchanged
            None => self.allocate(),
        };

        let was_free = !self.voices[slot].active;
        if was_free {
            self.active_count += 1;
        }
        self.voices[slot].trigger(note, velocity, self.sample_rate);
    }

    pub fn note_off(&mut self, note: i32) {
        // Unmatched note-off is a no-op
        if let Some(slot) = self.find_note(note) {
            self.voices[slot].release();
        }
    }

    /// Immediate total silence: every voice idle, count zeroed, no fade.
    pub fn silence_all(&mut self) {
        for voice in &mut self.voices {
            voice.silence();
        }
        self.active_count = 0;
    }

    /// Free a voice whose release just finished. Returns true if it freed.
    pub fn free_if_finished(&mut self, slot: usize) -> bool {
        let voice = &mut self.voices[slot];
        if voice.active && voice.phase() == VoicePhase::Idle {
            voice.silence();
            self.active_count -= 1;
            return true;
        }
        false
    }

    pub fn voice(&self, slot: usize) -> &Voice {
        &self.voices[slot]
    }

    pub fn voice_mut(&mut self, slot: usize) -> &mut Voice {
        &mut self.voices[slot]
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn capacity(&self) -> usize {
        MAX_VOICES
    }

    fn find_note(&self, note: i32) -> Option<usize> {
        self.voices
            .iter()
            .position(|v| v.active && v.note() == note)
    }

    fn allocate(&self) -> usize {
        if let Some(slot) = self.voices.iter().position(|v| !v.active) {
            return slot;
        }
        if let Some(slot) = self
            .voices
            .iter()
            .position(|v| v.phase() == VoicePhase::Release)
        {
            return slot;
        }
        0
    }
}

impl Default for VoicePool {
    fn default() -> Self {
        Self::new()
    }
}
