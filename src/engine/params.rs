//! The four global knobs and their preset text codec.
//!
//! The preset format is a fixed contract: exactly four fields, fixed names,
//! fixed order, 6-decimal floats. `load` is strict and fail-closed — a
//! partial, reordered, or trailing-garbage preset is rejected without
//! touching any parameter.

use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamId {
    MasterLevel,
    ReverbMix,
    ReverbRoomSize,
    ReverbDamping,
}

impl ParamId {
    pub const ALL: [ParamId; 4] = [
        ParamId::MasterLevel,
        ParamId::ReverbMix,
        ParamId::ReverbRoomSize,
        ParamId::ReverbDamping,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ParamId::MasterLevel => "master_level",
            ParamId::ReverbMix => "reverb_mix",
            ParamId::ReverbRoomSize => "reverb_room_size",
            ParamId::ReverbDamping => "reverb_damping",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

/// Parameter store. Every set clamps to `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    master_level: f32,
    reverb_mix: f32,
    reverb_room_size: f32,
    reverb_damping: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            master_level: 0.8,
            reverb_mix: 0.15,
            reverb_room_size: 0.5,
            reverb_damping: 0.5,
        }
    }
}

impl Params {
    pub fn get(&self, id: ParamId) -> f32 {
        match id {
            ParamId::MasterLevel => self.master_level,
            ParamId::ReverbMix => self.reverb_mix,
            ParamId::ReverbRoomSize => self.reverb_room_size,
            ParamId::ReverbDamping => self.reverb_damping,
        }
    }

    pub fn set(&mut self, id: ParamId, value: f32) {
        let value = value.clamp(0.0, 1.0);
        match id {
            ParamId::MasterLevel => self.master_level = value,
            ParamId::ReverbMix => self.reverb_mix = value,
            ParamId::ReverbRoomSize => self.reverb_room_size = value,
            ParamId::ReverbDamping => self.reverb_damping = value,
        }
    }

    /// String-keyed read; unknown keys read 0.0.
    pub fn get_by_key(&self, key: &str) -> f32 {
        ParamId::from_key(key).map_or(0.0, |id| self.get(id))
    }

    /// String-keyed write; unknown keys are a no-op.
    pub fn set_by_key(&mut self, key: &str, value: f32) {
        if let Some(id) = ParamId::from_key(key) {
            self.set(id, value);
        }
    }

    /// Emit the fixed 4-field preset text.
    pub fn save_preset(&self) -> String {
        let mut out = String::with_capacity(96);
        out.push('{');
        for (i, id) in ParamId::ALL.into_iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            // String formatting never fails
            let _ = write!(out, "\"{}\":{:.6}", id.key(), self.get(id));
        }
        out.push('}');
        out
    }

    /// Strict 4-field positional parse. On any mismatch returns false and
    /// leaves all four parameters unchanged.
    pub fn load_preset(&mut self, text: &str) -> bool {
        let Some(values) = parse_preset(text) else {
            return false;
        };
        for (id, value) in ParamId::ALL.into_iter().zip(values) {
            self.set(id, value);
        }
        true
    }
}

fn parse_preset(text: &str) -> Option<[f32; 4]> {
    let mut rest = text.trim().strip_prefix('{')?;
    let mut values = [0.0f32; 4];

    for (i, id) in ParamId::ALL.into_iter().enumerate() {
        if i > 0 {
            rest = rest.trim_start().strip_prefix(',')?;
        }
        rest = rest.trim_start().strip_prefix('"')?;
        rest = rest.strip_prefix(id.key())?;
        rest = rest.strip_prefix('"')?;
        rest = rest.trim_start().strip_prefix(':')?;
        rest = rest.trim_start();

        let end = rest
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(end);
        values[i] = number.parse::<f32>().ok()?;
        rest = tail;
    }

    let rest = rest.trim_start().strip_prefix('}')?;
    rest.trim().is_empty().then_some(values)
}
