//! Control events fed to the engine from a non-audio thread.
//!
//! Events are plain `Copy` data so they can cross an SPSC ring without
//! allocation. `sample_offset` is where in the current block the event lands;
//! callers that don't do sample-accurate scheduling leave it at zero.

use crate::engine::params::ParamId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    NoteOn { note: i32, velocity: f32 },
    NoteOff { note: i32 },
    PitchBend { value: f32 },
    ChannelPressure { value: f32 },
    ControlChange { controller: u8, value: f32 },
    ProgramChange { program: u8 },
    ParamChange { id: ParamId, value: f32 },
    /// Full stop: silence every voice and clear controller state.
    Reset,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledEvent {
    pub sample_offset: u32,
    pub kind: EventKind,
}

impl ScheduledEvent {
    /// An event at the start of the block.
    pub fn new(kind: EventKind) -> Self {
        Self {
            sample_offset: 0,
            kind,
        }
    }

    pub fn at(kind: EventKind, sample_offset: u32) -> Self {
        Self {
            sample_offset,
            kind,
        }
    }
}

impl From<EventKind> for ScheduledEvent {
    fn from(kind: EventKind) -> Self {
        Self::new(kind)
    }
}
