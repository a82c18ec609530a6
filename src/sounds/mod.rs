//! Procedural generator families.
//!
//! Six families, one module each. Every family owns a single engine-wide
//! instance of its oscillator and filter state, shared by all voices routed
//! to that category. Simultaneous same-category notes therefore bleed into
//! each other's filter and phase state; this timbral crosstalk is a
//! deliberate part of the sound, not an aliasing bug to fix.
//!
//! Uniform contract per family:
//! - `init(sample_rate)` then `reset()` clear all persistent state;
//! - `process(outputs, sound, amplitude, texture, noise)` accumulates into
//!   the caller's buffers and never overwrites them;
//! - the sound enum is closed, and out-of-range indices fall back to the
//!   family's default variant.
//!
//! `texture` is the note velocity reused as a secondary timbral control
//! (frequency or modulation spread); `amplitude` is the envelope level
//! already scaled by velocity.

pub mod amphibian;
pub mod bird;
pub mod insect;
pub mod mammal;
pub mod water;
pub mod wind;

pub use amphibian::AmphibianSynth;
pub use bird::BirdSynth;
pub use insect::InsectSynth;
pub use mammal::MammalSynth;
pub use water::WaterSynth;
pub use wind::WindSynth;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six generator families a note can be routed to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCategory {
    Water,
    Wind,
    Insect,
    Bird,
    Amphibian,
    Mammal,
}

/// Accumulate one stereo sample pair into the output buffers.
///
/// Mono hosts get the left signal only; the right value is dropped.
#[inline]
pub(crate) fn add_stereo(outputs: &mut [&mut [f32]], index: usize, left: f32, right: f32) {
    outputs[0][index] += left;
    if outputs.len() > 1 {
        outputs[1][index] += right;
    }
}
