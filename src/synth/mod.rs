//! Voice lifecycle: the fixed pool, per-voice ADSR state, and note routing.

pub mod pool;
pub mod voice;

pub use pool::VoicePool;
pub use voice::{route_note, Voice, VoicePhase};
