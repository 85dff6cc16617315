//! Audio cue contract
//!
//! Fire-and-forget triggers: the core raises a cue and moves on, it never
//! blocks on playback or waits for an acknowledgment.

/// Cue identifiers, one per gameplay sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Wing beat on a flap impulse
    Flap,
    /// A pair was passed
    Score,
    /// Collision ended the round
    Hit,
    /// Screen transition
    Swoosh,
}

/// Receives cues from the state machine
pub trait AudioSink {
    /// Fire a cue; implementations must not block
    fn play(&mut self, cue: AudioCue);
}

/// Discards every cue (tests, benchmarks)
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Logs every cue (headless runs)
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: AudioCue) {
        log::debug!("audio cue: {:?}", cue);
    }
}
