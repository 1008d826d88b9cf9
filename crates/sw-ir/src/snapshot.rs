//! Read-only playback state handed to presentation adapters.

/// A point-in-time view of playback state.
///
/// Produced by the engine after every command and tick; adapters render
/// from this and never mutate engine state directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    /// Index of the current step in the catalog
    pub step_index: usize,
    /// Progress within the current step (0–100)
    pub progress: f32,
    /// Cumulative journey completion for the timeline display (0–100)
    pub wave_position: f32,
    /// Derived effect intensity (0–100)
    pub intensity: f32,
    /// Is playback active?
    pub playing: bool,
    /// Number of the current step's effect labels visible at this progress
    pub effects_revealed: usize,
}

impl Snapshot {
    /// True when the journey has run to completion: the last step of an
    /// `n`-step catalog finished while playing.
    pub fn is_terminal(&self, step_count: usize) -> bool {
        !self.playing && self.step_index == step_count - 1 && self.progress >= 100.0
    }
}
