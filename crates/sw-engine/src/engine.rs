//! The narrative playback engine.

use core::fmt;

use sw_ir::{wave_intensity, Snapshot, StepCatalog, StoryStep};

/// Catalog rejected at engine construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no steps; there is no state machine over zero steps.
    EmptyCatalog,
    /// A step has a zero time budget and could never complete.
    ZeroDuration {
        /// Index of the offending step
        index: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyCatalog => write!(f, "catalog has no steps"),
            CatalogError::ZeroDuration { index } => {
                write!(f, "step {} has a zero duration", index)
            }
        }
    }
}

/// What a single `tick` did to playback state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; the tick was ignored.
    Idle,
    /// Progress advanced within the current step.
    Advanced,
    /// The current step completed and playback moved to the next step.
    StepCompleted,
    /// The final step completed; playback stopped.
    Finished,
}

/// The narrative playback engine.
///
/// Owns all mutable playback state; adapters read snapshots and call
/// the command surface, never touching state directly. Single-threaded:
/// callers that tick and command from different threads must serialize
/// access externally (see the controller crate).
#[derive(Debug)]
pub struct Engine {
    /// The catalog being played
    catalog: StepCatalog,
    /// Index of the current step
    step_index: usize,
    /// Progress within the current step (0–100)
    progress: f32,
    /// Cumulative journey completion (0–100)
    wave_position: f32,
    /// Derived effect intensity (0–100)
    intensity: f32,
    /// Is playback active?
    playing: bool,
    /// Wave-position gain per completed step; 0 for one-step catalogs
    wave_step: f32,
}

impl Engine {
    /// Create an engine over a validated catalog.
    ///
    /// Rejects empty catalogs and zero-duration steps; no engine is
    /// produced on failure.
    pub fn new(catalog: StepCatalog) -> Result<Self, CatalogError> {
        if catalog.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        if let Some(index) = catalog.steps().iter().position(|s| s.duration_ms == 0) {
            return Err(CatalogError::ZeroDuration { index });
        }

        let n = catalog.step_count();
        // The increment is only applied on intermediate step completions,
        // which a one-step journey never has.
        let wave_step = if n > 1 { 100.0 / (n - 1) as f32 } else { 0.0 };

        Ok(Self {
            catalog,
            step_index: 0,
            progress: 0.0,
            wave_position: 0.0,
            intensity: 0.0,
            playing: false,
            wave_step,
        })
    }

    /// Start (or restart) playback.
    ///
    /// From the completed state this resets to the start first, so
    /// pressing play after the journey ends replays it. No-op while
    /// already playing.
    pub fn play(&mut self) {
        if self.is_finished() {
            self.reset();
        }
        self.playing = true;
    }

    /// Stop ticking; step, progress, and wave position are preserved
    /// exactly. No-op while already paused.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Return to the initial state, whatever the current one is.
    pub fn reset(&mut self) {
        self.playing = false;
        self.step_index = 0;
        self.progress = 0.0;
        self.wave_position = 0.0;
        self.intensity = 0.0;
    }

    /// Advance playback by `elapsed_ms` of wall time.
    ///
    /// At most one step boundary is crossed per call: if `elapsed_ms`
    /// overshoots the current step, the remainder is discarded rather
    /// than carried into the next step. Callers wanting finer
    /// resolution tick more often with smaller amounts.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Idle;
        }

        let duration = self.current_step().duration_ms;
        let increment = 100.0 * elapsed_ms as f32 / duration as f32;
        self.progress = (self.progress + increment).min(100.0);
        self.intensity = wave_intensity(self.progress);

        if self.progress < 100.0 {
            return TickOutcome::Advanced;
        }

        // sinf(pi) leaves a sub-1e-5 residue; boundaries are exactly zero.
        self.intensity = 0.0;

        if self.step_index < self.catalog.step_count() - 1 {
            self.step_index += 1;
            self.progress = 0.0;
            self.wave_position = (self.wave_position + self.wave_step).min(100.0);
            TickOutcome::StepCompleted
        } else {
            self.playing = false;
            self.progress = 100.0;
            TickOutcome::Finished
        }
    }

    /// The step currently playing (or paused/completed on).
    pub fn current_step(&self) -> &StoryStep {
        // step_index stays in range by construction; anything else is a bug.
        &self.catalog.steps()[self.step_index]
    }

    /// The catalog being played.
    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    /// Is playback active?
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Has the journey run to completion (and not been reset)?
    pub fn is_finished(&self) -> bool {
        !self.playing
            && self.step_index == self.catalog.step_count() - 1
            && self.progress >= 100.0
    }

    /// Read-only snapshot of playback state for adapters to render.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step_index: self.step_index,
            progress: self.progress,
            wave_position: self.wave_position,
            intensity: self.intensity,
            playing: self.playing,
            effects_revealed: self.current_step().effects_revealed(self.progress),
        }
    }
}
