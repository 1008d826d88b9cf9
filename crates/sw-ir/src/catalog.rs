//! The ordered, immutable catalog of story steps.

use alloc::vec::Vec;
use core::fmt;

use crate::step::{Stage, StoryStep};

/// Indexing a catalog outside `[0, step_count())`.
///
/// The engine maintains its step index as an invariant, so seeing this
/// error surface from inside playback indicates a programming error,
/// not a recoverable runtime condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRangeError {
    /// The offending index
    pub index: usize,
    /// Number of steps in the catalog
    pub step_count: usize,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step index {} out of range for catalog of {} steps",
            self.index, self.step_count
        )
    }
}

/// An immutable ordered sequence of story steps.
///
/// Supplied once at construction and never mutated afterwards; the
/// engine and any adapters only ever read from it.
#[derive(Clone, Debug, PartialEq)]
pub struct StepCatalog {
    steps: Vec<StoryStep>,
}

impl StepCatalog {
    /// Create a catalog from an ordered list of steps.
    pub fn new(steps: Vec<StoryStep>) -> Self {
        Self { steps }
    }

    /// Number of steps; constant for the catalog's lifetime.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether the catalog has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step at `index`.
    pub fn step_at(&self, index: usize) -> Result<&StoryStep, OutOfRangeError> {
        self.steps.get(index).ok_or(OutOfRangeError {
            index,
            step_count: self.steps.len(),
        })
    }

    /// All steps, in order.
    pub fn steps(&self) -> &[StoryStep] {
        &self.steps
    }

    /// The built-in four-step solar-storm journey, from eruption to
    /// everyday impact.
    pub fn solar_storm() -> Self {
        Self::new(alloc::vec![
            StoryStep::new(1, "Solar Eruption", Stage::Sun, 3000)
                .with_description(
                    "A massive solar flare erupts from the Sun's surface, releasing \
                     billions of tons of charged particles into space at incredible speeds.",
                )
                .with_effect("Solar flare intensity increases")
                .with_effect("Magnetic field lines snap")
                .with_effect("X-ray and UV radiation spike"),
            StoryStep::new(2, "Cosmic Wave Journey", Stage::Space, 4000)
                .with_description(
                    "The cosmic wave of particles travels through space at 1-3 million \
                     mph, creating a shockwave that will reach Earth in 1-3 days.",
                )
                .with_effect("Solar wind accelerates")
                .with_effect("Magnetic field compression")
                .with_effect("Interplanetary shock wave forms"),
            StoryStep::new(3, "Earth's Magnetosphere", Stage::Earth, 3500)
                .with_description(
                    "The cosmic wave collides with Earth's protective magnetic field, \
                     causing geomagnetic storms and creating beautiful auroras.",
                )
                .with_effect("Magnetosphere compression")
                .with_effect("Auroras appear at lower latitudes")
                .with_effect("Van Allen radiation belts energize"),
            StoryStep::new(4, "Your Daily Life", Stage::You, 4000)
                .with_description(
                    "The space weather event affects technology around you - GPS drifts, \
                     power grids fluctuate, and communication systems experience \
                     interference.",
                )
                .with_effect("GPS accuracy decreases")
                .with_effect("Power grid instability")
                .with_effect("Radio communication disruption")
                .with_effect("Satellite operations affected"),
        ])
    }
}
