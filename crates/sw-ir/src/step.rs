//! A single step of the narrative journey.

use alloc::string::String;
use arrayvec::{ArrayString, ArrayVec};

/// Maximum effect labels per step. The authored content tops out at 4;
/// headroom for richer steps without unbounding the type.
pub const MAX_EFFECTS: usize = 8;

/// Progress span (in percent) that reveals one more effect label.
/// Label `i` becomes visible once step progress reaches `i * 25`.
pub const EFFECT_REVEAL_SPAN: f32 = 25.0;

/// A narrative stage along the journey, in travel order.
///
/// Presentation-only: the engine never branches on it. For the built-in
/// solar-storm catalog the stage order matches the step order, but that
/// is an authoring convention, not a validated invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The eruption at the source.
    Sun,
    /// Transit through interplanetary space.
    Space,
    /// Arrival at the magnetosphere.
    Earth,
    /// Impact on everyday technology.
    You,
}

impl Stage {
    /// Display label for timeline markers.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Sun => "Sun",
            Stage::Space => "Space",
            Stage::Earth => "Earth",
            Stage::You => "You",
        }
    }
}

/// One ordered unit of the narrative sequence.
///
/// Title, description, and effect labels are opaque display text; the
/// engine only reads `duration_ms`.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryStep {
    /// Unique ordinal identifier
    pub id: u32,
    /// Display title
    pub title: ArrayString<32>,
    /// Display description
    pub description: String,
    /// Narrative stage (presentation only)
    pub stage: Stage,
    /// Time budget for the step, in milliseconds
    pub duration_ms: u32,
    /// Effect labels revealed progressively as the step plays
    pub effects: ArrayVec<ArrayString<64>, MAX_EFFECTS>,
}

/// Copy `text` into a fixed-capacity string, truncating at the last
/// char that fits.
fn clipped<const N: usize>(text: &str) -> ArrayString<N> {
    let mut s = ArrayString::new();
    for ch in text.chars() {
        if s.try_push(ch).is_err() {
            break;
        }
    }
    s
}

impl StoryStep {
    /// Create a step with no description or effects.
    ///
    /// Over-long titles are truncated at the capacity boundary.
    pub fn new(id: u32, title: &str, stage: Stage, duration_ms: u32) -> Self {
        Self {
            id,
            title: clipped(title),
            description: String::new(),
            stage,
            duration_ms,
            effects: ArrayVec::new(),
        }
    }

    /// Set the description (builder style).
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = String::from(description);
        self
    }

    /// Append an effect label (builder style). Labels past `MAX_EFFECTS`
    /// are ignored.
    pub fn with_effect(mut self, label: &str) -> Self {
        if !self.effects.is_full() {
            self.effects.push(clipped(label));
        }
        self
    }

    /// How many effect labels are visible at the given step progress
    /// (0–100). One label per completed 25% span, clamped to the label
    /// count; the first label is visible from progress 0.
    pub fn effects_revealed(&self, progress: f32) -> usize {
        if self.effects.is_empty() {
            return 0;
        }
        let spans = (progress.max(0.0) / EFFECT_REVEAL_SPAN) as usize;
        (spans + 1).min(self.effects.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_effect_step() -> StoryStep {
        StoryStep::new(1, "Solar Eruption", Stage::Sun, 3000)
            .with_effect("a")
            .with_effect("b")
            .with_effect("c")
            .with_effect("d")
    }

    #[test]
    fn first_effect_visible_at_zero_progress() {
        assert_eq!(four_effect_step().effects_revealed(0.0), 1);
    }

    #[test]
    fn one_more_effect_per_quarter() {
        let step = four_effect_step();
        assert_eq!(step.effects_revealed(24.9), 1);
        assert_eq!(step.effects_revealed(25.0), 2);
        assert_eq!(step.effects_revealed(50.0), 3);
        assert_eq!(step.effects_revealed(75.0), 4);
    }

    #[test]
    fn reveal_clamps_to_label_count() {
        assert_eq!(four_effect_step().effects_revealed(100.0), 4);

        let short = StoryStep::new(2, "Transit", Stage::Space, 4000).with_effect("only");
        assert_eq!(short.effects_revealed(90.0), 1);
    }

    #[test]
    fn no_effects_reveals_nothing() {
        let bare = StoryStep::new(3, "Quiet", Stage::Earth, 1000);
        assert_eq!(bare.effects_revealed(100.0), 0);
    }

    #[test]
    fn negative_progress_treated_as_zero() {
        assert_eq!(four_effect_step().effects_revealed(-5.0), 1);
    }

    #[test]
    fn overlong_title_is_truncated() {
        let step = StoryStep::new(
            4,
            "A title far longer than the thirty-two byte capacity",
            Stage::You,
            1000,
        );
        assert_eq!(step.title.as_str(), "A title far longer than the thir");
    }

    #[test]
    fn stage_labels() {
        assert_eq!(Stage::Sun.label(), "Sun");
        assert_eq!(Stage::You.label(), "You");
    }
}
