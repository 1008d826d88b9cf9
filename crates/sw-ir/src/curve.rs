//! Intensity curve for in-step effect modulation.

use core::f32::consts::PI;

/// Effect intensity at the given step progress (both 0–100).
///
/// A half-sine: zero at the start and end of a step, peaking at 100 at
/// the midpoint. Models a rising-then-falling physical effect such as
/// particle density during a wave passage.
pub fn wave_intensity(progress: f32) -> f32 {
    let clamped = progress.clamp(0.0, 100.0);
    100.0 * libm::sinf(PI * clamped / 100.0)
}
