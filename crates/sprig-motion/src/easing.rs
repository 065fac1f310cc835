//! Easing curves.

/// Quartic ease-out: `1 - (1 - t)^4`.
///
/// Input is clamped to `[0, 1]`; output covers `[0, 1]` with a fast
/// start and a long settle toward the end.
#[must_use]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}
