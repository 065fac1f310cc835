//! Hero parallax offset.

/// Vertical translation applied per scrolled pixel.
///
/// Negative: the hero content drifts up at half the scroll speed.
pub const PARALLAX_RATE: f64 = -0.5;

/// Offset in pixels for the hero content layer at `scroll_y`.
#[must_use]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    PARALLAX_RATE * scroll_y
}
