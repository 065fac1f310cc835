//! Time-driven counter interpolation.
//!
//! # Invariants
//!
//! 1. **Monotone**: the sampled value never decreases between frames.
//!
//! 2. **Bounded**: the sampled value never exceeds the target.
//!
//! 3. **Exact convergence**: once the ramp window has elapsed, the
//!    value is the target itself, not a rounded neighbor.
//!
//! 4. **One ramp per counter**: a finished animation keeps reporting
//!    the target; it never restarts.

use std::time::Duration;

use web_time::Instant;

use crate::easing::ease_out_quart;

/// Fixed ramp window for every counter.
pub const COUNTER_DURATION: Duration = Duration::from_secs(2);

/// Interpolates a counter from zero to its target over a fixed window,
/// sampled once per animation frame.
///
/// The clock starts at the first sample, so the ramp always gets its
/// full window regardless of how long the element sat in view before
/// the first frame arrived.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    started: Option<Instant>,
    current: u64,
    progress: f64,
}

impl CounterAnimation {
    /// A counter ramping from zero to `target`.
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self {
            target,
            started: None,
            current: 0,
            progress: 0.0,
        }
    }

    /// Sample the ramp at `now`, returning the value to display.
    ///
    /// The first sample anchors the clock and reads zero.
    pub fn sample_at(&mut self, now: Instant) -> u64 {
        let start = *self.started.get_or_insert(now);
        let elapsed = now.duration_since(start);
        self.progress =
            (elapsed.as_secs_f64() / COUNTER_DURATION.as_secs_f64()).clamp(0.0, 1.0);

        if self.progress >= 1.0 {
            self.current = self.target;
            return self.current;
        }

        let eased = ease_out_quart(self.progress);
        let value = (self.target as f64 * eased).floor() as u64;
        // Floor of a rounded product can dip by one; clamp keeps the
        // displayed value monotone.
        self.current = self.current.max(value.min(self.target));
        self.current
    }

    /// Ramp completion in `[0, 1]` as of the last sample.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Value as of the last sample.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Final value the ramp converges to.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Whether the ramp has started sampling.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Whether the ramp has reached the target.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.progress >= 1.0
    }
}
