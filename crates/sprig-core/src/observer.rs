#![forbid(unsafe_code)]

//! Viewport-intersection watcher kinds and their host-side configuration.
//!
//! The kernel never computes intersections itself; it asks the host to
//! register watchers (via [`HostOp::Observe`](crate::dom::HostOp)) and
//! reacts to the resulting [`UiEvent::Intersection`](crate::event::UiEvent)
//! notifications. The config values here are the parameters the host must
//! hand to its observer machinery.

/// Which intersection watcher an observe/unobserve op or notification
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatcherKind {
    /// Scroll-reveal watcher for sections and items. Stays attached after
    /// the first notification; repeat callbacks are harmless.
    Reveal,
    /// Counter trigger watcher. One-shot: the controller unobserves on the
    /// first qualifying notification.
    Counter,
}

/// Host-side observer parameters for one watcher kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatcherConfig {
    /// Fraction of the element that must be visible before the watcher
    /// notifies.
    pub threshold: f64,
    /// Bottom margin applied to the observation root, in pixels. Negative
    /// values pull the trigger line up into the viewport, so elements must
    /// travel that far past the bottom edge before they count as visible.
    pub bottom_margin_px: i32,
}

/// Reveal watchers notify once 10% of the element is visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Reveal trigger line sits 50px above the viewport's bottom edge.
pub const REVEAL_BOTTOM_MARGIN_PX: i32 = -50;

/// Counter watchers wait for half the element to be visible.
pub const COUNTER_THRESHOLD: f64 = 0.5;

impl WatcherKind {
    /// The observer parameters the host must register for this watcher.
    #[must_use]
    pub const fn config(self) -> WatcherConfig {
        match self {
            Self::Reveal => WatcherConfig {
                threshold: REVEAL_THRESHOLD,
                bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX,
            },
            Self::Counter => WatcherConfig {
                threshold: COUNTER_THRESHOLD,
                bottom_margin_px: 0,
            },
        }
    }
}
