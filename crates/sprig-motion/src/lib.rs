#![forbid(unsafe_code)]

//! Motion math for Sprig.
//!
//! Pure interpolation and bookkeeping behind the storefront's visible
//! movement: the quartic counter ramp, monotonic scroll-reveal
//! tracking, and the hero parallax offset. Nothing here touches the
//! host surface; controllers feed these types from events and turn the
//! results into host operations.

pub mod counter;
pub mod easing;
pub mod parallax;
pub mod reveal;

pub use counter::{COUNTER_DURATION, CounterAnimation};
pub use easing::ease_out_quart;
pub use parallax::{PARALLAX_RATE, parallax_offset};
pub use reveal::RevealSet;
