#![forbid(unsafe_code)]

//! Core: host-surface vocabulary, input events, and watcher configuration.
//!
//! # Role in Sprig
//! `sprig-core` is the boundary layer. It owns the typed vocabulary the
//! controllers and the rendering host exchange: element handles, the theme's
//! class contract, host operations, and normalized input events.
//!
//! # Primary responsibilities
//! - **HostOp / HostSurface**: the complete, infallible operation set a
//!   controller may ask the host to perform.
//! - **UiEvent**: canonical input events (clicks, keys, scroll positions,
//!   viewport intersections, history pops, animation frames).
//! - **WatcherKind**: which viewport-intersection watchers exist and how the
//!   host must configure them.
//!
//! # How it fits in the system
//! The dispatcher (`sprig-runtime`) converts `sprig-core::UiEvent` values
//! into controller messages and forwards the resulting `HostOp`s to a
//! `HostSurface`. Controllers never see a real document; the host applies
//! ops to whatever surface it renders, and ops aimed at elements that no
//! longer exist are absorbed silently.

pub mod dom;
pub mod event;
pub mod logging;
pub mod observer;

pub use dom::{ClassName, Dir, ElementId, HostOp, HostSurface};
pub use event::{KeyCode, KeyEvent, Modifiers, UiEvent};
pub use observer::{WatcherConfig, WatcherKind};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
