#![forbid(unsafe_code)]

//! Elm-style runtime for page-scoped controllers.
//!
//! A controller is a state machine: it receives typed messages and returns
//! [`Cmd`] values describing what should happen next — host operations,
//! follow-up messages, delayed messages, animation-frame requests. The
//! [`Dispatcher`] is the event-subscription layer: it converts host
//! [`UiEvent`](sprig_core::UiEvent)s into messages, runs updates, and
//! executes the returned commands.
//!
//! Keeping the dispatcher outside the controllers is deliberate. Every state
//! transition is reachable by constructing a message directly, so the
//! machines are fully testable without a rendering environment; the
//! dispatcher only adds ordering, timers, and frame scheduling on top.

pub mod controller;
pub mod dispatch;

pub use controller::{Cmd, Controller};
pub use dispatch::Dispatcher;
