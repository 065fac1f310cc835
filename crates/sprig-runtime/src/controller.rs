#![forbid(unsafe_code)]

//! The controller contract and its command type.
//!
//! # Example
//!
//! ```ignore
//! use sprig_core::{ElementId, HostOp, UiEvent};
//! use sprig_runtime::{Cmd, Controller};
//!
//! struct Toggle {
//!     on: bool,
//!     light: ElementId,
//! }
//!
//! enum Msg {
//!     Click(ElementId),
//!     Noop,
//! }
//!
//! impl From<UiEvent> for Msg {
//!     fn from(event: UiEvent) -> Self {
//!         match event {
//!             UiEvent::Click { target } => Msg::Click(target),
//!             _ => Msg::Noop,
//!         }
//!     }
//! }
//!
//! impl Controller for Toggle {
//!     type Message = Msg;
//!     const NAME: &'static str = "toggle";
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Click(el) if el == self.light => {
//!                 self.on = !self.on;
//!                 Cmd::host(/* class op reflecting self.on */)
//!             }
//!             _ => Cmd::none(),
//!         }
//!     }
//! }
//! ```

use std::time::Duration;

use sprig_core::{HostOp, UiEvent};

/// A page-scoped state machine driven by host events.
///
/// Implementations own all of their state; there are no ambient globals.
/// `update` is the single transition entry point and must stay synchronous
/// and non-blocking — long-running work (counter animations) is spread
/// across animation-frame messages instead.
pub trait Controller {
    /// The message type for this controller.
    ///
    /// Must be convertible from host events; the dispatcher performs that
    /// conversion for every event it routes.
    type Message: From<UiEvent>;

    /// Stable name used in dispatch trace spans.
    const NAME: &'static str;

    /// Produce the initial command batch (first-paint class state, watcher
    /// subscriptions). Called exactly once, before any event is dispatched.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Advance the state machine by one message.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;
}

/// Commands returned from `init()` and `update()`.
///
/// Commands are executed in order; a `Batch` preserves the order of its
/// children. `Msg` re-enters `update` synchronously, `Delay` goes through
/// the dispatcher's timer queue, and `Frame` asks for one animation-frame
/// callback (coalesced — many requests per tick yield one frame event).
#[derive(Debug, Default)]
pub enum Cmd<M> {
    /// No effect.
    #[default]
    None,
    /// Execute several commands in order.
    Batch(Vec<Cmd<M>>),
    /// Feed a message straight back into `update`.
    Msg(M),
    /// Ask the host to perform one operation.
    Host(HostOp),
    /// Deliver `msg` after `after` has elapsed on the dispatcher clock.
    Delay { after: Duration, msg: M },
    /// Request a single animation-frame event.
    Frame,
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a message command.
    #[inline]
    #[must_use]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a host-operation command.
    #[inline]
    #[must_use]
    pub fn host(op: HostOp) -> Self {
        Self::Host(op)
    }

    /// Create a delayed-message command.
    #[inline]
    #[must_use]
    pub fn delay(after: Duration, msg: M) -> Self {
        Self::Delay { after, msg }
    }

    /// Request an animation-frame event.
    #[inline]
    #[must_use]
    pub fn frame() -> Self {
        Self::Frame
    }

    /// Create a batch of commands. Empty batches collapse to `None`,
    /// single-element batches to the element itself.
    #[must_use]
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds = cmds;
        if cmds.is_empty() {
            Self::None
        } else if cmds.len() == 1 {
            cmds.remove(0)
        } else {
            Self::Batch(cmds)
        }
    }

    /// Create a batch of host operations, preserving order.
    #[must_use]
    pub fn ops<I>(ops: I) -> Self
    where
        I: IntoIterator<Item = HostOp>,
    {
        Self::batch(ops.into_iter().map(Self::Host).collect())
    }

    /// True if executing this command does nothing at all.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
