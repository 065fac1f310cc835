#![forbid(unsafe_code)]

//! Event dispatch, timers, and animation-frame scheduling.
//!
//! # Invariants
//!
//! 1. **Serialized delivery**: messages are delivered one at a time;
//!    `update` never observes a partially applied command batch from an
//!    earlier message.
//! 2. **Timer order**: delayed messages fire in due-time order; ties fire in
//!    scheduling order.
//! 3. **Frame coalescing**: any number of `Cmd::Frame` requests between two
//!    `tick_frame` calls produce exactly one animation-frame event.
//! 4. **Deterministic clock**: the dispatcher clock only moves when
//!    `advance` is called, so tests control time completely.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Op for a vanished element | Element removed mid-animation | Host absorbs it as a no-op |
//! | Frame tick with no request | Host ticks unconditionally | Nothing is delivered |
//! | Timer due exactly at clock | Boundary advance | Fires on that advance |

use std::time::Duration;

use tracing::{debug, debug_span};
use web_time::Instant;

use sprig_core::{HostSurface, UiEvent};

use crate::controller::{Cmd, Controller};

/// A delayed message waiting on the dispatcher clock.
#[derive(Debug)]
struct PendingTimer<M> {
    due: Instant,
    seq: u64,
    msg: M,
}

/// The event-subscription collaborator: routes host events into a
/// controller and executes the commands that come back.
///
/// One dispatcher owns one controller and one host surface. Pages with both
/// controllers run two independent dispatchers; the controllers share no
/// state, so their relative ordering is immaterial.
pub struct Dispatcher<C: Controller, H: HostSurface> {
    controller: C,
    host: H,
    clock: Instant,
    timers: Vec<PendingTimer<C::Message>>,
    next_seq: u64,
    frame_requested: bool,
}

impl<C: Controller, H: HostSurface> Dispatcher<C, H> {
    /// Create a dispatcher with the clock starting at the host's `now`.
    #[must_use]
    pub fn new(controller: C, host: H) -> Self {
        Self::with_clock(controller, host, Instant::now())
    }

    /// Create a dispatcher with an explicit clock origin (tests).
    #[must_use]
    pub fn with_clock(controller: C, host: H, now: Instant) -> Self {
        Self {
            controller,
            host,
            clock: now,
            timers: Vec::new(),
            next_seq: 0,
            frame_requested: false,
        }
    }

    /// Run the controller's `init` commands. Call once, before any event.
    pub fn init(&mut self) {
        let _span = debug_span!("init", controller = C::NAME).entered();
        let cmd = self.controller.init();
        self.execute(cmd);
    }

    /// Convert a host event into a message and deliver it.
    pub fn dispatch(&mut self, event: UiEvent) {
        let _span = debug_span!("dispatch", controller = C::NAME).entered();
        self.deliver(C::Message::from(event));
    }

    /// Move the clock forward and fire every timer that comes due, in
    /// due-then-scheduling order. Timers scheduled while firing are honored
    /// within the same call if they are already due.
    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due <= self.clock)
                .min_by(|(_, a), (_, b)| a.due.cmp(&b.due).then(a.seq.cmp(&b.seq)))
                .map(|(i, _)| i);
            let Some(i) = next else { break };
            let timer = self.timers.swap_remove(i);
            debug!(controller = C::NAME, seq = timer.seq, "timer fired");
            self.deliver(timer.msg);
        }
    }

    /// Deliver one animation-frame event if a frame was requested.
    ///
    /// The request flag is cleared before delivery so the controller can
    /// re-request from inside the frame handler (the counter loop does).
    pub fn tick_frame(&mut self) {
        if !self.frame_requested {
            return;
        }
        self.frame_requested = false;
        self.dispatch(UiEvent::AnimationFrame { now: self.clock });
    }

    /// Whether a frame callback is currently requested.
    #[must_use]
    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Number of delayed messages waiting on the clock.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// The dispatcher's current clock reading.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock
    }

    /// Borrow the controller (assertions on machine state).
    #[must_use]
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Borrow the host surface (assertions on applied ops).
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the host surface.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn deliver(&mut self, msg: C::Message) {
        let cmd = self.controller.update(msg);
        self.execute(cmd);
    }

    fn execute(&mut self, cmd: Cmd<C::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute(c);
                }
            }
            Cmd::Msg(m) => self.deliver(m),
            Cmd::Host(op) => self.host.apply(op),
            Cmd::Delay { after, msg } => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.timers.push(PendingTimer {
                    due: self.clock + after,
                    seq,
                    msg,
                });
            }
            Cmd::Frame => self.frame_requested = true,
        }
    }
}
