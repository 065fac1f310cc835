#![forbid(unsafe_code)]

//! Scripted event timelines over the deterministic dispatch clock.

use std::time::Duration;

use sprig_core::{ElementId, KeyCode, KeyEvent, UiEvent, WatcherKind};
use sprig_runtime::{Controller, Dispatcher};
use web_time::Instant;

use crate::host::ScriptedHost;

/// Nominal frame spacing used by [`Timeline::run_frames`], close to a
/// 60 FPS cadence.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Drives one controller through a scripted sequence of host events.
///
/// Wraps a [`Dispatcher`] over a [`ScriptedHost`] and adds sugar for
/// the event shapes the storefront sees. The clock only moves when the
/// script says so, which keeps timelines fully deterministic.
pub struct Timeline<C: Controller> {
    dispatcher: Dispatcher<C, ScriptedHost>,
}

impl<C: Controller> Timeline<C> {
    /// A timeline over `controller` with an empty page.
    #[must_use]
    pub fn new(controller: C) -> Self {
        Self {
            dispatcher: Dispatcher::with_clock(controller, ScriptedHost::new(), Instant::now()),
        }
    }

    /// Run the controller's init commands.
    pub fn init(&mut self) {
        self.dispatcher.init();
    }

    /// Deliver a raw event.
    pub fn dispatch(&mut self, event: UiEvent) {
        self.dispatcher.dispatch(event);
    }

    /// Click on `target`.
    pub fn click(&mut self, target: ElementId) {
        self.dispatch(UiEvent::Click { target });
    }

    /// Press a bare Escape.
    pub fn escape(&mut self) {
        self.dispatch(UiEvent::KeyDown(KeyEvent::plain(KeyCode::Escape)));
    }

    /// Press an arbitrary key.
    pub fn key(&mut self, event: KeyEvent) {
        self.dispatch(UiEvent::KeyDown(event));
    }

    /// Report a new document scroll offset.
    pub fn scroll(&mut self, y: f64) {
        self.dispatch(UiEvent::Scroll { y });
    }

    /// Notify that `el` entered visibility at its watcher's threshold.
    pub fn enter_viewport(&mut self, watcher: WatcherKind, el: ElementId) {
        let ratio = watcher.config().threshold;
        self.dispatch(UiEvent::Intersection {
            watcher,
            el,
            entering: true,
            ratio,
        });
    }

    /// Notify that `el` left visibility.
    pub fn exit_viewport(&mut self, watcher: WatcherKind, el: ElementId) {
        self.dispatch(UiEvent::Intersection {
            watcher,
            el,
            entering: false,
            ratio: 0.0,
        });
    }

    /// Land a history navigation on `path`.
    pub fn pop_history(&mut self, path: impl Into<String>) {
        self.dispatch(UiEvent::HistoryPop { path: path.into() });
    }

    /// Move the clock forward without delivering frames. Due timers
    /// fire along the way.
    pub fn advance_ms(&mut self, ms: u64) {
        self.dispatcher.advance(Duration::from_millis(ms));
    }

    /// Deliver up to `count` animation frames at the nominal cadence.
    ///
    /// Stops early once the controller no longer requests a frame.
    /// Returns the number of frames delivered.
    pub fn run_frames(&mut self, count: usize) -> usize {
        let mut delivered = 0;
        while delivered < count && self.dispatcher.frame_requested() {
            self.dispatcher.tick_frame();
            delivered += 1;
            self.dispatcher.advance(FRAME_INTERVAL);
        }
        delivered
    }

    /// The materialized page.
    #[must_use]
    pub fn host(&self) -> &ScriptedHost {
        self.dispatcher.host()
    }

    /// Mutable access to the page, e.g. to clear the op log between
    /// phases.
    pub fn host_mut(&mut self) -> &mut ScriptedHost {
        self.dispatcher.host_mut()
    }

    /// The controller under test.
    #[must_use]
    pub fn controller(&self) -> &C {
        self.dispatcher.controller()
    }

    /// The wrapped dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher<C, ScriptedHost> {
        &self.dispatcher
    }
}
