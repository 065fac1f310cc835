#![forbid(unsafe_code)]

//! Normalized input events delivered by the host's subscription layer.
//!
//! # Design
//!
//! The host owns the real subscriptions — pointer listeners, key listeners,
//! scroll and history hooks, intersection observers, animation-frame
//! callbacks. It normalizes everything it hears into [`UiEvent`] values and
//! feeds them to the dispatcher, which converts them into controller
//! messages via `From<UiEvent>`.
//!
//! Two conventions the host must uphold:
//!
//! 1. **Click targets are the innermost registered element.** A click inside
//!    the menu content arrives with the content (or deeper) id, never the
//!    panel id — which is exactly how the scrim-click close path tells the
//!    backdrop from its content.
//! 2. **Anchor clicks are pre-intercepted.** When a click maps to a
//!    registered in-page anchor, the host suppresses its default navigation
//!    before dispatching; the kernel decides whether a smooth scroll
//!    follows.

use bitflags::bitflags;
use web_time::Instant;

use crate::dom::ElementId;
use crate::observer::WatcherKind;

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const ALT   = 1 << 1;
        const CTRL  = 1 << 2;
        const META  = 1 << 3;
    }
}

/// Key identity for the few keys the kernel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Tab,
    /// Any printable character.
    Char(char),
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with no modifiers held.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }

    /// A key press with explicit modifiers.
    #[must_use]
    pub const fn with_modifiers(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// True for a bare Escape press, the menu-dismiss gesture.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.code == KeyCode::Escape && self.modifiers.is_empty()
    }
}

// ---------------------------------------------------------------------------
// UiEvent
// ---------------------------------------------------------------------------

/// A normalized host signal.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer activation on a registered element.
    Click { target: ElementId },
    /// Key pressed anywhere in the document.
    KeyDown(KeyEvent),
    /// Vertical scroll position changed; `y` is the document scroll offset
    /// in pixels.
    Scroll { y: f64 },
    /// A watched element crossed its watcher's visibility threshold.
    Intersection {
        watcher: WatcherKind,
        el: ElementId,
        /// True when the element entered visibility, false when it left.
        entering: bool,
        /// Visible fraction reported by the host at notification time.
        ratio: f64,
    },
    /// Browser history navigation landed on `path`.
    HistoryPop { path: String },
    /// An animation frame fired at `now`.
    AnimationFrame { now: Instant },
}
