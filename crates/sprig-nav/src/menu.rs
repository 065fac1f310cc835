//! Open/closed state of the mobile menu panel.
//!
//! Transition table:
//!
//! | State  | Input    | Next   |
//! |--------|----------|--------|
//! | Closed | `toggle` | Open   |
//! | Open   | `toggle` | Closed |
//! | any    | `close`  | Closed |
//!
//! There is no standalone `open` input: the storefront only ever opens
//! the menu through the trigger's toggle. `close` from the closed state
//! is a no-op, which is what makes the close path safe to drive from
//! several sources (close control, scrim, Escape, link clicks) without
//! coordination.

/// Menu visibility flag. Fresh pages start closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// A closed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Whether the panel is currently open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the state and return the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force closed, regardless of prior state.
    pub fn close(&mut self) {
        self.open = false;
    }
}
