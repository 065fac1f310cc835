//! The navigation controller: event handling for the header.
//!
//! # Invariants
//!
//! 1. The menu is open iff the last applied transition was an open with
//!    no close after it. Close requests from every source funnel
//!    through one close action.
//! 2. The close action always emits the full class teardown, so
//!    applying it twice leaves the host exactly where one application
//!    did.
//! 3. Escape is inert while the menu is closed: no state change, no
//!    ops.
//! 4. Active highlights are a pure function of the current path and the
//!    registered links; every path change recomputes all of them.
//!
//! # Failure Modes
//!
//! | Condition            | Behavior                                   |
//! |----------------------|--------------------------------------------|
//! | No panel hook        | Toggle and close are total no-ops          |
//! | No content hook      | Slide class ops are skipped                |
//! | No registered links  | Path changes emit nothing                  |
//! | Unknown click target | Ignored                                    |

use std::time::Duration;

use tracing::debug;

use sprig_core::{ClassName, ElementId, HostOp, KeyEvent, UiEvent};
use sprig_runtime::{Cmd, Controller};

use crate::links::{LinkKind, NavLink, is_active};
use crate::menu::MenuState;

/// Pause between a mobile link click and the scheduled menu close, long
/// enough for the link's press feedback to land before the panel goes.
pub const MENU_CLOSE_DELAY: Duration = Duration::from_millis(100);

/// Which navigation hooks the rendered header actually has.
///
/// Every field except `body` is optional; the controller degrades to
/// whatever subset the markup provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavHooks {
    /// Hamburger button that toggles the menu.
    pub trigger: Option<ElementId>,
    /// Full-screen panel element; doubles as the click scrim.
    pub panel: Option<ElementId>,
    /// Sliding content box inside the panel.
    pub content: Option<ElementId>,
    /// Dedicated close control inside the panel.
    pub close: Option<ElementId>,
    /// Document body, for the scroll lock class.
    pub body: ElementId,
    /// Nav links in both bars, in markup order.
    pub links: Vec<NavLink>,
}

impl NavHooks {
    /// Hooks with only the body wired up.
    #[must_use]
    pub fn new(body: ElementId) -> Self {
        Self { trigger: None, panel: None, content: None, close: None, body, links: Vec::new() }
    }

    #[must_use]
    pub fn with_trigger(mut self, el: ElementId) -> Self {
        self.trigger = Some(el);
        self
    }

    #[must_use]
    pub fn with_panel(mut self, el: ElementId) -> Self {
        self.panel = Some(el);
        self
    }

    #[must_use]
    pub fn with_content(mut self, el: ElementId) -> Self {
        self.content = Some(el);
        self
    }

    #[must_use]
    pub fn with_close(mut self, el: ElementId) -> Self {
        self.close = Some(el);
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: NavLink) -> Self {
        self.links.push(link);
        self
    }
}

/// Messages the navigation controller understands.
#[derive(Debug, Clone, PartialEq)]
pub enum NavMsg {
    /// A registered element was clicked.
    Pressed(ElementId),
    /// A key went down anywhere in the document.
    Key(KeyEvent),
    /// The location path changed, at load or on a history pop.
    PathChanged(String),
    /// A deferred menu close came due.
    CloseDue,
    /// Host signal this controller does not react to.
    Noop,
}

impl From<UiEvent> for NavMsg {
    fn from(event: UiEvent) -> Self {
        match event {
            UiEvent::Click { target } => Self::Pressed(target),
            UiEvent::KeyDown(key) => Self::Key(key),
            UiEvent::HistoryPop { path } => Self::PathChanged(path),
            _ => Self::Noop,
        }
    }
}

/// Owns the [`MenuState`] and the active-link highlight for one header.
#[derive(Debug)]
pub struct NavigationController {
    hooks: NavHooks,
    menu: MenuState,
    path: String,
}

impl NavigationController {
    /// Controller for `hooks`, starting at `path` with the menu closed.
    #[must_use]
    pub fn new(hooks: NavHooks, path: impl Into<String>) -> Self {
        Self { hooks, menu: MenuState::new(), path: path.into() }
    }

    /// Current menu state.
    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Path the active highlight was last computed from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    fn on_pressed(&mut self, el: ElementId) -> Cmd<NavMsg> {
        if self.hooks.trigger == Some(el) {
            return self.toggle_menu();
        }
        if self.hooks.close == Some(el) {
            return self.close_menu();
        }
        if self.hooks.panel == Some(el) {
            // The host reports the innermost registered element, so a
            // click that lands on the panel itself missed the content
            // box. That is the scrim.
            return self.close_menu();
        }
        let mobile_link = self
            .hooks
            .links
            .iter()
            .any(|link| link.el == el && link.kind == LinkKind::Mobile);
        if mobile_link {
            return Cmd::delay(MENU_CLOSE_DELAY, NavMsg::CloseDue);
        }
        Cmd::none()
    }

    fn toggle_menu(&mut self) -> Cmd<NavMsg> {
        let Some(panel) = self.hooks.panel else {
            return Cmd::none();
        };
        if self.menu.toggle() {
            debug!(path = %self.path, "menu opened");
            let mut ops = vec![
                HostOp::RemoveClass { el: panel, class: ClassName::Hidden },
                HostOp::AddClass { el: self.hooks.body, class: ClassName::ScrollLock },
            ];
            if let Some(content) = self.hooks.content {
                ops.push(HostOp::AddClass { el: content, class: ClassName::SlideInRight });
            }
            Cmd::ops(ops)
        } else {
            debug!("menu closed");
            self.close_ops(panel)
        }
    }

    fn close_menu(&mut self) -> Cmd<NavMsg> {
        let Some(panel) = self.hooks.panel else {
            return Cmd::none();
        };
        if self.menu.is_open() {
            debug!("menu closed");
        }
        self.menu.close();
        self.close_ops(panel)
    }

    // Emitted unconditionally so a close is idempotent on the host even
    // when the menu was already closed.
    fn close_ops(&self, panel: ElementId) -> Cmd<NavMsg> {
        let mut ops = vec![
            HostOp::AddClass { el: panel, class: ClassName::Hidden },
            HostOp::RemoveClass { el: self.hooks.body, class: ClassName::ScrollLock },
        ];
        if let Some(content) = self.hooks.content {
            ops.push(HostOp::RemoveClass { el: content, class: ClassName::SlideInRight });
        }
        Cmd::ops(ops)
    }

    fn refresh_active_links(&self) -> Cmd<NavMsg> {
        let ops = self.hooks.links.iter().map(|link| {
            if is_active(&self.path, &link.href) {
                HostOp::AddClass { el: link.el, class: ClassName::Active }
            } else {
                HostOp::RemoveClass { el: link.el, class: ClassName::Active }
            }
        });
        Cmd::ops(ops)
    }
}

impl Controller for NavigationController {
    type Message = NavMsg;
    const NAME: &'static str = "navigation";

    fn init(&mut self) -> Cmd<NavMsg> {
        self.refresh_active_links()
    }

    fn update(&mut self, msg: NavMsg) -> Cmd<NavMsg> {
        match msg {
            NavMsg::Pressed(el) => self.on_pressed(el),
            NavMsg::Key(key) if key.is_escape() && self.menu.is_open() => self.close_menu(),
            NavMsg::Key(_) => Cmd::none(),
            NavMsg::PathChanged(path) => {
                self.path = path;
                self.refresh_active_links()
            }
            NavMsg::CloseDue => self.close_menu(),
            NavMsg::Noop => Cmd::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: ElementId = ElementId::new(0);
    const TRIGGER: ElementId = ElementId::new(1);
    const PANEL: ElementId = ElementId::new(2);
    const CONTENT: ElementId = ElementId::new(3);

    fn full_hooks() -> NavHooks {
        NavHooks::new(BODY)
            .with_trigger(TRIGGER)
            .with_panel(PANEL)
            .with_content(CONTENT)
    }

    #[test]
    fn trigger_press_flips_menu_state() {
        let mut nav = NavigationController::new(full_hooks(), "/");
        nav.update(NavMsg::Pressed(TRIGGER));
        assert!(nav.menu().is_open());
        nav.update(NavMsg::Pressed(TRIGGER));
        assert!(!nav.menu().is_open());
    }

    #[test]
    fn toggle_without_panel_keeps_menu_closed() {
        let hooks = NavHooks::new(BODY).with_trigger(TRIGGER);
        let mut nav = NavigationController::new(hooks, "/");
        let cmd = nav.update(NavMsg::Pressed(TRIGGER));
        assert!(cmd.is_none());
        assert!(!nav.menu().is_open());
    }

    #[test]
    fn escape_while_closed_is_inert() {
        let mut nav = NavigationController::new(full_hooks(), "/");
        let cmd = nav.update(NavMsg::Key(KeyEvent::plain(sprig_core::KeyCode::Escape)));
        assert!(cmd.is_none());
        assert!(!nav.menu().is_open());
    }

    #[test]
    fn unknown_click_target_is_ignored() {
        let mut nav = NavigationController::new(full_hooks(), "/");
        let cmd = nav.update(NavMsg::Pressed(ElementId::new(99)));
        assert!(cmd.is_none());
    }

    #[test]
    fn desktop_link_press_schedules_nothing() {
        let hooks = full_hooks().with_link(NavLink::desktop(ElementId::new(10), "/about"));
        let mut nav = NavigationController::new(hooks, "/");
        let cmd = nav.update(NavMsg::Pressed(ElementId::new(10)));
        assert!(cmd.is_none());
    }
}
