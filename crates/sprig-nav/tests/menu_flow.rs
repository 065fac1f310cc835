#![forbid(unsafe_code)]

//! End-to-end menu and active-link behavior through the scripted host.

use sprig_core::{ClassName, ElementId, HostOp, HostSurface};
use sprig_harness::Timeline;
use sprig_nav::{NavHooks, NavLink, NavigationController};

const BODY: ElementId = ElementId::new(0);
const TRIGGER: ElementId = ElementId::new(1);
const PANEL: ElementId = ElementId::new(2);
const CONTENT: ElementId = ElementId::new(3);
const CLOSE: ElementId = ElementId::new(4);
const LINK_HOME: ElementId = ElementId::new(10);
const LINK_SHORT: ElementId = ElementId::new(11);
const LINK_ABOUT: ElementId = ElementId::new(12);
const LINK_TEAM: ElementId = ElementId::new(13);
const MOBILE_LINK: ElementId = ElementId::new(20);

/// A header with every hook wired, initialized at `path`. The panel
/// starts hidden, matching the shipped markup.
fn header(path: &str) -> Timeline<NavigationController> {
    let hooks = NavHooks::new(BODY)
        .with_trigger(TRIGGER)
        .with_panel(PANEL)
        .with_content(CONTENT)
        .with_close(CLOSE)
        .with_link(NavLink::desktop(LINK_HOME, "/"))
        .with_link(NavLink::desktop(LINK_SHORT, "/a"))
        .with_link(NavLink::desktop(LINK_ABOUT, "/about"))
        .with_link(NavLink::desktop(LINK_TEAM, "/about/team"))
        .with_link(NavLink::mobile(MOBILE_LINK, "/about"));
    let mut timeline = Timeline::new(NavigationController::new(hooks, path));
    timeline.host_mut().apply(HostOp::AddClass { el: PANEL, class: ClassName::Hidden });
    timeline.host_mut().clear_ops();
    timeline.init();
    timeline
}

#[test]
fn trigger_opens_panel_and_locks_scroll() {
    let mut timeline = header("/");
    timeline.click(TRIGGER);
    assert!(!timeline.host().has_class(PANEL, ClassName::Hidden));
    assert!(timeline.host().has_class(BODY, ClassName::ScrollLock));
    assert!(timeline.host().has_class(CONTENT, ClassName::SlideInRight));
    assert!(timeline.controller().menu().is_open());
}

#[test]
fn second_toggle_restores_the_closed_page() {
    let mut timeline = header("/");
    timeline.click(TRIGGER);
    timeline.click(TRIGGER);
    assert!(timeline.host().has_class(PANEL, ClassName::Hidden));
    assert!(!timeline.host().has_class(BODY, ClassName::ScrollLock));
    assert!(!timeline.host().has_class(CONTENT, ClassName::SlideInRight));
    assert!(!timeline.controller().menu().is_open());
}

#[test]
fn close_control_closes_the_menu() {
    let mut timeline = header("/");
    timeline.click(TRIGGER);
    timeline.click(CLOSE);
    assert!(timeline.host().has_class(PANEL, ClassName::Hidden));
    assert!(!timeline.controller().menu().is_open());
}

#[test]
fn scrim_click_closes_but_content_click_does_not() {
    let mut timeline = header("/");
    timeline.click(TRIGGER);
    timeline.click(CONTENT);
    assert!(timeline.controller().menu().is_open());
    timeline.click(PANEL);
    assert!(!timeline.controller().menu().is_open());
    assert!(timeline.host().has_class(PANEL, ClassName::Hidden));
}

#[test]
fn escape_closes_only_while_open() {
    let mut timeline = header("/");
    timeline.host_mut().clear_ops();
    timeline.escape();
    assert!(timeline.host().ops().is_empty());
    assert!(!timeline.controller().menu().is_open());

    timeline.click(TRIGGER);
    timeline.escape();
    assert!(timeline.host().has_class(PANEL, ClassName::Hidden));
    assert!(!timeline.controller().menu().is_open());
}

#[test]
fn repeated_close_leaves_state_unchanged() {
    let mut timeline = header("/");
    timeline.click(TRIGGER);
    timeline.click(CLOSE);
    let panel_classes = timeline.host().classes_of(PANEL);
    let body_classes = timeline.host().classes_of(BODY);
    timeline.click(CLOSE);
    assert_eq!(timeline.host().classes_of(PANEL), panel_classes);
    assert_eq!(timeline.host().classes_of(BODY), body_classes);
    assert!(!timeline.controller().menu().is_open());
}

#[test]
fn mobile_link_closes_after_the_grace_delay() {
    let mut timeline = header("/");
    timeline.click(TRIGGER);
    timeline.click(MOBILE_LINK);
    assert!(
        !timeline.host().has_class(PANEL, ClassName::Hidden),
        "close is deferred, not immediate"
    );
    timeline.advance_ms(99);
    assert!(!timeline.host().has_class(PANEL, ClassName::Hidden));
    timeline.advance_ms(1);
    assert!(timeline.host().has_class(PANEL, ClassName::Hidden));
    assert!(!timeline.controller().menu().is_open());
}

#[test]
fn desktop_link_schedules_no_close() {
    let mut timeline = header("/about");
    timeline.click(TRIGGER);
    timeline.click(LINK_ABOUT);
    assert_eq!(timeline.dispatcher().pending_timers(), 0);
    timeline.advance_ms(200);
    assert!(timeline.controller().menu().is_open());
}

#[test]
fn initial_path_highlights_matching_links() {
    let timeline = header("/about");
    assert!(timeline.host().has_class(LINK_HOME, ClassName::Active));
    assert!(timeline.host().has_class(LINK_SHORT, ClassName::Active));
    assert!(timeline.host().has_class(LINK_ABOUT, ClassName::Active));
    assert!(!timeline.host().has_class(LINK_TEAM, ClassName::Active));
    assert!(timeline.host().has_class(MOBILE_LINK, ClassName::Active));
}

#[test]
fn history_pop_recomputes_every_link() {
    let mut timeline = header("/about");
    timeline.pop_history("/");
    assert!(timeline.host().has_class(LINK_HOME, ClassName::Active));
    assert!(!timeline.host().has_class(LINK_SHORT, ClassName::Active));
    assert!(!timeline.host().has_class(LINK_ABOUT, ClassName::Active));
    assert!(!timeline.host().has_class(LINK_TEAM, ClassName::Active));
    assert_eq!(timeline.controller().path(), "/");
}

#[test]
fn header_without_panel_ignores_menu_input() {
    let hooks = NavHooks::new(BODY).with_trigger(TRIGGER);
    let mut timeline = Timeline::new(NavigationController::new(hooks, "/"));
    timeline.init();
    timeline.host_mut().clear_ops();
    timeline.click(TRIGGER);
    timeline.escape();
    assert!(timeline.host().ops().is_empty());
    assert!(!timeline.controller().menu().is_open());
}
