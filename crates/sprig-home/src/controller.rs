//! The homepage controller: language, reveals, counters, parallax, and
//! smooth scroll.
//!
//! # Invariants
//!
//! 1. Exactly one language's blocks are visible after any update, and
//!    the document direction and language tag always mirror the current
//!    language, from init onward.
//! 2. Reveal marks are monotonic: a revealed element never loses its
//!    mark, however many intersection callbacks follow.
//! 3. Each counter ramps at most once; its final text is the exact
//!    target with the current language's digit grouping.
//! 4. Animation frames are requested only while at least one counter is
//!    running.
//!
//! # Failure Modes
//!
//! | Condition                | Behavior                          |
//! |--------------------------|-----------------------------------|
//! | No language toggle hook  | Language fixed at detection value |
//! | No hero content hook     | Scroll signals emit nothing       |
//! | Dangling anchor fragment | Click swallowed                   |
//! | Empty bilingual value    | Text op skipped for that element  |
//! | Unknown click target     | Ignored                           |

use tracing::debug;
use web_time::Instant;

use sprig_core::{ClassName, ElementId, HostOp, UiEvent, WatcherKind};
use sprig_i18n::{Language, format_count};
use sprig_motion::{RevealSet, parallax_offset};
use sprig_runtime::{Cmd, Controller};

use crate::counters::CounterBank;
use crate::hooks::HomeHooks;

/// Messages the homepage controller understands.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeMsg {
    /// A registered element was clicked.
    Pressed(ElementId),
    /// A watched element entered the viewport.
    Entered { watcher: WatcherKind, el: ElementId },
    /// The document scroll offset changed.
    Scrolled { y: f64 },
    /// An animation frame fired.
    Frame { now: Instant },
    /// Host signal this controller does not react to.
    Noop,
}

impl From<UiEvent> for HomeMsg {
    fn from(event: UiEvent) -> Self {
        match event {
            UiEvent::Click { target } => Self::Pressed(target),
            UiEvent::Scroll { y } => Self::Scrolled { y },
            UiEvent::Intersection { watcher, el, entering: true, .. } => {
                Self::Entered { watcher, el }
            }
            UiEvent::AnimationFrame { now } => Self::Frame { now },
            _ => Self::Noop,
        }
    }
}

/// Owns the homepage's language, reveal, counter, and parallax state.
#[derive(Debug)]
pub struct HomepageController {
    hooks: HomeHooks,
    language: Language,
    revealed: RevealSet,
    counters: CounterBank,
}

impl HomepageController {
    /// Controller for `hooks`, starting in `language`.
    ///
    /// The starting language normally comes from [`sprig_i18n::detect`];
    /// the controller does not care where it came from.
    #[must_use]
    pub fn new(hooks: HomeHooks, language: Language) -> Self {
        let counters = CounterBank::new(&hooks.counters);
        Self {
            hooks,
            language,
            revealed: RevealSet::new(),
            counters,
        }
    }

    /// The current page language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Reveal bookkeeping.
    #[must_use]
    pub fn revealed(&self) -> &RevealSet {
        &self.revealed
    }

    /// Counter ramps.
    #[must_use]
    pub fn counters(&self) -> &CounterBank {
        &self.counters
    }

    // Entry action for the language machine. Hide-all-then-show keeps
    // blocks for both languages from ever being visible together,
    // whatever state the page was in before.
    fn language_ops(&self, ops: &mut Vec<HostOp>) {
        for block in &self.hooks.language_blocks {
            ops.push(HostOp::AddClass { el: block.el, class: ClassName::Hidden });
        }
        for block in &self.hooks.language_blocks {
            if block.language == self.language {
                ops.push(HostOp::RemoveClass { el: block.el, class: ClassName::Hidden });
            }
        }
        for hook in &self.hooks.texts {
            let text = hook.text.for_language(self.language);
            if !text.is_empty() {
                ops.push(HostOp::SetText { el: hook.el, text: text.to_owned() });
            }
        }
        ops.push(HostOp::SetDocumentDir { dir: self.language.dir() });
        ops.push(HostOp::SetDocumentLang { tag: self.language.tag() });
    }

    fn toggle_language(&mut self) -> Cmd<HomeMsg> {
        self.language = self.language.toggled();
        debug!(language = %self.language, "language toggled");
        let mut ops = Vec::new();
        self.language_ops(&mut ops);
        Cmd::ops(ops)
    }

    fn on_pressed(&mut self, el: ElementId) -> Cmd<HomeMsg> {
        if self.hooks.language_toggle == Some(el) {
            return self.toggle_language();
        }
        if let Some(anchor) = self.hooks.anchors.iter().find(|anchor| anchor.el == el) {
            return match anchor.target {
                Some(target) => Cmd::host(HostOp::ScrollIntoView { el: target }),
                None => Cmd::none(),
            };
        }
        Cmd::none()
    }

    fn on_entered(&mut self, watcher: WatcherKind, el: ElementId) -> Cmd<HomeMsg> {
        match watcher {
            WatcherKind::Reveal => {
                if self.revealed.mark(el) {
                    Cmd::host(HostOp::AddClass { el, class: ClassName::Revealed })
                } else {
                    Cmd::none()
                }
            }
            WatcherKind::Counter => {
                if self.counters.trigger(el) {
                    debug!(el = %el, "counter started");
                    Cmd::batch(vec![
                        Cmd::host(HostOp::Unobserve { watcher: WatcherKind::Counter, el }),
                        Cmd::frame(),
                    ])
                } else {
                    Cmd::none()
                }
            }
        }
    }

    fn on_scrolled(&self, y: f64) -> Cmd<HomeMsg> {
        match self.hooks.hero_content {
            Some(el) => Cmd::host(HostOp::TranslateY { el, y: parallax_offset(y) }),
            None => Cmd::none(),
        }
    }

    fn on_frame(&mut self, now: Instant) -> Cmd<HomeMsg> {
        let language = self.language;
        let sampled = self.counters.sample(now);
        if sampled.is_empty() {
            return Cmd::none();
        }
        let mut cmds: Vec<Cmd<HomeMsg>> = sampled
            .into_iter()
            .map(|(el, value)| {
                Cmd::host(HostOp::SetText { el, text: format_count(value, language) })
            })
            .collect();
        if self.counters.any_running() {
            cmds.push(Cmd::frame());
        }
        Cmd::batch(cmds)
    }
}

impl Controller for HomepageController {
    type Message = HomeMsg;
    const NAME: &'static str = "homepage";

    fn init(&mut self) -> Cmd<HomeMsg> {
        let mut ops = Vec::new();
        self.language_ops(&mut ops);
        for el in self.hooks.reveal_targets() {
            ops.push(HostOp::AddClass { el, class: ClassName::RevealCandidate });
            ops.push(HostOp::Observe { watcher: WatcherKind::Reveal, el });
        }
        for hook in &self.hooks.counters {
            ops.push(HostOp::Observe { watcher: WatcherKind::Counter, el: hook.el });
        }
        Cmd::ops(ops)
    }

    fn update(&mut self, msg: HomeMsg) -> Cmd<HomeMsg> {
        match msg {
            HomeMsg::Pressed(el) => self.on_pressed(el),
            HomeMsg::Entered { watcher, el } => self.on_entered(watcher, el),
            HomeMsg::Scrolled { y } => self.on_scrolled(y),
            HomeMsg::Frame { now } => self.on_frame(now),
            HomeMsg::Noop => Cmd::none(),
        }
    }
}
