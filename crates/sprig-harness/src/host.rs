#![forbid(unsafe_code)]

//! A host surface that records and materializes operations.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde_json::json;
use sprig_core::{ClassName, Dir, ElementId, HostOp, HostSurface, WatcherKind};

/// In-memory host surface for tests.
///
/// Applies every operation to a queryable model of the page — class
/// sets, text content, document direction and language, per-element
/// translation, watcher membership — and keeps the full operation log
/// in arrival order. Class ops are idempotent and ops never fail, per
/// the host contract.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHost {
    log: Vec<HostOp>,
    classes: HashMap<ElementId, BTreeSet<ClassName>>,
    texts: HashMap<ElementId, String>,
    dir: Dir,
    lang: Option<&'static str>,
    translations: HashMap<ElementId, f64>,
    scrolled: Vec<ElementId>,
    observed: HashSet<(WatcherKind, ElementId)>,
}

impl ScriptedHost {
    /// An empty surface: no classes, LTR, no language tag written yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `el` currently carries `class`.
    #[must_use]
    pub fn has_class(&self, el: ElementId, class: ClassName) -> bool {
        self.classes.get(&el).is_some_and(|set| set.contains(&class))
    }

    /// The classes on `el`, in a stable order.
    #[must_use]
    pub fn classes_of(&self, el: ElementId) -> Vec<ClassName> {
        self.classes
            .get(&el)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// The last text written to `el`, if any.
    #[must_use]
    pub fn text_of(&self, el: ElementId) -> Option<&str> {
        self.texts.get(&el).map(String::as_str)
    }

    /// Current document direction.
    #[must_use]
    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Current document language tag, if one was ever written.
    #[must_use]
    pub fn lang(&self) -> Option<&'static str> {
        self.lang
    }

    /// The last vertical translation applied to `el`, if any.
    #[must_use]
    pub fn translate_y(&self, el: ElementId) -> Option<f64> {
        self.translations.get(&el).copied()
    }

    /// Whether `el` is currently observed by `watcher`.
    #[must_use]
    pub fn is_observed(&self, watcher: WatcherKind, el: ElementId) -> bool {
        self.observed.contains(&(watcher, el))
    }

    /// Every element scrolled into view, in request order.
    #[must_use]
    pub fn scroll_targets(&self) -> &[ElementId] {
        &self.scrolled
    }

    /// The full operation log, in arrival order.
    #[must_use]
    pub fn ops(&self) -> &[HostOp] {
        &self.log
    }

    /// Drop the operation log, keeping the materialized page state.
    ///
    /// Useful between test phases: init, clear, then assert only on the
    /// ops the phase under test produced.
    pub fn clear_ops(&mut self) {
        self.log.clear();
    }

    /// Render the operation log as JSONL, one op per line.
    #[must_use]
    pub fn op_log_jsonl(&self) -> String {
        let mut out = String::new();
        for op in &self.log {
            let line = match op {
                HostOp::AddClass { el, class } => json!({
                    "op": "add_class", "el": el.raw(), "class": class.as_str(),
                }),
                HostOp::RemoveClass { el, class } => json!({
                    "op": "remove_class", "el": el.raw(), "class": class.as_str(),
                }),
                HostOp::SetText { el, text } => json!({
                    "op": "set_text", "el": el.raw(), "text": text,
                }),
                HostOp::SetDocumentDir { dir } => json!({
                    "op": "set_document_dir", "dir": dir.as_str(),
                }),
                HostOp::SetDocumentLang { tag } => json!({
                    "op": "set_document_lang", "tag": tag,
                }),
                HostOp::TranslateY { el, y } => json!({
                    "op": "translate_y", "el": el.raw(), "y": y,
                }),
                HostOp::ScrollIntoView { el } => json!({
                    "op": "scroll_into_view", "el": el.raw(),
                }),
                HostOp::Observe { watcher, el } => json!({
                    "op": "observe", "watcher": watcher_name(*watcher), "el": el.raw(),
                }),
                HostOp::Unobserve { watcher, el } => json!({
                    "op": "unobserve", "watcher": watcher_name(*watcher), "el": el.raw(),
                }),
            };
            out.push_str(&line.to_string());
            out.push('\n');
        }
        out
    }
}

fn watcher_name(watcher: WatcherKind) -> &'static str {
    match watcher {
        WatcherKind::Reveal => "reveal",
        WatcherKind::Counter => "counter",
    }
}

impl HostSurface for ScriptedHost {
    fn apply(&mut self, op: HostOp) {
        match &op {
            HostOp::AddClass { el, class } => {
                self.classes.entry(*el).or_default().insert(*class);
            }
            HostOp::RemoveClass { el, class } => {
                if let Some(set) = self.classes.get_mut(el) {
                    set.remove(class);
                }
            }
            HostOp::SetText { el, text } => {
                self.texts.insert(*el, text.clone());
            }
            HostOp::SetDocumentDir { dir } => self.dir = *dir,
            HostOp::SetDocumentLang { tag } => self.lang = Some(tag),
            HostOp::TranslateY { el, y } => {
                self.translations.insert(*el, *y);
            }
            HostOp::ScrollIntoView { el } => self.scrolled.push(*el),
            HostOp::Observe { watcher, el } => {
                self.observed.insert((*watcher, *el));
            }
            HostOp::Unobserve { watcher, el } => {
                self.observed.remove(&(*watcher, *el));
            }
        }
        self.log.push(op);
    }
}
