//! Capability descriptor for the homepage.
//!
//! The host walks the rendered markup once, resolves every optional
//! element it finds into a hook, and hands the result to the
//! controller. Anything missing from the page is simply absent here,
//! and the controller skips the behavior that would have needed it.

use sprig_core::ElementId;
use sprig_i18n::{BilingualText, Language};

/// A counter element with its parsed target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterHook {
    /// Element whose text displays the running value.
    pub el: ElementId,
    /// Value the ramp converges to.
    pub target: u64,
}

impl CounterHook {
    /// Parse a hook from the raw target attribute string.
    ///
    /// Returns `None` for anything that is not a plain non-negative
    /// integer; a malformed attribute means no animation, never an
    /// error.
    #[must_use]
    pub fn parse(el: ElementId, raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(|target| Self { el, target })
    }
}

/// An in-page anchor link and its resolved scroll target.
///
/// The host resolves the fragment to an element while building the
/// descriptor; a dangling fragment leaves `target` empty and the click
/// is swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorHook {
    pub el: ElementId,
    pub target: Option<ElementId>,
}

/// A content block shown for exactly one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageBlock {
    pub el: ElementId,
    pub language: Language,
}

/// An element whose text is swapped per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextHook {
    pub el: ElementId,
    pub text: BilingualText,
}

/// Which homepage hooks the rendered page actually has.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeHooks {
    /// Control that flips the page language.
    pub language_toggle: Option<ElementId>,
    /// Hero content layer the parallax translation applies to.
    pub hero_content: Option<ElementId>,
    /// Section-level reveal targets, in markup order.
    pub sections: Vec<ElementId>,
    /// Item-level reveal targets (cards, list entries), in markup order.
    pub items: Vec<ElementId>,
    /// Counter elements with valid targets.
    pub counters: Vec<CounterHook>,
    /// Per-language content blocks.
    pub language_blocks: Vec<LanguageBlock>,
    /// Bilingual text swaps.
    pub texts: Vec<TextHook>,
    /// Smooth-scroll anchors.
    pub anchors: Vec<AnchorHook>,
}

impl HomeHooks {
    /// An empty descriptor; every behavior starts disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language_toggle(mut self, el: ElementId) -> Self {
        self.language_toggle = Some(el);
        self
    }

    #[must_use]
    pub fn with_hero_content(mut self, el: ElementId) -> Self {
        self.hero_content = Some(el);
        self
    }

    #[must_use]
    pub fn with_section(mut self, el: ElementId) -> Self {
        self.sections.push(el);
        self
    }

    #[must_use]
    pub fn with_item(mut self, el: ElementId) -> Self {
        self.items.push(el);
        self
    }

    #[must_use]
    pub fn with_counter(mut self, hook: CounterHook) -> Self {
        self.counters.push(hook);
        self
    }

    #[must_use]
    pub fn with_language_block(mut self, el: ElementId, language: Language) -> Self {
        self.language_blocks.push(LanguageBlock { el, language });
        self
    }

    #[must_use]
    pub fn with_text(mut self, el: ElementId, text: BilingualText) -> Self {
        self.texts.push(TextHook { el, text });
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, el: ElementId, target: Option<ElementId>) -> Self {
        self.anchors.push(AnchorHook { el, target });
        self
    }

    /// Reveal targets in emission order: sections first, then items.
    pub fn reveal_targets(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.sections.iter().chain(self.items.iter()).copied()
    }
}
