//! Monotonic scroll-reveal bookkeeping.

use std::collections::HashSet;

use sprig_core::ElementId;

/// Tracks which observed elements have entered the viewport at least
/// once.
///
/// Membership is monotonic: once an element is marked revealed it can
/// never revert, no matter how many further intersection callbacks
/// arrive for it.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    revealed: HashSet<ElementId>,
}

impl RevealSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `el` has entered the viewport.
    ///
    /// Returns `true` only on the first call for a given element.
    pub fn mark(&mut self, el: ElementId) -> bool {
        self.revealed.insert(el)
    }

    /// Whether `el` has ever been revealed.
    #[must_use]
    pub fn is_revealed(&self, el: ElementId) -> bool {
        self.revealed.contains(&el)
    }

    /// Number of revealed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    /// Whether nothing has been revealed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
