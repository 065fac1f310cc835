//! The `{en, ar}` language state machine.
//!
//! # Invariants
//!
//! 1. **Involution**: [`Language::toggled`] applied twice returns the
//!    starting language.
//!
//! 2. **Total mapping**: every language maps to exactly one document
//!    direction and one document tag.
//!
//! 3. **English default**: construction without a hint yields
//!    [`Language::En`].

use std::fmt;

use sprig_core::Dir;

/// Storefront display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English, left-to-right.
    #[default]
    En,
    /// Arabic, right-to-left.
    Ar,
}

impl Language {
    /// The other language. Toggling twice restores the original.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Document direction this language drives.
    #[must_use]
    pub const fn dir(self) -> Dir {
        match self {
            Self::En => Dir::Ltr,
            Self::Ar => Dir::Rtl,
        }
    }

    /// Tag written to the document `lang` attribute.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Classify a raw locale tag by prefix.
    ///
    /// Any tag starting with `ar` (`ar`, `ar-SA`, `ar-EG`) selects
    /// Arabic; everything else selects English. The match is byte-wise
    /// with no case folding, so `AR-SA` classifies as English.
    #[must_use]
    pub fn from_locale_tag(tag: &str) -> Self {
        if tag.starts_with("ar") { Self::Ar } else { Self::En }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
