//! Parallel per-language text.

use serde::Deserialize;

use crate::language::Language;

/// A pair of parallel strings, one per supported language.
///
/// Mirrors markup slots that carry both an English and an Arabic value
/// for the same position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BilingualText {
    /// English value.
    pub en: String,
    /// Arabic value.
    pub ar: String,
}

impl BilingualText {
    /// Build a pair from both values.
    #[must_use]
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// The value for `language`.
    #[must_use]
    pub fn for_language(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}
