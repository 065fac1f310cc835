//! Initial language detection from external locale hints.
//!
//! # Invariants
//!
//! 1. **Store wins**: a store configuration carrying a locale decides
//!    the language by itself; the browser hint is not consulted.
//!
//! 2. **Silent fallback**: missing or unsupported hints resolve to
//!    English, never to an error.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | No store config | Global object absent | Falls through to browser hint |
//! | Config without locale | Field missing or null | Falls through to browser hint |
//! | No browser hint | Host exposes no language | Defaults to English |
//! | Malformed config payload | Invalid JSON | `ConfigError::Parse` |

use serde::Deserialize;

use crate::language::Language;

/// Errors from store configuration parsing.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// The configuration payload was not valid JSON.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "store config parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Storefront configuration handed in by the host page.
///
/// Only the locale is consumed; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Store locale tag, e.g. `"ar"` or `"en-US"`.
    #[serde(default)]
    pub locale: Option<String>,
}

impl StoreConfig {
    /// Parse a configuration object from its JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the payload is not valid
    /// JSON.
    pub fn from_json(payload: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(payload).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}

/// Resolve the initial language from the available locale hints.
///
/// A store configuration carrying a locale decides by itself; without
/// one, the browser-reported language decides. English is the default
/// when neither hint indicates Arabic.
#[must_use]
pub fn detect(store: Option<&StoreConfig>, browser: Option<&str>) -> Language {
    if let Some(locale) = store.and_then(|config| config.locale.as_deref()) {
        return Language::from_locale_tag(locale);
    }
    browser.map_or(Language::En, Language::from_locale_tag)
}
