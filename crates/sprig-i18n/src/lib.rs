#![forbid(unsafe_code)]

//! Bilingual foundation for Sprig.
//!
//! Owns the `{en, ar}` language machine, initial locale detection from
//! store configuration or browser hints, parallel per-language text,
//! and locale-aware numeral formatting for animated counters.

pub mod language;
pub mod locale;
pub mod numeral;
pub mod text;

pub use language::Language;
pub use locale::{ConfigError, StoreConfig, detect};
pub use numeral::format_count;
pub use text::BilingualText;
