#![forbid(unsafe_code)]

//! Test harness for Sprig controllers.
//!
//! [`ScriptedHost`] materializes host operations into a queryable model
//! of the page, and [`Timeline`] drives a controller through scripted
//! event sequences over the deterministic dispatch clock. Together they
//! let integration tests assert on visible page state (class sets, text
//! content, document direction) instead of raw op sequences.

pub mod host;
pub mod timeline;

pub use host::ScriptedHost;
pub use timeline::{FRAME_INTERVAL, Timeline};
