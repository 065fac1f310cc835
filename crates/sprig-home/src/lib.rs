#![forbid(unsafe_code)]

//! Homepage controller for Sprig.
//!
//! Owns the view state the storefront homepage needs: the current page
//! language and everything its entry action touches, scroll-triggered
//! reveal marks, counter ramps, the hero parallax offset, and
//! smooth-scroll anchors. Like the navigation controller it is fully
//! headless: host signals in, [`sprig_core::HostOp`]s out.

pub mod controller;
pub mod counters;
pub mod hooks;

pub use controller::{HomeMsg, HomepageController};
pub use counters::CounterBank;
pub use hooks::{AnchorHook, CounterHook, HomeHooks, LanguageBlock, TextHook};
