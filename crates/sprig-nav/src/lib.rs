#![forbid(unsafe_code)]

//! Header navigation controller for Sprig.
//!
//! Owns two pieces of view state the storefront header needs:
//!
//! - the mobile menu's open/closed flag, driven by the hamburger
//!   trigger, the close control, scrim clicks, menu links and Escape;
//! - the active highlight on nav links, recomputed wholesale whenever
//!   the location path changes.
//!
//! The controller never touches a real document. It consumes
//! [`sprig_core::UiEvent`]s and emits [`sprig_core::HostOp`]s; the
//! embedding host applies those to whatever surface it renders.

pub mod controller;
pub mod links;
pub mod menu;

pub use controller::{MENU_CLOSE_DELAY, NavHooks, NavMsg, NavigationController};
pub use links::{LinkKind, NavLink, is_active};
pub use menu::MenuState;
