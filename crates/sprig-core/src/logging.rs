#![forbid(unsafe_code)]

//! Logging facade for the kernel.
//!
//! With the `tracing` feature enabled this re-exports the tracing macros so
//! downstream crates log without naming the dependency themselves; with
//! `tracing-json` it additionally offers a ready-made JSON subscriber for
//! production hosts. With neither feature the module is empty and the kernel
//! carries no logging dependency at all.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a JSON-formatted subscriber filtered by `RUST_LOG`.
///
/// Idempotent: if a global subscriber is already installed, this call leaves
/// it in place and returns `false`.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}
