#![forbid(unsafe_code)]

//! Element handles, the class contract, and host operations.
//!
//! # Invariants
//!
//! 1. **Ops are infallible**: `HostSurface::apply` never reports failure.
//!    An op addressed to an element the host no longer knows is a no-op,
//!    never an error (the menu closing must not break because a banner was
//!    removed mid-transition).
//! 2. **Class ops are idempotent**: adding a class an element already has,
//!    or removing one it lacks, leaves the surface unchanged.
//! 3. **The class vocabulary is closed**: controllers only speak the class
//!    names in [`ClassName`]; the theme's stylesheets key off exactly these
//!    strings.

use std::fmt;

use crate::observer::WatcherKind;

// ---------------------------------------------------------------------------
// ElementId
// ---------------------------------------------------------------------------

/// Opaque handle for a rendered element.
///
/// The host assigns ids while building the capability descriptors and keeps
/// the id-to-node mapping on its side. The kernel only ever compares and
/// forwards them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    /// Create a handle from a host-assigned index.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The host-assigned index.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ClassName
// ---------------------------------------------------------------------------

/// The theme's class contract.
///
/// Every visual state transition the kernel drives is expressed as membership
/// in one of these classes; the CSS side owns what each one looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassName {
    /// Collapses the mobile menu panel.
    Hidden,
    /// Body scroll lock while the menu is open.
    ScrollLock,
    /// Entrance transition for the menu content on open.
    SlideInRight,
    /// Highlight for the nav link matching the current path.
    Active,
    /// Marks an element as a pending scroll-reveal candidate.
    RevealCandidate,
    /// Marks an element as revealed; never removed once added.
    Revealed,
}

impl ClassName {
    /// All class names, for exhaustiveness checks in tests.
    pub const ALL: &[Self] = &[
        Self::Hidden,
        Self::ScrollLock,
        Self::SlideInRight,
        Self::Active,
        Self::RevealCandidate,
        Self::Revealed,
    ];

    /// The literal class string the stylesheets key off.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::ScrollLock => "overflow-hidden",
            Self::SlideInRight => "animate-slide-in-right",
            Self::Active => "active",
            Self::RevealCandidate => "animate-on-scroll",
            Self::Revealed => "animate-in",
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// Document text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Left-to-right (the document default).
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Dir {
    /// The attribute value the host writes to the document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HostOp
// ---------------------------------------------------------------------------

/// One operation the kernel asks the rendering host to perform.
///
/// Ops are values: they can be recorded, compared, and replayed, which is how
/// the controllers stay testable without a document. Order matters — the
/// dispatcher applies ops in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostOp {
    /// Add `class` to `el`'s class list (idempotent).
    AddClass { el: ElementId, class: ClassName },
    /// Remove `class` from `el`'s class list (idempotent).
    RemoveClass { el: ElementId, class: ClassName },
    /// Replace `el`'s text content.
    SetText { el: ElementId, text: String },
    /// Set the document's text direction attribute.
    SetDocumentDir { dir: Dir },
    /// Set the document's language-tag attribute.
    SetDocumentLang { tag: &'static str },
    /// Apply a vertical translation to `el`, in pixels.
    TranslateY { el: ElementId, y: f64 },
    /// Smoothly scroll `el` to the top of the viewport.
    ScrollIntoView { el: ElementId },
    /// Start watching `el` with the given viewport-intersection watcher.
    Observe { watcher: WatcherKind, el: ElementId },
    /// Stop watching `el` with the given watcher.
    Unobserve { watcher: WatcherKind, el: ElementId },
}

// ---------------------------------------------------------------------------
// HostSurface
// ---------------------------------------------------------------------------

/// The rendering collaborator.
///
/// Implemented once per host environment (a wasm/DOM shim in production, a
/// scripted recorder in tests). `apply` is infallible: ops for elements the
/// host no longer tracks are dropped silently, per the kernel's
/// missing-element policy.
pub trait HostSurface {
    /// Perform a single operation against the rendered surface.
    fn apply(&mut self, op: HostOp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_roundtrip() {
        let el = ElementId::new(7);
        assert_eq!(el.raw(), 7);
        assert_eq!(el.to_string(), "el#7");
    }

    #[test]
    fn class_strings_match_theme_contract() {
        assert_eq!(ClassName::Hidden.as_str(), "hidden");
        assert_eq!(ClassName::ScrollLock.as_str(), "overflow-hidden");
        assert_eq!(ClassName::SlideInRight.as_str(), "animate-slide-in-right");
        assert_eq!(ClassName::Active.as_str(), "active");
        assert_eq!(ClassName::RevealCandidate.as_str(), "animate-on-scroll");
        assert_eq!(ClassName::Revealed.as_str(), "animate-in");
    }

    #[test]
    fn class_strings_are_unique() {
        for (i, a) in ClassName::ALL.iter().enumerate() {
            for b in &ClassName::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str(), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn dir_default_is_ltr() {
        assert_eq!(Dir::default(), Dir::Ltr);
        assert_eq!(Dir::Ltr.as_str(), "ltr");
        assert_eq!(Dir::Rtl.as_str(), "rtl");
    }

    #[test]
    fn ops_are_comparable_values() {
        let a = HostOp::AddClass {
            el: ElementId::new(1),
            class: ClassName::Active,
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
