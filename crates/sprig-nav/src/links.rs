//! Nav link registration and the active-highlight rule.

use sprig_core::ElementId;

/// Where a nav link lives in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Link in the always-visible desktop bar.
    Desktop,
    /// Link inside the mobile menu panel. Clicking one also schedules a
    /// menu close, so the panel gets out of the way of the navigation.
    Mobile,
}

/// One registered nav link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Anchor element carrying the highlight class.
    pub el: ElementId,
    /// Path the link points at, as written in its markup.
    pub href: String,
    pub kind: LinkKind,
}

impl NavLink {
    /// A desktop bar link.
    #[must_use]
    pub fn desktop(el: ElementId, href: impl Into<String>) -> Self {
        Self { el, href: href.into(), kind: LinkKind::Desktop }
    }

    /// A mobile panel link.
    #[must_use]
    pub fn mobile(el: ElementId, href: impl Into<String>) -> Self {
        Self { el, href: href.into(), kind: LinkKind::Mobile }
    }
}

/// Active-highlight rule: a link is active when its href equals the
/// current path, or the current path contains the href as a substring.
///
/// The substring arm keeps section links lit on subpages (`/products`
/// stays active on `/products/42`) and also means short hrefs light up
/// on longer paths (`/a` is active on `/about`, and `/` on everything).
/// Links with an empty href are never active.
#[must_use]
pub fn is_active(path: &str, href: &str) -> bool {
    !href.is_empty() && (path == href || path.contains(href))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_active() {
        assert!(is_active("/about", "/about"));
    }

    #[test]
    fn section_prefix_stays_active_on_subpages() {
        assert!(is_active("/products/42", "/products"));
    }

    #[test]
    fn substring_match_is_active() {
        assert!(is_active("/about", "/a"));
        assert!(is_active("/about", "/"));
    }

    #[test]
    fn unrelated_path_is_inactive() {
        assert!(!is_active("/about", "/contact"));
        assert!(!is_active("/about", "/about/team"));
    }

    #[test]
    fn empty_href_is_never_active() {
        assert!(!is_active("/about", ""));
        assert!(!is_active("", ""));
    }
}
