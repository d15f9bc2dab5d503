//! In-page navigation targets and identifier resolution.
//!
//! DESIGN
//! ======
//! Resolution is pure: an identifier maps to the document origin, a named
//! region, or nothing. Performing the scroll is left to a `Viewport`
//! implementation so this module can be tested without a browser.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::collections::HashSet;

use thiserror::Error;

/// Reserved identifier meaning "scroll to the document origin".
pub const TOP: &str = "top";

/// Section region identifiers, in page order.
pub mod section {
    pub const ABOUT: &str = "about";
    pub const EDUCATION: &str = "education";
    pub const EXPERIENCE: &str = "experience";
    pub const PROJECTS: &str = "projects";
    pub const PUBLICATIONS: &str = "publications";
    pub const SKILLS: &str = "skills";
    pub const PRINCIPLES: &str = "principles";
    pub const OTHER: &str = "other";
    pub const CONTACT: &str = "contact";
}

/// One entry in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavTarget {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavTarget {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Navigation bar entries, in display order.
pub const NAV_TARGETS: &[NavTarget] = &[
    NavTarget::new(section::ABOUT, "About"),
    NavTarget::new(section::EDUCATION, "Education"),
    NavTarget::new(section::EXPERIENCE, "Experience"),
    NavTarget::new(section::PROJECTS, "Projects"),
    NavTarget::new(section::PUBLICATIONS, "Publications"),
    NavTarget::new(section::SKILLS, "Skills"),
    NavTarget::new(section::OTHER, "Other"),
    NavTarget::new(section::CONTACT, "Contact"),
];

/// Where a navigation request should scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget<'a> {
    /// Offset zero of the document.
    Origin,
    /// Top edge of the region with this identifier, if the document has one.
    Region(&'a str),
    /// Blank identifier; no region can carry it.
    Unknown,
}

/// Resolve `id` to a scroll destination.
///
/// `top` is the document origin. Any other non-blank identifier names a
/// region; whether that region exists is decided by the `Viewport`. The
/// navigation table only drives what the bar renders.
pub fn resolve(id: &str) -> ScrollTarget<'_> {
    match id {
        TOP => ScrollTarget::Origin,
        "" => ScrollTarget::Unknown,
        _ => ScrollTarget::Region(id),
    }
}

/// Configuration defects in a navigation table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavConfigError {
    #[error("navigation target uses reserved id `top`")]
    ReservedId,
    #[error("duplicate navigation target id `{0}`")]
    DuplicateId(&'static str),
    #[error("navigation target at index {0} has an empty id")]
    EmptyId(usize),
    #[error("navigation target `{0}` has an empty label")]
    EmptyLabel(&'static str),
}

/// Check a navigation table: non-empty ids and labels, unique ids, and no use
/// of the reserved `top` identifier.
pub fn validate_targets(targets: &[NavTarget]) -> Result<(), NavConfigError> {
    let mut seen = HashSet::with_capacity(targets.len());
    for (index, target) in targets.iter().enumerate() {
        if target.id.is_empty() {
            return Err(NavConfigError::EmptyId(index));
        }
        if target.id == TOP {
            return Err(NavConfigError::ReservedId);
        }
        if target.label.trim().is_empty() {
            return Err(NavConfigError::EmptyLabel(target.id));
        }
        if !seen.insert(target.id) {
            return Err(NavConfigError::DuplicateId(target.id));
        }
    }
    Ok(())
}
