use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_top_is_origin() {
    assert_eq!(resolve(TOP), ScrollTarget::Origin);
}

#[test]
fn resolve_every_configured_id_is_region() {
    for target in NAV_TARGETS {
        assert_eq!(resolve(target.id), ScrollTarget::Region(target.id));
    }
}

#[test]
fn resolve_does_not_require_a_table_entry() {
    assert_eq!(resolve(section::PRINCIPLES), ScrollTarget::Region("principles"));
    assert_eq!(resolve("blog"), ScrollTarget::Region("blog"));
}

#[test]
fn resolve_top_is_case_sensitive() {
    assert_eq!(resolve("Top"), ScrollTarget::Region("Top"));
}

#[test]
fn resolve_blank_is_unknown() {
    assert_eq!(resolve(""), ScrollTarget::Unknown);
}

// =============================================================
// NAV_TARGETS
// =============================================================

#[test]
fn shipped_table_validates() {
    assert_eq!(validate_targets(NAV_TARGETS), Ok(()));
}

#[test]
fn shipped_table_order() {
    let ids: Vec<_> = NAV_TARGETS.iter().map(|t| t.id).collect();
    assert_eq!(
        ids,
        ["about", "education", "experience", "projects", "publications", "skills", "other", "contact"]
    );
}

#[test]
fn principles_section_is_rendered_but_not_listed() {
    assert!(NAV_TARGETS.iter().all(|t| t.id != section::PRINCIPLES));
}

// =============================================================
// validate_targets
// =============================================================

#[test]
fn validate_accepts_empty_table() {
    assert_eq!(validate_targets(&[]), Ok(()));
}

#[test]
fn validate_rejects_reserved_top() {
    let targets = [NavTarget::new("about", "About"), NavTarget::new("top", "Top")];
    assert_eq!(validate_targets(&targets), Err(NavConfigError::ReservedId));
}

#[test]
fn validate_rejects_duplicates() {
    let targets = [
        NavTarget::new("about", "About"),
        NavTarget::new("skills", "Skills"),
        NavTarget::new("about", "About again"),
    ];
    assert_eq!(validate_targets(&targets), Err(NavConfigError::DuplicateId("about")));
}

#[test]
fn validate_rejects_empty_id_and_label() {
    assert_eq!(validate_targets(&[NavTarget::new("", "Blank")]), Err(NavConfigError::EmptyId(0)));
    assert_eq!(
        validate_targets(&[NavTarget::new("about", "  ")]),
        Err(NavConfigError::EmptyLabel("about"))
    );
}

#[test]
fn config_errors_render_messages() {
    assert_eq!(NavConfigError::ReservedId.to_string(), "navigation target uses reserved id `top`");
    assert_eq!(
        NavConfigError::DuplicateId("skills").to_string(),
        "duplicate navigation target id `skills`"
    );
}
