use super::*;

// =============================================================
// Theme::from_stored
// =============================================================

#[test]
fn from_stored_dark_is_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn from_stored_absent_is_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn from_stored_light_is_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn from_stored_unrecognized_values_are_light() {
    for raw in ["", "Dark", "DARK", " dark", "dark ", "true", "1", "night"] {
        assert_eq!(Theme::from_stored(Some(raw)), Theme::Light, "raw = {raw:?}");
    }
}

// =============================================================
// Theme helpers
// =============================================================

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_and_is_an_involution() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn as_str_round_trips_through_from_stored() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn is_dark_only_for_dark() {
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

#[test]
fn storage_key_is_theme() {
    assert_eq!(STORAGE_KEY, "theme");
}
