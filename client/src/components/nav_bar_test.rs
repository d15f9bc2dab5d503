use super::*;

#[test]
fn menu_glyph_is_close_when_open() {
    assert_eq!(menu_glyph(MenuState::Open), "\u{2715}");
}

#[test]
fn menu_glyph_is_hamburger_when_closed() {
    assert_eq!(menu_glyph(MenuState::Closed), "\u{2630}");
}

#[test]
fn menu_glyph_follows_toggle() {
    let menu = MenuState::default();
    assert_ne!(menu_glyph(menu), menu_glyph(menu.toggled()));
}
