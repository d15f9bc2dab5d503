use super::*;

#[test]
fn glyph_shows_sun_when_dark() {
    assert_eq!(toggle_glyph(Theme::Dark), "\u{2600}");
}

#[test]
fn glyph_shows_moon_when_light() {
    assert_eq!(toggle_glyph(Theme::Light), "\u{263E}");
}
