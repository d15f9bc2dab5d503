#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn scrolls_report_no_window_outside_the_browser() {
    let mut viewport = WindowViewport;
    assert_eq!(viewport.scroll_to_origin(), Err(ScrollError::NoWindow));
    assert_eq!(viewport.scroll_to_region("about"), Err(ScrollError::NoWindow));
}

#[test]
fn scroll_error_messages() {
    assert_eq!(ScrollError::NoWindow.to_string(), "no browser window");
    assert_eq!(
        ScrollError::MissingRegion("skills".to_owned()).to_string(),
        "no region with id `skills`"
    );
}
