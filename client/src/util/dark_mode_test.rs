#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::controller::PageController;
use crate::state::nav::NAV_TARGETS;
use crate::util::scroll::WindowViewport;

#[test]
fn local_storage_is_unavailable_in_non_hydrate_tests() {
    let mut store = LocalStorage;
    assert_eq!(store.load("theme"), Err(StorageError::Unavailable));
    assert_eq!(store.save("theme", "dark"), Err(StorageError::Unavailable));
}

#[test]
fn apply_is_noop_but_callable() {
    let mut surface = DocumentTheme;
    surface.apply(Theme::Dark);
    surface.apply(Theme::Light);
}

#[test]
fn browser_controller_degrades_to_in_memory_theme() {
    let mut controller = PageController::new(LocalStorage, DocumentTheme, WindowViewport, NAV_TARGETS);
    controller.initialize();
    assert_eq!(controller.state().theme, Theme::Light);

    controller.toggle_theme();
    assert_eq!(controller.state().theme, Theme::Dark);

    controller.toggle_menu();
    controller.navigate_to("projects");
    assert!(!controller.state().menu.is_open());
}
