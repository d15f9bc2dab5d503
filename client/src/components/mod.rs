//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome and the content sections. Chrome
//! components read and mutate the page controller provided by `App`; section
//! components only render static content tables.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod external_link;
pub mod footer;
pub mod hero;
pub mod mobile_menu;
pub mod nav_bar;
pub mod other;
pub mod principles;
pub mod projects;
pub mod publications;
pub mod skills;
pub mod theme_toggle;

use leptos::prelude::*;

use crate::state::controller::{BrowserController, ViewState};

/// Page controller provided by `App`.
pub(crate) fn use_controller() -> RwSignal<BrowserController> {
    expect_context::<RwSignal<BrowserController>>()
}

/// Tracked read of the controller's current state.
pub(crate) fn view_state(controller: RwSignal<BrowserController>) -> ViewState {
    controller.with(BrowserController::state)
}
