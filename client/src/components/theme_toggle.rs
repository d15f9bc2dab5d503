//! Light/dark toggle button.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use super::{use_controller, view_state};
use crate::state::theme::Theme;

/// Sun while dark (click to go light), moon while light.
pub fn toggle_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "\u{2600}",
        Theme::Light => "\u{263E}",
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let controller = use_controller();

    view! {
        <button
            class="icon-btn theme-toggle"
            aria-label="Toggle dark mode"
            title="Toggle dark mode"
            on:click=move |_| controller.update(|c| c.toggle_theme())
        >
            {move || toggle_glyph(view_state(controller).theme)}
        </button>
    }
}
