//! Fixed top navigation bar.
//!
//! Shows the name (scrolls to the top), a link per navigation target, and the
//! theme toggle. On narrow viewports the links collapse behind a menu button
//! that opens [`MobileMenu`].

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use super::mobile_menu::MobileMenu;
use super::theme_toggle::ThemeToggle;
use super::{use_controller, view_state};
use crate::content::profile::PROFILE;
use crate::state::menu::MenuState;
use crate::state::nav::TOP;

/// Close icon while open, hamburger while closed.
pub fn menu_glyph(menu: MenuState) -> &'static str {
    match menu {
        MenuState::Open => "\u{2715}",
        MenuState::Closed => "\u{2630}",
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let controller = use_controller();
    let targets = controller.with_untracked(|c| c.targets());
    let menu = move || view_state(controller).menu;

    let links = targets
        .iter()
        .map(|target| {
            let id = target.id;
            view! {
                <button class="nav-bar__link" on:click=move |_| controller.update(|c| c.navigate_to(id))>
                    {target.label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <button class="nav-bar__logo" on:click=move |_| controller.update(|c| c.navigate_to(TOP))>
                    {PROFILE.name}
                </button>

                <div class="nav-bar__desktop">
                    {links}
                    <ThemeToggle/>
                </div>

                <div class="nav-bar__compact">
                    <ThemeToggle/>
                    <button
                        class="icon-btn nav-bar__menu-btn"
                        aria-label="Toggle menu"
                        aria-controls="mobile-menu"
                        aria-expanded=move || menu().is_open().to_string()
                        on:click=move |_| controller.update(|c| c.toggle_menu())
                    >
                        {move || menu_glyph(menu())}
                    </button>
                </div>
            </div>

            <MobileMenu/>
        </nav>
    }
}
