//! Collapsible navigation panel for narrow viewports.

use leptos::prelude::*;

use super::{use_controller, view_state};

/// Rendered only while the menu is open. Selecting an entry navigates, which
/// also closes the panel.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let controller = use_controller();
    let targets = controller.with_untracked(|c| c.targets());

    view! {
        <Show when=move || view_state(controller).menu.is_open()>
            <div id="mobile-menu" class="mobile-menu">
                {targets
                    .iter()
                    .map(|target| {
                        let id = target.id;
                        view! {
                            <button
                                class="mobile-menu__link"
                                on:click=move |_| controller.update(|c| c.navigate_to(id))
                            >
                                {target.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Show>
    }
}
