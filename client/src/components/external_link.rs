//! Anchor that opens in a new browsing context.

use leptos::prelude::*;

/// Outbound link with `target="_blank"` and `rel="noopener noreferrer"`.
#[component]
pub fn ExternalLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] arrow: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=class target="_blank" rel="noopener noreferrer">
            {children()}
            {arrow.then_some(view! { <span class="external-link__arrow" aria-hidden="true">"\u{2197}"</span> })}
        </a>
    }
}
