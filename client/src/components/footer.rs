//! Page footer.

use leptos::prelude::*;

use crate::content::profile::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{PROFILE.footer}</p>
        </footer>
    }
}
