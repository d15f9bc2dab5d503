//! Full-height introduction at the document origin.

use leptos::prelude::*;

use super::use_controller;
use crate::content::profile::PROFILE;
use crate::state::nav::section;

#[component]
pub fn Hero() -> impl IntoView {
    let controller = use_controller();

    view! {
        <header class="hero">
            <div class="hero__inner">
                <div class="hero__photo-wrap">
                    <img class="hero__photo" src={PROFILE.photo} alt="Profile"/>
                </div>
                <p class="hero__badge">{PROFILE.title}</p>
                <h1 class="hero__headline">
                    {PROFILE.headline}
                    <span class="hero__headline-accent">{PROFILE.headline_accent}</span>
                </h1>
                <p class="hero__tagline">{PROFILE.tagline}</p>
                <button
                    class="hero__more"
                    on:click=move |_| controller.update(|c| c.navigate_to(section::ABOUT))
                >
                    "Learn more "
                    <span aria-hidden="true">"\u{2193}"</span>
                </button>
            </div>
        </header>
    }
}
