//! About section: biography, quote and signature.

use leptos::prelude::*;

use crate::content::profile::{ABOUT_SIGNATURE, PROFILE};
use crate::state::nav::section;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id={section::ABOUT} class="section">
            <div class="section__inner section__inner--narrow">
                <h2 class="section__title">"About Me"</h2>
                <div class="about__body">
                    {PROFILE.about.iter().map(|p| view! { <p>{*p}</p> }).collect::<Vec<_>>()}
                    <blockquote class="card about__quote">
                        <p class="about__quote-text">{PROFILE.quote}</p>
                        <p class="about__quote-author">{format!("\u{2014} {}", PROFILE.quote_author)}</p>
                    </blockquote>
                    <p>{PROFILE.about_closing}</p>
                    <p class="about__signature">{ABOUT_SIGNATURE}</p>
                </div>
            </div>
        </section>
    }
}
