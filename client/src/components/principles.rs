//! Working principles. Rendered between skills and other, not in the nav bar.

use leptos::prelude::*;

use crate::content::principles::{PHILOSOPHY_BODY, PHILOSOPHY_HEADLINE, PRINCIPLES};
use crate::state::nav::section;

#[component]
pub fn PrinciplesSection() -> impl IntoView {
    view! {
        <section id={section::PRINCIPLES} class="section">
            <div class="section__inner">
                <h2 class="section__title">"Working Principles"</h2>
                <p class="section__subtitle">"How I approach AI and data science"</p>
                <div class="grid grid--3">
                    {PRINCIPLES
                        .iter()
                        .map(|p| {
                            view! {
                                <div class="principle">
                                    <h3 class="principle__title">{p.title}</h3>
                                    <p class="card__text">{p.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="card philosophy">
                    <p class="philosophy__label">"My Philosophy"</p>
                    <p class="philosophy__headline">{PHILOSOPHY_HEADLINE}</p>
                    <p class="card__text">{PHILOSOPHY_BODY}</p>
                </div>
            </div>
        </section>
    }
}
