//! Skill categories grid.

use leptos::prelude::*;

use crate::content::skills::SKILLS;
use crate::state::nav::section;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id={section::SKILLS} class="section section--muted">
            <div class="section__inner">
                <h2 class="section__title">"Technical Expertise"</h2>
                <p class="section__subtitle">"Tools and technologies I work with"</p>
                <div class="grid grid--3">
                    {SKILLS
                        .iter()
                        .map(|category| {
                            view! {
                                <article class="card">
                                    <div class="card__heading card__heading--start">
                                        <span class="card__icon" aria-hidden="true">{category.icon.glyph()}</span>
                                        <h3 class="card__title">{category.name}</h3>
                                    </div>
                                    <ul class="bullets">
                                        {category.skills.iter().map(|s| view! { <li>{*s}</li> }).collect::<Vec<_>>()}
                                    </ul>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
