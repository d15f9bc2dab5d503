//! Professional experience timeline.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::external_link::ExternalLink;
use crate::content::Role;
use crate::content::experience::EXPERIENCE;
use crate::state::nav::section;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id={section::EXPERIENCE} class="section">
            <div class="section__inner">
                <h2 class="section__title">"Professional Experience"</h2>
                <p class="section__subtitle">"Building impactful solutions across industry and research"</p>
                <div class="stack">
                    {EXPERIENCE.iter().map(|r| view! { <RoleCard role={*r}/> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn RoleCard(role: Role) -> impl IntoView {
    // Company name is a link only when one is known.
    let company = match role.link {
        Some(href) => view! {
            <ExternalLink href=href class="link-accent" arrow=true>
                {role.company}
            </ExternalLink>
        }
        .into_any(),
        None => view! { <span>{role.company}</span> }.into_any(),
    };

    view! {
        <article class="card card--row">
            <span class="card__icon" aria-hidden="true">{role.icon.glyph()}</span>
            <div class="card__body">
                <div class="card__heading">
                    <h3 class="card__title">{role.title}</h3>
                    <span class="card__period">{role.period}</span>
                </div>
                <p class="card__accent">{company}</p>
                <p class="card__meta">{role.location}</p>
                <p class="card__text">{role.description}</p>
            </div>
        </article>
    }
}
