//! Publications list.

use leptos::prelude::*;

use super::external_link::ExternalLink;
use crate::content::publications::PUBLICATIONS;
use crate::content::{Icon, Publication};
use crate::state::nav::section;

#[component]
pub fn PublicationsSection() -> impl IntoView {
    view! {
        <section id={section::PUBLICATIONS} class="section">
            <div class="section__inner">
                <h2 class="section__title">"Research Publications"</h2>
                <p class="section__subtitle">"Contributing to academic research in AI and NLP"</p>
                <div class="grid grid--2">
                    {PUBLICATIONS.iter().map(|p| view! { <PublicationCard publication={*p}/> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PublicationCard(publication: Publication) -> impl IntoView {
    view! {
        <article class="card">
            <span class="card__icon" aria-hidden="true">{Icon::BookOpen.glyph()}</span>
            <h3 class="card__title">{publication.title}</h3>
            <p class="card__accent">{publication.venue}</p>
            <p class="card__meta">{format!("{} \u{2022} {}", publication.publisher, publication.date)}</p>
            <p class="card__text">{publication.description}</p>
            {publication
                .link
                .map(|href| {
                    view! {
                        <ExternalLink href=href class="link-accent" arrow=true>
                            "Read on IEEE Xplore"
                        </ExternalLink>
                    }
                })}
        </article>
    }
}
