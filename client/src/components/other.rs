//! Open-source contributions.

use leptos::prelude::*;

use super::external_link::ExternalLink;
use crate::content::open_source::CONTRIBUTIONS;
use crate::content::{Contribution, Icon};
use crate::state::nav::section;

#[component]
pub fn OtherSection() -> impl IntoView {
    view! {
        <section id={section::OTHER} class="section section--muted">
            <div class="section__inner">
                <h2 class="section__title">"Other"</h2>
                <p class="section__subtitle">"Additional contributions and activities"</p>
                <h3 class="projects__group-title">
                    <span aria-hidden="true">{Icon::Package.glyph()}</span>
                    " Open Source Contribution"
                </h3>
                <div class="stack">
                    {CONTRIBUTIONS
                        .iter()
                        .map(|c| view! { <ContributionCard contribution={*c}/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContributionCard(contribution: Contribution) -> impl IntoView {
    view! {
        <article class="card card--row">
            <span class="card__icon" aria-hidden="true">{Icon::Package.glyph()}</span>
            <div class="card__body">
                <h4 class="card__title">{contribution.title}</h4>
                <p class="card__text">{contribution.summary}</p>
                <ul class="bullets">
                    {contribution.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect::<Vec<_>>()}
                </ul>
                <div class="tags">
                    {contribution.tags.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect::<Vec<_>>()}
                </div>
                <div class="card__links">
                    <ExternalLink href={contribution.repo} class="link-accent" arrow=true>
                        "View on GitHub"
                    </ExternalLink>
                    {contribution
                        .package
                        .map(|href| {
                            view! {
                                <ExternalLink href=href class="link-accent" arrow=true>
                                    "View on PyPI"
                                </ExternalLink>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
