//! Contact section with email and GitHub calls to action.

use leptos::prelude::*;

use super::external_link::ExternalLink;
use crate::content::Icon;
use crate::content::profile::PROFILE;
use crate::state::nav::section;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id={section::CONTACT} class="section">
            <div class="section__inner section__inner--narrow contact">
                <h2 class="section__title">"Let's Connect"</h2>
                <p class="section__subtitle">"Interested in collaborating or learning more about my work?"</p>
                <div class="grid grid--2">
                    <article class="card card--center">
                        <span class="card__icon" aria-hidden="true">{Icon::Mail.glyph()}</span>
                        <h3 class="card__title">"Email"</h3>
                        <p class="card__text">"Reach out for project collaborations or consulting opportunities"</p>
                        <ExternalLink href={PROFILE.email_href} class="link-accent" arrow=true>
                            {PROFILE.email}
                        </ExternalLink>
                    </article>
                    <article class="card card--center">
                        <span class="card__icon" aria-hidden="true">{Icon::GitHub.glyph()}</span>
                        <h3 class="card__title">"GitHub"</h3>
                        <p class="card__text">"Explore my open-source contributions and project repositories"</p>
                        <ExternalLink href={PROFILE.github_url} class="link-accent" arrow=true>
                            {PROFILE.github_handle}
                        </ExternalLink>
                    </article>
                </div>
                <div class="contact__actions">
                    <ExternalLink href={PROFILE.email_href} class="btn">
                        <span aria-hidden="true">{Icon::Mail.glyph()}</span>
                        " Send me an email"
                    </ExternalLink>
                    <ExternalLink href={PROFILE.github_url} class="btn btn--outline">
                        <span aria-hidden="true">{Icon::GitHub.glyph()}</span>
                        " View GitHub"
                    </ExternalLink>
                </div>
            </div>
        </section>
    }
}
