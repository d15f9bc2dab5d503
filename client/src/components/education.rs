//! Degrees, with an optional teaching appointment under each.

use leptos::prelude::*;

use super::external_link::ExternalLink;
use crate::content::education::EDUCATION;
use crate::content::{Education, Icon, Teaching};
use crate::state::nav::section;

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id={section::EDUCATION} class="section section--muted">
            <div class="section__inner">
                <h2 class="section__title">"Education"</h2>
                <p class="section__subtitle">"Academic foundation and teaching experience"</p>
                <div class="stack">
                    {EDUCATION.iter().map(|e| view! { <DegreeCard degree={*e}/> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn DegreeCard(degree: Education) -> impl IntoView {
    view! {
        <article class="card card--row">
            <span class="card__icon" aria-hidden="true">{Icon::GraduationCap.glyph()}</span>
            <div class="card__body">
                <div class="card__heading">
                    <h3 class="card__title">{degree.degree}</h3>
                    <span class="card__period">{degree.period}</span>
                </div>
                <p class="card__accent">{format!("{} \u{2022} {}", degree.institution, degree.grade)}</p>
                <p class="card__meta">{degree.location}</p>
                <p class="card__text">
                    <span class="card__label">"Relevant Courses: "</span>
                    {degree.courses}
                </p>
                {degree.teaching.map(|teaching| view! { <TeachingBlock teaching=teaching/> })}
            </div>
        </article>
    }
}

#[component]
fn TeachingBlock(teaching: Teaching) -> impl IntoView {
    view! {
        <div class="teaching">
            <h4 class="teaching__title">
                <span aria-hidden="true">{Icon::Briefcase.glyph()}</span>
                " "
                {teaching.title}
            </h4>
            <p class="card__period">{teaching.period}</p>
            <ul class="bullets">
                {teaching.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect::<Vec<_>>()}
            </ul>
            {teaching
                .playlist
                .map(|href| {
                    view! {
                        <ExternalLink href=href class="link-accent" arrow=true>
                            "View Lecture Playlist"
                        </ExternalLink>
                    }
                })}
        </div>
    }
}
