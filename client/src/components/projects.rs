//! Project groups and cards.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use super::external_link::ExternalLink;
use crate::content::profile::PROFILE;
use crate::content::projects::PROJECT_GROUPS;
use crate::content::{Icon, Project, ProjectGroup};
use crate::state::nav::section;

/// Outbound links shown under a project card, in display order.
pub fn project_links(project: &Project) -> Vec<(&'static str, &'static str)> {
    let repo = project.repo.map(|href| ("View on GitHub", href));
    let video = project.video.map(|href| ("YouTube", href));
    repo.into_iter().chain(video).collect()
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id={section::PROJECTS} class="section section--muted">
            <div class="section__inner">
                <h2 class="section__title">"Featured Projects"</h2>
                <p class="section__subtitle">"Transforming data challenges into intelligent solutions"</p>
                {PROJECT_GROUPS.iter().map(|g| view! { <ProjectGroupBlock group={*g}/> }).collect::<Vec<_>>()}
                <div class="projects__more">
                    <ExternalLink href={PROFILE.repositories_url} class="btn btn--outline">
                        <span aria-hidden="true">{Icon::GitHub.glyph()}</span>
                        " View More Projects on GitHub"
                    </ExternalLink>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectGroupBlock(group: ProjectGroup) -> impl IntoView {
    view! {
        <div class="projects__group">
            <h3 class="projects__group-title">
                <span aria-hidden="true">{group.icon.glyph()}</span>
                " "
                {group.title}
            </h3>
            <div class="grid grid--3">
                {group.projects.iter().map(|p| view! { <ProjectCard project={*p}/> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let links = project_links(&project);

    view! {
        <article class="card">
            <span class="card__icon" aria-hidden="true">{project.icon.glyph()}</span>
            <h3 class="card__title">{project.title}</h3>
            <p class="card__text">{project.description}</p>
            <div class="tags">
                {project.tags.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect::<Vec<_>>()}
            </div>
            <div class="card__links">
                {links
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <ExternalLink href=href class="link-accent" arrow=true>
                                {label}
                            </ExternalLink>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}
