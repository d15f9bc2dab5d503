//! The single portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render in document order below the fixed navigation bar. Every
//! navigable section carries the id of its `NavTarget`; the principles
//! section is rendered but not linked from the bar.

#[cfg(all(test, feature = "ssr"))]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contact::ContactSection;
use crate::components::education::EducationSection;
use crate::components::experience::ExperienceSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::other::OtherSection;
use crate::components::principles::PrinciplesSection;
use crate::components::projects::ProjectsSection;
use crate::components::publications::PublicationsSection;
use crate::components::skills::SkillsSection;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="portfolio-page">
            <NavBar/>
            <main>
                <Hero/>
                <AboutSection/>
                <EducationSection/>
                <ExperienceSection/>
                <ProjectsSection/>
                <PublicationsSection/>
                <SkillsSection/>
                <PrinciplesSection/>
                <OtherSection/>
                <ContactSection/>
            </main>
            <Footer/>
        </div>
    }
}
