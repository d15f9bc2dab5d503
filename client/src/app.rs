//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};

use crate::content::profile::PROFILE;
use crate::pages::portfolio::PortfolioPage;
use crate::state::controller::BrowserController;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the page controller and provides it to every component as an
/// `RwSignal<BrowserController>`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controller = RwSignal::new(BrowserController::browser());
    provide_context(controller);

    // Effects only run in the browser, after hydration, so the server render
    // always starts light and the stored preference is read exactly once.
    Effect::new(move || controller.update(|c| c.initialize()));

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text={format!("{} | {}", PROFILE.name, PROFILE.title)}/>
        <Meta name="description" content={PROFILE.tagline}/>

        <PortfolioPage/>
    }
}
