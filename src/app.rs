use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::site::SiteSettings;
use crate::ui::{EmbeddedSettings, NewspaperPage, NotFoundPage, provide_site_settings};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <EmbeddedSettings settings=settings />
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Outbound links and redirect confirmation
    provide_site_settings();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/vlog-vintage.css"/>

        <Title text="Vlog Vintage"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=NewspaperPage/>
            </Routes>
        </Router>
    }
}
