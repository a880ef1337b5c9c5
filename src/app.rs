use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::API_BASE_META;
use crate::ui::auth::provide_auth_feedback;
use crate::ui::pages::{AuthPage, DashboardPage, LandingPage, ProjectPage};
use crate::ui::{Guarded, provide_session_context};

/// API origin written into the page for the client to pick up
fn api_base_for_page() -> String {
    #[cfg(feature = "ssr")]
    {
        crate::core::config::Config::from_env().api_base_url()
    }
    #[cfg(not(feature = "ssr"))]
    {
        crate::core::config::client_api_base_url()
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base_for_page()/>
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

    provide_session_context();
    // Above the guard so form outcomes survive the loading screen
    provide_auth_feedback();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/taskboard.css"/>
        <Title text="Taskboard"/>
        <Meta name="color-scheme" content="light"/>

        <Router>
            <Guarded>
                // Unknown paths are redirected home by the guard
                <Routes fallback=|| ()>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/auth") view=AuthPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/projects/:projectId") view=ProjectPage />
                </Routes>
            </Guarded>
        </Router>
    }
}
