//! Route guard component
//!
//! Wraps the router outlet. While the session is initializing (or a redirect
//! is pending) only the loading screen renders, so protected content never
//! flashes before a redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::guard::{GuardDecision, Route, decide};
use crate::ui::common::LoadingScreen;
use crate::ui::session::use_session;

#[component]
pub fn Guarded(
    /// Routed content, rendered only on `GuardDecision::Render`
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let route = Memo::new(move |_| {
        let path = location.pathname.get();
        let search = location.search.get();
        Route::parse(&format!("{}?{}", path, search.trim_start_matches('?')))
    });
    let decision = Memo::new(move |_| route.with(|route| decide(route, session.status())));

    Effect::new(move |_| {
        if let Some(path) = decision.get().redirect_path() {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        _ => view! { <LoadingScreen/> }.into_any(),
    }
}
