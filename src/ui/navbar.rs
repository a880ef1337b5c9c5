//! Top bar for signed-in pages: brand, greeting and logout

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let greeting = move || {
        session
            .profile()
            .map(|p| format!("Hello, {}", p.display_name()))
            .unwrap_or_default()
    };

    let handle_logout = move |_| {
        session.logout();
        navigate("/auth", Default::default());
    };

    view! {
        <header class="border-b border-theme bg-theme-surface">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/dashboard" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                            <Icon name=icons::CHECK class="w-5 h-5 invert"/>
                        </div>
                        <span class="text-xl font-bold text-theme-primary">"Taskboard"</span>
                    </A>

                    <div class="flex items-center gap-4">
                        <span class="hidden sm:block text-sm font-medium text-theme-secondary">
                            {greeting}
                        </span>
                        <button
                            class="btn-secondary flex items-center gap-2"
                            on:click=handle_logout
                        >
                            <Icon name=icons::LOGOUT class="icon-text"/>
                            "Log out"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
