//! Landing page component
//!
//! Public home page with a short pitch and links into the auth flow.
//! Signed-in visitors are sent to the dashboard by the route guard.

use leptos::prelude::*;
use leptos_meta::Meta;
use leptos_router::components::A;

use crate::core::guard::{AuthTab, Route};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn LandingPage() -> impl IntoView {
    let register_href = Route::Auth(AuthTab::Register).path();
    let login_href = Route::Auth(AuthTab::Login).path();

    view! {
        <Meta name="description" content="Taskboard: projects and tasks on a simple three-column board." />

        <div class="min-h-screen bg-theme-primary flex flex-col">
            <section class="flex-1 flex items-center justify-center px-4">
                <div class="text-center max-w-3xl mx-auto">
                    <div class="w-14 h-14 mx-auto mb-6 bg-accent-primary rounded-2xl flex items-center justify-center">
                        <Icon name=icons::CHECK class="w-8 h-8 invert"/>
                    </div>
                    <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                        "Taskboard"
                    </h1>
                    <p class="text-xl text-theme-secondary mb-10 leading-relaxed">
                        "Group your work into projects and move every task from to do, to in progress, to done."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A href=register_href attr:class="btn-primary px-6 py-3 text-lg">
                            "Get Started"
                        </A>
                        <A href=login_href attr:class="btn-secondary px-6 py-3 text-lg">
                            "Sign In"
                        </A>
                    </div>
                </div>
            </section>

            <section class="py-16 px-4">
                <div class="max-w-5xl mx-auto grid md:grid-cols-3 gap-6">
                    <FeatureCard
                        icon=icons::FOLDER
                        title="Projects"
                        description="Keep each piece of work in its own project with a title and description."
                    />
                    <FeatureCard
                        icon=icons::CIRCLE
                        title="Three columns"
                        description="Tasks sit in To do, In progress or Done; change the status to move them."
                    />
                    <FeatureCard
                        icon=icons::CALENDAR
                        title="Due dates"
                        description="See at a glance when each task is due."
                    />
                </div>
            </section>

            <footer class="py-4 border-t border-theme">
                <p class="text-center text-sm text-theme-tertiary">"Taskboard"</p>
            </footer>
        </div>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="card p-6 space-y-3">
            <Icon name=icon class="w-6 h-6"/>
            <h3 class="title-lg">{title}</h3>
            <p class="text-sm text-theme-secondary">{description}</p>
        </div>
    }
}
