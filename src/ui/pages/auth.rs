//! Auth page component
//!
//! One page for every signed-out flow. The `tab` query parameter picks the
//! form (login, register, forgot, reset); the reset form also reads `token`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::core::guard::{AuthTab, Route};
use crate::ui::auth::{
    ForgotPasswordForm, LoginForm, RegisterForm, ResetPasswordForm, use_auth_feedback,
};
use crate::ui::common::{ErrorMessage, SuccessMessage, TabItem, Tabs};
use crate::ui::icon::{Icon, icons};

const TABS: [TabItem; 2] = [TabItem::new("login", "Sign In"), TabItem::new("register", "Register")];

#[component]
pub fn AuthPage() -> impl IntoView {
    let query = use_query_map();
    let feedback = use_auth_feedback();

    let tab = Memo::new(move |_| {
        query.with(|q| AuthTab::from_params(q.get("tab").as_deref(), q.get("token")))
    });

    let go_to = move |tab: AuthTab| {
        let navigate = use_navigate();
        navigate(&Route::Auth(tab).path(), Default::default());
    };

    let active_tab = Signal::derive(move || {
        match tab.get() {
            AuthTab::Register => "register",
            _ => "login",
        }
        .to_string()
    });
    let on_tab_change = Callback::new(move |id: &'static str| {
        feedback.clear();
        go_to(if id == "register" { AuthTab::Register } else { AuthTab::Login });
    });

    let on_registered = Callback::new(move |_| {
        go_to(AuthTab::Login);
        feedback.succeed("Account created. You can sign in now.");
    });
    let on_reset = Callback::new(move |_| {
        go_to(AuthTab::Login);
        feedback.succeed("Password updated. Sign in with your new password.");
    });
    let on_forgot = Callback::new(move |_| {
        feedback.clear();
        go_to(AuthTab::ForgotPassword);
    });
    let on_back = Callback::new(move |_| {
        feedback.clear();
        go_to(AuthTab::Login);
    });

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center h-16">
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                            <Icon name=icons::CHECK class="w-5 h-5 invert"/>
                        </div>
                        <span class="text-xl font-bold text-theme-primary">"Taskboard"</span>
                    </A>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md card p-8 space-y-6">
                    <Show when=move || matches!(tab.get(), AuthTab::Login | AuthTab::Register)>
                        <Tabs tabs=TABS.to_vec() active_tab=active_tab on_change=on_tab_change />
                    </Show>

                    <ErrorMessage
                        error=feedback.error
                        on_dismiss=Callback::new(move |_| feedback.error.set(None))
                    />
                    <SuccessMessage message=feedback.notice />

                    {move || match tab.get() {
                        AuthTab::Login => view! {
                            <LoginForm on_forgot_click=on_forgot />
                        }.into_any(),
                        AuthTab::Register => view! {
                            <RegisterForm on_success=on_registered />
                        }.into_any(),
                        AuthTab::ForgotPassword => view! {
                            <ForgotPasswordForm on_back=on_back />
                        }.into_any(),
                        AuthTab::ResetPassword { token } => view! {
                            <ResetPasswordForm token=token on_success=on_reset on_back=on_back />
                        }.into_any(),
                    }}
                </div>
            </main>
        </div>
    }
}
