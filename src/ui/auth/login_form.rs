//! Login form component
//!
//! Exchanges email and password for a token, then hands the token to the
//! session store. Errors land in the shared [`AuthFeedback`] banner.
//!
//! The form is unmounted while the profile loads, so nothing here runs
//! after a successful sign-in; the route guard moves on to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::feedback::{AuthFeedback, use_auth_feedback};
use super::password::PasswordInput;
use crate::core::session::Resolution;
use crate::core::validation::{validate_email, validate_required};
use crate::ui::common::{FormField, InlineSpinner};
use crate::ui::session::use_session;

#[component]
pub fn LoginForm(
    /// Switch to the forgot-password form
    on_forgot_click: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let feedback: AuthFeedback = use_auth_feedback();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        let checked =
            validate_email(&email_val).and_then(|_| validate_required("Password", &password_val));
        if let Err(e) = checked {
            feedback.fail(e.to_string());
            return;
        }

        feedback.clear();
        busy.set(true);
        let store = session.store();

        spawn_local(async move {
            match store.sign_in(&email_val, &password_val).await {
                Ok(Resolution::Applied(profile)) => {
                    leptos::logging::log!("signed in as {}", profile.username);
                }
                Ok(Resolution::Stale) => {}
                Err(e) => {
                    if e.should_display() {
                        feedback.fail(e.user_message());
                    }
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Welcome Back"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Sign in to your account to continue"
                </p>
            </div>

            <FormField
                label="Email".to_string()
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com".to_string()
                value=email
                on_input=Callback::new(move |v| email.set(v))
            />

            <div>
                <PasswordInput label="Password" value=password placeholder="Enter your password" />
                <div class="mt-1 text-right">
                    <button
                        type="button"
                        class="text-sm text-accent-primary hover:text-accent-primary-hover"
                        on:click=move |_| on_forgot_click.run(())
                    >
                        "Forgot password?"
                    </button>
                </div>
            </div>

            <button type="submit" class="btn-primary w-full" disabled=move || busy.get()>
                <Show when=move || busy.get() fallback=|| "Sign In">
                    <span class="flex items-center justify-center gap-2">
                        <InlineSpinner />
                        "Signing in..."
                    </span>
                </Show>
            </button>
        </form>
    }
}
