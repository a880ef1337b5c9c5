//! Register form component
//!
//! Creates an account; the page then switches to the sign-in tab.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::feedback::use_auth_feedback;
use super::password::{PasswordChecklist, PasswordInput};
use crate::core::validation::validate_registration;
use crate::ui::common::{FormField, InlineSpinner};
use crate::ui::session::use_session;

#[component]
pub fn RegisterForm(
    /// Called after the account was created
    on_success: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let feedback = use_auth_feedback();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let username_val = username.get_untracked().trim().to_string();
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        let confirm_val = confirm_password.get_untracked();

        if let Err(e) = validate_registration(&username_val, &email_val, &password_val, &confirm_val)
        {
            feedback.fail(e.to_string());
            return;
        }

        feedback.clear();
        busy.set(true);
        let store = session.store();

        spawn_local(async move {
            match store
                .api()
                .register(&username_val, &email_val, &password_val)
                .await
            {
                Ok(()) => {
                    leptos::logging::log!("registered {}", username_val);
                    on_success.run(());
                }
                Err(e) => feedback.fail(e.user_message()),
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Create Account"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Organise your projects and tasks in one place"
                </p>
            </div>

            <FormField
                label="Username".to_string()
                required=true
                autocomplete="username"
                placeholder="Choose a username".to_string()
                value=username
                on_input=Callback::new(move |v| username.set(v))
            />

            <FormField
                label="Email".to_string()
                required=true
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com".to_string()
                value=email
                on_input=Callback::new(move |v| email.set(v))
            />

            <div>
                <PasswordInput
                    label="Password"
                    value=password
                    autocomplete="new-password"
                    placeholder="Create a strong password"
                />
                <PasswordChecklist password=password />
            </div>

            <PasswordInput
                label="Confirm Password"
                value=confirm_password
                autocomplete="new-password"
                placeholder="Confirm your password"
            />

            <button type="submit" class="btn-primary w-full" disabled=move || busy.get()>
                <Show when=move || busy.get() fallback=|| "Create Account">
                    <span class="flex items-center justify-center gap-2">
                        <InlineSpinner />
                        "Creating account..."
                    </span>
                </Show>
            </button>
        </form>
    }
}
