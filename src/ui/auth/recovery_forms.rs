//! Password recovery: request a reset link, then set a new password with the
//! token from that link.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::feedback::use_auth_feedback;
use super::password::{PasswordChecklist, PasswordInput};
use crate::core::validation::{validate_email, validate_reset};
use crate::ui::common::{FormField, InlineSpinner};
use crate::ui::session::use_session;

#[component]
pub fn ForgotPasswordForm(
    /// Back to the sign-in form
    on_back: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let feedback = use_auth_feedback();

    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let email_val = email.get_untracked().trim().to_string();
        if let Err(e) = validate_email(&email_val) {
            feedback.fail(e.to_string());
            return;
        }

        feedback.clear();
        busy.set(true);
        let store = session.store();

        spawn_local(async move {
            match store.api().request_password_reset(&email_val).await {
                Ok(()) => feedback.succeed(
                    "If an account exists for this email, a reset link has been sent.",
                ),
                Err(e) => feedback.fail(e.user_message()),
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Forgot Password"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Enter your email and we will send you a reset link"
                </p>
            </div>

            <FormField
                label="Email".to_string()
                required=true
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com".to_string()
                value=email
                on_input=Callback::new(move |v| email.set(v))
            />

            <button type="submit" class="btn-primary w-full" disabled=move || busy.get()>
                <Show when=move || busy.get() fallback=|| "Send Reset Link">
                    <span class="flex items-center justify-center gap-2">
                        <InlineSpinner />
                        "Sending..."
                    </span>
                </Show>
            </button>

            <BackToLogin on_back=on_back />
        </form>
    }
}

#[component]
pub fn ResetPasswordForm(
    /// Token from the emailed link, if the URL carried one
    token: Option<String>,
    /// Called after the password was changed
    on_success: Callback<()>,
    /// Back to the sign-in form
    on_back: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let feedback = use_auth_feedback();

    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let has_token = token.is_some();
    let token = StoredValue::new(token);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let reset_token = token.get_value();
        let password_val = password.get_untracked();
        let confirm_val = confirm_password.get_untracked();
        if let Err(e) = validate_reset(reset_token.as_deref(), &password_val, &confirm_val) {
            feedback.fail(e.to_string());
            return;
        }
        let Some(reset_token) = reset_token else {
            return;
        };

        feedback.clear();
        busy.set(true);
        let store = session.store();

        spawn_local(async move {
            match store.api().reset_password(&reset_token, &password_val).await {
                Ok(()) => on_success.run(()),
                Err(e) => feedback.fail(e.user_message()),
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Reset Password"</h2>
                <p class="mt-2 text-sm text-theme-secondary">"Choose a new password"</p>
            </div>

            {(!has_token).then(|| view! {
                <p class="text-sm text-theme-error">
                    "This reset link is missing its token. Request a new one."
                </p>
            })}

            <div>
                <PasswordInput
                    label="New Password"
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
                placeholder="Confirm your new password"
            />

            <button type="submit" class="btn-primary w-full" disabled=move || busy.get()>
                <Show when=move || busy.get() fallback=|| "Update Password">
                    <span class="flex items-center justify-center gap-2">
                        <InlineSpinner />
                        "Updating..."
                    </span>
                </Show>
            </button>

            <BackToLogin on_back=on_back />
        </form>
    }
}

#[component]
fn BackToLogin(on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="text-center text-sm">
            <button
                type="button"
                class="text-accent-primary hover:text-accent-primary-hover font-medium"
                on:click=move |_| on_back.run(())
            >
                "Back to sign in"
            </button>
        </div>
    }
}
