//! Inline banners for errors and confirmations

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Shows the message when Some; the optional close button clears it
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Called by the close button
    #[prop(optional, into)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span class="flex-1">{move || error.get().unwrap_or_default()}</span>
                {on_dismiss.map(|dismiss| view! {
                    <button
                        class="btn-icon"
                        on:click=move |_| dismiss.run(())
                        aria-label="Dismiss"
                    >
                        <Icon name=icons::X class="icon-text"/>
                    </button>
                })}
            </div>
        </Show>
    }
}

/// Success message component
/// Displays a success message with a check icon
#[component]
pub fn SuccessMessage(
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="success-message">
                <Icon name=icons::CHECK class="icon-text"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
