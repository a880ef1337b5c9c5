use crate::ui::common::spinner::InlineSpinner;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos::wasm_bindgen::JsCast;

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    #[prop(into)]
    title: Signal<String>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-lg)
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-50 flex items-center justify-center backdrop-theme transition-all duration-300"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center backdrop-theme opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(feature = "hydrate")]
                    {
                        if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                            if element.class_list().contains("backdrop-theme") {
                                on_close.run(());
                            }
                        }
                    }
                    #[cfg(not(feature = "hydrate"))]
                    {
                        let _ = e;
                    }
                }
            }
        >
            <div class=format!("w-full {} card theme-transition", max_width) role="dialog">
                <div class="card-header">
                    <h3 class="title-lg">{move || title.get()}</h3>
                    <button
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog modal
///
/// Stays open after confirming; the owner closes it once the action succeeds.
#[component]
pub fn ConfirmDialog(
    /// Dialog title
    #[prop(into)]
    title: Signal<String>,
    /// Dialog message
    #[prop(into)]
    message: Signal<String>,
    /// Whether dialog is open
    is_open: Signal<bool>,
    /// Callback when confirmed
    on_confirm: Callback<()>,
    /// Callback when cancelled
    on_cancel: Callback<()>,
    /// Confirm action in flight; disables both buttons
    #[prop(into, default = Signal::stored(false))]
    busy: Signal<bool>,
    /// Confirm button text
    #[prop(default = "Confirm")]
    confirm_text: &'static str,
    /// Whether confirm action is destructive (uses danger button)
    #[prop(default = false)]
    is_destructive: bool,
    /// Error shown inside the dialog
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <BaseModal
            title=title
            is_open=is_open
            on_close=Callback::new(move |_| {
                if !busy.get_untracked() {
                    on_cancel.run(())
                }
            })
            max_width="max-w-md"
        >
            <div class="space-y-4">
                <p class="text-theme-secondary">{move || message.get()}</p>

                {error.map(|error| view! {
                    <crate::ui::common::ErrorMessage error=error />
                })}

                <div class="flex items-center justify-end gap-2 divider-top pt-4">
                    <button
                        class="btn-secondary"
                        disabled=move || busy.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class=if is_destructive { "btn-danger" } else { "btn-primary" }
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        <Show when=move || busy.get() fallback=move || confirm_text>
                            <span class="flex items-center gap-2">
                                <InlineSpinner />
                                {confirm_text}
                            </span>
                        </Show>
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
