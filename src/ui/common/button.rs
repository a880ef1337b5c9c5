use crate::ui::common::spinner::InlineSpinner;
use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Small square button with a single icon
#[component]
pub fn IconButton(
    /// Icon name
    icon: &'static str,
    /// Tooltip and accessible label
    title: &'static str,
    /// Click handler
    on_click: Callback<()>,
    /// Extra classes (e.g. hover colour)
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("btn-icon {}", class)
            title=title
            aria-label=title
            on:click=move |ev| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            <Icon name=icon class="icon-standalone"/>
        </button>
    }
}

/// Cancel + submit pair for the bottom of a modal form.
/// The submit button is a real `type="submit"` so Enter submits the form.
#[component]
pub fn SubmitCancelButtons(
    /// Submit button text
    #[prop(into)]
    submit_text: Signal<String>,
    /// Cancel click handler
    on_cancel: Callback<()>,
    /// Request in flight
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-end gap-2 divider-top pt-4">
            <button
                type="button"
                class="btn-secondary"
                disabled=move || busy.get()
                on:click=move |_| on_cancel.run(())
            >
                "Cancel"
            </button>
            <button type="submit" class="btn-primary" disabled=move || busy.get()>
                <Show when=move || busy.get() fallback=move || submit_text.get()>
                    <span class="flex items-center gap-2">
                        <InlineSpinner />
                        "Saving..."
                    </span>
                </Show>
            </button>
        </div>
    }
}
