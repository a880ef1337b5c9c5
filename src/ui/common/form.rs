use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Field-level error line shared by the form fields
#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| view! {
            <div class="flex items-center text-sm text-theme-error">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{err}</span>
            </div>
        })
    }
}

#[component]
fn FieldLabel(label: String, required: bool) -> impl IntoView {
    view! {
        <label class="label">
            {label}
            {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
        </label>
    }
}

/// Labelled input bound to a string signal
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, password, email, date)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Browser autofill hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=required />
            <input
                type=input_type
                class="input-base"
                class:border-red-500=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError error=error />
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    label: String,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 3)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=false />
            <textarea
                class="input-base resize-none"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Field label text
    label: String,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=false />
            <select
                class="select-base"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                {options.into_iter().map(|(val, text)| {
                    view! { <option value=val>{text}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}
