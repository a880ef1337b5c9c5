//! Password input with visibility toggle, live rule checklist and strength meter

use leptos::prelude::*;

use crate::core::validation::{PasswordStrength, password_rules, password_strength};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn PasswordInput(
    /// Field label text
    label: &'static str,
    /// Bound value
    value: RwSignal<String>,
    /// Browser autofill hint (`current-password` / `new-password`)
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <div class="relative">
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    class="input-base pr-10"
                    autocomplete=autocomplete
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || {
                        if visible.get() {
                            view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}

/// Rule-by-rule status plus a three-step strength bar.
/// Hidden while the password is empty.
#[component]
pub fn PasswordChecklist(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let strength = Memo::new(move |_| password.with(|p| password_strength(p)));

    move || {
        let value = password.get();
        if value.is_empty() {
            return None;
        }

        let level = match strength.get() {
            PasswordStrength::Weak => 1,
            PasswordStrength::Medium => 2,
            PasswordStrength::Strong => 3,
        };
        let (bar_class, text_class) = match level {
            1 => ("bg-red-500", "text-red-500"),
            2 => ("bg-yellow-500", "text-yellow-500"),
            _ => ("bg-green-500", "text-green-500"),
        };

        Some(view! {
            <div class="mt-2 space-y-2">
                <div class="flex gap-1">
                    {(1..=3).map(|step| {
                        let fill = if step <= level { bar_class } else { "bg-gray-300" };
                        view! { <div class=format!("h-1 flex-1 rounded {}", fill)></div> }
                    }).collect_view()}
                </div>
                <p class=format!("text-xs {}", text_class)>{strength.get().to_string()}</p>
                <ul class="grid grid-cols-2 gap-1 text-xs">
                    {password_rules(&value).into_iter().map(|rule| {
                        let (icon, class) = if rule.satisfied {
                            (icons::CHECK, "text-green-600")
                        } else {
                            (icons::CIRCLE, "text-theme-tertiary")
                        };
                        view! {
                            <li class=format!("flex items-center gap-1 {}", class)>
                                <Icon name=icon class="w-3 h-3"/>
                                {rule.label}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>
        })
    }
}
