use leptos::prelude::*;

/// Tab item definition
#[derive(Clone, Copy, PartialEq)]
pub struct TabItem {
    /// Identifier reported to `on_change`
    pub id: &'static str,
    /// Display label for the tab
    pub label: &'static str,
}

impl TabItem {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Row of tab buttons; the owner decides which panel to show
#[component]
pub fn Tabs(
    /// List of tab items
    tabs: Vec<TabItem>,
    /// Currently active tab ID
    #[prop(into)]
    active_tab: Signal<String>,
    /// Callback when tab is changed
    on_change: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="tabs-container">
            <div class="tabs-list tabs-full-width" role="tablist">
                {tabs.into_iter().map(|tab| {
                    let is_active = Signal::derive(move || active_tab.get() == tab.id);
                    view! {
                        <button
                            type="button"
                            class=move || if is_active.get() { "tab-item tab-active" } else { "tab-item" }
                            role="tab"
                            aria-selected=move || is_active.get().to_string()
                            on:click=move |_| {
                                if !is_active.get_untracked() {
                                    on_change.run(tab.id);
                                }
                            }
                        >
                            <span class="tab-label">{tab.label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
