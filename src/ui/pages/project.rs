//! Project detail page component
//!
//! Shows one project's header and its tasks split into three status
//! columns. Tasks are created, edited and deleted through a modal; the
//! columns are recomputed from the refetched list after each change.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::board::{FormMode, HeaderState, ProjectDetail, TaskCollection};
use crate::core::models::{ProjectId, Task, TaskStatus, format_date};
use crate::ui::board::{BoardView, PageBoard, load_on_sign_in, mount_board, spawn_board};
use crate::ui::common::{
    BaseModal, ConfirmDialog, ErrorMessage, FormField, IconButton, LoadingSpinner, SelectField,
    SubmitCancelButtons, TextAreaField,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::Navbar;
use crate::ui::session::{ClientTransport, use_session};

/// Project detail page component
#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project_id = Memo::new(move |_| {
        params.with(|p| p.get("projectId").and_then(|id| id.parse::<ProjectId>().ok()))
    });

    view! {
        <div class="min-h-screen bg-theme-primary">
            <Navbar />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
                <A href="/dashboard" attr:class="inline-flex items-center gap-1 text-sm text-theme-secondary hover:text-theme-primary">
                    <Icon name=icons::ARROW_LEFT class="icon-text"/>
                    "Back to projects"
                </A>
                {move || match project_id.get() {
                    Some(id) => view! { <ProjectBoard project_id=id /> }.into_any(),
                    None => view! {
                        <ErrorMessage error=Signal::stored(Some("Project not found".to_string())) />
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn ProjectBoard(project_id: ProjectId) -> impl IntoView {
    let session = use_session();
    let detail: ProjectDetail<ClientTransport> = ProjectDetail::new(project_id, session.store());

    let header: Signal<HeaderState> = Signal::from(detail.header_signal());
    let (board, state) = mount_board(detail.tasks().clone());
    let detail = StoredValue::new(detail);

    load_on_sign_in(move || {
        let detail = detail.get_value();
        leptos::task::spawn_local(async move {
            if let Err(e) = detail.refresh().await {
                leptos::logging::log!("project {} load failed: {}", detail.project_id(), e);
            }
        });
    });

    let columns = Memo::new(move |_| state.with(|s| s.columns()));
    let loading = Memo::new(move |_| state.with(|s| s.loading && s.items.is_empty()));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));

    let pending_delete = Memo::new(move |_| state.with(|s| s.pending_delete.clone()));
    let deleting = Signal::derive(move || state.with(|s| s.deleting));
    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|t| format!("Delete task \"{}\"?", t.title))
            .unwrap_or_default()
    });

    let on_dismiss = Callback::new(move |_| board.with_value(|b| b.dismiss_error()));
    let on_confirm_delete = Callback::new(move |_| {
        spawn_board(board, "delete", |b| async move { b.confirm_delete().await })
    });
    let on_cancel_delete = Callback::new(move |_| board.with_value(|b| b.cancel_delete()));

    view! {
        <div class="flex items-start justify-between gap-4">
            <div class="min-w-0">
                <h1 class="text-2xl font-bold text-theme-primary truncate">
                    {move || header.with(|h| h.project.as_ref().map(|p| p.title.clone()).unwrap_or_default())}
                </h1>
                <p class="text-sm text-theme-secondary">
                    {move || header.with(|h| h.project.as_ref().map(|p| p.description.clone()).unwrap_or_default())}
                </p>
            </div>
            <button
                class="btn-primary flex items-center gap-2 shrink-0"
                on:click=move |_| board.with_value(|b| b.open_create())
            >
                <Icon name=icons::PLUS class="icon-text invert"/>
                "New Task"
            </button>
        </div>

        <ErrorMessage error=error on_dismiss=on_dismiss />

        {move || {
            if loading.get() {
                view! { <LoadingSpinner message="Loading tasks...".to_string() /> }.into_any()
            } else {
                view! {
                    <div class="grid gap-4 md:grid-cols-3">
                        {TaskStatus::ALL.into_iter().map(|status| {
                            let tasks = Signal::derive(move || columns.with(|c| c.column(status).to_vec()));
                            view! { <TaskColumn status=status tasks=tasks board=board /> }
                        }).collect_view()}
                    </div>
                }.into_any()
            }
        }}

        <TaskFormModal board=board state=state />

        <ConfirmDialog
            title="Delete task".to_string()
            message=delete_message
            is_open=Signal::derive(move || pending_delete.with(|t| t.is_some()))
            on_confirm=on_confirm_delete
            on_cancel=on_cancel_delete
            busy=deleting
            confirm_text="Delete"
            is_destructive=true
            error=error
        />
    }
}

fn column_accent(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "border-t-gray-400",
        TaskStatus::InProgress => "border-t-blue-500",
        TaskStatus::Done => "border-t-green-500",
    }
}

#[component]
fn TaskColumn(
    status: TaskStatus,
    tasks: Signal<Vec<Task>>,
    board: PageBoard<TaskCollection>,
) -> impl IntoView {
    view! {
        <section class=format!("card border-t-4 {} p-4 space-y-3", column_accent(status))>
            <header class="flex items-center justify-between">
                <h2 class="font-semibold text-theme-primary">{status.to_string()}</h2>
                <span class="text-xs font-medium rounded-full px-2 py-0.5 bg-theme-secondary text-theme-secondary">
                    {move || tasks.with(|t| t.len())}
                </span>
            </header>
            <Show
                when=move || tasks.with(|t| !t.is_empty())
                fallback=|| view! { <p class="text-sm text-theme-tertiary text-center py-6">"No tasks"</p> }
            >
                <For
                    each=move || tasks.get()
                    key=|t| (t.id, t.title.clone(), t.description.clone(), t.status)
                    children=move |task| view! { <TaskCard task=task board=board /> }
                />
            </Show>
        </section>
    }
}

#[component]
fn TaskCard(task: Task, board: PageBoard<TaskCollection>) -> impl IntoView {
    let due = task.due_date.as_deref().map(format_date);
    let description = (!task.description.is_empty()).then(|| task.description.clone());
    let title = task.title.clone();
    let task = StoredValue::new(task);

    view! {
        <article class="rounded-lg border border-theme p-3 space-y-2 bg-theme-surface">
            <div class="flex items-start justify-between gap-2">
                <h3 class="font-medium text-theme-primary break-words">{title}</h3>
                <div class="flex items-center gap-1 shrink-0">
                    <IconButton
                        icon=icons::EDIT
                        title="Edit task"
                        on_click=Callback::new(move |_| {
                            task.with_value(|t| board.with_value(|b| b.open_edit(t)))
                        })
                    />
                    <IconButton
                        icon=icons::TRASH
                        title="Delete task"
                        class="hover:bg-red-100"
                        on_click=Callback::new(move |_| {
                            task.with_value(|t| board.with_value(|b| b.request_delete(t)))
                        })
                    />
                </div>
            </div>
            {description.map(|d| view! { <p class="text-sm text-theme-secondary">{d}</p> })}
            {due.map(|date| view! {
                <div class="flex items-center gap-1 text-xs text-theme-tertiary">
                    <Icon name=icons::CALENDAR class="w-3.5 h-3.5"/>
                    {format!("Due {}", date)}
                </div>
            })}
        </article>
    }
}

#[component]
fn TaskFormModal(board: PageBoard<TaskCollection>, state: BoardView<TaskCollection>) -> impl IntoView {
    let is_open = Signal::derive(move || state.with(|s| s.form.mode.is_open()));
    let editing = Memo::new(move |_| state.with(|s| matches!(s.form.mode, FormMode::Editing(_))));
    let title = Signal::derive(move || {
        let text = if editing.get() { "Edit Task" } else { "New Task" };
        text.to_string()
    });
    let submit_text = Signal::derive(move || {
        let text = if editing.get() { "Save" } else { "Create" };
        text.to_string()
    });
    let busy = Signal::derive(move || state.with(|s| s.form.submitting));
    let form_error = Signal::derive(move || state.with(|s| s.form.error.clone()));

    let status_options = TaskStatus::ALL
        .into_iter()
        .map(|s| (s.as_str().to_string(), s.to_string()))
        .collect::<Vec<_>>();

    let on_close = Callback::new(move |_| board.with_value(|b| b.close_form()));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_board(board, "save", |b| async move { b.submit().await });
    };

    view! {
        <BaseModal title=title is_open=is_open on_close=on_close>
            <form on:submit=on_submit class="space-y-4">
                <FormField
                    label="Title".to_string()
                    required=true
                    placeholder="Task title".to_string()
                    value=Signal::derive(move || state.with(|s| s.form.draft.title.clone()))
                    on_input=Callback::new(move |v: String| board.with_value(|b| b.edit_draft(|d| d.title = v)))
                    disabled=busy
                />
                <TextAreaField
                    label="Description".to_string()
                    placeholder="Details".to_string()
                    value=Signal::derive(move || state.with(|s| s.form.draft.description.clone()))
                    on_input=Callback::new(move |v: String| {
                        board.with_value(|b| b.edit_draft(|d| d.description = v))
                    })
                    disabled=busy
                />
                <SelectField
                    label="Status".to_string()
                    value=Signal::derive(move || state.with(|s| s.form.draft.status.as_str().to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(status) = TaskStatus::parse(&v) {
                            board.with_value(|b| b.edit_draft(|d| d.status = status));
                        }
                    })
                    options=status_options
                    disabled=busy
                />
                <ErrorMessage error=form_error />
                <SubmitCancelButtons submit_text=submit_text on_cancel=on_close busy=busy />
            </form>
        </BaseModal>
    }
}
