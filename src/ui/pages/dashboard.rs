//! Dashboard page component
//!
//! Lists the signed-in user's projects as cards, with create, edit and
//! delete. Every change is followed by a refetch of the whole list.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::board::{Dashboard, FormMode, ProjectCollection};
use crate::core::models::{Project, format_date};
use crate::ui::board::{BoardView, PageBoard, load_on_sign_in, mount_board, spawn_board};
use crate::ui::common::{
    BaseModal, ConfirmDialog, ErrorMessage, FormField, IconButton, LoadingSpinner,
    SubmitCancelButtons, TextAreaField,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::Navbar;
use crate::ui::session::use_session;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let (board, state) = mount_board(Dashboard::new(ProjectCollection, session.store()));

    load_on_sign_in(move || spawn_board(board, "refresh", |b| async move { b.refresh().await }));

    let projects = Memo::new(move |_| state.with(|s| s.items.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading && s.items.is_empty()));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));

    let pending_delete = Memo::new(move |_| state.with(|s| s.pending_delete.clone()));
    let deleting = Signal::derive(move || state.with(|s| s.deleting));
    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|p| format!("Delete \"{}\"? Its tasks will be deleted too.", p.title))
            .unwrap_or_default()
    });

    let on_new = move |_| board.with_value(|b| b.open_create());
    let on_confirm_delete = Callback::new(move |_| {
        spawn_board(board, "delete", |b| async move { b.confirm_delete().await })
    });
    let on_cancel_delete = Callback::new(move |_| board.with_value(|b| b.cancel_delete()));
    let on_dismiss = Callback::new(move |_| board.with_value(|b| b.dismiss_error()));

    view! {
        <div class="min-h-screen bg-theme-primary">
            <Navbar />

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-theme-primary">"My Projects"</h1>
                        <p class="text-sm text-theme-secondary">
                            {move || match projects.with(|p| p.len()) {
                                1 => "1 project".to_string(),
                                n => format!("{} projects", n),
                            }}
                        </p>
                    </div>
                    <button class="btn-primary flex items-center gap-2" on:click=on_new>
                        <Icon name=icons::PLUS class="icon-text invert"/>
                        "New Project"
                    </button>
                </div>

                <ErrorMessage error=error on_dismiss=on_dismiss />

                {move || {
                    if loading.get() {
                        view! { <LoadingSpinner message="Loading projects...".to_string() /> }.into_any()
                    } else if projects.with(|p| p.is_empty()) {
                        view! { <EmptyProjects board=board /> }.into_any()
                    } else {
                        view! {
                            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                                <For
                                    each=move || projects.get()
                                    key=|p| (p.id, p.title.clone(), p.description.clone())
                                    children=move |project| view! { <ProjectCard project=project board=board /> }
                                />
                            </div>
                        }.into_any()
                    }
                }}
            </main>

            <ProjectFormModal board=board state=state />

            <ConfirmDialog
                title="Delete project".to_string()
                message=delete_message
                is_open=Signal::derive(move || pending_delete.with(|p| p.is_some()))
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
                busy=deleting
                confirm_text="Delete"
                is_destructive=true
                error=error
            />
        </div>
    }
}

#[component]
fn EmptyProjects(board: PageBoard<ProjectCollection>) -> impl IntoView {
    view! {
        <div class="card p-12 text-center space-y-4">
            <Icon name=icons::FOLDER class="w-12 h-12 mx-auto opacity-40"/>
            <div>
                <h2 class="title-lg">"No projects yet"</h2>
                <p class="text-sm text-theme-secondary">"Create your first project to start tracking tasks."</p>
            </div>
            <button class="btn-primary" on:click=move |_| board.with_value(|b| b.open_create())>
                "Create Project"
            </button>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, board: PageBoard<ProjectCollection>) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let created = (!project.created_at.is_empty()).then(|| format_date(&project.created_at));
    let description = (!project.description.is_empty()).then(|| project.description.clone());
    let project = StoredValue::new(project);

    view! {
        <div class="card card-hover p-5 flex flex-col gap-3">
            <div class="flex items-start justify-between gap-2">
                <A href=href attr:class="title-lg hover:text-accent-primary truncate">
                    {project.with_value(|p| p.title.clone())}
                </A>
                <div class="flex items-center gap-1 shrink-0">
                    <IconButton
                        icon=icons::EDIT
                        title="Edit project"
                        on_click=Callback::new(move |_| {
                            project.with_value(|p| board.with_value(|b| b.open_edit(p)))
                        })
                    />
                    <IconButton
                        icon=icons::TRASH
                        title="Delete project"
                        class="hover:bg-red-100"
                        on_click=Callback::new(move |_| {
                            project.with_value(|p| board.with_value(|b| b.request_delete(p)))
                        })
                    />
                </div>
            </div>
            {description.map(|d| view! { <p class="text-sm text-theme-secondary line-clamp-3">{d}</p> })}
            {created.map(|date| view! {
                <div class="mt-auto flex items-center gap-1 text-xs text-theme-tertiary">
                    <Icon name=icons::CALENDAR class="w-3.5 h-3.5"/>
                    {format!("Created {}", date)}
                </div>
            })}
        </div>
    }
}

#[component]
fn ProjectFormModal(
    board: PageBoard<ProjectCollection>,
    state: BoardView<ProjectCollection>,
) -> impl IntoView {
    let is_open = Signal::derive(move || state.with(|s| s.form.mode.is_open()));
    let title = Signal::derive(move || {
        state.with(|s| match s.form.mode {
            FormMode::Editing(_) => "Edit Project".to_string(),
            _ => "New Project".to_string(),
        })
    });
    let submit_text = Signal::derive(move || {
        state.with(|s| match s.form.mode {
            FormMode::Editing(_) => "Save".to_string(),
            _ => "Create".to_string(),
        })
    });
    let busy = Signal::derive(move || state.with(|s| s.form.submitting));
    let form_error = Signal::derive(move || state.with(|s| s.form.error.clone()));

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
                    placeholder="Project title".to_string()
                    value=Signal::derive(move || state.with(|s| s.form.draft.title.clone()))
                    on_input=Callback::new(move |v: String| board.with_value(|b| b.edit_draft(|d| d.title = v)))
                    disabled=busy
                />
                <TextAreaField
                    label="Description".to_string()
                    placeholder="What is this project about?".to_string()
                    value=Signal::derive(move || state.with(|s| s.form.draft.description.clone()))
                    on_input=Callback::new(move |v: String| {
                        board.with_value(|b| b.edit_draft(|d| d.description = v))
                    })
                    disabled=busy
                />
                <ErrorMessage error=form_error />
                <SubmitCancelButtons submit_text=submit_text on_cancel=on_close busy=busy />
            </form>
        </BaseModal>
    }
}
