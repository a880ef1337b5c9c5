//! View controllers for the dashboard and the project detail page
//!
//! A [`Board`] owns one list snapshot, one error slot, the create/edit form
//! and the delete confirmation. Every successful mutation is followed by a
//! full refetch; the list is never patched locally. Refetches carry a ticket
//! like the session's profile fetches, so the latest one wins.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::{ArcReadSignal, ArcRwSignal, GetUntracked, WithUntracked, Write};

use super::error::ApiError;
use super::models::{Project, ProjectDraft, ProjectId, Task, TaskDraft, TaskStatus};
use super::session::{Authorized, Resolution, SessionStatus, SessionStore};
use super::transport::Transport;
use super::validation::{ValidationError, validate_required};

/// One kind of entity a board can list and edit
pub trait Collection: Send + Sync + 'static {
    type Item: Clone + std::fmt::Debug + Send + Sync + 'static;
    type Draft: Clone + Default + std::fmt::Debug + Send + Sync + for<'a> From<&'a Self::Item> + 'static;

    /// Used in log lines
    const NOUN: &'static str;

    fn id_of(item: &Self::Item) -> i64;

    /// Name shown in the delete confirmation
    fn title_of(item: &Self::Item) -> &str;

    fn validate(draft: &Self::Draft) -> Result<(), ValidationError>;

    fn list<T: Transport>(
        &self,
        api: &Authorized<'_, T>,
    ) -> impl Future<Output = Result<Vec<Self::Item>, ApiError>>;

    fn create<T: Transport>(
        &self,
        api: &Authorized<'_, T>,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<Self::Item, ApiError>>;

    fn update<T: Transport>(
        &self,
        api: &Authorized<'_, T>,
        id: i64,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<Self::Item, ApiError>>;

    fn delete<T: Transport>(
        &self,
        api: &Authorized<'_, T>,
        id: i64,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

/// The signed-in user's projects
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectCollection;

impl Collection for ProjectCollection {
    type Item = Project;
    type Draft = ProjectDraft;

    const NOUN: &'static str = "project";

    fn id_of(item: &Project) -> i64 {
        item.id
    }

    fn title_of(item: &Project) -> &str {
        &item.title
    }

    fn validate(draft: &ProjectDraft) -> Result<(), ValidationError> {
        validate_required("Title", &draft.title)
    }

    async fn list<T: Transport>(&self, api: &Authorized<'_, T>) -> Result<Vec<Project>, ApiError> {
        api.list_projects().await
    }

    async fn create<T: Transport>(
        &self,
        api: &Authorized<'_, T>,
        draft: &ProjectDraft,
    ) -> Result<Project, ApiError> {
        api.create_project(draft).await
    }

    async fn update<T: Transport>(
        &self,
        api: &Authorized<'_, T>,
        id: i64,
        draft: &ProjectDraft,
    ) -> Result<Project, ApiError> {
        api.update_project(id, draft).await
    }

    async fn delete<T: Transport>(&self, api: &Authorized<'_, T>, id: i64) -> Result<(), ApiError> {
        api.delete_project(id).await
    }
}

/// Tasks of one project
#[derive(Debug, Clone, Copy)]
pub struct TaskCollection {
    pub project_id: ProjectId,
}

impl Collection for TaskCollection {
    type Item = Task;
    type Draft = TaskDraft;

    const NOUN: &'static str = "task";

    fn id_of(item: &Task) -> i64 {
        item.id
    }

    fn title_of(item: &Task) -> &str {
        &item.title
    }

    fn validate(draft: &TaskDraft) -> Result<(), ValidationError> {
        validate_required("Title", &draft.title)
    }

    async fn list<T: Transport>(&self, api: &Authorized<'_, T>) -> Result<Vec<Task>, ApiError> {
        api.list_tasks(self.project_id).await
    }

    async fn create<T: Transport>(
        &self,
        api: &Authorized<'_, T>,
        draft: &TaskDraft,
    ) -> Result<Task, ApiError> {
        api.create_task(self.project_id, draft).await
    }

    async fn update<T: Transport>(
        &self,
        api: &Authorized<'_, T>,
        id: i64,
        draft: &TaskDraft,
    ) -> Result<Task, ApiError> {
        api.update_task(id, draft).await
    }

    async fn delete<T: Transport>(&self, api: &Authorized<'_, T>, id: i64) -> Result<(), ApiError> {
        api.delete_task(id).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode<I> {
    Closed,
    Creating,
    Editing(I),
}

impl<I> FormMode<I> {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormMode::Closed)
    }
}

/// Create/edit modal
#[derive(Debug, Clone)]
pub struct FormState<I, D> {
    pub mode: FormMode<I>,
    pub draft: D,
    /// Inline message; validation and server errors land here
    pub error: Option<String>,
    pub submitting: bool,
}

impl<I, D: Default> Default for FormState<I, D> {
    fn default() -> Self {
        Self {
            mode: FormMode::Closed,
            draft: D::default(),
            error: None,
            submitting: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoardState<I, D> {
    pub items: Vec<I>,
    pub loading: bool,
    /// Page banner; a new error replaces the old one
    pub error: Option<String>,
    pub form: FormState<I, D>,
    /// Entity awaiting delete confirmation
    pub pending_delete: Option<I>,
    pub deleting: bool,
    generation: u64,
}

impl<I, D: Default> Default for BoardState<I, D> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            form: FormState::default(),
            pending_delete: None,
            deleting: false,
            generation: 0,
        }
    }
}

impl<D> BoardState<Task, D> {
    /// Status columns, recomputed from the snapshot on every call
    pub fn columns(&self) -> TaskColumns {
        partition_tasks(&self.items)
    }
}

pub type StateOf<C> = BoardState<<C as Collection>::Item, <C as Collection>::Draft>;

/// A list fetch is due when the session has just become Authenticated
pub fn entered_authenticated(previous: SessionStatus, current: SessionStatus) -> bool {
    previous != SessionStatus::Authenticated && current == SessionStatus::Authenticated
}

pub struct Board<C: Collection, T> {
    collection: Arc<C>,
    session: SessionStore<T>,
    state: ArcRwSignal<StateOf<C>>,
}

impl<C: Collection, T> Clone for Board<C, T> {
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
            session: self.session.clone(),
            state: self.state.clone(),
        }
    }
}

pub type Dashboard<T> = Board<ProjectCollection, T>;
pub type TaskBoard<T> = Board<TaskCollection, T>;

impl<C: Collection, T: Transport> Board<C, T> {
    pub fn new(collection: C, session: SessionStore<T>) -> Self {
        Self {
            collection: Arc::new(collection),
            session,
            state: ArcRwSignal::new(BoardState::default()),
        }
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Untracked snapshot
    pub fn state(&self) -> StateOf<C> {
        self.state.get_untracked()
    }

    /// Read-only handle for views; reads through it are tracked
    pub fn state_signal(&self) -> ArcReadSignal<StateOf<C>> {
        self.state.read_only()
    }

    fn update<R>(&self, f: impl FnOnce(&mut StateOf<C>) -> R) -> R {
        f(&mut *self.state.write())
    }

    /// Fetch the full list. A fetch overtaken by a newer one changes nothing.
    pub async fn refresh(&self) -> Result<Resolution<()>, ApiError> {
        let ticket = self.update(|s| {
            s.generation += 1;
            s.loading = true;
            s.generation
        });

        let result = self.collection.list(&self.session.authorized()).await;

        self.update(move |s| {
            if s.generation != ticket {
                tracing::debug!(noun = C::NOUN, ticket, "discarding stale list response");
                return Ok(Resolution::Stale);
            }
            s.loading = false;
            match result {
                Ok(items) => {
                    tracing::debug!(noun = C::NOUN, count = items.len(), "list refreshed");
                    s.items = items;
                    s.error = None;
                    Ok(Resolution::Applied(()))
                }
                Err(e) => {
                    tracing::warn!(noun = C::NOUN, error = %e, "list fetch failed");
                    s.error = e.should_display().then(|| e.user_message());
                    Err(e)
                }
            }
        })
    }

    /// Show an error in the page banner (Unauthorized is never shown)
    pub fn report(&self, error: &ApiError) {
        self.update(|s| s.error = error.should_display().then(|| error.user_message()));
    }

    pub fn dismiss_error(&self) {
        self.update(|s| s.error = None);
    }

    pub fn open_create(&self) {
        self.update(|s| {
            s.form = FormState {
                mode: FormMode::Creating,
                ..FormState::default()
            };
        });
    }

    pub fn open_edit(&self, item: &C::Item) {
        self.update(|s| {
            s.form = FormState {
                mode: FormMode::Editing(item.clone()),
                draft: C::Draft::from(item),
                error: None,
                submitting: false,
            };
        });
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut C::Draft)) {
        self.update(|s| edit(&mut s.form.draft));
    }

    pub fn close_form(&self) {
        self.update(|s| s.form = FormState::default());
    }

    /// Validate and send the open form. Validation failures never reach the
    /// server. On success the form closes and the list is refetched; on
    /// failure the form stays open with the message inline. `Ok(None)` when
    /// there was nothing to submit.
    pub async fn submit(&self) -> Result<Option<C::Item>, ApiError> {
        let prepared = self.update(|s| {
            if s.form.submitting || !s.form.mode.is_open() {
                return None;
            }
            if let Err(e) = C::validate(&s.form.draft) {
                s.form.error = Some(e.to_string());
                return Some(Err(e));
            }
            s.form.submitting = true;
            s.form.error = None;
            Some(Ok((s.form.mode.clone(), s.form.draft.clone())))
        });
        let Some(prepared) = prepared else {
            return Ok(None);
        };
        let (mode, draft) = prepared?;

        let api = self.session.authorized();
        let result = match &mode {
            FormMode::Editing(item) => self.collection.update(&api, C::id_of(item), &draft).await,
            _ => self.collection.create(&api, &draft).await,
        };

        match result {
            Ok(item) => {
                tracing::info!(noun = C::NOUN, id = C::id_of(&item), "saved");
                self.update(|s| s.form = FormState::default());
                if let Err(e) = self.refresh().await {
                    tracing::debug!(noun = C::NOUN, error = %e, "refetch after save failed");
                }
                Ok(Some(item))
            }
            Err(e) => {
                tracing::warn!(noun = C::NOUN, error = %e, "save failed");
                self.update(|s| {
                    s.form.submitting = false;
                    s.form.error = e.should_display().then(|| e.user_message());
                });
                Err(e)
            }
        }
    }

    pub fn request_delete(&self, item: &C::Item) {
        self.update(|s| s.pending_delete = Some(item.clone()));
    }

    pub fn cancel_delete(&self) {
        self.update(|s| {
            if !s.deleting {
                s.pending_delete = None;
            }
        });
    }

    /// Delete the entity awaiting confirmation. On failure the entity stays
    /// listed, the confirmation stays open and the error goes to the banner.
    /// `Ok(false)` when nothing was pending.
    pub async fn confirm_delete(&self) -> Result<bool, ApiError> {
        let target = self.update(|s| {
            if s.deleting {
                return None;
            }
            let target = s.pending_delete.clone()?;
            s.deleting = true;
            Some(target)
        });
        let Some(target) = target else {
            return Ok(false);
        };

        let id = C::id_of(&target);
        let result = self
            .collection
            .delete(&self.session.authorized(), id)
            .await;

        match result {
            Ok(()) => {
                tracing::info!(noun = C::NOUN, id, "deleted");
                self.update(|s| {
                    s.pending_delete = None;
                    s.deleting = false;
                });
                if let Err(e) = self.refresh().await {
                    tracing::debug!(noun = C::NOUN, error = %e, "refetch after delete failed");
                }
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(noun = C::NOUN, id, error = %e, "delete failed");
                self.update(|s| {
                    s.deleting = false;
                    s.error = e.should_display().then(|| e.user_message());
                });
                Err(e)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    pub project: Option<Project>,
    generation: u64,
}

/// Project detail page: the project header plus its task board
pub struct ProjectDetail<T> {
    project_id: ProjectId,
    tasks: TaskBoard<T>,
    header: ArcRwSignal<HeaderState>,
}

impl<T> Clone for ProjectDetail<T> {
    fn clone(&self) -> Self {
        Self {
            project_id: self.project_id,
            tasks: self.tasks.clone(),
            header: self.header.clone(),
        }
    }
}

impl<T: Transport> ProjectDetail<T> {
    pub fn new(project_id: ProjectId, session: SessionStore<T>) -> Self {
        Self {
            project_id,
            tasks: Board::new(TaskCollection { project_id }, session),
            header: ArcRwSignal::new(HeaderState::default()),
        }
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn tasks(&self) -> &TaskBoard<T> {
        &self.tasks
    }

    pub fn project(&self) -> Option<Project> {
        self.header.with_untracked(|h| h.project.clone())
    }

    pub fn header_signal(&self) -> ArcReadSignal<HeaderState> {
        self.header.read_only()
    }

    /// Fetch the project itself. Errors go to the task board's banner.
    pub async fn load_project(&self) -> Result<Resolution<()>, ApiError> {
        let ticket = {
            let mut h = self.header.write();
            h.generation += 1;
            h.generation
        };

        let result = self
            .tasks
            .session
            .authorized()
            .get_project(self.project_id)
            .await;

        let applied = {
            let mut h = self.header.write();
            let current = h.generation == ticket;
            if let (true, Ok(project)) = (current, &result) {
                h.project = Some(project.clone());
            }
            current
        };
        if !applied {
            tracing::debug!(project_id = self.project_id, "discarding stale project response");
            return Ok(Resolution::Stale);
        }

        match result {
            Ok(_) => Ok(Resolution::Applied(())),
            Err(e) => {
                tracing::warn!(project_id = self.project_id, error = %e, "project fetch failed");
                self.tasks.report(&e);
                Err(e)
            }
        }
    }

    /// Header first, then the tasks. A failed header fetch does not stop
    /// the task fetch; its error stays in the banner and is returned when
    /// the tasks load fine. A 401 stops both.
    pub async fn refresh(&self) -> Result<Resolution<()>, ApiError> {
        let header = self.load_project().await;
        if header.as_ref().is_err_and(ApiError::is_unauthorized) {
            return Err(ApiError::Unauthorized);
        }
        let tasks = self.tasks.refresh().await?;
        match header {
            Ok(_) => Ok(tasks),
            Err(e) => {
                // The task refetch cleared the banner.
                self.tasks.report(&e);
                Err(e)
            }
        }
    }
}

/// Tasks split by status, one bucket per board column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskColumns {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl TaskColumns {
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every task lands in exactly one bucket; order within a bucket follows the
/// input.
pub fn partition_tasks(tasks: &[Task]) -> TaskColumns {
    let mut columns = TaskColumns::default();
    for task in tasks {
        let bucket = match task.status {
            TaskStatus::Todo => &mut columns.todo,
            TaskStatus::InProgress => &mut columns.in_progress,
            TaskStatus::Done => &mut columns.done,
        };
        bucket.push(task.clone());
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::Api;
    use crate::core::storage::MemoryTokenStore;
    use crate::core::test_support::{Gate, Scripted, profile_json};
    use crate::core::transport::Method;

    fn task(id: i64, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            description: String::new(),
            status,
            due_date: None,
        }
    }

    async fn signed_in(script: &Scripted) -> SessionStore<Scripted> {
        let store = SessionStore::new(Api::new(script.clone()), MemoryTokenStore::new());
        script.reply(200, &profile_json(1, "alice"));
        store.login("T".into()).await.unwrap();
        store
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        let lists = vec![
            vec![],
            vec![task(1, TaskStatus::Done)],
            vec![
                task(1, TaskStatus::Todo),
                task(2, TaskStatus::InProgress),
                task(3, TaskStatus::Done),
                task(4, TaskStatus::Todo),
            ],
            (0..30)
                .map(|i| task(i, TaskStatus::ALL[(i % 3) as usize]))
                .collect(),
        ];

        for tasks in lists {
            let columns = partition_tasks(&tasks);
            assert_eq!(columns.len(), tasks.len());
            for t in &tasks {
                let hits: usize = TaskStatus::ALL
                    .iter()
                    .map(|s| columns.column(*s).iter().filter(|c| c.id == t.id).count())
                    .sum();
                assert_eq!(hits, 1);
                assert!(columns.column(t.status).contains(t));
            }
        }
    }

    #[test]
    fn test_entered_authenticated() {
        use SessionStatus::*;
        assert!(entered_authenticated(Initializing, Authenticated));
        assert!(entered_authenticated(Anonymous, Authenticated));
        assert!(!entered_authenticated(Authenticated, Authenticated));
        assert!(!entered_authenticated(Authenticated, Anonymous));
    }

    #[tokio::test]
    async fn test_refresh_fills_snapshot() {
        let script = Scripted::default();
        let board = Board::new(ProjectCollection, signed_in(&script).await);
        script.reply(200, r#"[{"id":1,"title":"P1","description":"d"}]"#);

        assert_eq!(board.refresh().await, Ok(Resolution::Applied(())));
        let state = board.state();
        assert!(!state.loading);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].title, "P1");
    }

    #[tokio::test]
    async fn test_latest_refresh_wins() {
        let gate = Gate::default();
        let store = SessionStore::new(Api::new(gate.clone()), MemoryTokenStore::new());
        let board = Board::new(ProjectCollection, store.clone());

        let (login, _) = futures::join!(store.login("T".into()), async {
            gate.answer_nth(0, 200, &profile_json(1, "alice"));
        });
        login.unwrap();

        let (first, second, _) = futures::join!(board.refresh(), board.refresh(), async {
            gate.answer_nth(1, 200, r#"[{"id":2,"title":"new"}]"#);
            gate.answer_nth(0, 200, r#"[{"id":1,"title":"old"}]"#);
        });

        assert_eq!(first, Ok(Resolution::Stale));
        assert_eq!(second, Ok(Resolution::Applied(())));
        assert_eq!(board.state().items[0].title, "new");
    }

    #[tokio::test]
    async fn test_unauthorized_refresh_logs_out_without_banner() {
        let script = Scripted::default();
        let store = signed_in(&script).await;
        let board = Board::new(ProjectCollection, store.clone());
        script.reply(401, r#"{"detail":"Token expired"}"#);

        assert_eq!(board.refresh().await, Err(ApiError::Unauthorized));
        assert_eq!(store.status(), SessionStatus::Anonymous);
        assert!(board.state().error.is_none());
    }

    #[tokio::test]
    async fn test_validation_blocks_submit() {
        let script = Scripted::default();
        let board = Board::new(ProjectCollection, signed_in(&script).await);
        let sent_before = script.sent().len();

        board.open_create();
        board.edit_draft(|d| d.title = "   ".into());
        let result = board.submit().await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert_eq!(script.sent().len(), sent_before);
        let state = board.state();
        assert!(state.form.mode.is_open());
        assert_eq!(state.form.error.as_deref(), Some("Title is required"));
    }

    #[tokio::test]
    async fn test_create_closes_form_and_refetches() {
        let script = Scripted::default();
        let board = Board::new(ProjectCollection, signed_in(&script).await);

        board.open_create();
        board.edit_draft(|d| {
            d.title = "P1".into();
            d.description = "d".into();
        });
        script
            .reply(201, r#"{"id":9,"title":"P1","description":"d"}"#)
            .reply(200, r#"[{"id":9,"title":"P1","description":"d"}]"#);

        let created = board.submit().await.unwrap().unwrap();

        assert_eq!(created.id, 9);
        assert_eq!(
            script.log()[1..],
            ["POST /projects".to_string(), "GET /projects".to_string()]
        );
        let state = board.state();
        assert!(!state.form.mode.is_open());
        assert_eq!(state.items.len(), 1);
    }

    #[tokio::test]
    async fn test_edit_prefills_and_failure_keeps_form_open() {
        let script = Scripted::default();
        let board = Board::new(
            TaskCollection { project_id: 3 },
            signed_in(&script).await,
        );
        let existing = task(5, TaskStatus::InProgress);

        board.open_edit(&existing);
        assert_eq!(board.state().form.draft.title, "task 5");
        assert_eq!(board.state().form.draft.status, TaskStatus::InProgress);

        board.edit_draft(|d| d.status = TaskStatus::Done);
        script.reply(422, r#"{"detail":"Invalid status"}"#);
        let result = board.submit().await;

        assert!(matches!(result, Err(ApiError::Server { status: 422, .. })));
        let sent = script.sent();
        let put = sent.last().unwrap();
        assert_eq!(put.method, Method::Put);
        assert_eq!(put.path, "/tasks/5");
        assert_eq!(put.body.as_ref().unwrap()["status"], "termine");

        let state = board.state();
        assert_eq!(state.form.mode, FormMode::Editing(existing));
        assert_eq!(state.form.error.as_deref(), Some("Invalid status"));
        assert!(!state.form.submitting);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_entity() {
        let script = Scripted::default();
        let board = Board::new(ProjectCollection, signed_in(&script).await);
        script.reply(200, r#"[{"id":1,"title":"P1"}]"#);
        board.refresh().await.unwrap();

        let target = board.state().items[0].clone();
        board.request_delete(&target);
        script.reply(500, r#"{"detail":"Cannot delete"}"#);

        assert!(board.confirm_delete().await.is_err());
        let state = board.state();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Cannot delete"));
        assert_eq!(state.pending_delete.map(|p| p.id), Some(1));
        assert!(!state.deleting);
    }

    #[tokio::test]
    async fn test_delete_success_refetches() {
        let script = Scripted::default();
        let board = Board::new(ProjectCollection, signed_in(&script).await);
        script.reply(200, r#"[{"id":1,"title":"P1"}]"#);
        board.refresh().await.unwrap();

        board.request_delete(&board.state().items[0]);
        script.reply(204, "").reply(200, "[]");

        assert_eq!(board.confirm_delete().await, Ok(true));
        let state = board.state();
        assert!(state.items.is_empty());
        assert!(state.pending_delete.is_none());
        assert_eq!(board.confirm_delete().await, Ok(false));
    }

    #[tokio::test]
    async fn test_project_detail_loads_header_and_columns() {
        let script = Scripted::default();
        let detail = ProjectDetail::new(3, signed_in(&script).await);
        script
            .reply(200, r#"{"id":3,"title":"Launch","description":"Q3"}"#)
            .reply(
                200,
                r#"[{"id":1,"title":"a","status":"a_faire"},{"id":2,"title":"b","status":"termine"}]"#,
            );

        detail.refresh().await.unwrap();

        assert_eq!(detail.project().unwrap().title, "Launch");
        let columns = detail.tasks().state().columns();
        assert_eq!(columns.todo.len(), 1);
        assert_eq!(columns.done.len(), 1);
        assert!(columns.in_progress.is_empty());
        assert_eq!(script.log()[1..], ["GET /projects/3", "GET /projects/3/tasks"]);
    }

    #[tokio::test]
    async fn test_missing_project_reports_error() {
        let script = Scripted::default();
        let detail = ProjectDetail::new(42, signed_in(&script).await);
        script
            .reply(404, r#"{"detail":"Project not found"}"#)
            .reply(404, r#"{"detail":"Project not found"}"#);

        assert!(detail.refresh().await.is_err());
        assert!(detail.project().is_none());
        assert_eq!(
            detail.tasks().state().error.as_deref(),
            Some("Project not found")
        );
    }

    #[tokio::test]
    async fn test_header_failure_still_loads_tasks() {
        let script = Scripted::default();
        let detail = ProjectDetail::new(3, signed_in(&script).await);
        script
            .reply(500, r#"{"detail":"Header unavailable"}"#)
            .reply(200, r#"[{"id":1,"title":"a","status":"en_cours"}]"#);

        let result = detail.refresh().await;

        assert!(matches!(result, Err(ApiError::Server { status: 500, .. })));
        assert_eq!(script.log()[1..], ["GET /projects/3", "GET /projects/3/tasks"]);
        let state = detail.tasks().state();
        assert_eq!(state.columns().in_progress.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Header unavailable"));
        assert!(detail.project().is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_header_skips_tasks() {
        let script = Scripted::default();
        let store = signed_in(&script).await;
        let detail = ProjectDetail::new(3, store.clone());
        script.reply(401, r#"{"detail":"Token expired"}"#);

        assert_eq!(detail.refresh().await, Err(ApiError::Unauthorized));
        assert_eq!(script.log()[1..], ["GET /projects/3"]);
        assert_eq!(store.status(), SessionStatus::Anonymous);
    }

    #[test]
    fn test_state_signal_follows_updates() {
        let store = SessionStore::new(Api::new(Scripted::default()), MemoryTokenStore::new());
        let board = Board::new(ProjectCollection, store);
        let view = board.state_signal();

        board.open_create();
        assert!(view.with_untracked(|s| s.form.mode.is_open()));
        board.close_form();
        assert!(!view.with_untracked(|s| s.form.mode.is_open()));
    }
}
