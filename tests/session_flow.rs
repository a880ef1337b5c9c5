//! Session lifecycle against the in-memory backend

mod support;

use support::{FakeBackend, PASSWORD, email_of, new_store, signed_in};
use taskboard::core::{
    ApiError, Dashboard, ProjectCollection, ProjectDraft, SessionStatus, SessionStore, TaskDraft,
    TaskStatus, TokenStore,
};

#[tokio::test]
async fn test_register_sign_in_create_and_delete_project() {
    let backend = FakeBackend::new();
    let (store, tokens) = new_store(&backend);

    assert_eq!(store.bootstrap().await, SessionStatus::Anonymous);

    store
        .api()
        .register("alice", "alice@example.com", "Password1")
        .await
        .unwrap();
    let profile = store
        .sign_in("alice@example.com", "Password1")
        .await
        .unwrap()
        .applied()
        .unwrap();
    assert_eq!(profile.username, "alice");
    assert_eq!(store.status(), SessionStatus::Authenticated);
    assert_eq!(tokens.load(), store.token());

    let dashboard = Dashboard::new(ProjectCollection, store.clone());
    dashboard.refresh().await.unwrap();
    assert!(dashboard.state().items.is_empty());

    dashboard.open_create();
    dashboard.edit_draft(|d| d.title = "P1".to_string());
    let created = dashboard.submit().await.unwrap().unwrap();

    let state = dashboard.state();
    assert!(!state.form.mode.is_open());
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "P1");

    dashboard.request_delete(&created);
    assert!(dashboard.confirm_delete().await.unwrap());
    let state = dashboard.state();
    assert!(state.items.is_empty());
    assert!(state.pending_delete.is_none());
}

#[tokio::test]
async fn test_sign_in_after_logout_shows_latest_profile() {
    let backend = FakeBackend::new();
    let (store, tokens) = signed_in(&backend, "alice").await;
    backend.seed_user("bob", &email_of("bob"), PASSWORD);

    store.logout();
    assert_eq!(store.status(), SessionStatus::Anonymous);
    assert!(tokens.load().is_none());

    store.sign_in(&email_of("bob"), PASSWORD).await.unwrap();
    assert_eq!(store.profile().map(|p| p.username), Some("bob".to_string()));
}

#[tokio::test]
async fn test_rejected_token_signs_out_without_banner() {
    let backend = FakeBackend::new();
    let (store, tokens) = signed_in(&backend, "alice").await;
    let dashboard = Dashboard::new(ProjectCollection, store.clone());

    backend.revoke_all_tokens();
    let err = dashboard.refresh().await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(store.status(), SessionStatus::Anonymous);
    assert!(tokens.load().is_none());
    assert!(dashboard.state().error.is_none());
}

/// Every call made with the session's bearer token
#[derive(Debug, Clone, Copy)]
enum BearerCall {
    Profile,
    GetProject,
    CreateProject,
    UpdateProject,
    DeleteProject,
    ListTasks,
    CreateTask,
    UpdateTask,
    DeleteTask,
}

impl BearerCall {
    const ALL: [BearerCall; 9] = [
        BearerCall::Profile,
        BearerCall::GetProject,
        BearerCall::CreateProject,
        BearerCall::UpdateProject,
        BearerCall::DeleteProject,
        BearerCall::ListTasks,
        BearerCall::CreateTask,
        BearerCall::UpdateTask,
        BearerCall::DeleteTask,
    ];

    async fn run(
        self,
        store: &SessionStore<FakeBackend>,
        project_id: i64,
        task_id: i64,
    ) -> Result<(), ApiError> {
        let api = store.authorized();
        let project = ProjectDraft {
            title: "Renamed".to_string(),
            ..Default::default()
        };
        let task = TaskDraft {
            title: "Moved".to_string(),
            status: TaskStatus::Done,
            ..Default::default()
        };
        match self {
            BearerCall::Profile => api.get_profile().await.map(drop),
            BearerCall::GetProject => api.get_project(project_id).await.map(drop),
            BearerCall::CreateProject => api.create_project(&project).await.map(drop),
            BearerCall::UpdateProject => api.update_project(project_id, &project).await.map(drop),
            BearerCall::DeleteProject => api.delete_project(project_id).await,
            BearerCall::ListTasks => api.list_tasks(project_id).await.map(drop),
            BearerCall::CreateTask => api.create_task(project_id, &task).await.map(drop),
            BearerCall::UpdateTask => api.update_task(task_id, &task).await.map(drop),
            BearerCall::DeleteTask => api.delete_task(task_id).await,
        }
    }
}

#[tokio::test]
async fn test_any_rejected_bearer_call_signs_out() {
    for call in BearerCall::ALL {
        let backend = FakeBackend::new();
        let (store, tokens) = signed_in(&backend, "alice").await;
        let api = store.authorized();
        let project = api
            .create_project(&ProjectDraft {
                title: "P1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let task = api
            .create_task(
                project.id,
                &TaskDraft {
                    title: "T1".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        backend.revoke_all_tokens();
        backend.clear_log();
        let result = call.run(&store, project.id, task.id).await;

        assert_eq!(result, Err(ApiError::Unauthorized), "{:?}", call);
        assert_eq!(backend.log().len(), 1, "{:?}", call);
        assert_eq!(store.status(), SessionStatus::Anonymous, "{:?}", call);
        assert!(tokens.load().is_none(), "{:?}", call);
        assert!(store.token().is_none(), "{:?}", call);
    }
}

#[tokio::test]
async fn test_bootstrap_restores_persisted_session() {
    let backend = FakeBackend::new();
    let (_first, tokens) = signed_in(&backend, "alice").await;

    let reopened = taskboard::core::SessionStore::new(
        taskboard::core::Api::new(backend.clone()),
        tokens.clone(),
    );
    assert_eq!(reopened.status(), SessionStatus::Initializing);
    assert_eq!(reopened.bootstrap().await, SessionStatus::Authenticated);
    assert_eq!(reopened.profile().map(|p| p.username), Some("alice".to_string()));

    // Only the first bootstrap does anything
    backend.clear_log();
    reopened.bootstrap().await;
    assert!(backend.log().is_empty());
}

#[tokio::test]
async fn test_bootstrap_discards_revoked_token() {
    let backend = FakeBackend::new();
    let (_first, tokens) = signed_in(&backend, "alice").await;
    backend.revoke_all_tokens();

    let reopened = taskboard::core::SessionStore::new(
        taskboard::core::Api::new(backend.clone()),
        tokens.clone(),
    );
    assert_eq!(reopened.bootstrap().await, SessionStatus::Anonymous);
    assert!(tokens.load().is_none());
}

#[tokio::test]
async fn test_wrong_password_is_reported_not_expired() {
    let backend = FakeBackend::new();
    backend.seed_user("alice", &email_of("alice"), PASSWORD);
    let (store, _tokens) = new_store(&backend);
    store.bootstrap().await;

    let err = store
        .sign_in(&email_of("alice"), "WrongPass1")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Server {
            status: 401,
            message: "Invalid credentials".to_string()
        }
    );
    assert!(err.should_display());
    assert_eq!(store.status(), SessionStatus::Anonymous);
}

#[tokio::test]
async fn test_duplicate_registration_shows_server_detail() {
    let backend = FakeBackend::new();
    backend.seed_user("alice", &email_of("alice"), PASSWORD);
    let (store, _tokens) = new_store(&backend);

    let err = store
        .api()
        .register("alice2", &email_of("alice"), PASSWORD)
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Email already registered");
}

#[tokio::test]
async fn test_password_reset_replaces_password() {
    let backend = FakeBackend::new();
    backend.seed_user("alice", &email_of("alice"), PASSWORD);
    let (store, _tokens) = new_store(&backend);

    store
        .api()
        .request_password_reset(&email_of("alice"))
        .await
        .unwrap();
    let reset_token = backend.issue_reset_token(&email_of("alice")).unwrap();
    store
        .api()
        .reset_password(&reset_token, "NewPassw0rd")
        .await
        .unwrap();

    assert!(store.sign_in(&email_of("alice"), PASSWORD).await.is_err());
    assert!(store.sign_in(&email_of("alice"), "NewPassw0rd").await.is_ok());

    // Reset tokens are single use
    let err = store
        .api()
        .reset_password(&reset_token, "Another1Pass")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_offline_backend_gives_network_error() {
    let backend = FakeBackend::new();
    let (store, _tokens) = new_store(&backend);
    backend.set_offline(true);

    let err = store.sign_in("a@example.com", PASSWORD).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(
        err.user_message(),
        "Network error. Please check your connection and try again."
    );
}
