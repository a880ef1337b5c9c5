//! Session store: the single owner of the access token and the profile
//!
//! ```text
//!                 bootstrap / login
//!  Initializing ─────────────────────┬──> Authenticated
//!       │                            │          │
//!       └──(no token / fetch failed)─┴──> Anonymous <── logout / 401
//! ```
//!
//! Every profile fetch takes a ticket from a generation counter; logout also
//! bumps it. A fetch whose ticket is no longer current when it resolves is
//! dropped, so the last-issued fetch decides the state.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::api::{Api, mask_token};
use super::error::ApiError;
use leptos::prelude::{ArcRwSignal, With, WithUntracked, Write};

use super::models::{Profile, Project, ProjectDraft, ProjectId, Task, TaskDraft, TaskId};
use super::storage::TokenStore;
use super::transport::Transport;

/// Authentication state as seen by the route guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionStatus {
    /// Restoring or validating a token; nothing protected may render yet
    Initializing,
    Anonymous,
    Authenticated,
}

/// Client-side session record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// App start, before the stored token has been looked at
    #[default]
    Initializing,
    /// No usable token
    Anonymous,
    /// Token stored, profile fetch in flight
    Resolving { token: String },
    Authenticated { token: String, profile: Profile },
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        match self {
            Session::Initializing | Session::Resolving { .. } => SessionStatus::Initializing,
            Session::Anonymous => SessionStatus::Anonymous,
            Session::Authenticated { .. } => SessionStatus::Authenticated,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Resolving { token } | Session::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Session::Authenticated { profile, .. } => Some(profile),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

/// Outcome of an async operation whose result may have been overtaken by a
/// newer one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// The result was applied to the state
    Applied(T),
    /// A newer request (or a logout) superseded this one; nothing changed
    Stale,
}

impl<T> Resolution<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            Resolution::Applied(value) => Some(value),
            Resolution::Stale => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Resolution::Stale)
    }
}

#[derive(Debug, Clone, Default)]
struct SessionState {
    session: Session,
    generation: u64,
}

pub struct SessionStore<T> {
    api: Arc<Api<T>>,
    tokens: Arc<dyn TokenStore>,
    state: ArcRwSignal<SessionState>,
    bootstrapped: Arc<AtomicBool>,
}

impl<T> Clone for SessionStore<T> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            tokens: Arc::clone(&self.tokens),
            state: self.state.clone(),
            bootstrapped: Arc::clone(&self.bootstrapped),
        }
    }
}

impl<T: Transport> SessionStore<T> {
    pub fn new(api: Api<T>, tokens: impl TokenStore + 'static) -> Self {
        Self {
            api: Arc::new(api),
            tokens: Arc::new(tokens),
            state: ArcRwSignal::new(SessionState::default()),
            bootstrapped: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn api(&self) -> &Api<T> {
        &self.api
    }

    pub fn session(&self) -> Session {
        self.state.with_untracked(|s| s.session.clone())
    }

    pub fn status(&self) -> SessionStatus {
        self.state.with_untracked(|s| s.session.status())
    }

    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.session.token().map(str::to_string))
    }

    pub fn profile(&self) -> Option<Profile> {
        self.state.with_untracked(|s| s.session.profile().cloned())
    }

    /// Tracked read: an effect or view calling this re-runs on every
    /// session transition.
    pub fn watch<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.state.with(|s| f(&s.session))
    }

    fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut *self.state.write())
    }

    /// Gateway calls that carry the current token and log out on 401
    pub fn authorized(&self) -> Authorized<'_, T> {
        Authorized { session: self }
    }

    /// Restore the session from the persisted token. Runs once per store;
    /// later calls return the current status without doing anything.
    pub async fn bootstrap(&self) -> SessionStatus {
        if self.bootstrapped.swap(true, Ordering::SeqCst) {
            tracing::debug!("session bootstrap already started, ignoring");
            return self.status();
        }

        let Some(token) = self.tokens.load() else {
            tracing::debug!("no stored token, session is anonymous");
            self.update(|s| {
                if matches!(s.session, Session::Initializing) {
                    s.session = Session::Anonymous;
                }
            });
            return self.status();
        };

        tracing::debug!(token = %mask_token(&token), "restoring stored session");
        if let Err(e) = self.resolve(token).await {
            tracing::info!(error = %e, "stored token rejected, session cleared");
        }
        self.status()
    }

    /// Adopt a freshly issued access token: persist it, fetch the profile,
    /// and become Authenticated. On failure the token is discarded and the
    /// error returned. The route guard sees the Authenticated status and
    /// takes the user to the dashboard.
    pub async fn login(&self, token: String) -> Result<Resolution<Profile>, ApiError> {
        self.tokens.save(&token);
        // A login makes any pending bootstrap irrelevant.
        self.bootstrapped.store(true, Ordering::SeqCst);
        self.resolve(token).await
    }

    /// Credentials → token → profile
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Resolution<Profile>, ApiError> {
        let token = self.api.login(email, password).await?;
        self.login(token).await
    }

    /// Clear the persisted token and the in-memory session. Safe to call in
    /// any state; the route guard turns the resulting Anonymous status into
    /// a redirect to the login screen.
    pub fn logout(&self) {
        self.tokens.clear();
        let previous = self.update(|s| {
            s.generation += 1;
            std::mem::replace(&mut s.session, Session::Anonymous)
        });
        if let Some(profile) = previous.profile() {
            tracing::info!(user = %profile.username, "signed out");
        }
    }

    /// Logout triggered by a 401 for `token`. Ignored when the session has
    /// since moved on to another token.
    fn expire(&self, token: &str) {
        if self.token().as_deref() == Some(token) {
            tracing::info!(token = %mask_token(token), "token rejected by server, signing out");
            self.logout();
        } else {
            tracing::debug!("401 for a token that is no longer current, ignoring");
        }
    }

    async fn resolve(&self, token: String) -> Result<Resolution<Profile>, ApiError> {
        let ticket = self.update(|s| {
            s.generation += 1;
            s.session = Session::Resolving {
                token: token.clone(),
            };
            s.generation
        });

        let result = self.api.get_profile(&token).await;

        let tokens = Arc::clone(&self.tokens);
        self.update(move |s| {
            if s.generation != ticket {
                tracing::debug!(ticket, current = s.generation, "discarding stale profile response");
                return Ok(Resolution::Stale);
            }
            match result {
                Ok(profile) => {
                    tracing::info!(user = %profile.username, "session authenticated");
                    s.session = Session::Authenticated {
                        token,
                        profile: profile.clone(),
                    };
                    Ok(Resolution::Applied(profile))
                }
                Err(e) => {
                    tokens.clear();
                    s.session = Session::Anonymous;
                    Err(e)
                }
            }
        })
    }
}

/// Bearer-token view of the gateway bound to a session.
///
/// A call made without a token fails with `Unauthorized` before any request.
/// A 401 logs the session out (if the rejected token is still the current
/// one) and then reaches the caller as `Unauthorized`.
pub struct Authorized<'a, T> {
    session: &'a SessionStore<T>,
}

impl<'a, T: Transport> Authorized<'a, T> {
    async fn call<R, F, Fut>(&self, op: F) -> Result<R, ApiError>
    where
        F: FnOnce(&'a Api<T>, String) -> Fut,
        Fut: Future<Output = Result<R, ApiError>>,
    {
        let token = match self.session.session() {
            Session::Authenticated { token, .. } => token,
            _ => return Err(ApiError::Unauthorized),
        };

        let result = op(self.session.api(), token.clone()).await;
        if result.as_ref().is_err_and(ApiError::is_unauthorized) {
            self.session.expire(&token);
        }
        result
    }

    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.call(|api, token| async move { api.get_profile(&token).await })
            .await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.call(|api, token| async move { api.list_projects(&token).await })
            .await
    }

    pub async fn get_project(&self, id: ProjectId) -> Result<Project, ApiError> {
        self.call(|api, token| async move { api.get_project(&token, id).await })
            .await
    }

    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        self.call(|api, token| async move { api.create_project(&token, draft).await })
            .await
    }

    pub async fn update_project(
        &self,
        id: ProjectId,
        draft: &ProjectDraft,
    ) -> Result<Project, ApiError> {
        self.call(|api, token| async move { api.update_project(&token, id, draft).await })
            .await
    }

    pub async fn delete_project(&self, id: ProjectId) -> Result<(), ApiError> {
        self.call(|api, token| async move { api.delete_project(&token, id).await })
            .await
    }

    pub async fn list_tasks(&self, project_id: ProjectId) -> Result<Vec<Task>, ApiError> {
        self.call(|api, token| async move { api.list_tasks(&token, project_id).await })
            .await
    }

    pub async fn create_task(
        &self,
        project_id: ProjectId,
        draft: &TaskDraft,
    ) -> Result<Task, ApiError> {
        self.call(|api, token| async move { api.create_task(&token, project_id, draft).await })
            .await
    }

    pub async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.call(|api, token| async move { api.update_task(&token, id, draft).await })
            .await
    }

    pub async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.call(|api, token| async move { api.delete_task(&token, id).await })
            .await
    }
}
