//! REST gateway
//!
//! Every call is a function of (token, parameters): it builds one request,
//! sends it through the [`Transport`] and maps the status code onto
//! [`ApiError`]. Nothing is retried and nothing is cached. The 401 → logout
//! side effect lives one layer up, in
//! [`Authorized`](super::session::Authorized).

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::models::{
    ErrorBody, ForgotPasswordRequest, LoginRequest, Profile, Project, ProjectDraft, ProjectId,
    RegisterRequest, ResetPasswordRequest, Task, TaskDraft, TaskId, TokenResponse,
};
use super::transport::{HttpRequest, HttpResponse, Transport};

/// First characters of a token, for log lines
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    format!("{}…", prefix)
}

#[derive(Debug, Clone)]
pub struct Api<T> {
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and classify the response.
    ///
    /// A 401 only means an expired session when a bearer token was sent;
    /// on the anonymous endpoints (e.g. wrong password on `/login`) it is an
    /// ordinary rejection whose `detail` the user should see.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        let authenticated = request.bearer.is_some();

        let resp = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(%method, %path, error = %e, "request failed without a response");
            ApiError::from(e)
        })?;

        tracing::debug!(%method, %path, status = resp.status, "response received");

        if resp.is_success() {
            return Ok(resp);
        }

        if resp.status == 401 && authenticated {
            return Err(ApiError::Unauthorized);
        }

        let message = serde_json::from_str::<ErrorBody>(&resp.body)
            .ok()
            .and_then(|body| body.message())
            .unwrap_or_else(|| resp.status_text.clone());

        Err(ApiError::Server {
            status: resp.status,
            message,
        })
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let resp = self.execute(request).await?;
        serde_json::from_str(&resp.body).map_err(|e| {
            tracing::warn!(error = %e, "response body did not match the expected shape");
            ApiError::Server {
                status: resp.status,
                message: "Unexpected response from server".to_string(),
            }
        })
    }

    async fn fetch_empty(&self, request: HttpRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }

    // ------------------------------------------------------------------
    // Anonymous endpoints
    // ------------------------------------------------------------------

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.fetch_empty(HttpRequest::post("/register").json(&RegisterRequest {
            username,
            email,
            password,
        }))
        .await
    }

    /// Exchange credentials for an access token
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let resp: TokenResponse = self
            .fetch_json(HttpRequest::post("/login").json(&LoginRequest { email, password }))
            .await?;
        Ok(resp.access_token)
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.fetch_empty(HttpRequest::post("/forgot-password").json(&ForgotPasswordRequest { email }))
            .await
    }

    pub async fn reset_password(&self, reset_token: &str, new_password: &str) -> Result<(), ApiError> {
        self.fetch_empty(
            HttpRequest::post("/reset-password").json(&ResetPasswordRequest {
                token: reset_token,
                new_password,
            }),
        )
        .await
    }

    // ------------------------------------------------------------------
    // Bearer endpoints
    // ------------------------------------------------------------------

    pub async fn get_profile(&self, token: &str) -> Result<Profile, ApiError> {
        self.fetch_json(HttpRequest::get("/me").bearer(token)).await
    }

    pub async fn list_projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        self.fetch_json(HttpRequest::get("/projects").bearer(token))
            .await
    }

    pub async fn get_project(&self, token: &str, id: ProjectId) -> Result<Project, ApiError> {
        self.fetch_json(HttpRequest::get(format!("/projects/{}", id)).bearer(token))
            .await
    }

    pub async fn create_project(
        &self,
        token: &str,
        draft: &ProjectDraft,
    ) -> Result<Project, ApiError> {
        self.fetch_json(HttpRequest::post("/projects").bearer(token).json(draft))
            .await
    }

    pub async fn update_project(
        &self,
        token: &str,
        id: ProjectId,
        draft: &ProjectDraft,
    ) -> Result<Project, ApiError> {
        self.fetch_json(
            HttpRequest::put(format!("/projects/{}", id))
                .bearer(token)
                .json(draft),
        )
        .await
    }

    pub async fn delete_project(&self, token: &str, id: ProjectId) -> Result<(), ApiError> {
        self.fetch_empty(HttpRequest::delete(format!("/projects/{}", id)).bearer(token))
            .await
    }

    pub async fn list_tasks(&self, token: &str, project_id: ProjectId) -> Result<Vec<Task>, ApiError> {
        self.fetch_json(HttpRequest::get(format!("/projects/{}/tasks", project_id)).bearer(token))
            .await
    }

    pub async fn create_task(
        &self,
        token: &str,
        project_id: ProjectId,
        draft: &TaskDraft,
    ) -> Result<Task, ApiError> {
        self.fetch_json(
            HttpRequest::post(format!("/projects/{}/tasks", project_id))
                .bearer(token)
                .json(draft),
        )
        .await
    }

    pub async fn update_task(
        &self,
        token: &str,
        id: TaskId,
        draft: &TaskDraft,
    ) -> Result<Task, ApiError> {
        self.fetch_json(
            HttpRequest::put(format!("/tasks/{}", id))
                .bearer(token)
                .json(draft),
        )
        .await
    }

    pub async fn delete_task(&self, token: &str, id: TaskId) -> Result<(), ApiError> {
        self.fetch_empty(HttpRequest::delete(format!("/tasks/{}", id)).bearer(token))
            .await
    }
}
