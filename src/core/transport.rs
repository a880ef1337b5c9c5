//! HTTP transport seam under the API gateway
//!
//! The gateway builds [`HttpRequest`]s and interprets [`HttpResponse`]s; how
//! bytes move is up to the [`Transport`]. The browser build sends them with
//! `gloo-net`, tests answer them from an in-memory backend.

use std::future::Future;

use serde::Serialize;

use super::error::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Method {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
    #[display("PUT")]
    Put,
    #[display("DELETE")]
    Delete,
}

/// A request relative to the backend origin
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Path starting with `/`, e.g. `/projects/3/tasks`
    pub path: String,
    /// Bearer token for the `Authorization` header
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    /// Attach a JSON body. Serialization of the crate's request structs
    /// cannot fail, a failure leaves the body empty.
    pub fn json<B: Serialize>(mut self, body: &B) -> Self {
        self.body = serde_json::to_value(body).ok();
        self
    }
}

/// A received response, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: canonical_reason(status).to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and resolves with whatever response came back.
/// `Err` means no response was received.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> {
        (**self).send(request)
    }
}

/// Status text for the codes the backend uses, used when a transport does
/// not report one.
pub fn canonical_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Error",
    }
}

/// Joins the configured origin and a request path.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Browser transport built on `fetch` through `gloo-net`
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct FetchTransport {
    base_url: String,
}

#[cfg(feature = "hydrate")]
impl FetchTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        use gloo_net::http::Request;

        let url = join_url(&self.base_url, &request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");

        let builder = match request.bearer.as_deref() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        };

        let built = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body.to_string()),
            None => builder.build(),
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let resp = built
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = resp.status();
        let status_text = match resp.status_text() {
            text if text.is_empty() => canonical_reason(status).to_string(),
            text => text,
        };
        // A body that cannot be read is treated as empty; the status still decides.
        let body = resp.text().await.unwrap_or_default();

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}
