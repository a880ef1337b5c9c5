//! Error taxonomy shared by the gateway, the session store and the boards.

use thiserror::Error;

use super::validation::ValidationError;

/// Failure reported by a [`Transport`](super::transport::Transport) when no
/// HTTP response was received at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Typed failure of an API gateway call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered 401, or no token was available for a call that needs one.
    /// The session has already been cleared when a caller sees this.
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// Any other non-2xx answer, carrying the server's `detail` message
    /// (or the HTTP status text when the body has none).
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// Rejected on the client before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Text for an inline banner or in-modal message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network error. Please check your connection and try again."
                .to_string(),
            other => other.to_string(),
        }
    }

    /// Unauthorized is handled globally by a redirect, so callers must not
    /// render a second banner for it.
    pub fn should_display(&self) -> bool {
        !self.is_unauthorized()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// HTTP status of a server rejection, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.0)
    }
}
