//! Error types for the forwarding core.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Terminal failure of a proxied request.
///
/// The `Display` output is the exact body sent to the client.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The target segment was missing, not `http`-prefixed after decoding,
    /// or not parseable as an absolute URL. No network call was attempted.
    #[error("Invalid proxy URL")]
    InvalidTarget,

    /// Reaching or reading from the upstream failed (DNS, TLS, refused,
    /// reset, timeout, or any other fetch-time failure).
    #[error("Proxy error: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::InvalidTarget => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Upstream(err.to_string())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Failure constructing the upstream client at startup.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid header value in upstream config: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderValue),

    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}
