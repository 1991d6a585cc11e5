//! Proxy error types and responses.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Failure forwarding a request to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend did not answer within the proxy timeout.
    #[error("upstream request timed out")]
    Timeout,
    /// The backend could not be reached or broke the connection.
    #[error("upstream request failed: {0}")]
    Upstream(String),
    /// The request body could not be read or exceeded the limit.
    #[error("request body rejected: {0}")]
    Body(String),
    /// The target URL could not be built from the configured base.
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Body(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InvalidUrl(_) | Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Timeout => "upstream_timeout",
            Self::Upstream(_) => "upstream_unavailable",
            Self::Body(_) => "body_rejected",
            Self::InvalidUrl(_) | Self::ClientBuild(_) => "internal_error",
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, %status, "proxy request failed");
        }
        let body = ErrorResponse { error: self.code().to_owned(), message: self.to_string() };
        (status, Json(body)).into_response()
    }
}
