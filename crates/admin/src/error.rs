//! Unified error handling for the GraphQL proxy.
//!
//! Every error renders as `{"errors": [{"message": ...}]}` so the client
//! transport reads proxy failures the same way it reads upstream ones.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type for the proxy.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request from the client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upstream request failed before a response arrived.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("Upstream returned {status}: {message}")]
    UpstreamStatus {
        /// Status passed through to the client.
        status: StatusCode,
        /// Message extracted from the upstream body.
        message: String,
    },

    /// Upstream answered 2xx with a body that is not JSON.
    #[error("Invalid upstream response: {0}")]
    InvalidUpstreamResponse(#[from] serde_json::Error),
}

impl AppError {
    /// HTTP status returned to the client.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::InvalidUpstreamResponse(_) => StatusCode::BAD_GATEWAY,
            Self::UpstreamStatus { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Upstream(_) | Self::InvalidUpstreamResponse(_))
            || self.status().is_server_error()
        {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Proxy request error"
            );
        } else {
            tracing::warn!(error = %self, "Proxy request rejected");
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Upstream(_) | Self::InvalidUpstreamResponse(_) => {
                "External service error".to_string()
            }
            Self::UpstreamStatus { message, .. } => message.clone(),
            Self::BadRequest(_) => self.to_string(),
        };

        (
            self.status(),
            Json(json!({ "errors": [{ "message": message }] })),
        )
            .into_response()
    }
}
