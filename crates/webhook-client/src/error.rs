//! Error types for the webhook client.

use thiserror::Error;

/// Errors that can occur when talking to the webhook backend.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend returned a non-success HTTP status.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Backend accepted the request but declared the send failed.
    #[error("send rejected: {0}")]
    SendRejected(String),

    /// Initial status probe against the backend failed.
    #[error("status probe failed")]
    ProbeFailed,
}
