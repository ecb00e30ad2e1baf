//! Types for sending messages through the backend.

use serde::{Deserialize, Serialize};

/// Request body for the send endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    /// Recipient phone (canonical key).
    pub phone: String,
    /// Message text.
    pub message: String,
}

impl SendRequest {
    /// Create a send request.
    pub fn new(phone: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            message: message.into(),
        }
    }
}

/// Declared outcome of a send, as reported by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOutcome {
    /// Whether the backend accepted and forwarded the message.
    #[serde(default)]
    pub success: bool,

    /// Error description when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}
