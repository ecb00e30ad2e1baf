//! Error types for dispatch operations.

use thiserror::Error;
use webhook_client::WebhookError;

/// Errors that can occur while dispatching messages.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Backend communication error.
    #[error("webhook error: {0}")]
    Webhook(#[from] WebhookError),

    /// The transport declared the send failed.
    #[error("send rejected: {0}")]
    Rejected(String),
}
