//! Error types for inbox synchronization.

use thiserror::Error;
use webhook_client::WebhookError;

/// Errors that can occur while synchronizing the inbox.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Backend communication error.
    #[error("webhook error: {0}")]
    Webhook(#[from] WebhookError),

    /// Initial load exhausted its retry budget.
    #[error("initial load failed after {attempts} attempts")]
    LoadFailed {
        attempts: u32,
        #[source]
        source: WebhookError,
    },
}
