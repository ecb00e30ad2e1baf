//! Message sender trait and implementations.

use async_trait::async_trait;
use chat_core::PhoneKey;
use webhook_client::WebhookClient;

use crate::error::DispatchError;

/// Trait for sending a message to one recipient.
///
/// Abstracted to support different transports (webhook backend, tests).
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send `body` to the recipient identified by `recipient`.
    async fn send(&self, recipient: &PhoneKey, body: &str) -> Result<(), DispatchError>;
}

/// Production sender backed by the webhook backend.
#[derive(Debug, Clone)]
pub struct WebhookSender {
    client: WebhookClient,
}

impl WebhookSender {
    /// Wrap a connected client.
    pub fn new(client: WebhookClient) -> Self {
        Self { client }
    }

    /// Get the underlying client.
    pub fn client(&self) -> &WebhookClient {
        &self.client
    }
}

#[async_trait]
impl MessageSender for WebhookSender {
    async fn send(&self, recipient: &PhoneKey, body: &str) -> Result<(), DispatchError> {
        self.client
            .send_message(recipient.as_str(), body)
            .await
            .map_err(DispatchError::from)
    }
}

/// A no-op sender for testing that discards all messages.
#[derive(Debug, Clone, Default)]
pub struct NoOpSender;

#[async_trait]
impl MessageSender for NoOpSender {
    async fn send(&self, _recipient: &PhoneKey, _body: &str) -> Result<(), DispatchError> {
        Ok(())
    }
}

/// A logging sender for debugging that logs instead of sending.
#[derive(Debug, Clone, Default)]
pub struct LoggingSender;

#[async_trait]
impl MessageSender for LoggingSender {
    async fn send(&self, recipient: &PhoneKey, body: &str) -> Result<(), DispatchError> {
        tracing::info!("Sending to {}: {}", recipient, body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_sender_accepts_everything() {
        let sender = NoOpSender;
        let key = PhoneKey::normalize("11987654321");
        sender.send(&key, "test").await.unwrap();
    }

    #[tokio::test]
    async fn logging_sender_accepts_everything() {
        let sender = LoggingSender;
        let key = PhoneKey::normalize("11987654321");
        sender.send(&key, "test").await.unwrap();
    }
}
