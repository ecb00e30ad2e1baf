//! Source trait for the message and contact feeds.

use async_trait::async_trait;
use chat_core::{Contact, Message};
use webhook_client::{WebhookClient, WebhookError};

/// Where the poller fetches its snapshots from.
///
/// Abstracted so the poller and loader can be exercised against scripted
/// feeds in tests; production uses [`WebhookClient`].
#[async_trait]
pub trait InboxSource: Send + Sync {
    /// Fetch a page of the flat message feed.
    async fn fetch_messages(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Message>, WebhookError>;

    /// Fetch the authoritative contacts listing.
    async fn fetch_contacts(&self) -> Result<Vec<Contact>, WebhookError>;
}

#[async_trait]
impl<T: InboxSource + ?Sized> InboxSource for std::sync::Arc<T> {
    async fn fetch_messages(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Message>, WebhookError> {
        (**self).fetch_messages(limit, offset).await
    }

    async fn fetch_contacts(&self) -> Result<Vec<Contact>, WebhookError> {
        (**self).fetch_contacts().await
    }
}

#[async_trait]
impl InboxSource for WebhookClient {
    async fn fetch_messages(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Message>, WebhookError> {
        self.list_messages(limit, offset).await
    }

    async fn fetch_contacts(&self) -> Result<Vec<Contact>, WebhookError> {
        self.list_contacts().await
    }
}
