//! In-memory inbox state and snapshot polling.
//!
//! This crate owns the session's view of the message feed:
//!
//! - [`InboxState`] - the raw message snapshot, optimistic pending sends,
//!   the reconciled roster and the open-thread selection
//! - [`should_adopt`] - the policy deciding whether a freshly polled
//!   snapshot replaces the current one
//! - [`SyncPoller`] - the recurring poll task, with a liveness guard so no
//!   tick mutates state after teardown
//! - [`load_initial`] / [`RetryPolicy`] - bounded-backoff initial load
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use inbox_sync::{load_initial, InboxState, RetryPolicy, SyncPoller};
//! use tokio::sync::Mutex;
//! use webhook_client::{WebhookClient, WebhookConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WebhookClient::connect(WebhookConfig::default()).await?;
//! let state = Arc::new(Mutex::new(InboxState::new()));
//!
//! load_initial(&client, &state, &RetryPolicy::default()).await?;
//! let handle = SyncPoller::spawn(client, state.clone(), Duration::from_secs(10));
//!
//! // ... render from `state` ...
//!
//! handle.shutdown().await;
//! # Ok(())
//! # }
//! ```

mod error;
mod retry;
mod source;
mod state;
mod poller;

pub use error::SyncError;
pub use retry::{load_initial, RetryPolicy};
pub use source::InboxSource;
pub use state::{should_adopt, InboxState};
pub use poller::{SyncHandle, SyncPoller, DEFAULT_POLL_LIMIT};
