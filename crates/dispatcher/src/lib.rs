//! Single-send and paced broadcast dispatch.
//!
//! This crate sends messages through a [`MessageSender`] transport seam:
//!
//! - [`send_one`] - normalize one recipient, substitute template variables,
//!   send, and synthesize the optimistic local message on success
//! - [`BroadcastEngine`] - sequential batch dispatch with batch-and-cooldown
//!   pacing, per-recipient accounting and observable progress
//!
//! # Example
//!
//! ```no_run
//! use chat_core::{PhoneKey, TemplateVars};
//! use dispatcher::{BroadcastEngine, PacingConfig, WebhookSender};
//! use webhook_client::{WebhookClient, WebhookConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WebhookClient::connect(WebhookConfig::default()).await?;
//! let sender = WebhookSender::new(client);
//!
//! let recipients = vec![
//!     PhoneKey::normalize("11987654321"),
//!     PhoneKey::normalize("21988887777"),
//! ];
//! let mut engine = BroadcastEngine::new(PacingConfig::default());
//! let summary = engine
//!     .run(&sender, recipients, "{{greeting}} {{name}}!", |key| {
//!         TemplateVars::now(key.format_display())
//!     })
//!     .await;
//! println!("{} ok, {} failed", summary.success, summary.failed);
//! # Ok(())
//! # }
//! ```

mod batch;
mod error;
mod sender;
mod single;

pub use batch::{
    BroadcastEngine, BroadcastProgress, BroadcastStatus, BroadcastSummary, PacingConfig,
};
pub use error::DispatchError;
pub use sender::{LoggingSender, MessageSender, NoOpSender, WebhookSender};
pub use single::send_one;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
