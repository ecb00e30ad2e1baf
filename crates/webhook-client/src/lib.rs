//! Webhook backend client library.
//!
//! This crate provides a Rust client for the externally owned webhook
//! backend that stores messages and contacts for the WhatsApp channel. It
//! supports:
//!
//! - Listing messages and contacts (adapted into canonical `chat-core` types
//!   at the boundary)
//! - Sending a message to a recipient
//! - Auto-responder configuration passthrough
//! - Messaging-provider connection lifecycle (QR-code pairing)
//!
//! # Example
//!
//! ```no_run
//! use webhook_client::{WebhookClient, WebhookConfig};
//!
//! # async fn example() -> Result<(), webhook_client::WebhookError> {
//! let config = WebhookConfig::new("http://localhost:5678", "acme", "main");
//! let client = WebhookClient::connect(config).await?;
//!
//! let messages = client.list_messages(200, 0).await?;
//! println!("{} messages", messages.len());
//!
//! client.send_message("5511987654321", "Olá!").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::WebhookClient;
pub use config::WebhookConfig;
pub use error::WebhookError;
pub use types::*;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
