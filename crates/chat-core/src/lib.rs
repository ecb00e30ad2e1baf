//! Core types and pure logic for the zap-manager WhatsApp channel.
//!
//! This crate provides the shared domain layer for the channel manager:
//!
//! - [`PhoneKey`] - Canonical Brazilian phone identity used as the key everywhere
//! - [`Contact`] / [`reconcile`] - Roster records and multi-source deduplication
//! - [`Message`] / [`assemble_thread`] - Messages and per-contact thread assembly
//! - [`TemplateVars`] / [`apply_vars`] - Message template variable substitution
//!
//! Everything here is pure and side-effect free; network and state handling
//! live in the `webhook-client`, `inbox-sync` and `dispatcher` crates.
//!
//! # Example
//!
//! ```rust
//! use chat_core::PhoneKey;
//!
//! let a = PhoneKey::normalize("11 98765-4321");
//! let b = PhoneKey::normalize("+55 (11) 98765-4321");
//! assert_eq!(a, b);
//! assert_eq!(a.as_str(), "5511987654321");
//! ```

mod contact;
mod message;
mod phone;
mod template;
mod thread;

pub use contact::{contacts_from_messages, is_usable_name, reconcile, Contact};
pub use message::{Direction, Message, MessageKind, LOCAL_ID_PREFIX};
pub use phone::PhoneKey;
pub use template::{apply_vars, greeting_for_hour, TemplateVars};
pub use thread::{assemble_stats, assemble_thread, ChannelStats};
