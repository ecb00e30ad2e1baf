//! Wire types for the webhook backend.
//!
//! Server responses arrive in partially inconsistent shapes (camelCase and
//! snake_case field variants, optional ids and names). Each wire type maps
//! itself into the canonical `chat-core` type exactly once, at this
//! boundary; internal code never sees raw wire shapes.

mod agent;
mod connection;
mod contact;
mod message;
mod send;

pub use agent::{AgentStatus, AgentToggleRequest};
pub use connection::{ConnectionState, ConnectionStatus};
pub use contact::WireContact;
pub use message::WireMessage;
pub use send::{SendOutcome, SendRequest};
