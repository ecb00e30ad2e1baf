//! Message types for the channel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::phone::PhoneKey;

/// Prefix for client-generated ids on optimistically appended messages.
/// Server ids never carry it, so local messages are always distinguishable.
pub const LOCAL_ID_PREFIX: &str = "local-";

/// Direction of a message relative to the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Received from a contact.
    Inbound,
    /// Sent by the account.
    Outbound,
}

/// Classification of a message for stats and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    /// Sent by the operator.
    Sent,
    /// Received from a contact.
    Received,
    /// Sent automatically by the auto-responder.
    AutoResponse,
}

impl MessageKind {
    /// Derive the kind from the direction, unless the source explicitly
    /// flagged an auto-response, which takes precedence.
    pub fn derive(direction: Direction, explicit: Option<MessageKind>) -> MessageKind {
        match explicit {
            Some(MessageKind::AutoResponse) => MessageKind::AutoResponse,
            _ => match direction {
                Direction::Inbound => MessageKind::Received,
                Direction::Outbound => MessageKind::Sent,
            },
        }
    }
}

/// A single message, immutable once observed.
///
/// Identity is `id`. Sources that omit an id get a composite of key and
/// timestamp via [`Message::composite_id`]; see the inbox adoption policy
/// for the deduplication caveat that carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Server-assigned id, or a composite/local fallback.
    pub id: String,
    /// Canonical identity of the counterpart.
    pub phone_key: PhoneKey,
    /// Contact name as reported at send time, if any.
    pub contact_name: Option<String>,
    /// Message text.
    pub body: String,
    /// When the message was recorded.
    pub timestamp: DateTime<Utc>,
    /// Inbound or outbound.
    pub direction: Direction,
    /// Derived or explicit kind.
    pub kind: MessageKind,
    /// Avatar of the counterpart, if the source carried one.
    pub avatar_url: Option<String>,
}

impl Message {
    /// Fallback id for sources that omit one: `{key}-{timestamp}`.
    pub fn composite_id(phone_key: &PhoneKey, timestamp: DateTime<Utc>) -> String {
        format!("{}-{}", phone_key, timestamp.timestamp_millis())
    }

    /// Whether this message was synthesized locally after an optimistic
    /// send, rather than observed from the server.
    pub fn is_local(&self) -> bool {
        self.id.starts_with(LOCAL_ID_PREFIX)
    }
}
