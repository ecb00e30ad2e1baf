//! Message wire shape and its adapter into the canonical type.

use chat_core::{Direction, Message, MessageKind, PhoneKey};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

/// A message as the backend reports it. Every field is optional because the
/// backend's sources disagree on which ones they fill; snake_case variants
/// of each field are accepted via aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMessage {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, alias = "phone_number", alias = "phone", alias = "from")]
    pub phone_number: Option<String>,

    #[serde(default, alias = "contact_name", alias = "name")]
    pub contact_name: Option<String>,

    #[serde(default, alias = "body", alias = "text")]
    pub message: Option<String>,

    #[serde(default, alias = "created_at", alias = "date")]
    pub timestamp: Option<String>,

    #[serde(default, alias = "from_me")]
    pub from_me: Option<bool>,

    #[serde(default)]
    pub direction: Option<String>,

    #[serde(default, alias = "message_type", alias = "kind")]
    pub r#type: Option<String>,

    #[serde(default, alias = "avatar_url", alias = "profile_pic")]
    pub avatar_url: Option<String>,
}

impl WireMessage {
    /// Adapt into the canonical [`Message`]: normalize the phone once,
    /// resolve the direction from whichever flag the source filled, derive
    /// the kind, and synthesize a composite id when the source omitted one.
    pub fn into_message(self) -> Message {
        let phone_key = PhoneKey::normalize(self.phone_number.as_deref().unwrap_or(""));

        let direction = match (self.from_me, self.direction.as_deref()) {
            (Some(true), _) => Direction::Outbound,
            (Some(false), _) => Direction::Inbound,
            (None, Some(d)) if d.eq_ignore_ascii_case("outbound") || d.eq_ignore_ascii_case("sent") => {
                Direction::Outbound
            }
            _ => Direction::Inbound,
        };

        let explicit_kind = self.r#type.as_deref().and_then(|t| {
            let t = t.to_ascii_lowercase();
            match t.as_str() {
                "auto_response" | "autoresponse" | "auto" | "bot" => Some(MessageKind::AutoResponse),
                "sent" => Some(MessageKind::Sent),
                "received" => Some(MessageKind::Received),
                _ => None,
            }
        });

        let timestamp = parse_timestamp(self.timestamp.as_deref());
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Message::composite_id(&phone_key, timestamp));

        Message {
            id,
            phone_key,
            contact_name: self.contact_name.filter(|n| !n.is_empty()),
            body: self.message.unwrap_or_default(),
            timestamp,
            direction,
            kind: MessageKind::derive(direction, explicit_kind),
            avatar_url: self.avatar_url.filter(|u| !u.is_empty()),
        }
    }
}

fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    match raw {
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(e) => {
                warn!("unparseable message timestamp {:?}: {}", raw, e);
                DateTime::<Utc>::UNIX_EPOCH
            }
        },
        None => DateTime::<Utc>::UNIX_EPOCH,
    }
}
