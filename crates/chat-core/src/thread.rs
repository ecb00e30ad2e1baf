//! Per-contact thread assembly and channel-wide stats.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::message::{Message, MessageKind};
use crate::phone::PhoneKey;

/// Aggregate stats over the full message list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    /// Total messages observed.
    pub total_messages: usize,
    /// Distinct phone keys with at least one message.
    pub active_conversations: usize,
    /// Messages sent by the auto-responder.
    pub auto_responses: usize,
    /// `auto_responses / total_messages`, 0 when the list is empty.
    pub response_rate: f64,
}

/// The chronological thread for one contact: messages filtered by phone-key
/// equality, sorted ascending by timestamp. The sort is stable, so messages
/// with equal timestamps keep their arrival order. Idempotent over its
/// inputs.
pub fn assemble_thread(messages: &[Message], key: &PhoneKey) -> Vec<Message> {
    let mut thread: Vec<Message> = messages
        .iter()
        .filter(|m| &m.phone_key == key)
        .cloned()
        .collect();
    thread.sort_by_key(|m| m.timestamp);
    thread
}

/// Channel-wide aggregates for the dashboard header.
pub fn assemble_stats(messages: &[Message]) -> ChannelStats {
    let total_messages = messages.len();
    let active_conversations = messages
        .iter()
        .map(|m| &m.phone_key)
        .collect::<HashSet<_>>()
        .len();
    let auto_responses = messages
        .iter()
        .filter(|m| m.kind == MessageKind::AutoResponse)
        .count();
    let response_rate = if total_messages == 0 {
        0.0
    } else {
        auto_responses as f64 / total_messages as f64
    };

    ChannelStats {
        total_messages,
        active_conversations,
        auto_responses,
        response_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Direction;
    use chrono::{TimeZone, Utc};

    fn message(id: &str, phone: &str, ts_minute: u32, kind: MessageKind) -> Message {
        let key = PhoneKey::normalize(phone);
        Message {
            id: id.to_string(),
            phone_key: key,
            contact_name: None,
            body: format!("msg {id}"),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 10, 12, ts_minute, 0).unwrap(),
            direction: if kind == MessageKind::Sent {
                Direction::Outbound
            } else {
                Direction::Inbound
            },
            kind,
            avatar_url: None,
        }
    }

    #[test]
    fn thread_filters_by_normalized_key() {
        let messages = vec![
            message("1", "11999999999", 0, MessageKind::Received),
            message("2", "21988887777", 1, MessageKind::Received),
            message("3", "5511999999999", 2, MessageKind::Sent),
        ];
        let key = PhoneKey::normalize("(11) 99999-9999");

        let thread = assemble_thread(&messages, &key);
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].id, "1");
        assert_eq!(thread[1].id, "3");
    }

    #[test]
    fn thread_sorts_ascending_and_is_stable() {
        let messages = vec![
            message("late", "11999999999", 5, MessageKind::Received),
            message("tie-a", "11999999999", 1, MessageKind::Received),
            message("tie-b", "11999999999", 1, MessageKind::Sent),
        ];
        let key = PhoneKey::normalize("11999999999");

        let thread = assemble_thread(&messages, &key);
        let ids: Vec<&str> = thread.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["tie-a", "tie-b", "late"]);
    }

    #[test]
    fn thread_assembly_is_idempotent() {
        let messages = vec![
            message("2", "11999999999", 2, MessageKind::Sent),
            message("1", "11999999999", 1, MessageKind::Received),
        ];
        let key = PhoneKey::normalize("11999999999");

        let once = assemble_thread(&messages, &key);
        let twice = assemble_thread(&once, &key);
        assert_eq!(once, twice);
    }

    #[test]
    fn stats_counts_and_rate() {
        let messages = vec![
            message("1", "11999999999", 0, MessageKind::Received),
            message("2", "11999999999", 1, MessageKind::AutoResponse),
            message("3", "21988887777", 2, MessageKind::Sent),
            message("4", "21988887777", 3, MessageKind::AutoResponse),
        ];

        let stats = assemble_stats(&messages);
        assert_eq!(stats.total_messages, 4);
        assert_eq!(stats.active_conversations, 2);
        assert_eq!(stats.auto_responses, 2);
        assert!((stats.response_rate - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_on_empty_list() {
        let stats = assemble_stats(&[]);
        assert_eq!(stats.total_messages, 0);
        assert_eq!(stats.active_conversations, 0);
        assert_eq!(stats.response_rate, 0.0);
    }
}
