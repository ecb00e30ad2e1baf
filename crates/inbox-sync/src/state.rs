//! Session state: message snapshot, pending sends, roster, selection.

use std::collections::HashSet;

use chat_core::{
    assemble_stats, assemble_thread, contacts_from_messages, reconcile, ChannelStats, Contact,
    Direction, Message, PhoneKey,
};
use tracing::debug;

/// Whether a freshly polled snapshot should replace the current one.
///
/// Adopting unconditionally would rebuild the view on every tick and throw
/// away scroll position and the open thread; this policy adopts only when
/// the incoming snapshot carries genuinely new content: the count differs,
/// the most-recent id differs, or at least one incoming id is unknown.
///
/// Both arguments are server-origin snapshots; locally synthesized messages
/// never enter this comparison.
pub fn should_adopt(current: &[Message], incoming: &[Message]) -> bool {
    if current.len() != incoming.len() {
        return true;
    }
    if let (Some(cur), Some(inc)) = (current.last(), incoming.last()) {
        if cur.id != inc.id {
            return true;
        }
    }
    let known: HashSet<&str> = current.iter().map(|m| m.id.as_str()).collect();
    incoming.iter().any(|m| !known.contains(m.id.as_str()))
}

/// The in-memory inbox: everything the channel views derive from.
///
/// The snapshot holds server-origin messages only; optimistic sends live in
/// a separate pending set until a poll confirms the server recorded an
/// equivalent message, so client-generated ids can never be mistaken for
/// server ids by the adoption policy.
#[derive(Debug, Default)]
pub struct InboxState {
    snapshot: Vec<Message>,
    pending: Vec<Message>,
    roster: Vec<Contact>,
    selected: Option<PhoneKey>,
}

impl InboxState {
    /// Empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current server-origin snapshot.
    pub fn snapshot(&self) -> &[Message] {
        &self.snapshot
    }

    /// The reconciled roster, one contact per phone key.
    pub fn roster(&self) -> &[Contact] {
        &self.roster
    }

    /// Optimistic sends not yet confirmed by a poll.
    pub fn pending(&self) -> &[Message] {
        &self.pending
    }

    /// The full message list views derive from: snapshot plus unconfirmed
    /// pending sends.
    pub fn messages(&self) -> Vec<Message> {
        let mut all = self.snapshot.clone();
        all.extend(self.pending.iter().cloned());
        all
    }

    /// Replace the snapshot with a freshly fetched one and re-derive the
    /// roster. Pending sends the server now carries (same key, same body,
    /// outbound) are confirmed and dropped. The open-thread selection is
    /// left untouched; threads recompute from the new snapshot on demand.
    pub fn adopt(&mut self, incoming: Vec<Message>, contacts: &[Contact]) {
        let before = self.pending.len();
        self.pending.retain(|local| {
            !incoming.iter().any(|m| {
                m.direction == Direction::Outbound
                    && m.phone_key == local.phone_key
                    && m.body == local.body
            })
        });
        let confirmed = before - self.pending.len();
        if confirmed > 0 {
            debug!("Poll confirmed {} pending outbound message(s)", confirmed);
        }

        self.snapshot = incoming;
        let inferred = contacts_from_messages(&self.snapshot);
        self.roster = reconcile(contacts, &inferred);
    }

    /// Append a locally synthesized message after a successful send. The
    /// message must carry a client-generated id (see
    /// [`chat_core::LOCAL_ID_PREFIX`]).
    pub fn append_local(&mut self, message: Message) {
        debug_assert!(message.is_local());
        self.pending.push(message);
    }

    /// Open the thread for a contact, or close it with `None`.
    pub fn select(&mut self, key: Option<PhoneKey>) {
        self.selected = key;
    }

    /// The currently open thread's contact key.
    pub fn selected(&self) -> Option<&PhoneKey> {
        self.selected.as_ref()
    }

    /// The chronological thread for the current selection; empty when no
    /// thread is open.
    pub fn thread(&self) -> Vec<Message> {
        match &self.selected {
            Some(key) => assemble_thread(&self.messages(), key),
            None => Vec::new(),
        }
    }

    /// Channel-wide aggregates over the full message list.
    pub fn stats(&self) -> ChannelStats {
        assemble_stats(&self.messages())
    }
}
