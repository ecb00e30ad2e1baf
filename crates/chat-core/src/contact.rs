//! Contact records and multi-source roster reconciliation.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::phone::PhoneKey;

/// A roster contact. Identity is the phone key; at most one contact per key
/// exists in a reconciled roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Canonical identity.
    pub phone_key: PhoneKey,
    /// Best available display name; falls back to the formatted phone.
    pub display_name: String,
    /// Avatar, if any source carried one.
    pub avatar_url: Option<String>,
}

impl Contact {
    /// Build a contact from a raw phone string and whatever name the source
    /// reported.
    pub fn new(phone_raw: &str, display_name: impl Into<String>) -> Self {
        Self {
            phone_key: PhoneKey::normalize(phone_raw),
            display_name: display_name.into(),
            avatar_url: None,
        }
    }
}

/// Whether a display name is worth showing over a formatted phone number.
///
/// Rejects empty or too-short strings, the literal "Contato" placeholder,
/// `+`-prefixed international-looking digit strings, and anything that is
/// just a phone number (raw or formatted).
pub fn is_usable_name(name: &str) -> bool {
    let name = name.trim();
    if name.len() < 3 {
        return false;
    }
    if name.eq_ignore_ascii_case("contato") {
        return false;
    }
    let bare = name.strip_prefix('+').unwrap_or(name);
    let digits: String = bare.chars().filter(|c| c.is_ascii_digit()).collect();
    let non_phone_chars = bare
        .chars()
        .any(|c| !c.is_ascii_digit() && !matches!(c, ' ' | '(' | ')' | '-' | '.'));
    if !non_phone_chars && (8..=15).contains(&digits.len()) {
        return false;
    }
    if name.starts_with('+') && !non_phone_chars && !digits.is_empty() {
        return false;
    }
    true
}

/// Merge contacts from the authoritative contacts source and from
/// message-derived inference into one deduplicated roster.
///
/// Buckets per phone key in source order: the first record seeds the bucket;
/// a later name replaces the current one only when it is usable and the
/// current one is not, or when both are usable and the later one is strictly
/// longer; a later avatar only fills an empty slot. Keys that never see a
/// usable name fall back to the formatted phone. Idempotent: reconciling the
/// output with itself yields the same roster.
pub fn reconcile(primary: &[Contact], inferred: &[Contact]) -> Vec<Contact> {
    let mut buckets: IndexMap<PhoneKey, Contact> = IndexMap::new();

    for candidate in primary.iter().chain(inferred.iter()) {
        match buckets.entry(candidate.phone_key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(candidate.clone());
            }
            Entry::Occupied(mut slot) => {
                let current = slot.get_mut();
                let current_usable = is_usable_name(&current.display_name);
                let candidate_usable = is_usable_name(&candidate.display_name);
                if candidate_usable
                    && (!current_usable
                        || candidate.display_name.len() > current.display_name.len())
                {
                    current.display_name = candidate.display_name.clone();
                }
                if current.avatar_url.is_none() && candidate.avatar_url.is_some() {
                    current.avatar_url = candidate.avatar_url.clone();
                }
            }
        }
    }

    buckets
        .into_values()
        .map(|mut contact| {
            if !is_usable_name(&contact.display_name) {
                contact.display_name = contact.phone_key.format_display();
            }
            contact
        })
        .collect()
}

/// Infer contact records from a message list, one per phone key in
/// first-seen order. Feeds the second argument of [`reconcile`].
pub fn contacts_from_messages(messages: &[Message]) -> Vec<Contact> {
    let mut seen: IndexMap<PhoneKey, Contact> = IndexMap::new();
    for message in messages {
        match seen.entry(message.phone_key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(Contact {
                    phone_key: message.phone_key.clone(),
                    display_name: message.contact_name.clone().unwrap_or_default(),
                    avatar_url: message.avatar_url.clone(),
                });
            }
            Entry::Occupied(mut slot) => {
                let contact = slot.get_mut();
                if !is_usable_name(&contact.display_name) {
                    if let Some(name) = &message.contact_name {
                        contact.display_name = name.clone();
                    }
                }
                if contact.avatar_url.is_none() {
                    contact.avatar_url = message.avatar_url.clone();
                }
            }
        }
    }
    seen.into_values().collect()
}
