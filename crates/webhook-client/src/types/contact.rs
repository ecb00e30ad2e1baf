//! Contact wire shape and its adapter into the canonical type.

use chat_core::{Contact, PhoneKey};
use serde::Deserialize;

/// A contact as the backend reports it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireContact {
    #[serde(default, alias = "phone_number", alias = "phone", alias = "number")]
    pub phone_number: Option<String>,

    #[serde(default, alias = "display_name", alias = "name")]
    pub display_name: Option<String>,

    #[serde(default, alias = "avatar_url", alias = "profile_pic")]
    pub avatar_url: Option<String>,
}

impl WireContact {
    /// Adapt into the canonical [`Contact`], normalizing the phone once at
    /// the boundary.
    pub fn into_contact(self) -> Contact {
        Contact {
            phone_key: PhoneKey::normalize(self.phone_number.as_deref().unwrap_or("")),
            display_name: self.display_name.unwrap_or_default(),
            avatar_url: self.avatar_url.filter(|u| !u.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapts_field_variants() {
        let a: WireContact =
            serde_json::from_str(r#"{"phoneNumber":"11987654321","displayName":"Ana"}"#).unwrap();
        let b: WireContact =
            serde_json::from_str(r#"{"phone_number":"5511987654321","name":"Ana"}"#).unwrap();

        let a = a.into_contact();
        let b = b.into_contact();
        assert_eq!(a.phone_key, b.phone_key);
        assert_eq!(a.display_name, "Ana");
        assert_eq!(b.display_name, "Ana");
    }

    #[test]
    fn empty_avatar_is_none() {
        let c: WireContact =
            serde_json::from_str(r#"{"phone":"11987654321","name":"Ana","avatarUrl":""}"#).unwrap();
        assert!(c.into_contact().avatar_url.is_none());
    }
}
