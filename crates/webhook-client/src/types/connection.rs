//! Messaging-provider connection lifecycle types.

use serde::{Deserialize, Serialize};

/// Connection state of the underlying messaging provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    /// No active session.
    Disconnected,
    /// Pairing in progress (QR code pending scan).
    Connecting,
    /// Session established.
    Connected,
    /// Provider reported a failure.
    Error,
}

impl Default for ConnectionState {
    fn default() -> Self {
        ConnectionState::Disconnected
    }
}

/// Status reported by the connection endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
    /// Current state.
    #[serde(default, alias = "status")]
    pub state: ConnectionState,

    /// Pairing artifact (base64 QR code) while connecting.
    #[serde(default, alias = "qr_code", alias = "qr")]
    pub qr_code: Option<String>,

    /// Phone number of the paired account once connected.
    #[serde(default, alias = "phone_number", alias = "phone")]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_deserializes_lowercase() {
        let status: ConnectionStatus =
            serde_json::from_str(r#"{"state":"connecting","qrCode":"deadbeef"}"#).unwrap();
        assert_eq!(status.state, ConnectionState::Connecting);
        assert_eq!(status.qr_code.as_deref(), Some("deadbeef"));
    }

    #[test]
    fn status_alias_and_defaults() {
        let status: ConnectionStatus = serde_json::from_str(r#"{"status":"connected"}"#).unwrap();
        assert_eq!(status.state, ConnectionState::Connected);
        assert!(status.qr_code.is_none());
        assert!(status.phone_number.is_none());
    }
}
