//! Auto-responder passthrough types.
//!
//! The agent configuration payload is owned by the backend; the dashboard
//! edits it as an opaque JSON document, so only the on/off surface is typed.

use serde::{Deserialize, Serialize};

/// Current auto-responder status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStatus {
    /// Whether the auto-responder is active for this account.
    #[serde(default)]
    pub enabled: bool,
}

/// Request body for toggling the auto-responder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentToggleRequest {
    /// Desired state.
    pub enabled: bool,
}
