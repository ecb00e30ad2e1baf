//! Configuration types for the webhook client.

/// Configuration for talking to the webhook backend.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Base URL of the backend (e.g., "http://localhost:5678").
    pub base_url: String,
    /// Tenant slug the account belongs to.
    pub tenant: String,
    /// Account identifier within the tenant.
    pub account_id: String,
}

impl WebhookConfig {
    /// Create a new configuration.
    pub fn new(
        base_url: impl Into<String>,
        tenant: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            tenant: tenant.into(),
            account_id: account_id.into(),
        }
    }

    fn tenant_root(&self) -> String {
        format!(
            "{}/webhook/{}",
            self.base_url,
            urlencoding::encode(&self.tenant)
        )
    }

    fn account_query(&self) -> String {
        format!("account={}", urlencoding::encode(&self.account_id))
    }

    /// Message listing endpoint URL.
    pub fn messages_url(&self, limit: usize, offset: usize) -> String {
        format!(
            "{}/messages?{}&limit={}&offset={}",
            self.tenant_root(),
            self.account_query(),
            limit,
            offset
        )
    }

    /// Contact listing endpoint URL.
    pub fn contacts_url(&self) -> String {
        format!("{}/contacts?{}", self.tenant_root(), self.account_query())
    }

    /// Message send endpoint URL.
    pub fn send_url(&self) -> String {
        format!("{}/send?{}", self.tenant_root(), self.account_query())
    }

    /// Auto-responder configuration endpoint URL.
    pub fn agent_config_url(&self) -> String {
        format!("{}/agent/config?{}", self.tenant_root(), self.account_query())
    }

    /// Auto-responder toggle endpoint URL.
    pub fn agent_toggle_url(&self) -> String {
        format!("{}/agent/toggle?{}", self.tenant_root(), self.account_query())
    }

    /// Auto-responder status endpoint URL.
    pub fn agent_status_url(&self) -> String {
        format!("{}/agent/status?{}", self.tenant_root(), self.account_query())
    }

    /// Provider connection endpoint URL for a lifecycle action
    /// ("connect", "status", "disconnect").
    pub fn connection_url(&self, action: &str) -> String {
        format!(
            "{}/connection/{}?{}",
            self.tenant_root(),
            action,
            self.account_query()
        )
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self::new("http://localhost:5678", "default", "main")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = WebhookConfig::default();
        assert_eq!(config.base_url, "http://localhost:5678");
        assert_eq!(config.tenant, "default");
        assert_eq!(config.account_id, "main");
    }

    #[test]
    fn url_builders() {
        let config = WebhookConfig::new("http://localhost:5678", "acme", "main");
        assert_eq!(
            config.messages_url(200, 0),
            "http://localhost:5678/webhook/acme/messages?account=main&limit=200&offset=0"
        );
        assert_eq!(
            config.contacts_url(),
            "http://localhost:5678/webhook/acme/contacts?account=main"
        );
        assert_eq!(
            config.send_url(),
            "http://localhost:5678/webhook/acme/send?account=main"
        );
        assert_eq!(
            config.connection_url("status"),
            "http://localhost:5678/webhook/acme/connection/status?account=main"
        );
    }

    #[test]
    fn tenant_and_account_are_encoded() {
        let config = WebhookConfig::new("http://localhost:5678", "acme co", "a+b");
        assert_eq!(
            config.contacts_url(),
            "http://localhost:5678/webhook/acme%20co/contacts?account=a%2Bb"
        );
    }
}
