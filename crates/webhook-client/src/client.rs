//! Webhook backend HTTP client.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chat_core::{Contact, Message};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::WebhookConfig;
use crate::error::WebhookError;
use crate::types::{
    AgentStatus, AgentToggleRequest, ConnectionStatus, SendOutcome, SendRequest, WireContact,
    WireMessage,
};

/// Client for the webhook backend.
#[derive(Clone)]
pub struct WebhookClient {
    http: Client,
    config: WebhookConfig,
    connected: Arc<AtomicBool>,
}

impl WebhookClient {
    /// Connect to the backend, verifying reachability with a status probe.
    pub async fn connect(config: WebhookConfig) -> Result<Self, WebhookError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(WebhookError::Http)?;

        let client = Self {
            http,
            config,
            connected: Arc::new(AtomicBool::new(false)),
        };

        if client.probe().await? {
            client.connected.store(true, Ordering::SeqCst);
            info!("Connected to webhook backend at {}", client.config.base_url);
        } else {
            return Err(WebhookError::ProbeFailed);
        }

        Ok(client)
    }

    /// Whether the last probe against the backend succeeded.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Probe the backend's connection-status endpoint.
    pub async fn probe(&self) -> Result<bool, WebhookError> {
        let url = self.config.connection_url("status");
        debug!("Status probe: {}", url);

        match self.http.get(&url).send().await {
            Ok(resp) => {
                let ok = resp.status().is_success();
                self.connected.store(ok, Ordering::SeqCst);
                Ok(ok)
            }
            Err(e) => {
                self.connected.store(false, Ordering::SeqCst);
                Err(WebhookError::Http(e))
            }
        }
    }

    /// Fetch a page of the flat message feed, adapted into canonical
    /// messages at the boundary.
    pub async fn list_messages(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Message>, WebhookError> {
        let url = self.config.messages_url(limit, offset);
        let wire: Vec<WireMessage> = self.get_json(&url).await?;
        debug!("Fetched {} messages", wire.len());
        Ok(wire.into_iter().map(WireMessage::into_message).collect())
    }

    /// Fetch the contacts roster source.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, WebhookError> {
        let url = self.config.contacts_url();
        let wire: Vec<WireContact> = self.get_json(&url).await?;
        debug!("Fetched {} contacts", wire.len());
        Ok(wire.into_iter().map(WireContact::into_contact).collect())
    }

    /// Send a message to a recipient. A declared failure from the backend
    /// surfaces as [`WebhookError::SendRejected`].
    pub async fn send_message(&self, phone: &str, body: &str) -> Result<(), WebhookError> {
        let url = self.config.send_url();
        let outcome: SendOutcome = self
            .post_json(&url, &SendRequest::new(phone, body))
            .await?;

        if outcome.success {
            debug!("Send accepted for {}", phone);
            Ok(())
        } else {
            Err(WebhookError::SendRejected(
                outcome.error.unwrap_or_else(|| "unspecified".to_string()),
            ))
        }
    }

    /// Fetch the auto-responder configuration as an opaque JSON document.
    pub async fn get_agent_config(&self) -> Result<serde_json::Value, WebhookError> {
        self.get_json(&self.config.agent_config_url()).await
    }

    /// Save the auto-responder configuration.
    pub async fn save_agent_config(
        &self,
        agent_config: &serde_json::Value,
    ) -> Result<(), WebhookError> {
        let _: serde_json::Value = self
            .post_json(&self.config.agent_config_url(), agent_config)
            .await?;
        Ok(())
    }

    /// Toggle the auto-responder on or off.
    pub async fn toggle_agent(&self, enabled: bool) -> Result<(), WebhookError> {
        let _: serde_json::Value = self
            .post_json(&self.config.agent_toggle_url(), &AgentToggleRequest { enabled })
            .await?;
        Ok(())
    }

    /// Fetch the auto-responder status.
    pub async fn get_agent_status(&self) -> Result<AgentStatus, WebhookError> {
        self.get_json(&self.config.agent_status_url()).await
    }

    /// Start a provider pairing session.
    pub async fn connect_provider(&self) -> Result<ConnectionStatus, WebhookError> {
        self.post_empty(&self.config.connection_url("connect")).await
    }

    /// Fetch the current provider connection status.
    pub async fn check_status(&self) -> Result<ConnectionStatus, WebhookError> {
        self.get_json(&self.config.connection_url("status")).await
    }

    /// Tear down the provider session.
    pub async fn disconnect(&self) -> Result<ConnectionStatus, WebhookError> {
        self.post_empty(&self.config.connection_url("disconnect")).await
    }

    /// Get the configuration.
    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    async fn get_json<R: DeserializeOwned>(&self, url: &str) -> Result<R, WebhookError> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(WebhookError::Http)?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<R, WebhookError> {
        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(WebhookError::Http)?;
        Self::decode(response).await
    }

    async fn post_empty<R: DeserializeOwned>(&self, url: &str) -> Result<R, WebhookError> {
        debug!("POST {}", url);
        let response = self.http.post(url).send().await.map_err(WebhookError::Http)?;
        Self::decode(response).await
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, WebhookError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebhookError::Api {
                status: status.as_u16(),
                body,
            });
        }
        response.json().await.map_err(WebhookError::Http)
    }
}

impl std::fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookClient")
            .field("config", &self.config)
            .field("connected", &self.is_connected())
            .finish()
    }
}
