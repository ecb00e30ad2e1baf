//! Integration tests for webhook-client.
//!
//! Live tests require a reachable webhook backend and env vars:
//!   ZAP_WEBHOOK_URL  - backend base URL
//!   ZAP_TENANT       - tenant slug
//!   ZAP_ACCOUNT      - account id
//!   ZAP_TEST_PHONE   - recipient for send tests
//!
//! Run only tests that don't need a backend:
//!   cargo test -p webhook-client --test integration_tests
//!
//! Run ignored tests (require backend):
//!   cargo test -p webhook-client --test integration_tests -- --ignored

use std::env;

use webhook_client::{WebhookClient, WebhookConfig, WebhookError};

fn config_from_env() -> WebhookConfig {
    let _ = dotenvy::dotenv();
    WebhookConfig::new(
        env::var("ZAP_WEBHOOK_URL").unwrap_or_else(|_| "http://localhost:5678".to_string()),
        env::var("ZAP_TENANT").unwrap_or_else(|_| "default".to_string()),
        env::var("ZAP_ACCOUNT").unwrap_or_else(|_| "main".to_string()),
    )
}

mod wire_adapter_tests {
    use chat_core::{Direction, MessageKind};
    use webhook_client::{WireContact, WireMessage};

    #[test]
    fn feed_with_mixed_shapes_adapts_uniformly() {
        let feed = r#"[
            {"id":"1","phoneNumber":"11987654321","message":"oi","fromMe":false,
             "timestamp":"2024-05-10T12:00:00Z"},
            {"id":"2","phone_number":"5511987654321","text":"tudo bem?","from_me":true,
             "created_at":"2024-05-10T12:01:00Z"},
            {"phone":"11987654321","body":"resposta automática","direction":"outbound",
             "message_type":"auto_response","date":"2024-05-10T12:02:00Z"}
        ]"#;

        let wire: Vec<WireMessage> = serde_json::from_str(feed).unwrap();
        let messages: Vec<_> = wire.into_iter().map(WireMessage::into_message).collect();

        assert_eq!(messages.len(), 3);
        // All three rows resolve to the same canonical identity.
        assert!(messages.iter().all(|m| m.phone_key == messages[0].phone_key));
        assert_eq!(messages[0].kind, MessageKind::Received);
        assert_eq!(messages[1].kind, MessageKind::Sent);
        assert_eq!(messages[1].direction, Direction::Outbound);
        assert_eq!(messages[2].kind, MessageKind::AutoResponse);
        // The id-less row synthesized a composite id.
        assert!(messages[2].id.starts_with(messages[2].phone_key.as_str()));
    }

    #[test]
    fn contact_listing_adapts_both_shapes() {
        let listing = r#"[
            {"phoneNumber":"11999999999","displayName":"Maria Silva"},
            {"phone_number":"21988887777","name":"Carlos","profile_pic":"https://cdn.example/c.jpg"}
        ]"#;

        let wire: Vec<WireContact> = serde_json::from_str(listing).unwrap();
        let contacts: Vec<_> = wire.into_iter().map(WireContact::into_contact).collect();

        assert_eq!(contacts[0].phone_key.as_str(), "5511999999999");
        assert_eq!(contacts[1].display_name, "Carlos");
        assert_eq!(
            contacts[1].avatar_url.as_deref(),
            Some("https://cdn.example/c.jpg")
        );
    }
}

mod live_tests {
    use super::*;

    /// Requires a running webhook backend.
    #[tokio::test]
    #[ignore = "requires running backend"]
    async fn connect_to_backend() {
        let client = WebhookClient::connect(config_from_env()).await;
        assert!(client.is_ok(), "Failed to connect: {:?}", client.err());
    }

    /// Requires a running webhook backend.
    #[tokio::test]
    #[ignore = "requires running backend"]
    async fn list_messages_and_contacts() {
        let client = WebhookClient::connect(config_from_env()).await.unwrap();
        let messages = client.list_messages(50, 0).await.unwrap();
        let contacts = client.list_contacts().await.unwrap();
        println!("{} messages, {} contacts", messages.len(), contacts.len());
    }

    /// Requires a running backend and ZAP_TEST_PHONE.
    #[tokio::test]
    #[ignore = "requires running backend and ZAP_TEST_PHONE"]
    async fn send_message() {
        let recipient = env::var("ZAP_TEST_PHONE").expect("ZAP_TEST_PHONE not set");
        let client = WebhookClient::connect(config_from_env()).await.unwrap();
        client
            .send_message(&recipient, "Mensagem de teste")
            .await
            .unwrap();
    }

    /// Connection failure against a dead port surfaces as an HTTP error.
    #[tokio::test]
    async fn connect_failure() {
        let config = WebhookConfig::new("http://127.0.0.1:59999", "default", "main");
        let result = WebhookClient::connect(config).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            WebhookError::Http(_) => {}
            e => panic!("Unexpected error type: {:?}", e),
        }
    }
}
