//! Poll a live inbox and print roster and stats.
//!
//! Run with: cargo run -p inbox-sync --example poll_inbox
//!
//! Configuration via .env file or environment variables:
//!   ZAP_WEBHOOK_URL - backend base URL (default http://localhost:5678)
//!   ZAP_TENANT      - tenant slug (default "default")
//!   ZAP_ACCOUNT     - account id (default "main")

use std::env;
use std::sync::Arc;
use std::time::Duration;

use inbox_sync::{load_initial, InboxState, RetryPolicy, SyncPoller};
use tokio::sync::Mutex;
use webhook_client::{WebhookClient, WebhookConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = WebhookConfig::new(
        env::var("ZAP_WEBHOOK_URL").unwrap_or_else(|_| "http://localhost:5678".to_string()),
        env::var("ZAP_TENANT").unwrap_or_else(|_| "default".to_string()),
        env::var("ZAP_ACCOUNT").unwrap_or_else(|_| "main".to_string()),
    );

    println!("Connecting to {}...", config.base_url);
    let client = WebhookClient::connect(config).await?;

    let state = Arc::new(Mutex::new(InboxState::new()));
    load_initial(&client, &state, &RetryPolicy::default()).await?;

    let handle = SyncPoller::spawn(client, state.clone(), Duration::from_secs(10));

    for _ in 0..6 {
        tokio::time::sleep(Duration::from_secs(10)).await;
        let state = state.lock().await;
        let stats = state.stats();
        println!(
            "{} messages, {} conversations, {:.0}% auto-responses",
            stats.total_messages,
            stats.active_conversations,
            stats.response_rate * 100.0
        );
        for contact in state.roster() {
            println!("  {} <{}>", contact.display_name, contact.phone_key);
        }
    }

    handle.shutdown().await;
    Ok(())
}
