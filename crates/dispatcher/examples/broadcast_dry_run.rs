//! Broadcast dry run using the LoggingSender.
//!
//! Paces a small broadcast through the engine without touching a backend,
//! printing each would-be send and the live progress counter.
//!
//! Run with: cargo run -p dispatcher --example broadcast_dry_run

use std::time::Duration;

use chat_core::{PhoneKey, TemplateVars};
use dispatcher::{BroadcastEngine, LoggingSender, PacingConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let recipients: Vec<PhoneKey> = [
        "11987654321",
        "(21) 98888-7777",
        "5531977776666",
        "41 96666-5555",
    ]
    .iter()
    .map(|raw| PhoneKey::normalize(raw))
    .collect();

    // Short pacing so the dry run finishes quickly.
    let pacing = PacingConfig::default()
        .with_cooldown(Duration::from_millis(200))
        .with_batch(2, Duration::from_millis(600));

    let mut engine = BroadcastEngine::new(pacing);
    let mut progress = engine.subscribe();

    let watcher = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let p = *progress.borrow();
            println!("progress: {}/{} ({} ok, {} failed)", p.sent, p.total, p.success, p.failed);
        }
    });

    let summary = engine
        .run(
            &LoggingSender,
            recipients,
            "{{greeting}} {{name}}, sua mensagem de {{date}}.",
            |key| TemplateVars::now(key.format_display()),
        )
        .await;

    drop(engine);
    let _ = watcher.await;

    println!("done: {} ok, {} failed", summary.success, summary.failed);
}
