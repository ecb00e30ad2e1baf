//! Sequential batch broadcast with pacing and per-recipient accounting.

use std::time::Duration;

use chat_core::{apply_vars, PhoneKey, TemplateVars};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::sender::MessageSender;

/// Pacing discipline for a broadcast, keeping the send rate under the
/// provider's implicit limit.
#[derive(Debug, Clone)]
pub struct PacingConfig {
    /// Wait after every recipient except the last.
    pub cooldown: Duration,
    /// Recipients per batch.
    pub batch_size: usize,
    /// Longer wait after every full batch.
    pub batch_cooldown: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_secs(2),
            batch_size: 10,
            batch_cooldown: Duration::from_secs(20),
        }
    }
}

impl PacingConfig {
    /// Override the per-recipient cooldown.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Override the batch size and batch cooldown.
    pub fn with_batch(mut self, batch_size: usize, batch_cooldown: Duration) -> Self {
        self.batch_size = batch_size;
        self.batch_cooldown = batch_cooldown;
        self
    }

    /// Which delay applies after the recipient at `index` (0-based) out of
    /// `total`: none after the last, the batch cooldown after every
    /// `batch_size`-th, the short cooldown otherwise.
    pub fn delay_after(&self, index: usize, total: usize) -> Option<Duration> {
        if index + 1 >= total {
            None
        } else if self.batch_size > 0 && (index + 1) % self.batch_size == 0 {
            Some(self.batch_cooldown)
        } else {
            Some(self.cooldown)
        }
    }
}

/// Live counters for a running broadcast, published after every recipient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastProgress {
    /// Recipients attempted so far.
    pub sent: usize,
    /// Total recipients in the job.
    pub total: usize,
    /// Sends the backend accepted.
    pub success: usize,
    /// Sends that failed (counted, never retried mid-batch).
    pub failed: usize,
}

/// Final accounting for a completed broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastSummary {
    /// Sends the backend accepted.
    pub success: usize,
    /// Sends that failed.
    pub failed: usize,
}

/// Lifecycle of a broadcast job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastStatus {
    /// No job loaded.
    Idle,
    /// Job in progress.
    Running,
    /// Job finished; transient, the engine resets to Idle right after.
    Done,
}

/// Dispatches a broadcast to many recipients, strictly in input order, one
/// in-flight send at a time.
///
/// A per-recipient failure is counted and logged but never halts the batch,
/// and nothing is retried within a batch: the operator re-selects failed
/// recipients and runs again. There is no mid-flight cancellation; once
/// started, a job runs to completion.
pub struct BroadcastEngine {
    pacing: PacingConfig,
    status: BroadcastStatus,
    recipients: Vec<PhoneKey>,
    template: String,
    progress_tx: watch::Sender<BroadcastProgress>,
}

impl BroadcastEngine {
    /// Create an idle engine.
    pub fn new(pacing: PacingConfig) -> Self {
        let (progress_tx, _) = watch::channel(BroadcastProgress::default());
        Self {
            pacing,
            status: BroadcastStatus::Idle,
            recipients: Vec::new(),
            template: String::new(),
            progress_tx,
        }
    }

    /// Subscribe to live progress. The latest value is always available;
    /// a new value is published after every recipient.
    pub fn subscribe(&self) -> watch::Receiver<BroadcastProgress> {
        self.progress_tx.subscribe()
    }

    /// Current job status.
    pub fn status(&self) -> BroadcastStatus {
        self.status
    }

    /// Recipients of the loaded job; empty when idle.
    pub fn recipients(&self) -> &[PhoneKey] {
        &self.recipients
    }

    /// Template of the loaded job; empty when idle.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Run a broadcast to completion and return the final accounting.
    ///
    /// For each recipient in order: personalize the template via
    /// `vars_for`, send, count the outcome, publish progress, then pace
    /// per [`PacingConfig::delay_after`]. When the loop finishes the
    /// engine publishes the final counters, logs the summary and resets
    /// itself to idle, clearing template and recipients.
    pub async fn run<S, F>(
        &mut self,
        sender: &S,
        recipients: Vec<PhoneKey>,
        template: &str,
        vars_for: F,
    ) -> BroadcastSummary
    where
        S: MessageSender + ?Sized,
        F: Fn(&PhoneKey) -> TemplateVars,
    {
        let total = recipients.len();
        self.status = BroadcastStatus::Running;
        self.recipients = recipients;
        self.template = template.to_string();

        let mut progress = BroadcastProgress {
            total,
            ..Default::default()
        };
        self.progress_tx.send_replace(progress);

        info!("Broadcast started: {} recipient(s)", total);

        for index in 0..total {
            let recipient = self.recipients[index].clone();
            let body = apply_vars(&self.template, &vars_for(&recipient));

            match sender.send(&recipient, &body).await {
                Ok(()) => progress.success += 1,
                Err(e) => {
                    progress.failed += 1;
                    warn!("Broadcast send to {} failed: {}", recipient, e);
                }
            }
            progress.sent += 1;
            self.progress_tx.send_replace(progress);

            if let Some(delay) = self.pacing.delay_after(index, total) {
                tokio::time::sleep(delay).await;
            }
        }

        let summary = BroadcastSummary {
            success: progress.success,
            failed: progress.failed,
        };
        self.status = BroadcastStatus::Done;
        info!(
            "Broadcast complete: {} ok, {} failed",
            summary.success, summary.failed
        );

        // Job accounting is delivered; the engine is reusable immediately.
        self.recipients.clear();
        self.template.clear();
        self.status = BroadcastStatus::Idle;

        summary
    }

    /// Abandon a loaded job without running it (leaving bulk mode).
    /// In-flight sends of a finished run are never revoked; this only
    /// clears the queued selection.
    pub fn reset(&mut self) {
        self.recipients.clear();
        self.template.clear();
        self.status = BroadcastStatus::Idle;
        self.progress_tx.send_replace(BroadcastProgress::default());
    }
}
