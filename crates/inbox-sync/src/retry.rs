//! Bounded-backoff retry for the initial load.
//!
//! Only the first load of a session uses this path; the recurring poller
//! never retries a failed tick, it just waits for the next interval.

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::source::InboxSource;
use crate::state::InboxState;
use crate::SyncError;
use crate::DEFAULT_POLL_LIMIT;

/// Backoff policy for the initial load.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts before giving up.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Cap on the delay between retries.
    pub max_delay: Duration,
    /// Backoff multiplier for each retry.
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Calculate the delay for a given attempt number.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay_ms =
            self.initial_delay.as_millis() as f64 * self.backoff_multiplier.powi(attempt as i32);
        Duration::from_millis(delay_ms as u64).min(self.max_delay)
    }

    /// Whether another attempt is allowed after `attempts` failures.
    pub fn should_retry(&self, attempts: u32) -> bool {
        attempts < self.max_attempts
    }
}

/// Fetch the first snapshot and adopt it unconditionally, retrying with
/// backoff up to the policy's budget. Exhausting the budget surfaces as
/// [`SyncError::LoadFailed`] for the caller to show a retry affordance.
pub async fn load_initial<S: InboxSource>(
    source: &S,
    state: &Mutex<InboxState>,
    policy: &RetryPolicy,
) -> Result<(), SyncError> {
    let mut attempts = 0u32;
    loop {
        match fetch_both(source).await {
            Ok((messages, contacts)) => {
                let mut state = state.lock().await;
                state.adopt(messages, &contacts);
                info!(
                    "Initial load complete: {} messages, {} contacts",
                    state.snapshot().len(),
                    state.roster().len()
                );
                return Ok(());
            }
            Err(e) => {
                attempts += 1;
                if !policy.should_retry(attempts) {
                    return Err(SyncError::LoadFailed {
                        attempts,
                        source: e,
                    });
                }
                let delay = policy.delay_for_attempt(attempts - 1);
                warn!(
                    "Initial load attempt {} failed: {} (retrying in {:?})",
                    attempts, e, delay
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

async fn fetch_both<S: InboxSource>(
    source: &S,
) -> Result<(Vec<chat_core::Message>, Vec<chat_core::Contact>), webhook_client::WebhookError> {
    let messages = source.fetch_messages(DEFAULT_POLL_LIMIT, 0).await?;
    let contacts = source.fetch_contacts().await?;
    Ok((messages, contacts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_and_caps() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for_attempt(0), Duration::from_millis(500));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(2000));
        assert_eq!(policy.delay_for_attempt(10), Duration::from_secs(10));
    }

    #[test]
    fn retry_budget_is_capped() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(1));
        assert!(policy.should_retry(2));
        assert!(!policy.should_retry(3));
    }
}
