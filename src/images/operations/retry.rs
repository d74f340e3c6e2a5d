use std::time::Duration;

use crate::config::ImageLoadConfig;
use crate::error::StoreError;
use crate::images::operations::fetch::ImageFetcher;
use crate::images::types::CancelToken;

/// Bounded exponential backoff for image fetches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_base: Duration,
    pub backoff_max: Duration,
}

impl RetryPolicy {
    pub fn from_config(cfg: &ImageLoadConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts.max(1),
            backoff_base: Duration::from_millis(cfg.backoff_base_ms),
            backoff_max: Duration::from_millis(cfg.backoff_max_ms),
        }
    }

    /// Wait before retry number `attempt` (1 = first retry)
    pub fn delay(&self, attempt: u32) -> Duration {
        let base = self.backoff_base.as_millis() as u64;
        let exp = base.saturating_mul(1u64 << attempt.saturating_sub(1).min(16));
        let jitter = fastrand::u64(0..=base / 2);
        Duration::from_millis(exp.saturating_add(jitter)).min(self.backoff_max)
    }
}

/// Whether another attempt could succeed
fn is_retryable(err: &StoreError) -> bool {
    match err {
        StoreError::Http { .. } => true,
        StoreError::HttpStatus { status, .. } => *status >= 500 || *status == 408 || *status == 429,
        _ => false,
    }
}

pub fn fetch_with_retry(
    fetcher: &dyn ImageFetcher,
    url: &str,
    policy: &RetryPolicy,
    cancel: &CancelToken,
) -> Result<Vec<u8>, StoreError> {
    let mut attempt = 0;
    loop {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }

        attempt += 1;
        match fetcher.fetch(url) {
            Ok(bytes) => return Ok(bytes),
            Err(e) if attempt < policy.max_attempts && is_retryable(&e) => {
                let delay = policy.delay(attempt);
                tracing::debug!(url, attempt, ?delay, "image fetch failed, retrying: {e}");
                std::thread::sleep(delay);
            }
            Err(e) => return Err(e),
        }
    }
}
