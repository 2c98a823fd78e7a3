//! Request pacing for the GitHub API.
//!
//! Records are imported one at a time with a fixed pause between creation
//! requests. Optionally the pause also consults GitHub's core rate limit and
//! waits for the window to reset when it is nearly exhausted.

use crate::github::IssueTracker;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Maximum time to wait for rate limit reset (1 hour).
const MAX_WAIT_SECS: u64 = 3600;

/// Minimum remaining requests before proactively waiting.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Default pause between issue creation requests.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Rate limit information for a specific resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets.
    pub reset: u64,
    /// Total requests allowed per window.
    pub limit: u32,
}

/// Waits if the rate limit is low, returning true if we waited.
///
/// This function proactively waits when remaining requests fall below
/// `MIN_REMAINING_THRESHOLD` to avoid hitting hard limits.
pub async fn wait_if_needed(info: &RateLimitInfo) -> bool {
    if info.remaining >= MIN_REMAINING_THRESHOLD {
        return false;
    }

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    if info.reset <= now {
        return false;
    }

    let wait_secs = info.reset - now;
    if wait_secs > MAX_WAIT_SECS {
        warn!(
            wait_secs,
            max_wait = MAX_WAIT_SECS,
            "Rate limit reset too far in future, capping wait time"
        );
    }

    let actual_wait = wait_secs.min(MAX_WAIT_SECS);
    info!(
        remaining = info.remaining,
        wait_secs = actual_wait,
        "Rate limit low, waiting for reset"
    );

    tokio::time::sleep(Duration::from_secs(actual_wait)).await;
    true
}

/// Delay policy applied between consecutive issue creations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
    respect_rate_limit: bool,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_DELAY, false)
    }
}

impl Pacer {
    /// Creates a pacer with a fixed delay, optionally also honouring the
    /// core rate limit.
    #[must_use]
    pub fn new(delay: Duration, respect_rate_limit: bool) -> Self {
        Self {
            delay,
            respect_rate_limit,
        }
    }

    /// Returns the fixed delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns whether the core rate limit is consulted after each pause.
    #[must_use]
    pub fn respects_rate_limit(&self) -> bool {
        self.respect_rate_limit
    }

    /// Pauses before the next request.
    ///
    /// Failing to read the rate limit is logged and otherwise ignored.
    pub async fn pause(&self, tracker: &dyn IssueTracker) {
        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis() as u64, "Pausing between requests");
            tokio::time::sleep(self.delay).await;
        }

        if !self.respect_rate_limit {
            return;
        }

        match tracker.core_rate_limit().await {
            Ok(Some(info)) => {
                wait_if_needed(&info).await;
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Failed to check rate limit"),
        }
    }
}
