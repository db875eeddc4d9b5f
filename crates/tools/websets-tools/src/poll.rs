//! Polling policy for waiting on a webset.

use std::time::Duration;

/// Status checks made before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 12;
/// Delay between consecutive status checks
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Overrides `max_attempts`
pub const ENV_POLL_ATTEMPTS: &str = "EXA_WEBSETS_POLL_ATTEMPTS";
/// Overrides `interval`, in whole seconds
pub const ENV_POLL_INTERVAL_SECS: &str = "EXA_WEBSETS_POLL_INTERVAL_SECS";

/// Fixed-interval polling policy: 12 checks, 5 seconds apart, by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Maximum number of status checks; always at least 1
    pub max_attempts: u32,
    /// Delay between two consecutive checks
    pub interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: DEFAULT_INTERVAL,
        }
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key, value = raw, error = %e, "ignoring unparseable poll setting");
            None
        }
    }
}

impl PollOptions {
    /// Defaults, overridden by `EXA_WEBSETS_POLL_ATTEMPTS` and
    /// `EXA_WEBSETS_POLL_INTERVAL_SECS` when they hold valid integers.
    #[must_use]
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(n) = env_u64(ENV_POLL_ATTEMPTS) {
            opts = opts.with_max_attempts(u32::try_from(n).unwrap_or(u32::MAX));
        }
        if let Some(secs) = env_u64(ENV_POLL_INTERVAL_SECS) {
            opts = opts.with_interval(Duration::from_secs(secs));
        }
        opts
    }

    /// Set the maximum number of status checks (clamped to at least 1).
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Set the delay between status checks.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Total time spent sleeping when every attempt is used, saturating at
    /// [`Duration::MAX`].
    #[must_use]
    pub fn max_wait(&self) -> Duration {
        self.interval
            .checked_mul(self.max_attempts.saturating_sub(1))
            .unwrap_or(Duration::MAX)
    }
}
