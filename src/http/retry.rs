//! Retry configuration for upstream requests.

use std::time::Duration;

/// Configuration for retry behavior.
///
/// Every operation is a read-only lookup, so all of them share one policy:
/// transport faults and 5xx responses are retried, everything else is not.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Optional ceiling on the delay. `None` leaves the backoff uncapped.
    pub max_delay: Option<Duration>,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add ±25% jitter to the delay.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: None,
            backoff_factor: 2.0,
            jitter: false,
        }
    }
}

impl RetryConfig {
    /// Never retry.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = Some(delay);
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Delay before the next attempt, given how many retries were already consumed.
    ///
    /// `initial_delay × backoff_factor^attempt`, so 1 s, 2 s, 4 s with the defaults.
    /// `max_delay` caps the result when set; jitter is applied after the cap.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = match self.max_delay {
            Some(max) => base.min(max.as_millis() as f64),
            None => base,
        };

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}
