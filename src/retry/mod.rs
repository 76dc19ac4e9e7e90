//! Bounded exponential-backoff retry with cooperative cancellation.
//!
//! [`RetryExecutor`] runs a fallible async operation up to
//! `max_retries + 1` times, sleeping `min(base_delay * 2^attempt, max_delay)`
//! between attempts. A [`CancelToken`] short-circuits the loop: it is checked
//! before every attempt and raced against the backoff sleep, but never
//! interrupts an attempt already in flight.

mod token;

pub use token::CancelToken;

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, warn};

use crate::core::error::GsError;

/// Retry budget and backoff bounds. Immutable for the lifetime of one
/// [`RetryExecutor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries. The total number of attempts is
    /// `max_retries + 1`.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Upper bound on the delay between retries. Never below `base_delay`.
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryConfig {
    /// Build a config, raising `max_delay` to `base_delay` when the caller
    /// passes an inverted pair.
    #[must_use]
    pub fn new(max_retries: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            max_delay: max_delay.max(base_delay),
        }
    }

    /// A config that never retries: the operation runs exactly once.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Backoff before retry `attempt + 1`, where `attempt` is 0-based from
    /// the first retry-triggering failure: `min(base * 2^attempt, max)`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        // Exponent capped so the shift cannot overflow; the cap is far past
        // any delay that survives the min() anyway.
        let factor = 2u32.saturating_pow(attempt.min(31));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Observable progress of the current (or most recent) execution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttemptState {
    /// Failures recorded so far in this execution.
    pub retry_count: u32,
    /// True while any attempt after the first is running or pending.
    pub is_retrying: bool,
    /// Message of the most recent failure.
    pub last_error: Option<String>,
}

/// Executes fallible async operations under a [`RetryConfig`].
///
/// The executor is a plain stateful object: `state()` exposes a snapshot of
/// the current [`AttemptState`] so observers (UI bindings, tests) can watch
/// retry progress without being woven into the loop.
#[derive(Debug)]
pub struct RetryExecutor {
    config: RetryConfig,
    state: Mutex<AttemptState>,
}

impl Default for RetryExecutor {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

impl RetryExecutor {
    #[must_use]
    pub fn new(config: RetryConfig) -> Self {
        debug_assert!(config.base_delay <= config.max_delay);
        Self {
            config,
            state: Mutex::new(AttemptState::default()),
        }
    }

    /// The policy this executor was built with.
    #[must_use]
    pub const fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Snapshot of the current attempt state.
    #[must_use]
    pub fn state(&self) -> AttemptState {
        self.lock().clone()
    }

    /// Clear `retry_count`, `is_retrying`, and `last_error`. Does not affect
    /// an in-flight [`execute`](Self::execute) call's control flow.
    pub fn reset(&self) {
        *self.lock() = AttemptState::default();
    }

    /// Run `op` until it succeeds, the retry budget is spent, or the token
    /// is cancelled.
    ///
    /// `op` is re-invoked from scratch on every attempt; making re-invocation
    /// safe (idempotency) is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// - [`GsError::Cancelled`] when the token is set before an attempt or
    ///   during a backoff sleep, or when `op` itself fails with it. Never
    ///   retried.
    /// - Otherwise, the error of the final attempt, message preserved.
    pub async fn execute<T, F, Fut>(
        &self,
        mut op: F,
        cancel: Option<&CancelToken>,
    ) -> Result<T, GsError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, GsError>>,
    {
        self.reset();
        let mut last_err: Option<GsError> = None;

        for attempt in 0..=self.config.max_retries {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                self.lock().is_retrying = false;
                return Err(GsError::Cancelled);
            }

            self.lock().is_retrying = attempt > 0;

            match op().await {
                Ok(value) => {
                    if attempt > 0 {
                        debug!(total_attempts = attempt + 1, "operation succeeded after retries");
                    }
                    self.reset();
                    return Ok(value);
                }
                Err(GsError::Cancelled) => {
                    self.lock().is_retrying = false;
                    return Err(GsError::Cancelled);
                }
                Err(err) => {
                    {
                        let mut st = self.lock();
                        st.retry_count = attempt + 1;
                        st.last_error = Some(err.to_string());
                    }

                    if attempt < self.config.max_retries {
                        let delay = self.config.delay_for(attempt);
                        debug!(
                            attempt = attempt + 1,
                            delay_ms = delay.as_millis() as u64,
                            error = %err,
                            "retrying after failure"
                        );
                        if let Some(token) = cancel {
                            tokio::select! {
                                () = token.cancelled() => {
                                    self.lock().is_retrying = false;
                                    return Err(GsError::Cancelled);
                                }
                                () = tokio::time::sleep(delay) => {}
                            }
                        } else {
                            tokio::time::sleep(delay).await;
                        }
                    }
                    last_err = Some(err);
                }
            }
        }

        self.lock().is_retrying = false;
        warn!(
            attempts = self.config.max_retries + 1,
            "operation failed after all retry attempts"
        );
        Err(last_err.unwrap_or_else(|| GsError::Data("retry budget exhausted".into())))
    }

    fn lock(&self) -> MutexGuard<'_, AttemptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
