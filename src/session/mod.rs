//! Observable generation workflow, decoupled from any UI framework.
//!
//! [`GenerationSession`] owns a [`SessionState`] behind a `watch` channel:
//! callers mutate it only through `generate`/`abort`/`fetch_recent`, and
//! observers either poll [`state`](GenerationSession::state) or await
//! changes on [`subscribe`](GenerationSession::subscribe).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::debug;

use crate::core::{GsClient, GsError, models::Generation};
use crate::generations::{self, GenerateBuilder};
use crate::retry::{AttemptState, CancelToken, RetryConfig, RetryExecutor};

/// How many records `recent` keeps.
pub const RECENT_CAP: usize = 5;

const MSG_EMPTY_PROMPT: &str = "Enter a prompt";
const MSG_CANCELLED: &str = "Generation cancelled";
const MSG_GENERIC: &str = "Generation failed";

/// The remote boundary the session talks through. Constructor-injected so
/// tests can substitute a fake; [`GsClient`] is the production
/// implementation and passes its stored bearer token through opaquely.
pub trait RemoteClient {
    /// Submit one generation request.
    fn create_generation(
        &self,
        prompt: &str,
        style: Option<&str>,
    ) -> impl Future<Output = Result<Generation, GsError>> + Send;

    /// Fetch recent generations, newest first, at most `limit` entries.
    fn list_generations(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Generation>, GsError>> + Send;
}

impl RemoteClient for GsClient {
    fn create_generation(
        &self,
        prompt: &str,
        style: Option<&str>,
    ) -> impl Future<Output = Result<Generation, GsError>> + Send {
        async move {
            let mut builder = GenerateBuilder::new(self, prompt);
            if let Some(style) = style {
                builder = builder.style(style);
            }
            // The session drives its own retry loop; the remote call itself
            // runs single-shot.
            builder.retry_policy(Some(RetryConfig::none())).submit().await
        }
    }

    fn list_generations(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Generation>, GsError>> + Send {
        generations::list(self, limit)
    }
}

/// Everything an observer needs to render the workflow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// True from the moment a generation is submitted until it settles or
    /// is aborted.
    pub is_generating: bool,
    /// Human-readable failure message, cleared by the next success.
    pub error: Option<String>,
    /// The most recently completed generation.
    pub result: Option<Generation>,
    /// Recent records, newest first, capped at [`RECENT_CAP`].
    pub recent: Vec<Generation>,
}

struct Flight {
    token: CancelToken,
    stamp: u64,
}

/// Orchestrates one user's generation workflow: validate, submit through
/// the retry executor, classify failures, keep a bounded recent list.
///
/// Generation is single-flight: starting a new one cancels the in-flight
/// one, whose outcome is then discarded.
pub struct GenerationSession<R> {
    remote: R,
    retry: RetryExecutor,
    tx: watch::Sender<SessionState>,
    active: Mutex<Option<Flight>>,
    next_stamp: AtomicU64,
}

impl<R: RemoteClient> GenerationSession<R> {
    /// Session with the default retry policy (3 retries, 500ms–5s backoff).
    pub fn new(remote: R) -> Self {
        Self::with_config(remote, RetryConfig::default())
    }

    pub fn with_config(remote: R, config: RetryConfig) -> Self {
        let (tx, _) = watch::channel(SessionState::default());
        Self {
            remote,
            retry: RetryExecutor::new(config),
            tx,
            active: Mutex::new(None),
            next_stamp: AtomicU64::new(1),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Watch for state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Retry progress of the current (or most recent) generation.
    #[must_use]
    pub fn retry_state(&self) -> AttemptState {
        self.retry.state()
    }

    /// The injected remote collaborator.
    #[must_use]
    pub const fn remote(&self) -> &R {
        &self.remote
    }

    /// Submit a generation and drive it to a terminal state.
    ///
    /// An empty (trimmed) prompt fails fast: the error is set synchronously
    /// and no remote call is made. Otherwise the call runs under the
    /// session's retry policy until it succeeds, the budget is spent, or
    /// the flight is cancelled via [`abort`](Self::abort) or superseded by
    /// a newer `generate`.
    pub async fn generate(&self, prompt: &str, style: Option<&str>) {
        if prompt.trim().is_empty() {
            self.tx.send_modify(|s| s.error = Some(MSG_EMPTY_PROMPT.into()));
            return;
        }

        let token = CancelToken::new();
        let stamp = self.next_stamp.fetch_add(1, Ordering::SeqCst);
        if let Some(prev) = self.lock_active().replace(Flight {
            token: token.clone(),
            stamp,
        }) {
            // single-flight: the newer request supersedes the older one
            prev.token.cancel();
        }

        self.tx.send_modify(|s| {
            s.is_generating = true;
            s.error = None;
        });

        let remote = &self.remote;
        let outcome = self
            .retry
            .execute(move || remote.create_generation(prompt, style), Some(&token))
            .await;

        {
            let mut active = self.lock_active();
            match active.as_ref() {
                Some(flight) if flight.stamp == stamp => *active = None,
                // Superseded while in flight; the newer call owns the
                // observable state now.
                _ => return,
            }
        }

        // A settle after abort counts as cancelled even when the in-flight
        // attempt happened to succeed.
        let outcome = if token.is_cancelled() {
            Err(GsError::Cancelled)
        } else {
            outcome
        };

        match outcome {
            Ok(generation) => self.tx.send_modify(|s| {
                s.result = Some(generation.clone());
                s.recent.insert(0, generation);
                s.recent.truncate(RECENT_CAP);
                s.error = None;
                s.is_generating = false;
            }),
            Err(err) => {
                let message = self.classify(err);
                self.tx.send_modify(|s| {
                    s.error = Some(message);
                    s.is_generating = false;
                });
            }
        }
    }

    /// Cancel the in-flight generation, if any. `is_generating` drops
    /// immediately; the flight reports `"Generation cancelled"` once it
    /// settles at its next cancellation checkpoint.
    pub fn abort(&self) {
        let active = self.lock_active();
        if let Some(flight) = active.as_ref() {
            flight.token.cancel();
            self.tx.send_modify(|s| s.is_generating = false);
        }
    }

    /// Background refresh of `recent` (newest [`RECENT_CAP`] records).
    /// Failures are swallowed: the previous list stays in place.
    pub async fn fetch_recent(&self) {
        match self.remote.list_generations(RECENT_CAP as u32).await {
            Ok(items) => self.tx.send_modify(|s| s.recent = items),
            Err(err) => debug!(error = %err, "recent-list refresh failed; keeping previous list"),
        }
    }

    fn classify(&self, err: GsError) -> String {
        match err {
            GsError::Cancelled => MSG_CANCELLED.to_string(),
            // Structured backend rejections surface verbatim.
            GsError::Api { message, .. } => message,
            other => {
                let message = other.to_string();
                if message.is_empty() {
                    self.retry
                        .state()
                        .last_error
                        .unwrap_or_else(|| MSG_GENERIC.to_string())
                } else {
                    message
                }
            }
        }
    }

    fn lock_active(&self) -> MutexGuard<'_, Option<Flight>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
