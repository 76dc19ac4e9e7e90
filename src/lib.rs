//! genstudio-rs: ergonomic client for the GenStudio image-generation API.
//!
//! The crate covers the full backend surface — signup/login, generation
//! submission and listing, and the health probe — plus two higher-level
//! building blocks:
//!
//! - [`RetryExecutor`]: bounded exponential-backoff retry with cooperative
//!   cancellation for any fallible async operation.
//! - [`GenerationSession`]: an observable, framework-agnostic state container
//!   that drives one user's generation workflow end to end.

pub mod core;
pub mod generations;
pub mod retry;
pub mod session;

pub(crate) mod auth;

pub use crate::core::client::{GsClient, GsClientBuilder};
pub use crate::core::error::GsError;
pub use crate::core::models::{Generation, GenerationStatus, Health, User};
pub use crate::generations::GenerateBuilder;
pub use crate::retry::{AttemptState, CancelToken, RetryConfig, RetryExecutor};
pub use crate::session::{GenerationSession, RemoteClient, SessionState};
