//! Core components of the `genstudio-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`GsClient`] and its builder.
//! - The primary [`GsError`] type.
//! - Shared data models like [`Generation`] and [`User`].
//! - Internal networking and envelope-decoding helpers.

/// The main client (`GsClient`), builder, and configuration.
pub mod client;
/// The primary error type (`GsError`) for the crate.
pub mod error;
/// Shared data models used across the API modules.
pub mod models;

pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::GsClient`
pub use client::{GsClient, GsClientBuilder};
pub use error::GsError;
pub use models::{Generation, GenerationStatus, Health, User};
