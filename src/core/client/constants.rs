//! Centralized constants for default endpoints and retry behavior.

/// Identifies this client to the backend.
pub(crate) const USER_AGENT: &str = concat!("genstudio-rs/", env!("CARGO_PKG_VERSION"));

/// Default API base for a local backend (routes are joined onto this).
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:4000/api/";

/// Statuses worth retrying at the transport layer. Everything else is a
/// definitive answer from the backend and is returned as-is.
pub(crate) const RETRY_STATUS: [u16; 6] = [408, 429, 500, 502, 503, 504];

/// Largest `limit` the list endpoint accepts.
pub(crate) const MAX_LIST_LIMIT: u32 = 50;

/// Default page size for generation listings.
pub(crate) const DEFAULT_LIST_LIMIT: u32 = 5;
