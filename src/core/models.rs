use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a generation record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationStatus {
    /// Submitted, image not yet produced.
    Pending,
    /// Image produced and available at `image_url`.
    Completed,
    /// The backend gave up on this record.
    Failed,
}

/// One "AI generation" record, as stored by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    /// Backend-assigned record id.
    pub id: i64,
    /// URL of the produced image, once available.
    pub image_url: Option<String>,
    /// The prompt the record was created from.
    pub prompt: String,
    /// Optional style hint (e.g. `"realistic"`).
    pub style: Option<String>,
    /// Creation time, UTC.
    pub created_at: DateTime<Utc>,
    /// Current lifecycle state.
    pub status: GenerationStatus,
}

/// An authenticated (or newly registered) user.
///
/// `token` is only populated by login; the signup endpoint does not issue
/// one, the user logs in afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    /// Backend-assigned user id.
    pub id: i64,
    /// Display name, when the backend returns one.
    pub name: Option<String>,
    /// Account email.
    pub email: String,
    /// Bearer token, present after login.
    pub token: Option<String>,
}

/// Result of the `/health` probe.
#[derive(Clone, Debug, PartialEq)]
pub struct Health {
    /// Reported status string, e.g. `"healthy"`.
    pub status: String,
    /// Server uptime in seconds.
    pub uptime: f64,
    /// Optional human-readable note.
    pub message: Option<String>,
}
