//! Serde shapes for envelopes shared across endpoints.

use serde::Deserialize;

use crate::core::models::Health;

/// The `{ "message": ... }` body the backend attaches to every rejection
/// (and to some successes).
#[derive(Deserialize)]
pub(crate) struct ApiMessage {
    pub(crate) message: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct HealthEnvelope {
    pub(crate) status: String,
    pub(crate) uptime: f64,
    pub(crate) message: Option<String>,
}

impl From<HealthEnvelope> for Health {
    fn from(w: HealthEnvelope) -> Self {
        Self {
            status: w.status,
            uptime: w.uptime,
            message: w.message,
        }
    }
}
