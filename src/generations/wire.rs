use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::models::{Generation, GenerationStatus};

/// Backend generation record, camelCase as stored.
#[derive(Deserialize)]
pub(super) struct GenerationWire {
    pub(super) id: i64,
    #[serde(rename = "imageUrl")]
    pub(super) image_url: Option<String>,
    pub(super) prompt: String,
    pub(super) style: Option<String>,
    #[serde(rename = "createdAt")]
    pub(super) created_at: DateTime<Utc>,
    pub(super) status: GenerationStatus,
}

impl From<GenerationWire> for Generation {
    fn from(w: GenerationWire) -> Self {
        Self {
            id: w.id,
            image_url: w.image_url,
            // An empty style on the wire means "none was chosen".
            style: w.style.filter(|s| !s.is_empty()),
            prompt: w.prompt,
            created_at: w.created_at,
            status: w.status,
        }
    }
}
