use serde::Deserialize;

use crate::core::models::User;

/// `{ "message": ..., "user": {...} }` returned by both auth endpoints.
#[derive(Deserialize)]
pub(super) struct AuthEnvelope {
    pub(super) user: Option<UserWire>,
}

#[derive(Deserialize)]
pub(super) struct UserWire {
    pub(super) id: i64,
    pub(super) name: Option<String>,
    pub(super) email: String,
    /// Present on login responses only.
    pub(super) token: Option<String>,
}

impl From<UserWire> for User {
    fn from(w: UserWire) -> Self {
        Self {
            id: w.id,
            name: w.name,
            email: w.email,
            token: w.token,
        }
    }
}
