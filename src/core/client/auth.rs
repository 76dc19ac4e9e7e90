//! Bearer-token state shared by all authenticated endpoints.
//!
//! The token is issued by `login` and stored behind an async `RwLock`; the
//! client treats it as opaque and only threads it into `Authorization`
//! headers.

use crate::core::error::GsError;

impl super::GsClient {
    /// The bearer token currently held by this client, if any.
    pub async fn bearer_token(&self) -> Option<String> {
        self.inner.token.read().await.clone()
    }

    /// Install a bearer token obtained out of band (e.g. from a stored
    /// session). `login` calls this automatically.
    pub async fn set_bearer_token(&self, token: impl Into<String>) {
        *self.inner.token.write().await = Some(token.into());
    }

    /// Drop the stored token, e.g. on logout or after a 401.
    pub async fn clear_bearer_token(&self) {
        *self.inner.token.write().await = None;
    }

    /// Fetch the token for an authenticated request, failing up front when
    /// none is available rather than letting the backend 401.
    pub(crate) async fn ensure_token(&self) -> Result<String, GsError> {
        self.inner
            .token
            .read()
            .await
            .clone()
            .ok_or_else(|| GsError::Auth("no bearer token; call login() first".into()))
    }
}
