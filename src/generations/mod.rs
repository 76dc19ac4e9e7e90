//! Generation submission and listing.

mod api;
mod wire;

use crate::core::{GsClient, GsError, client::DEFAULT_LIST_LIMIT, models::Generation};
use crate::retry::{CancelToken, RetryConfig};

/// A builder for submitting one generation request.
///
/// ```no_run
/// # async fn demo(client: &genstudio_rs::GsClient) -> Result<(), genstudio_rs::GsError> {
/// use genstudio_rs::GenerateBuilder;
///
/// let generation = GenerateBuilder::new(client, "a sunset over the alps")
///     .style("realistic")
///     .submit()
///     .await?;
/// # Ok(()) }
/// ```
pub struct GenerateBuilder {
    client: GsClient,
    prompt: String,
    style: Option<String>,
    image_upload: Option<String>,
    retry_override: Option<RetryConfig>,
    cancel: Option<CancelToken>,
}

impl GenerateBuilder {
    /// Creates a new `GenerateBuilder` for a prompt.
    pub fn new(client: &GsClient, prompt: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            prompt: prompt.into(),
            style: None,
            image_upload: None,
            retry_override: None,
            cancel: None,
        }
    }

    /// Style hint forwarded to the model (e.g. `"realistic"`).
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Reference image for image-to-image generation, as a data URL.
    #[must_use]
    pub fn image_upload(mut self, data_url: impl Into<String>) -> Self {
        self.image_upload = Some(data_url.into());
        self
    }

    /// Overrides the client's retry policy for this call.
    #[must_use]
    pub fn retry_policy(mut self, config: Option<RetryConfig>) -> Self {
        self.retry_override = config;
        self
    }

    /// Attach a cancellation token: cancelling it stops the retry loop at
    /// its next checkpoint (it does not abort a request already in flight).
    #[must_use]
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Submits the generation request.
    ///
    /// # Errors
    ///
    /// [`GsError::InvalidPrompt`] when the prompt is empty after trimming
    /// (checked before any request is made), [`GsError::Auth`] without a
    /// bearer token, [`GsError::Cancelled`] on cancellation, or the
    /// transport/backend error of the final attempt.
    pub async fn submit(self) -> Result<Generation, GsError> {
        api::create_generation(
            &self.client,
            &self.prompt,
            self.style.as_deref(),
            self.image_upload.as_deref(),
            self.retry_override.as_ref(),
            self.cancel.as_ref(),
        )
        .await
    }
}

/// Fetch recent generations, newest first. `limit` is clamped to the
/// backend's accepted range (1–50).
///
/// # Errors
///
/// Requires a bearer token; fails with the transport/backend error of the
/// final attempt otherwise.
pub async fn list(client: &GsClient, limit: u32) -> Result<Vec<Generation>, GsError> {
    api::list_generations(client, limit, None).await
}

/// [`list`] with the default page size (5).
///
/// # Errors
///
/// Same as [`list`].
pub async fn list_recent(client: &GsClient) -> Result<Vec<Generation>, GsError> {
    list(client, DEFAULT_LIST_LIMIT).await
}
