use serde::Serialize;

use crate::core::{GsClient, GsError, client::MAX_LIST_LIMIT, models::Generation, net};
use crate::generations::wire::GenerationWire;
use crate::retry::{CancelToken, RetryConfig};

#[derive(Serialize)]
struct CreatePayload<'a> {
    prompt: &'a str,
    // The backend requires both keys; empty strings select its defaults.
    style: &'a str,
    #[serde(rename = "imageUpload")]
    image_upload: &'a str,
}

pub(super) async fn create_generation(
    client: &GsClient,
    prompt: &str,
    style: Option<&str>,
    image_upload: Option<&str>,
    retry_override: Option<&RetryConfig>,
    cancel: Option<&CancelToken>,
) -> Result<Generation, GsError> {
    if prompt.trim().is_empty() {
        return Err(GsError::InvalidPrompt);
    }

    let token = client.ensure_token().await?;
    let url = client.endpoint("v1/generations")?;
    let payload = CreatePayload {
        prompt,
        style: style.unwrap_or(""),
        image_upload: image_upload.unwrap_or(""),
    };

    let req = client
        .http()
        .post(url)
        .bearer_auth(&token)
        .json(&payload);
    let resp = client.send_with_retry(req, retry_override, cancel).await?;

    let wire: GenerationWire = net::read_json(resp, "generation").await?;
    Ok(wire.into())
}

pub(super) async fn list_generations(
    client: &GsClient,
    limit: u32,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<Generation>, GsError> {
    let limit = limit.clamp(1, MAX_LIST_LIMIT);
    let token = client.ensure_token().await?;

    let mut url = client.endpoint("v1/generations")?;
    url.query_pairs_mut()
        .append_pair("limit", &limit.to_string());

    let req = client.http().get(url).bearer_auth(&token);
    let resp = client.send_with_retry(req, retry_override, None).await?;

    let wire: Vec<GenerationWire> = net::read_json(resp, "generations").await?;
    Ok(wire.into_iter().map(Into::into).collect())
}
