//! Response decoding helpers shared by the API modules.

use serde::de::DeserializeOwned;

use crate::core::{error::GsError, wire::ApiMessage};

/// Decode a JSON body, tagging parse failures with the endpoint name.
pub(crate) async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    what: &str,
) -> Result<T, GsError> {
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| GsError::Data(format!("{what} json parse: {e}")))
}

/// Map a non-success response to an error, preferring the backend's
/// structured `{message}` body over a bare status code.
pub(crate) async fn error_for_status(resp: reqwest::Response) -> GsError {
    let status = resp.status().as_u16();
    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiMessage>(&body) {
        Ok(ApiMessage {
            message: Some(message),
        }) if !message.is_empty() => GsError::Api { status, message },
        _ => GsError::Status { status, url },
    }
}
