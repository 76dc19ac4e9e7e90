#![allow(dead_code)]

use genstudio_rs::{GsClient, GsClientBuilder, RetryConfig};
use httpmock::MockServer;
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Builder pointed at the mock server, retries disabled so mocks see
/// exactly one hit unless a test opts back in.
pub fn client_builder_for(server: &MockServer) -> GsClientBuilder {
    GsClient::builder()
        .base_url(Url::parse(&format!("{}/api/", server.base_url())).unwrap())
        .retry_config(RetryConfig::none())
}

/// Pre-authenticated client for generation endpoints.
pub fn client_for(server: &MockServer) -> GsClient {
    client_builder_for(server)
        .bearer_token("test-token")
        .build()
        .unwrap()
}

/// A backend generation record as the API serializes it.
pub fn generation_json(id: i64, prompt: &str, style: &str, status: &str) -> String {
    format!(
        r#"{{"id":{id},"imageUrl":"https://picsum.photos/seed/{id}/512","prompt":"{prompt}","style":"{style}","createdAt":"2026-08-25T12:00:00.000Z","status":"{status}"}}"#
    )
}
