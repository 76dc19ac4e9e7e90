use std::time::Duration;

use httpmock::Method::POST;

use genstudio_rs::{GenerateBuilder, RetryConfig};

#[tokio::test]
async fn transient_status_is_retried_until_the_budget_is_spent() {
    let server = crate::common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/generations");
        then.status(503)
            .header("content-type", "application/json")
            .body(r#"{"message":"Model overloaded"}"#);
    });

    let client = crate::common::client_builder_for(&server)
        .bearer_token("test-token")
        .retry_config(RetryConfig::new(
            2,
            Duration::from_millis(1),
            Duration::from_millis(5),
        ))
        .build()
        .unwrap();

    let err = GenerateBuilder::new(&client, "a sunset")
        .submit()
        .await
        .unwrap_err();

    // max_retries = 2 means three attempts total, and the final failure
    // carries the backend's message.
    mock.assert_hits(3);
    assert_eq!(err.to_string(), "Model overloaded");
}

#[tokio::test]
async fn definitive_rejection_is_not_retried() {
    let server = crate::common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/generations");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"message":"Invalid or expired token"}"#);
    });

    let client = crate::common::client_builder_for(&server)
        .bearer_token("stale-token")
        .retry_config(RetryConfig::new(
            3,
            Duration::from_millis(1),
            Duration::from_millis(5),
        ))
        .build()
        .unwrap();

    let err = GenerateBuilder::new(&client, "a sunset")
        .submit()
        .await
        .unwrap_err();

    mock.assert_hits(1);
    assert_eq!(err.to_string(), "Invalid or expired token");
}

#[tokio::test]
async fn per_call_override_beats_the_client_policy() {
    let server = crate::common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/generations");
        then.status(503)
            .header("content-type", "application/json")
            .body(r#"{"message":"Model overloaded"}"#);
    });

    // Client would retry three times; the call opts out entirely.
    let client = crate::common::client_builder_for(&server)
        .bearer_token("test-token")
        .retry_config(RetryConfig::new(
            3,
            Duration::from_millis(1),
            Duration::from_millis(5),
        ))
        .build()
        .unwrap();

    let err = GenerateBuilder::new(&client, "a sunset")
        .retry_policy(Some(RetryConfig::none()))
        .submit()
        .await
        .unwrap_err();

    mock.assert_hits(1);
    assert_eq!(err.to_string(), "Model overloaded");
}
