use httpmock::Method::{GET, POST};
use serde_json::json;

use genstudio_rs::{GenerateBuilder, GenerationStatus, GsError, generations};

#[tokio::test]
async fn create_submits_payload_and_decodes_record() {
    let server = crate::common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/generations")
            .header("authorization", "Bearer test-token")
            .json_body(json!({
                "prompt": "a sunset over the alps",
                "style": "realistic",
                "imageUpload": "",
            }));
        then.status(201)
            .header("content-type", "application/json")
            .body(crate::common::generation_json(
                42,
                "a sunset over the alps",
                "realistic",
                "COMPLETED",
            ));
    });

    let client = crate::common::client_for(&server);
    let generation = GenerateBuilder::new(&client, "a sunset over the alps")
        .style("realistic")
        .submit()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(generation.id, 42);
    assert_eq!(generation.prompt, "a sunset over the alps");
    assert_eq!(generation.style.as_deref(), Some("realistic"));
    assert_eq!(generation.status, GenerationStatus::Completed);
    assert!(
        generation
            .image_url
            .as_deref()
            .is_some_and(|u| u.starts_with("https://"))
    );
    assert_eq!(generation.created_at.to_rfc3339(), "2026-08-25T12:00:00+00:00");
}

#[tokio::test]
async fn create_rejects_blank_prompt_without_a_request() {
    let server = crate::common::setup_server();
    let client = crate::common::client_for(&server);

    let err = GenerateBuilder::new(&client, "   ").submit().await.unwrap_err();
    assert!(matches!(err, GsError::InvalidPrompt));
}

#[tokio::test]
async fn create_requires_a_bearer_token() {
    let server = crate::common::setup_server();
    let client = crate::common::client_builder_for(&server).build().unwrap();

    let err = GenerateBuilder::new(&client, "a sunset")
        .submit()
        .await
        .unwrap_err();
    assert!(matches!(err, GsError::Auth(_)));
}

#[tokio::test]
async fn list_passes_limit_and_preserves_order() {
    let server = crate::common::setup_server();

    let body = format!(
        "[{},{}]",
        crate::common::generation_json(2, "newer", "", "COMPLETED"),
        crate::common::generation_json(1, "older", "", "PENDING"),
    );
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/generations")
            .header("authorization", "Bearer test-token")
            .query_param("limit", "5");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = crate::common::client_for(&server);
    let records = generations::list(&client, 5).await.unwrap();

    mock.assert();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 2);
    assert_eq!(records[0].prompt, "newer");
    assert_eq!(records[1].status, GenerationStatus::Pending);
    // Empty wire styles decode as "none chosen".
    assert!(records[0].style.is_none());
}

#[tokio::test]
async fn list_clamps_limit_to_backend_range() {
    let server = crate::common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/generations")
            .query_param("limit", "50");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let client = crate::common::client_for(&server);
    let records = generations::list(&client, 500).await.unwrap();

    mock.assert();
    assert!(records.is_empty());
}
