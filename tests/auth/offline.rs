use httpmock::Method::POST;
use serde_json::json;

use genstudio_rs::GsError;

#[tokio::test]
async fn signup_returns_user_without_token() {
    let server = crate::common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/auth/signup")
            .json_body(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "hunter2",
            }));
        then.status(201)
            .header("content-type", "application/json")
            .body(
                r#"{
                  "message": "User created successfully",
                  "user": {
                    "id": 7,
                    "name": "Ada",
                    "email": "ada@example.com",
                    "createdAt": "2026-08-25T12:00:00.000Z"
                  }
                }"#,
            );
    });

    let client = crate::common::client_builder_for(&server).build().unwrap();
    let user = client.signup("Ada", "ada@example.com", "hunter2").await.unwrap();

    mock.assert();
    assert_eq!(user.id, 7);
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name.as_deref(), Some("Ada"));
    assert!(user.token.is_none(), "signup does not issue a token");
    assert!(client.bearer_token().await.is_none());
}

#[tokio::test]
async fn signup_conflict_surfaces_backend_message() {
    let server = crate::common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/signup");
        then.status(409)
            .header("content-type", "application/json")
            .body(r#"{"message":"User already exists"}"#);
    });

    let client = crate::common::client_builder_for(&server).build().unwrap();
    let err = client
        .signup("Ada", "ada@example.com", "hunter2")
        .await
        .unwrap_err();

    mock.assert();
    match err {
        GsError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "User already exists");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn login_stores_bearer_token_on_client() {
    let server = crate::common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/auth/login")
            .json_body(json!({
                "email": "ada@example.com",
                "password": "hunter2",
            }));
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{
                  "message": "Login successful",
                  "user": {
                    "id": 7,
                    "name": "Ada",
                    "email": "ada@example.com",
                    "updatedAt": "2026-08-25T12:00:00.000Z",
                    "token": "jwt-abc123"
                  }
                }"#,
            );
    });

    let client = crate::common::client_builder_for(&server).build().unwrap();
    let user = client.login("ada@example.com", "hunter2").await.unwrap();

    mock.assert();
    assert_eq!(user.token.as_deref(), Some("jwt-abc123"));
    assert_eq!(client.bearer_token().await.as_deref(), Some("jwt-abc123"));
}

#[tokio::test]
async fn login_rejection_keeps_client_unauthenticated() {
    let server = crate::common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/login");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"message":"Invalid credentials"}"#);
    });

    let client = crate::common::client_builder_for(&server).build().unwrap();
    let err = client.login("ada@example.com", "wrong").await.unwrap_err();

    mock.assert();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(client.bearer_token().await.is_none());
}
