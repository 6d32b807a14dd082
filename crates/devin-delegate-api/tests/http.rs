//! HTTP-level tests against a fake Devin API.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use devin_delegate_api::{ApiKey, DevinClient, DevinConfig};
use devin_delegate_core::{ApiError, SessionApi, SessionHandle, SessionRequest, SessionStatus};
use serde_json::{Value, json};

/// Captured state of the fake server.
#[derive(Clone, Default)]
struct Recorded {
    create_bodies: Arc<Mutex<Vec<Value>>>,
    auth_headers: Arc<Mutex<Vec<String>>>,
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: String) -> DevinClient {
    let config = DevinConfig::new(ApiKey::new("apk_test123").unwrap()).base_url(base_url);
    DevinClient::new(config)
}

#[tokio::test]
async fn test_create_session_posts_body_and_returns_handle() {
    let recorded = Recorded::default();
    let app = Router::new()
        .route(
            "/sessions",
            post(
                |State(recorded): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    recorded.create_bodies.lock().unwrap().push(body);
                    recorded.auth_headers.lock().unwrap().push(
                        headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default()
                            .to_string(),
                    );
                    Json(json!({
                        "session_id": "sess_123",
                        "url": "https://app.devin.ai/sessions/sess_123",
                    }))
                },
            ),
        )
        .with_state(recorded.clone());
    let base_url = serve(app).await;

    let request = SessionRequest::new("Test prompt")
        .title("My Session")
        .tags(["test", "ci"]);
    let created = client_for(base_url).create_session(&request).await.unwrap();

    assert_eq!(created.session.as_str(), "sess_123");
    assert_eq!(
        created.url.as_deref(),
        Some("https://app.devin.ai/sessions/sess_123")
    );

    let bodies = recorded.create_bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["prompt"], "Test prompt");
    assert_eq!(bodies[0]["title"], "My Session");
    assert_eq!(bodies[0]["tags"], json!(["test", "ci"]));
    assert!(bodies[0].get("snapshot_id").is_none());

    let auth = recorded.auth_headers.lock().unwrap();
    assert_eq!(auth[0], "Bearer apk_test123");
}

#[tokio::test]
async fn test_create_rejected_carries_status_and_body() {
    let app = Router::new().route(
        "/sessions",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "Validation failed") }),
    );
    let base_url = serve(app).await;

    let err = client_for(base_url)
        .create_session(&SessionRequest::new("Test prompt"))
        .await
        .unwrap_err();

    match err {
        ApiError::Rejected { status, body } => {
            assert_eq!(status, 422);
            assert_eq!(body, "Validation failed");
        }
        ApiError::Transport(other) => panic!("expected rejection, got transport: {other}"),
    }
}

#[tokio::test]
async fn test_fetch_session_shapes_snapshot() {
    let app = Router::new().route(
        "/sessions/{id}",
        get(|| async {
            Json(json!({
                "session_id": "sess_123",
                "status_enum": "working",
                "messages": [
                    { "type": "user_message", "message": "Hello" },
                    { "type": "devin_message", "message": "Hi there!" },
                ],
                "url": "https://app.devin.ai/sessions/sess_123",
            }))
        }),
    );
    let base_url = serve(app).await;

    let snapshot = client_for(base_url)
        .fetch_session(&SessionHandle::new("sess_123"))
        .await
        .unwrap();

    assert_eq!(
        snapshot.status,
        SessionStatus::Working("working".to_string())
    );
    let message = snapshot.message.unwrap();
    assert_eq!(message.kind, "devin_message");
    assert_eq!(message.text, "Hi there!");
}

#[tokio::test]
async fn test_fetch_not_found_is_rejected() {
    let app = Router::new().route(
        "/sessions/{id}",
        get(|| async { (StatusCode::NOT_FOUND, "Not found") }),
    );
    let base_url = serve(app).await;

    let err = client_for(base_url)
        .fetch_session(&SessionHandle::new("sess_missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Rejected { status: 404, .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on this port.
    let err = client_for("http://127.0.0.1:9".to_string())
        .create_session(&SessionRequest::new("Test prompt"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}
