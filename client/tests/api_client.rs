//! # API Client Integration Tests
//!
//! Exercise the real `ApiClient` against an in-process axum backend bound to
//! an ephemeral port, covering bearer-token attachment, envelope parsing,
//! error normalization, and the silent notification path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use client::{ApiClient, ApiError, ApiService, ClientConfig, Notifier};
use shared::{ClientType, CreateClientRequest, LoginRequest};

/// Authorization header values seen by the backend, in request order.
#[derive(Default, Clone)]
struct Captured {
    auth_headers: Arc<Mutex<Vec<Option<String>>>>,
}

impl Captured {
    fn record(&self, headers: &HeaderMap) {
        let value = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.auth_headers.lock().unwrap().push(value);
    }

    fn last(&self) -> Option<String> {
        self.auth_headers.lock().unwrap().last().cloned().flatten()
    }
}

fn user_json() -> Value {
    json!({
        "id": "u1",
        "first_name": "A",
        "last_name": "B",
        "email": "a@b.com",
        "firm_name": "AB Estates",
        "role": "broker",
        "city": "Mumbai",
        "state": "Maharashtra",
        "is_verified": false,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

async fn login_handler(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<Value>) {
    captured.record(&headers);
    if request.password == "secret1" {
        (
            StatusCode::OK,
            Json(json!({
                "message": "Login successful",
                "data": { "token": "tok123", "user": user_json() }
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Authentication failed",
                "message": "Invalid email or password"
            })),
        )
    }
}

async fn me_handler(State(captured): State<Captured>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    captured.record(&headers);
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized", "message": "User not authenticated" })),
    )
}

async fn properties_handler(
    State(captured): State<Captured>,
    headers: HeaderMap,
) -> Json<Value> {
    captured.record(&headers);
    Json(json!({ "message": "Properties retrieved successfully", "data": [] }))
}

async fn create_client_handler(
    State(captured): State<Captured>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    captured.record(&headers);
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "Validation failed",
            "message": "Email must be a valid email address"
        })),
    )
}

async fn delete_client_handler(Path(id): Path<String>) -> Json<Value> {
    Json(json!({ "message": format!("Client {id} deleted successfully") }))
}

async fn upload_handler(mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("profile_photo") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let _bytes = field.bytes().await.unwrap_or_default();
            return (
                StatusCode::OK,
                Json(json!({
                    "message": "Profile photo uploaded successfully",
                    "data": { "profile_image": format!("/uploads/{file_name}") }
                })),
            );
        }
    }
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "No file provided", "message": "Please provide a profile photo" })),
    )
}

fn backend_router(captured: Captured) -> Router {
    let api = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/me", get(me_handler))
        .route("/properties", get(properties_handler))
        .route("/clients", post(create_client_handler))
        .route("/clients/:id", delete(delete_client_handler))
        .route("/upload/profile-photo", post(upload_handler))
        .with_state(captured);
    Router::new().nest("/api", api)
}

/// Spawn the mock backend on an ephemeral port and return its `/api` base URL.
async fn spawn_backend(captured: Captured) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, backend_router(captured))
            .await
            .expect("serve mock backend");
    });
    format!("http://{addr}/api")
}

fn test_client(base_url: &str) -> ApiClient {
    ApiClient::with_config(ClientConfig::new(base_url))
}

/// Counts notifications instead of showing them.
#[derive(Default)]
struct CountingNotifier {
    count: AtomicUsize,
}

impl Notifier for CountingNotifier {
    fn notify(&self, _error: &ApiError) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn login_success_parses_envelope_and_sends_no_auth_header() {
    // Arrange
    let captured = Captured::default();
    let base = spawn_backend(captured.clone()).await;
    let api = test_client(&base);

    // Act
    let auth = api
        .login(&LoginRequest {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .expect("login should succeed");

    // Assert
    assert_eq!(auth.token, "tok123");
    assert_eq!(auth.user.email, "a@b.com");
    assert!(captured.last().is_none(), "no token held, no header expected");
}

#[tokio::test]
async fn bearer_token_attached_while_held_and_dropped_when_cleared() {
    // Arrange
    let captured = Captured::default();
    let base = spawn_backend(captured.clone()).await;
    let api = test_client(&base);

    // Act + Assert: token held
    api.set_session_token(Some("tok123".to_string()));
    api.get_properties().await.expect("list should succeed");
    assert_eq!(captured.last().as_deref(), Some("Bearer tok123"));

    // Act + Assert: token cleared
    api.set_session_token(None);
    api.get_properties().await.expect("list should succeed");
    assert!(captured.last().is_none());
}

#[tokio::test]
async fn application_error_message_passes_through() {
    let captured = Captured::default();
    let base = spawn_backend(captured).await;
    let api = test_client(&base);

    let error = api
        .login(&LoginRequest {
            email: "a@b.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .expect_err("login should fail");

    match &error {
        ApiError::Unauthorized(message) => {
            assert!(message.contains("Invalid email or password"));
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_is_reported_distinctly() {
    // Bind and immediately drop a listener so the port refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = test_client(&format!("http://{addr}/api"));
    let error = api.get_properties().await.expect_err("should fail");
    assert!(matches!(error, ApiError::Transport(_)), "got {error:?}");
}

#[tokio::test]
async fn validation_failure_yields_field_level_errors() {
    let captured = Captured::default();
    let base = spawn_backend(captured).await;
    let api = test_client(&base);

    let request = CreateClientRequest {
        first_name: "Priya".to_string(),
        last_name: "Sharma".to_string(),
        email: "not-an-email".to_string(),
        phone: "9888877777".to_string(),
        client_type: ClientType::Buyer,
        preferred_location: "Andheri East".to_string(),
        address: "3 MG Road, Andheri East".to_string(),
        city: "Mumbai".to_string(),
        state: "Maharashtra".to_string(),
        postal_code: "400069".to_string(),
        requirements: "2BHK under 1.5cr".to_string(),
        budget_min: None,
        budget_max: None,
        notes: None,
    };
    let error = api.create_client(&request).await.expect_err("should fail");

    match error {
        ApiError::Validation { errors, message } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "email");
            assert!(message.contains("Validation failed"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_without_data_payload_succeeds() {
    let captured = Captured::default();
    let base = spawn_backend(captured).await;
    let api = test_client(&base);

    api.delete_client("c1").await.expect("delete should succeed");
}

#[tokio::test]
async fn upload_sends_multipart_profile_photo_field() {
    let captured = Captured::default();
    let base = spawn_backend(captured).await;
    let api = test_client(&base);

    let photo = api
        .upload_profile_photo("me.png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .expect("upload should succeed");

    assert_eq!(photo.profile_image, "/uploads/me.png");
}

#[tokio::test]
async fn startup_check_is_silent_but_failed_login_notifies_once() {
    let captured = Captured::default();
    let base = spawn_backend(captured).await;
    let notifier = Arc::new(CountingNotifier::default());
    let api = test_client(&base).with_notifier(notifier.clone());

    // The silent path: an expired-token identity check never notifies.
    api.set_session_token(Some("expired".to_string()));
    let _ = api.me().await.expect_err("me should fail");
    assert_eq!(notifier.count.load(Ordering::SeqCst), 0);

    // A user-initiated login failure notifies exactly once.
    api.set_session_token(None);
    let _ = api
        .login(&LoginRequest {
            email: "a@b.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    assert_eq!(notifier.count.load(Ordering::SeqCst), 1);
}
