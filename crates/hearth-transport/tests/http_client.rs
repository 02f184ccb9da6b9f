//! HttpAuthClient against a mock HTTP backend.

use hearth_protocol::{Credentials, Registration};
use hearth_session::{
    AuthClient, AuthError, MemoryTokenStore, SessionConfig, SessionManager,
    TokenStore,
};
use hearth_transport::{HttpAuthClient, HttpClientConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =========================================================================
// Helpers
// =========================================================================

fn client_for(server: &MockServer) -> HttpAuthClient {
    HttpAuthClient::new(HttpClientConfig {
        base_url: format!("{}/api/", server.uri()),
        timeout_secs: 2,
        ..HttpClientConfig::default()
    })
    .unwrap()
}

fn user_json() -> serde_json::Value {
    json!({
        "_id": "64f0c0ffee",
        "name": "Sam",
        "email": "sam@example.com",
        "mobile": "5550100"
    })
}

fn creds(password: &str) -> Credentials {
    Credentials {
        email: "sam@example.com".into(),
        password: password.into(),
    }
}

// =========================================================================
// Request/response mapping
// =========================================================================

#[tokio::test]
async fn test_login_posts_credentials_and_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "sam@example.com",
            "password": "hunter2"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "token": "abc123", "user": user_json() })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).login(&creds("hunter2")).await.unwrap();

    assert_eq!(resp.token, "abc123");
    assert_eq!(resp.user.id.0, "64f0c0ffee");
    assert_eq!(resp.user.name, "Sam");
}

#[tokio::test]
async fn test_login_401_with_message_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).login(&creds("nope")).await.unwrap_err();

    assert!(matches!(
        err,
        AuthError::Rejected { status: 401, message: Some(ref m) }
            if m == "Invalid credentials"
    ));
}

#[tokio::test]
async fn test_rejection_uses_error_field_when_no_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({ "error": "Email already registered" })),
        )
        .mount(&server)
        .await;

    let registration = Registration {
        name: "Sam".into(),
        mobile: "5550100".into(),
        email: "sam@example.com".into(),
        password: "pw".into(),
    };
    let err = client_for(&server).register(&registration).await.unwrap_err();

    assert!(matches!(
        err,
        AuthError::Rejected { status: 409, message: Some(ref m) }
            if m == "Email already registered"
    ));
}

#[tokio::test]
async fn test_rejection_with_html_body_has_no_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).login(&creds("pw")).await.unwrap_err();

    assert!(matches!(err, AuthError::Rejected { status: 502, message: None }));
}

#[tokio::test]
async fn test_success_with_empty_token_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "token": "", "user": user_json() })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).login(&creds("pw")).await.unwrap_err();

    assert!(matches!(err, AuthError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_success_with_garbage_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let err = client_for(&server).login(&creds("pw")).await.unwrap_err();

    assert!(matches!(err, AuthError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_current_user_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json() })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).current_user("abc123").await.unwrap();

    assert_eq!(resp.user.email, "sam@example.com");
}

#[tokio::test]
async fn test_paths_without_leading_slash_reach_the_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "token": "abc123", "user": user_json() })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = HttpAuthClient::new(HttpClientConfig {
        base_url: format!("{}/api", server.uri()),
        login_path: "auth/login".into(),
        ..HttpClientConfig::default()
    })
    .unwrap();

    let resp = client.login(&creds("hunter2")).await.unwrap();

    assert_eq!(resp.token, "abc123");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = HttpAuthClient::new(HttpClientConfig {
        base_url: "http://127.0.0.1:1".into(),
        timeout_secs: 2,
        ..HttpClientConfig::default()
    })
    .unwrap();

    let err = client.login(&creds("pw")).await.unwrap_err();

    assert!(matches!(err, AuthError::Network(_)));
}

// =========================================================================
// With a SessionManager on top
// =========================================================================

#[tokio::test]
async fn test_restore_with_valid_token_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer stored"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json() })))
        .mount(&server)
        .await;
    let store = MemoryTokenStore::new();
    store.set("token", "stored");
    let mut session =
        SessionManager::new(client_for(&server), store.clone(), SessionConfig::default());

    session.restore_session().await;

    assert!(session.is_authenticated());
    assert_eq!(store.get("token").as_deref(), Some("stored"));
}

#[tokio::test]
async fn test_restore_with_expired_token_over_http_clears_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "jwt expired" })))
        .mount(&server)
        .await;
    let store = MemoryTokenStore::new();
    store.set("token", "stale");
    let mut session =
        SessionManager::new(client_for(&server), store.clone(), SessionConfig::default());

    session.restore_session().await;

    assert!(!session.is_authenticated());
    assert!(!session.is_loading());
    assert!(store.get("token").is_none());
}

#[tokio::test]
async fn test_login_failure_over_http_surfaces_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "message": "User does not exist" })),
        )
        .mount(&server)
        .await;
    let mut session = SessionManager::new(
        client_for(&server),
        MemoryTokenStore::new(),
        SessionConfig::default(),
    );
    session.restore_session().await;

    let result = session.login("sam@example.com", "pw").await;

    assert_eq!(result.message(), Some("User does not exist"));
    assert!(!session.is_authenticated());
}
