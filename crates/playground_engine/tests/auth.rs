use playground_core::{AuthRequest, Session};
use playground_engine::{Authenticator, ClientSettings, ReqwestAuthenticator, RequestErrorKind};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authenticator_for(server: &MockServer) -> ReqwestAuthenticator {
    let settings = ClientSettings {
        auth_base: format!("{}/api", server.uri()),
        ..ClientSettings::default()
    };
    ReqwestAuthenticator::new(settings).expect("client builds")
}

#[tokio::test]
async fn login_returns_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "username": "alice", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "access_token": "jwt-abc",
            "username": "alice"
        })))
        .mount(&server)
        .await;

    let session = authenticator_for(&server)
        .authenticate(&AuthRequest::Login {
            username: "alice".to_string(),
            password: "pw".to_string(),
        })
        .await
        .expect("login ok");

    assert_eq!(session, Session::new("jwt-abc", "alice").unwrap());
}

#[tokio::test]
async fn register_posts_email_and_falls_back_to_request_username() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .and(body_json(json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "pw"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "access_token": "jwt-b" })))
        .mount(&server)
        .await;

    let session = authenticator_for(&server)
        .authenticate(&AuthRequest::Register {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .expect("register ok");

    assert_eq!(session.username(), "bob");
    assert_eq!(session.access_token(), "jwt-b");
}

#[tokio::test]
async fn invalid_credentials_surface_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let err = authenticator_for(&server)
        .authenticate(&AuthRequest::Login {
            username: "alice".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, RequestErrorKind::HttpStatus(401));
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn response_without_token_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&server)
        .await;

    let err = authenticator_for(&server)
        .authenticate(&AuthRequest::Login {
            username: "alice".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, RequestErrorKind::MissingResult);
    assert_eq!(err.message, "Login failed");
}
