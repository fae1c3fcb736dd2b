#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use agora_client::{
    AuthError, AuthService, AuthState, ClientConfig, GatewayClient, GuardDecision, MemoryStore, RetryConfig,
    SessionManager,
};
use agora_types::protocol::{DeveloperRequest, LoginRequest, ProfileUpdate, RegisterRequest};
use agora_types::{Role, Session, User};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn auth_for(server: &MockServer, session: Option<Session>) -> AuthService {
    let store = session.map_or_else(MemoryStore::new, MemoryStore::with_session);
    let config = ClientConfig::new(server.uri())
        .with_retry(RetryConfig { max_retries: 1, base_delay_ms: 1, max_delay_ms: 2 });
    let client = GatewayClient::new(config, SessionManager::new(store)).expect("client builds");
    AuthService::new(client)
}

fn me_json() -> serde_json::Value {
    serde_json::json!({
        "id": "0b8f6a52-7c1e-4a0e-9d7b-2f4c1f3e9a10",
        "email": "neo@example.com",
        "nickname": "neo",
        "role": "user",
        "is_active": true,
        "created_at": "2025-11-05T09:30:00",
        "updated_at": "2025-11-05T09:30:00",
        "avatar_url": null,
        "developer": null
    })
}

fn credentials() -> LoginRequest {
    LoginRequest { email: "neo@example.com".to_string(), password: "followthewhiterabbit".to_string() }
}

fn registration() -> RegisterRequest {
    RegisterRequest {
        email: "neo@example.com".to_string(),
        nickname: "neo".to_string(),
        password: "followthewhiterabbit".to_string(),
        role: Role::User,
    }
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({"email": "neo@example.com", "password": "followthewhiterabbit"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "a1",
            "refresh_token": "r1",
            "token_type": "bearer"
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(me_json()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_publishes_current_user() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let auth = auth_for(&server, None);
    let mut rx = auth.subscribe();
    let user = auth.login(&credentials()).await.expect("login succeeds");

    let expected: User = serde_json::from_value(me_json()).expect("fixture parses");
    assert_eq!(user, expected);
    assert_eq!(auth.state(), AuthState::Authenticated(expected));
    assert!(rx.has_changed().expect("sender alive"));

    let session = auth.client().session().current().expect("tokens stored");
    assert_eq!(session.access_token, "a1");
    assert_eq!(session.refresh_token.as_deref(), Some("r1"));
}

#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({"detail": "Bad credentials"})))
        .mount(&server)
        .await;

    let auth = auth_for(&server, None);
    let err = auth.login(&credentials()).await.expect_err("rejected");
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(auth.client().session().token().is_none());
}

#[tokio::test]
async fn test_logout_clears_everything() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let auth = auth_for(&server, None);
    auth.login(&credentials()).await.expect("login succeeds");
    auth.logout();

    assert_eq!(auth.state(), AuthState::Anonymous);
    assert!(auth.user().is_none());
    assert!(auth.client().session().current().is_none());

    // Logging out twice is harmless.
    auth.logout();
    assert_eq!(auth.state(), AuthState::Anonymous);
}

#[tokio::test]
async fn test_restore_with_valid_token() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let auth = auth_for(&server, Some(Session::new("a1", None)));
    assert!(auth.state().is_loading());
    let state = auth.restore().await;
    assert!(state.is_authenticated());
    assert_eq!(auth.user().map(|u| u.nickname), Some("neo".to_string()));
}

#[tokio::test]
async fn test_restore_with_invalid_token_ends_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let auth = auth_for(&server, Some(Session::new("garbage", None)));
    let state = auth.restore().await;

    assert_eq!(state, AuthState::Anonymous);
    assert_eq!(auth.state(), AuthState::Anonymous);
    assert!(auth.client().session().token().is_none());
}

#[tokio::test]
async fn test_restore_without_token_skips_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let auth = auth_for(&server, None);
    assert_eq!(auth.restore().await, AuthState::Anonymous);
}

#[tokio::test]
async fn test_register_with_failing_developer_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(me_json()))
        .expect(1)
        .mount(&server)
        .await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/developers/"))
        .and(header("authorization", "Bearer a1"))
        .and(body_json(serde_json::json!({
            "first_name": "Thomas",
            "last_name": "Anderson",
            "support_email": "neo@example.com"
        })))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({"detail": "Developer already exists"})))
        .expect(1)
        .mount(&server)
        .await;

    let auth = auth_for(&server, None);
    let developer = DeveloperRequest {
        first_name: "Thomas".to_string(),
        last_name: "Anderson".to_string(),
        ..Default::default()
    };
    let err = auth.register(&registration(), Some(developer)).await.expect_err("developer step fails");

    assert!(matches!(err, AuthError::DeveloperProfile(_)));
    assert!(err.to_string().contains("Developer already exists"));
}

#[tokio::test]
async fn test_register_with_developer_facet() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(me_json()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "a1"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/developers/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "first_name": "Thomas",
            "last_name": "Anderson"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let mut me = me_json();
    me["developer"] = serde_json::json!({"first_name": "Thomas", "last_name": "Anderson"});
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(me))
        .mount(&server)
        .await;

    let auth = auth_for(&server, None);
    let developer = DeveloperRequest {
        first_name: "Thomas".to_string(),
        last_name: "Anderson".to_string(),
        ..Default::default()
    };
    auth.register(&registration(), Some(developer)).await.expect("registered");

    let user = auth.user().expect("signed in");
    assert!(user.is_developer());
}

#[tokio::test]
async fn test_register_developer_ignores_foreign_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(me_json()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({"email": "neo@example.com", "password": "followthewhiterabbit"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "neo-token"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/developers/"))
        .and(header("authorization", "Bearer neo-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "first_name": "Thomas",
            "last_name": "Anderson"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let mut me = me_json();
    me["developer"] = serde_json::json!({"first_name": "Thomas", "last_name": "Anderson"});
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer neo-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(me))
        .mount(&server)
        .await;

    let auth = auth_for(&server, Some(Session::new("trinity-token", None)));
    let developer = DeveloperRequest {
        first_name: "Thomas".to_string(),
        last_name: "Anderson".to_string(),
        ..Default::default()
    };
    auth.register(&registration(), Some(developer)).await.expect("registered");

    assert_eq!(auth.client().session().token().as_deref(), Some("neo-token"));
    let user = auth.user().expect("signed in");
    assert_eq!(user.nickname, "neo");
    assert!(user.is_developer());
}

#[tokio::test]
async fn test_rejected_token_on_public_call_signs_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "a1"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(me_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/agents"))
        .and(header("authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let auth = auth_for(&server, None);
    let mut rx = auth.subscribe();
    auth.login(&credentials()).await.expect("signed in");
    assert!(rx.borrow_and_update().is_authenticated());

    let agents = auth.client().agents().await.expect("anonymous replay");
    assert!(agents.is_empty());

    assert!(auth.client().session().token().is_none());
    assert!(rx.has_changed().expect("sender alive"));
    assert_eq!(*rx.borrow_and_update(), AuthState::Anonymous);
    assert_eq!(auth.state(), AuthState::Anonymous);
}

#[tokio::test]
async fn test_register_plain_account_does_not_sign_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(me_json()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let auth = auth_for(&server, None);
    auth.register(&registration(), None).await.expect("registered");
    assert!(auth.client().session().token().is_none());
}

#[tokio::test]
async fn test_register_validates_before_sending() {
    let server = MockServer::start().await;
    let auth = auth_for(&server, None);
    let mut request = registration();
    request.password = "short".to_string();

    let err = auth.register(&request, None).await.expect_err("too short");
    assert!(matches!(err, AuthError::Validation(_)));
}

#[tokio::test]
async fn test_profile_update_merges_response() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("PATCH"))
        .and(path("/users/me"))
        .and(body_json(serde_json::json!({
            "nickname": "the-one",
            "email": "neo@example.com",
            "avatar_url": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"nickname": "the-one"})))
        .expect(1)
        .mount(&server)
        .await;

    let auth = auth_for(&server, None);
    auth.login(&credentials()).await.expect("login succeeds");
    let update = ProfileUpdate {
        nickname: "the-one".to_string(),
        email: "neo@example.com".to_string(),
        avatar_url: None,
    };
    let user = auth.update_profile(&update).await.expect("updated");
    assert_eq!(user.nickname, "the-one");
    assert_eq!(user.email, "neo@example.com");
    assert_eq!(auth.user().map(|u| u.nickname), Some("the-one".to_string()));
}

#[tokio::test]
async fn test_guard_follows_auth_state() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let auth = auth_for(&server, None);
    assert_eq!(agora_client::resolve(&auth.state(), false), GuardDecision::Pending);

    auth.restore().await;
    assert_eq!(agora_client::resolve(&auth.state(), false), GuardDecision::Redirect("/login"));

    auth.login(&credentials()).await.expect("login succeeds");
    assert_eq!(agora_client::resolve(&auth.state(), true), GuardDecision::Redirect("/profile"));
    assert_eq!(agora_client::resolve(&auth.state(), false), GuardDecision::Render);
}
