#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use agora_client::{
    AuthService, AuthState, ClientConfig, ClientError, GatewayClient, MemoryStore, RetryConfig, SessionManager,
};
use agora_types::forms::{MediaFile, MediaSelection};
use agora_types::protocol::ChatMessage;
use agora_types::{ContentKind, Session};
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_retry() -> RetryConfig {
    RetryConfig { max_retries: 2, base_delay_ms: 1, max_delay_ms: 5 }
}

fn client_for(server: &MockServer, session: Option<Session>) -> GatewayClient {
    let store = session.map_or_else(MemoryStore::new, MemoryStore::with_session);
    let config = ClientConfig::new(server.uri())
        .with_assistant_url(format!("{}/assistant", server.uri()))
        .with_retry(fast_retry());
    GatewayClient::new(config, SessionManager::new(store)).expect("client builds")
}

fn agent_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "CodeMaster Pro",
        "slug": "codemaster-pro",
        "description": "Reviews pull requests",
        "user_id": "u1",
        "avg_raiting": 4.5
    })
}

fn png(name: &str) -> MediaFile {
    MediaFile {
        name: name.to_string(),
        mime: "image/png".to_string(),
        size: 4,
        duration_secs: None,
        data: b"fake png".to_vec(),
    }
}

#[tokio::test]
async fn test_get_retries_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agents"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([agent_json("a1")])))
        .expect(1)
        .mount(&server)
        .await;

    let agents = client_for(&server, None).agents().await.expect("third attempt succeeds");
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0].avg_rating, Some(4.5));
}

#[tokio::test]
async fn test_get_gives_up_after_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contents/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({"detail": "db down"})))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_for(&server, None).contents().await.expect_err("all attempts fail");
    assert!(matches!(err, ClientError::Http { status: 500, ref message } if message == "db down"));
}

#[tokio::test]
async fn test_post_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agents/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some(Session::new("a1", None)));
    let request = agora_types::forms::AgentBasicsForm {
        name: "Code Master".to_string(),
        short_description: "Reviews code".to_string(),
        categories: vec!["Programming".to_string()],
        ..Default::default()
    }
    .into_request("u1")
    .expect("valid form");

    let err = client.create_agent(&request).await.expect_err("500 surfaces");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Request failed with status 500");
}

#[tokio::test]
async fn test_validation_detail_is_readable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contents/c1/comments"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "detail": [{"loc": ["body", "comment"], "msg": "field required"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Some(Session::new("a1", None)));
    let comment = agora_types::protocol::ContentCommentCreate::new("c1", "");
    let err = client.post_content_comment(&comment).await.expect_err("422 surfaces");
    assert_eq!(err.to_string(), "comment: field required");
}

#[tokio::test]
async fn test_unauthorized_without_refresh_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agents/my"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({"detail": "expired"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, Some(Session::new("stale", None)));
    let err = client.my_agents().await.expect_err("401 surfaces");

    assert!(matches!(err, ClientError::Unauthorized));
    assert!(err.requires_login());
    assert!(client.session().current().is_none());
}

#[tokio::test]
async fn test_unauthorized_refreshes_once_and_replays() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agents/my"))
        .and(header("authorization", "Bearer old"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/agents/my"))
        .and(header("authorization", "Bearer new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([agent_json("a7")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .and(body_json(serde_json::json!({"refresh_token": "r1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "new"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some(Session::new("old", Some("r1".to_string()))));
    let agents = client.my_agents().await.expect("replayed with the fresh token");

    assert_eq!(agents[0].id, "a7");
    let session = client.session().current().expect("session kept");
    assert_eq!(session.access_token, "new");
    assert_eq!(session.refresh_token.as_deref(), Some("r1"));
}

#[tokio::test]
async fn test_failed_refresh_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some(Session::new("old", Some("r1".to_string()))));
    let err = client.current_user().await.expect_err("refresh rejected");
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(client.session().token().is_none());
}

#[tokio::test]
async fn test_public_call_drops_rejected_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agents/a1"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/agents/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_json("a1")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "0b8f6a52-7c1e-4a0e-9d7b-2f4c1f3e9a10",
            "email": "neo@example.com",
            "nickname": "neo",
            "role": "user",
            "is_active": true,
            "created_at": "2025-11-05T09:30:00",
            "updated_at": "2025-11-05T09:30:00"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Some(Session::new("stale", None)));
    let auth = AuthService::new(client.clone());
    assert!(auth.restore().await.is_authenticated());

    let agent = client.agent("a1").await.expect("anonymous replay");
    assert_eq!(agent.name, "CodeMaster Pro");
    assert!(client.session().current().is_none());
    assert_eq!(auth.state(), AuthState::Anonymous);
}

#[tokio::test]
async fn test_authenticated_call_needs_session() {
    let server = MockServer::start().await;
    let err = client_for(&server, None).my_agents().await.expect_err("no token");
    assert!(matches!(err, ClientError::MissingSession));
}

#[tokio::test]
async fn test_contents_filtered_by_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "c1", "content_type_id": 1, "title": "Intro", "content": "Article body"},
            {"id": "c2", "content_type_id": 2, "content": "Which framework?"},
            {"id": "c3", "content_type_id": 2, "content": "Prompt tips"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let articles = client.contents_of(ContentKind::Article).await.expect("articles");
    let discussions = client.contents_of(ContentKind::Discussion).await.expect("discussions");
    assert_eq!(articles.len(), 1);
    assert_eq!(discussions.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["c2", "c3"]);
}

#[tokio::test]
async fn test_media_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agents/a1/media/"))
        .and(header("authorization", "Bearer a1"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"is_primary\""))
        .and(body_string_contains("filename=\"cover.png\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "m1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some(Session::new("a1", None)));
    client.upload_media("a1", &png("cover.png"), true).await.expect("uploaded");
}

#[tokio::test]
async fn test_archive_upload_rejects_non_zip_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let client = client_for(&server, Some(Session::new("a1", None)));
    let err = client.upload_archive(&png("agent.png")).await.expect_err("png is not an archive");
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn test_archive_upload_sends_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload/archive"))
        .and(body_string_contains("name=\"archive\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let archive = MediaFile { name: "agent.zip".to_string(), mime: "application/zip".to_string(), ..png("x") };
    let client = client_for(&server, Some(Session::new("a1", None)));
    let body = client.upload_archive(&archive).await.expect("uploaded");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_wizard_media_step_uploads_everything() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agents/a1/media/"))
        .and(body_string_contains("true"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/agents/a1/media/"))
        .and(body_string_contains("false"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;

    let mut media = MediaSelection::default();
    media.add_photos(vec![png("a.png"), png("b.png")]);
    media
        .set_video(MediaFile {
            name: "demo.mp4".to_string(),
            mime: "video/mp4".to_string(),
            size: 3,
            duration_secs: Some(12.0),
            data: vec![0, 0, 0],
        })
        .expect("video accepted");

    let wizard = agora_client::AgentWizard::new(client_for(&server, Some(Session::new("a1", None))));
    let uploaded = wizard.submit_media("a1", &media).await.expect("all uploads succeed");
    assert_eq!(uploaded, 3);
}

#[tokio::test]
async fn test_wizard_media_step_fails_on_first_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agents/a1/media/"))
        .respond_with(ResponseTemplate::new(413).set_body_json(serde_json::json!({"message": "too large"})))
        .mount(&server)
        .await;

    let mut media = MediaSelection::default();
    media.add_photos(vec![png("a.png")]);

    let wizard = agora_client::AgentWizard::new(client_for(&server, Some(Session::new("a1", None))));
    let err = wizard.submit_media("a1", &media).await.expect_err("upload rejected");
    assert_eq!(err.to_string(), "too large");
}

#[tokio::test]
async fn test_assistant_reply_is_streamed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/assistant"))
        .and(body_json(serde_json::json!({
            "messages": [{"role": "user", "content": "What is Agora?"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("A marketplace for AI agents."))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let reply = client.ask_text(&[ChatMessage::user("What is Agora?")]).await.expect("reply");
    assert_eq!(reply, "A marketplace for AI agents.");
}
