use imgur_auth::cli::Command;
use imgur_auth::commands;
use imgur_auth::session::Session;

use imgur_client::ImgurClient;
use imgur_client::config::{ClientConfig, TokenStore};

use models::ClientIdentity;

use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for the CLI commands against a mocked Imgur API
// ============================================================================

const TOKEN_BODY: &str = r#"{"access_token":"tok123","expires_in":3600,"token_type":"bearer","scope":null,"refresh_token":"ref456","account_id":77,"account_username":"alice"}"#;
const ACCOUNT_BODY: &str = r#"{"data":{"id":77,"url":"alice","bio":"hello","reputation":12,"created":1229591601},"success":true,"status":200}"#;

fn session_for(server: &MockServer, dir: &TempDir) -> Session {
    let identity = ClientIdentity::new("ClientId", "ClientSecret").unwrap();
    let config = ClientConfig::new(identity)
        .unwrap()
        .with_api_base_url(&format!("{}/3/", server.uri()))
        .unwrap()
        .with_oauth_base_url(&format!("{}/oauth2/", server.uri()))
        .unwrap();
    Session::from_parts(
        ImgurClient::new(config).unwrap(),
        TokenStore::new(dir.path()),
    )
    .unwrap()
}

/// **VALUE**: Tests the full login-then-whoami journey across two CLI runs.
///
/// **WHY THIS MATTERS**: Each CLI invocation is a fresh process. The token only
/// survives between them through the token store, so login must save it and the
/// next session must restore it before any account call.
///
/// **BUG THIS CATCHES**: Would catch login forgetting to persist the token, or
/// session startup not restoring it, both of which make `whoami` fail with
/// "not logged in" right after a successful login.
#[tokio::test]
async fn given_pin_login_when_whoami_in_next_session_then_uses_saved_token() {
    // GIVEN: A mock Imgur with a token endpoint and the account endpoint
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=pin&pin=4321"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TOKEN_BODY))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/account/me"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ACCOUNT_BODY))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    // WHEN: Logging in with one session and asking whoami with a new one
    let login_output = commands::run(
        &session_for(&server, &dir),
        &Command::LoginPin {
            pin: "4321".to_string(),
        },
    )
    .await
    .unwrap();
    let whoami_output = commands::run(&session_for(&server, &dir), &Command::Whoami)
        .await
        .unwrap();

    // THEN: Both commands report the same account
    assert!(login_output.starts_with("Logged in as alice (account 77)"));
    assert!(whoami_output.starts_with("alice (id 77)"));
    assert!(whoami_output.ends_with("hello"));
}

#[tokio::test]
async fn given_refresh_without_new_refresh_token_when_run_then_previous_one_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=refresh_token&refresh_token=ref456"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"access_token":"fresh","expires_in":3600,"token_type":"bearer"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let mut saved = models::OAuth2Token::new("stale", Some("ref456".into()), "bearer", 3600);
    saved.account_username = Some("alice".to_string());
    TokenStore::new(dir.path()).save(&saved).unwrap();

    commands::run(&session_for(&server, &dir), &Command::Refresh)
        .await
        .unwrap();

    let stored = TokenStore::new(dir.path()).load().unwrap().unwrap();
    assert_eq!(stored.access_token.as_str(), "fresh");
    assert_eq!(stored.refresh_token.unwrap().as_str(), "ref456");
}

#[tokio::test]
async fn given_rejected_pin_when_logging_in_then_error_and_no_token_saved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"data":{"error":"Invalid pin","request":"/oauth2/token","method":"POST"},"success":false,"status":400}"#,
        ))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let session = session_for(&server, &dir);

    let error = commands::run(
        &session,
        &Command::LoginPin {
            pin: "0000".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(error.to_string().contains("Invalid pin"));
    assert!(session.store().load().unwrap().is_none());
}
