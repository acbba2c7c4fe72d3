use crate::helpers::{ACCOUNT_BODY, TOKEN_BODY, client_for};

use imgur_client::error::ApiClientError;

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Drives a PIN login end to end over real HTTP, then uses the new token.
///
/// **WHY THIS MATTERS**: This is the path every CLI login takes. The form body,
/// the envelope decoding and the token hand-off into the credential context all
/// have to line up for the follow-up call to be authenticated.
///
/// **BUG THIS CATCHES**: Would catch the exchange succeeding but the next call
/// still going out with a `Client-ID` header.
#[tokio::test]
async fn given_pin_login_when_calling_account_me_then_bearer_token_is_sent() {
    // GIVEN: A token endpoint that only accepts our PIN grant
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("client_id=ClientId"))
        .and(body_string_contains("client_secret=ClientSecret"))
        .and(body_string_contains("grant_type=pin"))
        .and(body_string_contains("pin=1234"))
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
    let client = client_for(&server);

    // WHEN: Logging in with the PIN and reading the current account
    let token = client.oauth2().exchange_pin("1234").await.unwrap();
    let account = client.account().get_account(&Default::default()).await.unwrap();

    // THEN: The token came from the envelope and authorized the account call
    assert_eq!(token.access_token.as_str(), "tok123");
    assert_eq!(token.account_username.as_deref(), Some("alice"));
    assert_eq!(account.id, 12456);
}

#[tokio::test]
async fn given_bare_token_body_when_refreshing_then_token_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=refresh_token&refresh_token=ref456"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"access_token":"fresh","expires_in":3600,"token_type":"bearer","refresh_token":"ref789"}"#,
        ))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let token = client.oauth2().exchange_refresh_token("ref456").await.unwrap();

    assert_eq!(token.access_token.as_str(), "fresh");
    assert_eq!(
        client.credentials().token().unwrap().refresh_token.as_ref().unwrap().as_str(),
        "ref789"
    );
}

#[tokio::test]
async fn given_rejected_code_when_exchanging_then_api_error_and_still_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"data":{"error":"Invalid authorization code","request":"/oauth2/token","method":"POST"},"success":false,"status":400}"#,
        ))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client.oauth2().exchange_code("bad").await.unwrap_err();

    assert_eq!(error.status_code(), Some(400));
    assert!(error.to_string().contains("Invalid authorization code"));
    assert!(matches!(error, ApiClientError::Api { .. }));
    assert!(!client.credentials().has_access_token());
}

#[tokio::test]
async fn given_bare_oauth_error_body_when_exchanging_then_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"error":"invalid_grant"}"#),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client.oauth2().exchange_pin("0000").await.unwrap_err();

    match error {
        ApiClientError::Api { status, message, .. } => {
            assert_eq!(status.0, 400);
            assert_eq!(message, "invalid_grant");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
