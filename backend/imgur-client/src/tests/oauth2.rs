// Unit tests for the authorization URL builder and token exchange.

use super::helpers::{PendingTransport, RecordingTransport, body_text, context, form_pairs, oauth2, token};
use crate::IMGUR_OAUTH2_BASE_URL;
use crate::error::ApiClientError;
use crate::oauth2::{OAuth2Endpoint, authorization_url};

use models::{GrantType, OAuth2ResponseType};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use url::Url;

const TOKEN_RESPONSE: &str = r#"{"data":{"access_token":"tok123","expires_in":3600,"token_type":"bearer","scope":null,"refresh_token":"ref456","account_id":77,"account_username":"alice"},"success":true,"status":200}"#;
const BARE_TOKEN_RESPONSE: &str = r#"{"access_token":"20649dae013aiuiui87878788787975ae2","expires_in":3600,"token_type":"bearer","scope":null,"refresh_token":"2132d34234jkljj84ce0c16fjkljfsdfdc70","account_id":45344,"account_username":"Bob"}"#;
const UNROTATED_TOKEN_RESPONSE: &str =
    r#"{"access_token":"fresh","expires_in":3600,"token_type":"bearer"}"#;
const INVALID_GRANT_RESPONSE: &str = r#"{"data":{"error":"Invalid grant_type parameter or parameter missing","request":"/oauth2/token","method":"POST"},"success":false,"status":400}"#;

fn oauth_base() -> Url {
    Url::parse(IMGUR_OAUTH2_BASE_URL).unwrap()
}

#[test]
fn given_no_state_when_building_authorization_url_then_state_is_present_and_empty() {
    let url = authorization_url(&oauth_base(), "ClientId", OAuth2ResponseType::Code, None);

    assert_eq!(
        url,
        "https://api.imgur.com/oauth2/authorize?client_id=ClientId&response_type=Code&state="
    );
}

#[test]
fn given_state_when_building_authorization_url_then_state_is_appended() {
    let url = authorization_url(&oauth_base(), "ClientId", OAuth2ResponseType::Code, Some("test"));

    assert_eq!(
        url,
        "https://api.imgur.com/oauth2/authorize?client_id=ClientId&response_type=Code&state=test"
    );
}

/// **VALUE**: Verifies arbitrary state strings survive the query string intact.
///
/// **WHY THIS MATTERS**: Applications put CSRF nonces and return paths in `state`.
/// An unescaped `&` would truncate it and break the callback check.
///
/// **BUG THIS CATCHES**: Would catch the state being concatenated without encoding.
#[test]
fn given_special_characters_in_state_when_parsed_back_then_round_trips_exactly() {
    for state in ["a&b=c", "spaces and + plus", "ünïcödé/?#", "%41", "x"] {
        let url = authorization_url(&oauth_base(), "ClientId", OAuth2ResponseType::Pin, Some(state));

        let parsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();

        assert_eq!(pairs.len(), 3, "{url}");
        assert_eq!(pairs[1], ("response_type".to_string(), "Pin".to_string()));
        assert_eq!(pairs[2], ("state".to_string(), state.to_string()));
    }
}

/// **VALUE**: Concrete token exchange scenario: body fields land in the token and the
/// context now holds it.
///
/// **BUG THIS CATCHES**: Would catch the exchange returning a token without storing
/// it, leaving subsequent account calls anonymous.
#[tokio::test]
async fn given_successful_code_exchange_when_completed_then_token_replaces_context_token() {
    // GIVEN: A context with an old token and a token endpoint reply
    let transport = Arc::new(RecordingTransport::replying(200, TOKEN_RESPONSE));
    let credentials = context(Some(token("old")));
    let endpoint = oauth2(transport.clone(), credentials.clone());

    // WHEN: Exchanging a code
    let token = endpoint.exchange_code("the-code").await.unwrap();

    // THEN: Fields match and the context holds the new token
    assert_eq!(token.access_token.as_str(), "tok123");
    assert_eq!(token.expires_in, 3600);
    assert_eq!(token.refresh_token.as_ref().unwrap().as_str(), "ref456");
    assert_eq!(token.account_id, Some(77));
    assert_eq!(token.account_username.as_deref(), Some("alice"));
    assert_eq!(*credentials.token().unwrap(), token);
}

#[tokio::test]
async fn given_code_exchange_when_sent_then_posts_form_with_client_credentials() {
    let transport = Arc::new(RecordingTransport::replying(200, BARE_TOKEN_RESPONSE));
    let endpoint = oauth2(transport.clone(), context(None));

    endpoint.exchange_code("the-code").await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.url.as_str(), "https://api.imgur.com/oauth2/token");
    assert_eq!(request.header("Authorization"), None);
    assert_eq!(
        form_pairs(&request),
        vec![
            ("client_id".to_string(), "ClientId".to_string()),
            ("client_secret".to_string(), "ClientSecret".to_string()),
            ("grant_type".to_string(), "authorization_code".to_string()),
            ("code".to_string(), "the-code".to_string()),
        ]
    );
}

#[tokio::test]
async fn given_pin_and_refresh_exchanges_when_sent_then_use_their_grant_fields() {
    let transport = Arc::new(
        RecordingTransport::new()
            .then_reply(200, &[], BARE_TOKEN_RESPONSE)
            .then_reply(200, &[], BARE_TOKEN_RESPONSE),
    );
    let endpoint = oauth2(transport.clone(), context(None));

    endpoint.exchange_pin("1234").await.unwrap();
    endpoint.exchange_refresh_token("ref456").await.unwrap();

    let requests = transport.requests();
    assert!(body_text(&requests[0]).contains("grant_type=pin&pin=1234"));
    assert!(body_text(&requests[1]).contains("grant_type=refresh_token&refresh_token=ref456"));
}

/// **VALUE**: Verifies every grant rejects empty input without touching the network.
///
/// **BUG THIS CATCHES**: Would catch validation being skipped for one grant, which
/// would send a request Imgur rejects with a less specific error.
#[tokio::test]
async fn given_empty_input_when_exchanging_then_invalid_argument_and_no_transport_call() {
    let transport = Arc::new(RecordingTransport::replying(200, TOKEN_RESPONSE));
    let endpoint = oauth2(transport.clone(), context(None));

    let results = [
        endpoint.exchange_code("").await,
        endpoint.exchange_pin("").await,
        endpoint.exchange_refresh_token("").await,
        endpoint.exchange_pin("   ").await,
    ];

    for result in results {
        assert!(matches!(
            result.unwrap_err(),
            ApiClientError::InvalidArgument { .. }
        ));
    }
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn given_rejected_grant_when_exchanging_then_api_error_and_token_untouched() {
    let transport = Arc::new(RecordingTransport::replying(400, INVALID_GRANT_RESPONSE));
    let credentials = context(Some(token("keep-me")));
    let endpoint = oauth2(transport, credentials.clone());

    let error = endpoint.exchange_pin("0000").await.unwrap_err();

    match error {
        ApiClientError::Api { status, message, .. } => {
            assert_eq!(status.0, 400);
            assert_eq!(message, "Invalid grant_type parameter or parameter missing");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(credentials.token().unwrap().access_token.as_str(), "keep-me");
}

#[tokio::test]
async fn given_context_token_when_refreshing_then_uses_its_refresh_token() {
    let transport = Arc::new(RecordingTransport::replying(200, TOKEN_RESPONSE));
    let credentials = context(Some(token("stale")));
    let endpoint = oauth2(transport.clone(), credentials.clone());

    endpoint.refresh().await.unwrap();

    assert!(body_text(&transport.last_request()).contains("refresh_token=refresh-me"));
    assert_eq!(credentials.token().unwrap().access_token.as_str(), "tok123");
}

#[tokio::test]
async fn given_no_token_when_refreshing_then_authentication_required() {
    let transport = Arc::new(RecordingTransport::replying(200, TOKEN_RESPONSE));
    let endpoint = oauth2(transport.clone(), context(None));

    assert!(matches!(
        endpoint.refresh().await.unwrap_err(),
        ApiClientError::AuthenticationRequired { .. }
    ));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn given_cancellation_when_exchanging_then_cancelled_and_context_untouched() {
    let credentials = context(None);
    let endpoint = oauth2(Arc::new(PendingTransport), credentials.clone());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = endpoint
        .exchange_with_cancellation(GrantType::Pin, "1234", &cancel)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        ApiClientError::Cancelled { .. }
    ));
    assert!(credentials.token().is_none());
}

#[test]
fn given_endpoint_when_building_authorization_url_then_uses_identity_client_id() {
    let endpoint = oauth2(Arc::new(RecordingTransport::new()), context(None));

    assert_eq!(
        endpoint.authorization_url(OAuth2ResponseType::Token, Some("xyz")),
        "https://api.imgur.com/oauth2/authorize?client_id=ClientId&response_type=Token&state=xyz"
    );
}

/// **VALUE**: Verifies an OAuth2 base given without a trailing slash still yields
/// `/oauth2/authorize` and `/oauth2/token`.
///
/// **WHY THIS MATTERS**: `https://api.imgur.com/oauth2` is how the base is usually
/// written. Concatenation glued it into `oauth2authorize` and `Url::join` replaced
/// the last segment, posting credentials to `/token`.
///
/// **BUG THIS CATCHES**: Would catch either URL being built from the raw base.
#[tokio::test]
async fn given_base_without_trailing_slash_when_building_urls_then_endpoints_stay_under_oauth2() {
    // GIVEN: An endpoint whose base lacks the trailing slash
    let base = Url::parse("https://api.imgur.com/oauth2").unwrap();
    let transport = Arc::new(RecordingTransport::replying(200, BARE_TOKEN_RESPONSE));
    let endpoint = OAuth2Endpoint::new(transport.clone(), context(None), base.clone());

    // WHEN: Building the authorize URL and exchanging a PIN
    let free_url = authorization_url(&base, "ClientId", OAuth2ResponseType::Code, None);
    let endpoint_url = endpoint.authorization_url(OAuth2ResponseType::Pin, None);
    endpoint.exchange_pin("1234").await.unwrap();

    // THEN: Both stay below /oauth2/
    assert_eq!(
        free_url,
        "https://api.imgur.com/oauth2/authorize?client_id=ClientId&response_type=Code&state="
    );
    assert_eq!(
        endpoint_url,
        "https://api.imgur.com/oauth2/authorize?client_id=ClientId&response_type=Pin&state="
    );
    assert_eq!(
        transport.last_request().url.as_str(),
        "https://api.imgur.com/oauth2/token"
    );
}

/// **VALUE**: Verifies a refresh that does not rotate the refresh token keeps the
/// one it was made with, both in the result and in the context.
///
/// **WHY THIS MATTERS**: Without a refresh token the next expiry forces the user
/// back through the browser. Library callers must not have to patch the token
/// and store it a second time.
///
/// **BUG THIS CATCHES**: Would catch the context holding a token with
/// `refresh_token: None` after a refresh.
#[tokio::test]
async fn given_refresh_response_without_refresh_token_when_refreshing_then_previous_one_is_kept() {
    // GIVEN: A context token whose refresh token is "refresh-me"
    let transport = Arc::new(RecordingTransport::replying(200, UNROTATED_TOKEN_RESPONSE));
    let credentials = context(Some(token("stale")));
    let endpoint = oauth2(transport, credentials.clone());

    // WHEN: Imgur answers without a refresh token
    let refreshed = endpoint.refresh().await.unwrap();

    // THEN: The new access token is paired with the old refresh token everywhere
    assert_eq!(refreshed.access_token.as_str(), "fresh");
    assert_eq!(refreshed.refresh_token.as_ref().unwrap().as_str(), "refresh-me");
    let stored = credentials.token().unwrap();
    assert_eq!(stored.access_token.as_str(), "fresh");
    assert_eq!(stored.refresh_token.as_ref().unwrap().as_str(), "refresh-me");
}

#[tokio::test]
async fn given_pin_response_without_refresh_token_when_exchanging_then_none_is_stored() {
    let transport = Arc::new(RecordingTransport::replying(200, UNROTATED_TOKEN_RESPONSE));
    let credentials = context(None);
    let endpoint = oauth2(transport, credentials.clone());

    let token = endpoint.exchange_pin("1234").await.unwrap();

    assert!(token.refresh_token.is_none());
    assert!(credentials.token().unwrap().refresh_token.is_none());
}
