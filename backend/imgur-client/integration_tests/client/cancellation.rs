use crate::helpers::{ACCOUNT_BODY, TOKEN_BODY, client_for};

use imgur_client::error::ApiClientError;
use imgur_client::processor::OutgoingRequest;

use models::{Account, GrantType, OAuth2Token};

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies a slow call is abandoned promptly when its token fires.
///
/// **BUG THIS CATCHES**: Would catch cancellation only being checked before
/// dispatch, leaving the caller blocked for the full server delay.
#[tokio::test]
async fn given_slow_response_when_cancelled_mid_flight_then_returns_cancelled() {
    // GIVEN: An endpoint that answers only after five seconds
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/account/Bob"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(5))
                .set_body_string(ACCOUNT_BODY),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);
    let cancel = CancellationToken::new();

    // WHEN: Cancelling shortly after the request goes out
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });
    let started = std::time::Instant::now();
    let result = client
        .processor()
        .execute_with_cancellation::<Account>(OutgoingRequest::get(["account", "Bob"]), &cancel)
        .await;

    // THEN: Cancelled well before the server would have replied
    assert!(matches!(result.unwrap_err(), ApiClientError::Cancelled { .. }));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn given_slow_token_endpoint_when_cancelled_then_context_keeps_old_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(5))
                .set_body_string(TOKEN_BODY),
        )
        .mount(&server)
        .await;
    let client = client_for(&server).with_token(OAuth2Token::new("old", None, "bearer", 3600));
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });
    let result = client
        .oauth2()
        .exchange_with_cancellation(GrantType::Pin, "1234", &cancel)
        .await;

    assert!(matches!(result.unwrap_err(), ApiClientError::Cancelled { .. }));
    assert_eq!(
        client.credentials().token().unwrap().access_token.as_str(),
        "old"
    );
}
