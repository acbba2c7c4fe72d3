use crate::helpers::{ACCOUNT_BODY, config_for, config_for_uri};

use imgur_client::ImgurClient;
use imgur_client::endpoints::AccountQuery;
use imgur_client::error::ApiClientError;

use std::net::TcpListener;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_response_slower_than_timeout_when_fetching_then_transport_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/account/Bob"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(3))
                .set_body_string(ACCOUNT_BODY),
        )
        .mount(&server)
        .await;
    let config = config_for(&server).with_timeout(Duration::from_millis(200));
    let client = ImgurClient::new(config).unwrap();

    let error = client
        .account()
        .get_account(&AccountQuery::for_user("Bob"))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ApiClientError::Transport {
            is_timeout: true,
            ..
        }
    ));
    assert_eq!(error.error_category(), "timeout");
}

/// **VALUE**: Verifies a refused connection surfaces as a connection-level
/// transport error.
///
/// **WHY THIS MATTERS**: Callers retry or report "Imgur unreachable" based on
/// `error_category()`. A refused connect must not look like an HTTP failure.
///
/// **BUG THIS CATCHES**: Would catch `is_connection` not being set from reqwest's
/// connect errors.
#[tokio::test]
async fn given_closed_port_when_fetching_then_transport_connection_error() {
    // GIVEN: A local port nothing is listening on
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    let client = ImgurClient::new(config_for_uri(&format!("http://{address}"))).unwrap();

    // WHEN: Fetching an account
    let error = client
        .account()
        .get_account(&AccountQuery::for_user("Bob"))
        .await
        .unwrap_err();

    // THEN: The connect failure is classified as such
    assert!(matches!(
        error,
        ApiClientError::Transport {
            is_connection: true,
            ..
        }
    ));
    assert_eq!(error.error_category(), "connection");
}
