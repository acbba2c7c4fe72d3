// Unit tests for the request processor.

use super::helpers::{PendingTransport, RecordingTransport, context, form_pairs, processor, token};
use crate::error::ApiClientError;
use crate::processor::OutgoingRequest;
use crate::transport::HttpMethod;

use models::Account;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

const ACCOUNT_RESPONSE: &str = r#"{"data":{"id":12456,"url":"Bob","bio":null,"reputation":4343,"created":1229591601},"success":true,"status":200}"#;

/// **VALUE**: Verifies authenticated calls without a token fail before the network.
///
/// **WHY THIS MATTERS**: Sending the request anyway burns rate-limit credits and
/// returns a provider 401 that is harder to act on than a local error.
///
/// **BUG THIS CATCHES**: Would catch the auth check moving after dispatch.
#[tokio::test]
async fn given_no_token_when_executing_authenticated_request_then_no_transport_call() {
    // GIVEN: An anonymous context and a transport that would succeed
    let transport = Arc::new(RecordingTransport::replying(200, ACCOUNT_RESPONSE));
    let processor = processor(transport.clone(), context(None));

    // WHEN: Executing a request that needs account access
    let result = processor
        .execute::<Account>(OutgoingRequest::get(["account", "me"]).authenticated())
        .await;

    // THEN: AuthenticationRequired, nothing sent
    assert!(matches!(
        result.unwrap_err(),
        ApiClientError::AuthenticationRequired { .. }
    ));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn given_token_when_executing_then_sends_bearer_header() {
    let transport = Arc::new(RecordingTransport::replying(200, ACCOUNT_RESPONSE));
    let processor = processor(transport.clone(), context(Some(token("tok123"))));

    processor
        .execute::<Account>(OutgoingRequest::get(["account", "me"]).authenticated())
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.header("authorization"), Some("Bearer tok123"));
    assert_eq!(request.url.as_str(), "https://api.imgur.com/3/account/me");
    assert_eq!(request.method, HttpMethod::Get);
}

/// **VALUE**: Verifies anonymous calls use Imgur's `Client-ID` scheme.
#[tokio::test]
async fn given_no_token_when_executing_anonymous_request_then_sends_client_id_header() {
    let transport = Arc::new(RecordingTransport::replying(200, ACCOUNT_RESPONSE));
    let processor = processor(transport.clone(), context(None));

    processor
        .execute::<Account>(OutgoingRequest::get(["account", "Bob"]))
        .await
        .unwrap();

    assert_eq!(
        transport.last_request().header("Authorization"),
        Some("Client-ID ClientId")
    );
}

#[tokio::test]
async fn given_token_when_executing_anonymous_request_then_still_uses_bearer() {
    let transport = Arc::new(RecordingTransport::replying(200, ACCOUNT_RESPONSE));
    let processor = processor(transport.clone(), context(Some(token("tok123"))));

    processor
        .execute::<Account>(OutgoingRequest::get(["account", "Bob"]))
        .await
        .unwrap();

    assert_eq!(
        transport.last_request().header("Authorization"),
        Some("Bearer tok123")
    );
}

#[tokio::test]
async fn given_path_query_and_form_when_executing_then_request_is_encoded() {
    let transport = Arc::new(RecordingTransport::replying(
        200,
        r#"{"data":{"id":5},"success":true,"status":200}"#,
    ));
    let processor = processor(transport.clone(), context(Some(token("tok123"))));

    processor
        .execute::<models::BasicId>(
            OutgoingRequest::post(["comment", "a b/c"])
                .with_query("showViral", "true")
                .with_form("comment", "nice & shiny"),
        )
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(
        request.url.as_str(),
        "https://api.imgur.com/3/comment/a%20b%2Fc?showViral=true"
    );
    assert_eq!(
        request.header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(
        form_pairs(&request),
        vec![("comment".to_string(), "nice & shiny".to_string())]
    );
}

#[tokio::test]
async fn given_rate_limit_headers_when_executing_then_attached_to_response() {
    let transport = Arc::new(RecordingTransport::new().then_reply(
        200,
        &[
            ("X-RateLimit-ClientLimit", "12500"),
            ("X-RateLimit-ClientRemaining", "12000"),
        ],
        ACCOUNT_RESPONSE,
    ));
    let processor = processor(transport, context(None));

    let response = processor
        .execute::<Account>(OutgoingRequest::get(["account", "Bob"]))
        .await
        .unwrap();

    assert_eq!(response.rate_limit.client_limit, Some(12500));
    assert_eq!(response.rate_limit.client_remaining, Some(12000));
    assert_eq!(response.rate_limit.user_limit, None);
    assert_eq!(response.data.url, "Bob");
}

/// **VALUE**: Verifies transport failures surface unchanged.
///
/// **BUG THIS CATCHES**: Would catch the processor wrapping transport errors into
/// API errors, which would make connection failures look like provider rejections.
#[tokio::test]
async fn given_transport_failure_when_executing_then_error_is_propagated() {
    let transport = Arc::new(
        RecordingTransport::new().then_fail(ApiClientError::transport("connection refused")),
    );
    let processor = processor(transport.clone(), context(None));

    let result = processor
        .execute::<Account>(OutgoingRequest::get(["account", "Bob"]))
        .await;

    match result.unwrap_err() {
        ApiClientError::Transport { message, .. } => assert_eq!(message, "connection refused"),
        other => panic!("expected transport error, got {other:?}"),
    }
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn given_cancelled_token_when_executing_then_returns_cancelled() {
    let credentials = context(Some(token("tok123")));
    let processor = processor(Arc::new(PendingTransport), credentials.clone());
    let cancel = CancellationToken::new();

    let pending = processor
        .execute_with_cancellation::<Account>(OutgoingRequest::get(["account", "me"]), &cancel);
    cancel.cancel();

    assert!(matches!(
        pending.await.unwrap_err(),
        ApiClientError::Cancelled { .. }
    ));
    assert_eq!(
        credentials.token().unwrap().access_token.as_str(),
        "tok123"
    );
}
