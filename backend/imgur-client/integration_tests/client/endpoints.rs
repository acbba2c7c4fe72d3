use crate::helpers::{ACCOUNT_BODY, client_for};

use imgur_client::endpoints::{AccountQuery, GalleryQuery};
use imgur_client::error::ApiClientError;
use imgur_client::processor::OutgoingRequest;

use models::{Account, OAuth2Token};

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_named_account_when_anonymous_then_sends_client_id_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/account/Bob"))
        .and(header("authorization", "Client-ID ClientId"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ACCOUNT_BODY))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let account = client
        .account()
        .get_account(&AccountQuery::for_user("Bob"))
        .await
        .unwrap();

    assert_eq!(account.url, "Bob");
}

/// **VALUE**: Verifies rate-limit headers reach the caller alongside the data.
///
/// **WHY THIS MATTERS**: Imgur bans clients that keep calling after their
/// credits run out; callers can only back off if they see the counters.
///
/// **BUG THIS CATCHES**: Would catch header names being matched case-sensitively
/// after reqwest lowercases them.
#[tokio::test]
async fn given_rate_limit_headers_when_executing_then_attached_to_response() {
    // GIVEN: An account response carrying the full set of counters
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/account/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-RateLimit-ClientLimit", "12500")
                .insert_header("X-RateLimit-ClientRemaining", "12499")
                .insert_header("X-RateLimit-UserLimit", "2000")
                .insert_header("X-RateLimit-UserRemaining", "1999")
                .insert_header("X-RateLimit-UserReset", "1700000000")
                .set_body_string(ACCOUNT_BODY),
        )
        .mount(&server)
        .await;
    let client = client_for(&server).with_token(OAuth2Token::new("tok", None, "bearer", 3600));

    // WHEN: Executing through the processor to keep the side channel
    let response = client
        .processor()
        .execute::<Account>(OutgoingRequest::get(["account", "me"]).authenticated())
        .await
        .unwrap();

    // THEN: Every counter was parsed
    let limits = response.rate_limit;
    assert_eq!(limits.client_limit, Some(12500));
    assert_eq!(limits.client_remaining, Some(12499));
    assert_eq!(limits.user_limit, Some(2000));
    assert_eq!(limits.user_remaining, Some(1999));
    assert_eq!(limits.user_reset.map(|reset| reset.timestamp()), Some(1700000000));
    assert_eq!(response.status, 200);
    assert_eq!(response.data.id, 12456);
}

#[tokio::test]
async fn given_error_envelope_when_fetching_image_then_api_error_with_provider_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/image/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"data":{"error":"Unable to find an image with the id, missing","request":"/3/image/missing","method":"GET"},"success":false,"status":404}"#,
        ))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client.image().get_image("missing").await.unwrap_err();

    assert_eq!(error.status_code(), Some(404));
    assert_eq!(error.error_category(), "client_error");
}

#[tokio::test]
async fn given_html_error_page_when_fetching_then_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/album/abc"))
        .respond_with(
            ResponseTemplate::new(502).set_body_string("<html><body>Bad Gateway</body></html>"),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client.album().get_album("abc").await.unwrap_err();

    assert!(matches!(error, ApiClientError::MalformedResponse { .. }));
}

#[tokio::test]
async fn given_gallery_query_when_listing_then_show_viral_is_sent_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/gallery/hot/viral/day/0"))
        .and(query_param("showViral", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":[{"id":"xyz","datetime":1229591601,"is_album":false}],"success":true,"status":200}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let items = client.gallery().get_gallery(&GalleryQuery::default()).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), "xyz");
}

#[tokio::test]
async fn given_empty_data_when_listing_images_then_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/account/me/images/0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"data":{},"success":true,"status":200}"#),
        )
        .mount(&server)
        .await;
    let client = client_for(&server).with_token(OAuth2Token::new("tok", None, "bearer", 3600));

    let images = client.account().get_account_images(0).await.unwrap();

    assert!(images.is_empty());
}
