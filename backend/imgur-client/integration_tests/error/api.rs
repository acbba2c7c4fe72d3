use imgur_client::error::{ApiClientError, CoreError};

use std::error::Error;

/// **VALUE**: Verifies that `ApiClientError::Api` includes file/line/column location tracking.
///
/// **WHY THIS MATTERS**: A provider failure surfaces far from where the request
/// was built. The location tells a developer which call site produced it.
///
/// **BUG THIS CATCHES**: Would catch if someone:
/// - Removes the `location` field from ApiClientError
/// - Breaks the Display implementation to not include location
/// - Removes `#[track_caller]` from the constructors
#[test]
fn given_api_error_when_formatted_then_includes_status_message_and_location() {
    // GIVEN: An Api error built through its constructor
    let err = ApiClientError::api(
        403,
        "Permission denied",
        Some("/3/account/me".to_string()),
        Some("GET".to_string()),
    );

    // WHEN: Formatting the error as string
    let error_string = format!("{}", err);

    // THEN: Should include error type, status, message, and this file
    assert!(error_string.contains("API Error"));
    assert!(error_string.contains("403"));
    assert!(error_string.contains("Permission denied"));
    assert!(error_string.contains("api.rs"));
}

#[test]
fn given_each_constructor_when_formatted_then_names_its_kind() {
    let cases = [
        (ApiClientError::invalid_argument("pin cannot be empty"), "Invalid Argument Error"),
        (
            ApiClientError::authentication_required("no token"),
            "Authentication Required Error",
        ),
        (ApiClientError::transport("connection reset"), "Transport Error"),
        (ApiClientError::malformed_response("not json"), "Malformed Response Error"),
        (ApiClientError::type_mismatch("expected bool"), "Type Mismatch Error"),
        (ApiClientError::cancelled(), "Request cancelled"),
    ];

    for (err, expected) in cases {
        let error_string = err.to_string();
        assert!(error_string.contains(expected), "{error_string}");
        assert!(error_string.contains("api.rs"), "{error_string}");
        assert_eq!(err.status_code(), None);
        assert!(!err.is_api_error());
    }
}

#[test]
fn given_rate_limited_status_when_categorized_then_rate_limited() {
    assert_eq!(
        ApiClientError::api(429, "slow down", None, None).error_category(),
        "rate_limited"
    );
    assert_eq!(
        ApiClientError::api(500, "oops", None, None).error_category(),
        "server_error"
    );
}

/// **VALUE**: Verifies the umbrella error stays transparent.
///
/// **BUG THIS CATCHES**: Would catch `CoreError` adding its own prefix or
/// hiding the source, which would double-wrap messages in the CLI output.
#[test]
fn given_api_error_when_wrapped_in_core_error_then_display_is_unchanged() {
    let inner = ApiClientError::malformed_response("not json");
    let expected = inner.to_string();

    let core: CoreError = inner.into();

    assert_eq!(core.to_string(), expected);
    assert!(core.source().is_none());
}
