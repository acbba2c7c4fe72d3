use crate::HttpStatusCode;

/// **VALUE**: Verifies status classification used by `ApiClientError` helpers.
///
/// **BUG THIS CATCHES**: Off-by-one range checks (e.g. 500 counted as a client error).
#[test]
fn given_boundary_codes_when_classified_then_ranges_are_exclusive() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());
    assert!(HttpStatusCode(500).is_server_error());
}

#[test]
fn given_imgur_failure_codes_when_classified_then_flags_match() {
    assert!(HttpStatusCode(429).is_rate_limited());
    assert!(HttpStatusCode(401).is_auth_failure());
    assert!(HttpStatusCode(403).is_auth_failure());
    assert!(!HttpStatusCode(404).is_auth_failure());
    assert_eq!(HttpStatusCode::from(404).to_string(), "404");
}
