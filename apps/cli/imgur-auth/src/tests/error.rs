// Unit tests for CliError conversions

use crate::error::CliError;

use imgur_client::error::{ApiClientError, ConfigError};

/// **VALUE**: Verifies a missing token surfaces as "not logged in", not a generic failure.
///
/// **WHY THIS MATTERS**: `whoami` before `login-pin` is the most common mistake;
/// the message should point at the fix.
///
/// **BUG THIS CATCHES**: Would catch the From impl collapsing every library
/// error into `Core`.
#[test]
fn given_authentication_required_when_converted_then_not_logged_in() {
    let err: CliError = ApiClientError::authentication_required("no token").into();

    assert!(matches!(err, CliError::NotLoggedIn { ref message, .. } if message == "no token"));
    assert!(err.to_string().contains("Not Logged In Error"));
}

#[test]
fn given_api_error_when_converted_then_core_keeps_provider_message() {
    let err: CliError = ApiClientError::api(403, "Permission denied", None, None).into();

    match err {
        CliError::Core { message, .. } => {
            assert!(message.contains("403"));
            assert!(message.contains("Permission denied"));
        }
        other => panic!("expected Core, got {other:?}"),
    }
}

#[test]
fn given_config_error_when_converted_then_core_names_variable() {
    let err: CliError = ConfigError::MissingEnv {
        location: common::ErrorLocation::from(std::panic::Location::caller()),
        name: "IMGUR_CLIENT_ID",
    }
    .into();

    assert!(matches!(err, CliError::Core { .. }));
    assert!(err.to_string().contains("IMGUR_CLIENT_ID"));
}

#[test]
fn given_app_error_when_formatted_then_includes_location() {
    let err = CliError::imgur_auth("boom");

    let error_string = err.to_string();
    assert!(error_string.contains("Imgur Auth Error: boom"));
    assert!(error_string.contains("error.rs"));
}
