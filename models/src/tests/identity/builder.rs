use crate::{ClientIdentity, ModelError};

/// **VALUE**: Verifies that a client identity cannot be built without an id.
///
/// **WHY THIS MATTERS**: The id goes into every request, either as the anonymous
/// `Client-ID` header or as a token endpoint field. A missing id should fail at
/// construction instead of surfacing later as a confusing 403 from Imgur.
///
/// **BUG THIS CATCHES**: Would catch if the required-field check is removed from
/// the builder.
#[test]
fn given_missing_id_when_building_identity_then_returns_validation_error() {
    // GIVEN: Builder with only a secret
    let builder = ClientIdentity::builder().with_secret("ClientSecret");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Client id is required");
        }
    }
}

/// **VALUE**: Verifies that whitespace-only ids are rejected like empty ones.
///
/// **BUG THIS CATCHES**: Would catch a plain `is_empty()` check letting `"  "` through.
#[test]
fn given_blank_id_when_building_identity_then_returns_validation_error() {
    let result = ClientIdentity::new("   ", "ClientSecret");

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Client id cannot be empty");
        }
    }
}

#[test]
fn given_empty_secret_when_building_identity_then_returns_validation_error() {
    let result = ClientIdentity::new("ClientId", "");

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Client secret cannot be empty");
        }
    }
}

/// **VALUE**: Verifies the happy path keeps both values and hides the secret.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug leaking the secret through
/// the identity wrapper.
#[test]
fn given_valid_values_when_building_identity_then_exposes_id_and_redacts_secret() {
    let identity = ClientIdentity::new("ClientId", "ClientSecret").unwrap();

    assert_eq!(identity.id(), "ClientId");
    assert_eq!(identity.secret().as_str(), "ClientSecret");
    assert!(!format!("{identity:?}").contains("ClientSecret"));
}

/// **VALUE**: Verifies validation errors name the rejected field.
///
/// **BUG THIS CATCHES**: Would catch a config error saying only "cannot be empty"
/// without telling the user whether the id or the secret was wrong.
#[test]
fn given_blank_secret_when_formatted_then_names_client_secret_field() {
    let err = ClientIdentity::new("ClientId", "  ").unwrap_err();

    assert!(matches!(
        err,
        ModelError::Validation {
            field: "client_secret",
            ..
        }
    ));
    let error_string = err.to_string();
    assert!(error_string.contains("Invalid Imgur Model Field Error: client_secret"));
}
