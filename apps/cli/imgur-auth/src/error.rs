use common::ErrorLocation;

use imgur_client::error::{ApiClientError, ConfigError};

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the `imgur-auth` binary.
///
/// Library errors are flattened to their message here; the library already
/// logged the details and the location of the original failure is part of
/// that message.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error from this App
    #[error("Imgur Auth Error: {message} {location}")]
    ImgurAuth {
        message: String,
        location: ErrorLocation,
    },

    /// Error from imgur-client (configuration, token store, API calls)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// A command needs a stored token and there is none
    #[error("Not Logged In Error: {message} {location}")]
    NotLoggedIn {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn imgur_auth(message: impl Into<String>) -> Self {
        CliError::ImgurAuth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_logged_in(message: impl Into<String>) -> Self {
        CliError::NotLoggedIn {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ApiClientError> for CliError {
    #[track_caller]
    fn from(error: ApiClientError) -> Self {
        match error {
            ApiClientError::AuthenticationRequired { message, .. } => CliError::NotLoggedIn {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => CliError::Core {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        CliError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
