//! Errors produced by the request pipeline and the OAuth2 flows.
//!
//! Every failure a caller can see from an endpoint or a token exchange is one
//! of these variants. Inner layers construct the right variant once and the
//! value travels up unchanged.

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use serde_json::error::Category;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiClientError {
    #[error("Invalid Argument Error: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication Required Error: {message} {location}")]
    AuthenticationRequired {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Malformed Response Error: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Type Mismatch Error: {message} {location}")]
    TypeMismatch {
        message: String,
        location: ErrorLocation,
    },

    #[error("API Error: HTTP {status} - {message} {location}")]
    Api {
        status: HttpStatusCode,
        message: String,
        request: Option<String>,
        method: Option<String>,
        location: ErrorLocation,
    },

    #[error("Request cancelled {location}")]
    Cancelled { location: ErrorLocation },
}

impl ApiClientError {
    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ApiClientError::InvalidArgument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn authentication_required(message: impl Into<String>) -> Self {
        ApiClientError::AuthenticationRequired {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        ApiClientError::Transport {
            message: message.into(),
            is_timeout: false,
            is_connection: false,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_response(message: impl Into<String>) -> Self {
        ApiClientError::MalformedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        ApiClientError::TypeMismatch {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(
        status: u16,
        message: impl Into<String>,
        request: Option<String>,
        method: Option<String>,
    ) -> Self {
        ApiClientError::Api {
            status: HttpStatusCode(status),
            message: message.into(),
            request,
            method,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        ApiClientError::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Provider status code, only for [`ApiClientError::Api`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiClientError::Api { status, .. } => Some(status.0),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, ApiClientError::Api { .. })
    }

    /// Get error category for logging.
    pub fn error_category(&self) -> &'static str {
        match self {
            ApiClientError::InvalidArgument { .. } => "invalid_argument",
            ApiClientError::AuthenticationRequired { .. } => "authentication_required",
            ApiClientError::Transport { is_timeout: true, .. } => "timeout",
            ApiClientError::Transport { is_connection: true, .. } => "connection",
            ApiClientError::Transport { .. } => "transport",
            ApiClientError::MalformedResponse { .. } => "malformed_response",
            ApiClientError::TypeMismatch { .. } => "type_mismatch",
            ApiClientError::Api { status, .. } if status.is_rate_limited() => "rate_limited",
            ApiClientError::Api { status, .. } if status.is_client_error() => "client_error",
            ApiClientError::Api { status, .. } if status.is_server_error() => "server_error",
            ApiClientError::Api { .. } => "api",
            ApiClientError::Cancelled { .. } => "cancelled",
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ApiClientError::Transport {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

// A bad path or base URL is a caller mistake, never a provider failure.
impl From<url::ParseError> for ApiClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiClientError::InvalidArgument {
            message: format!("Invalid URL: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ApiClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match error.classify() {
            Category::Data => ApiClientError::TypeMismatch {
                message: error.to_string(),
                location,
            },
            Category::Io => ApiClientError::Transport {
                message: error.to_string(),
                is_timeout: false,
                is_connection: false,
                location,
            },
            Category::Syntax | Category::Eof => ApiClientError::MalformedResponse {
                message: error.to_string(),
                location,
            },
        }
    }
}
