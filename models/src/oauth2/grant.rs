use crate::{ErrorLocation, ModelError};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

/// What the authorize page hands back once the user approves access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OAuth2ResponseType {
    /// Code appended to the registered redirect URL.
    Code,
    /// PIN the user copies into the application by hand.
    Pin,
    /// Access token delivered directly in the redirect fragment.
    Token,
}

impl OAuth2ResponseType {
    /// Wire name used in the `response_type` query parameter.
    ///
    /// Imgur accepts the capitalised forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Pin => "Pin",
            Self::Token => "Token",
        }
    }
}

impl fmt::Display for OAuth2ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OAuth2ResponseType {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "code" => Ok(Self::Code),
            "pin" => Ok(Self::Pin),
            "token" => Ok(Self::Token),
            other => Err(ModelError::Validation {
                field: "response_type",
                message: format!("Unknown OAuth2 response type: {other}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Token endpoint grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrantType {
    AuthorizationCode,
    Pin,
    RefreshToken,
}

impl GrantType {
    /// Value of the `grant_type` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::Pin => "pin",
            Self::RefreshToken => "refresh_token",
        }
    }

    /// Name of the form field that carries the grant's input.
    pub fn input_field(&self) -> &'static str {
        match self {
            Self::AuthorizationCode => "code",
            Self::Pin => "pin",
            Self::RefreshToken => "refresh_token",
        }
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
