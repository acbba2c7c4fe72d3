use common::RedactedSecret;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

/// Body returned by `POST /oauth2/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: RedactedSecret,
    pub expires_in: u64,
    pub token_type: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<RedactedSecret>,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub account_username: Option<String>,
}

/// An access grant for one Imgur account.
///
/// Tokens are values: a refresh produces a brand new `OAuth2Token` and the
/// holder swaps it in whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuth2Token {
    pub access_token: RedactedSecret,
    pub refresh_token: Option<RedactedSecret>,
    pub token_type: String,
    pub expires_in: u64,
    pub scope: Option<String>,
    pub account_id: Option<i64>,
    pub account_username: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl OAuth2Token {
    /// Bearer token with no account metadata, expiring `expires_in` seconds from now.
    pub fn new(
        access_token: impl Into<RedactedSecret>,
        refresh_token: Option<RedactedSecret>,
        token_type: impl Into<String>,
        expires_in: u64,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            token_type: token_type.into(),
            expires_in,
            scope: None,
            account_id: None,
            account_username: None,
            expires_at: expiry_from(Utc::now(), expires_in),
        }
    }

    pub fn from_response(response: TokenResponse, received_at: DateTime<Utc>) -> Self {
        Self {
            expires_at: expiry_from(received_at, response.expires_in),
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
            scope: response.scope,
            account_id: response.account_id,
            account_username: response.account_username,
        }
    }

    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_blank()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

fn expiry_from(received_at: DateTime<Utc>, expires_in: u64) -> DateTime<Utc> {
    let lifetime = i64::try_from(expires_in)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX);
    received_at
        .checked_add_signed(lifetime)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
