//! Who is calling: the application identity plus, once a user has logged in,
//! their OAuth2 token.

use crate::error::ApiClientError;

use models::{ClientIdentity, OAuth2Token};

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

/// Shared credential state for every request made through one client.
///
/// The token sits behind an `Arc` so readers take a cheap snapshot and never
/// observe a half-written value; writers swap the whole `Arc`.
#[derive(Debug)]
pub struct CredentialContext {
    identity: ClientIdentity,
    token: RwLock<Option<Arc<OAuth2Token>>>,
}

impl CredentialContext {
    pub fn new(identity: ClientIdentity) -> Self {
        Self {
            identity,
            token: RwLock::new(None),
        }
    }

    pub fn with_token(identity: ClientIdentity, token: OAuth2Token) -> Self {
        Self {
            identity,
            token: RwLock::new(Some(Arc::new(token))),
        }
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    /// Snapshot of the current token.
    pub fn token(&self) -> Option<Arc<OAuth2Token>> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the token, returning the previous one.
    pub fn set_token(&self, token: OAuth2Token) -> Option<Arc<OAuth2Token>> {
        debug!(
            "Replacing OAuth2 token (account: {:?}, expires at {})",
            token.account_username, token.expires_at
        );
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        guard.replace(Arc::new(token))
    }

    pub fn clear_token(&self) -> Option<Arc<OAuth2Token>> {
        debug!("Clearing OAuth2 token");
        self.token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub fn has_access_token(&self) -> bool {
        self.token()
            .is_some_and(|token| token.has_access_token())
    }

    /// Snapshot of the token, or `AuthenticationRequired` when there is no
    /// usable access token.
    #[track_caller]
    pub fn require_access_token(&self) -> Result<Arc<OAuth2Token>, ApiClientError> {
        match self.token() {
            Some(token) if token.has_access_token() => Ok(token),
            Some(_) => Err(ApiClientError::authentication_required(
                "OAuth2 access token is empty",
            )),
            None => Err(ApiClientError::authentication_required(
                "OAuth2 token must be set before calling an account endpoint",
            )),
        }
    }
}
