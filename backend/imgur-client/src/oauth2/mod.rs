//! OAuth2 login: the authorize URL and the three token grants.
//!
//! ```text
//! authorization_url(Pin) -> user approves in browser -> exchange_pin(pin)
//!                                                            |
//!                                      CredentialContext <- new token
//!                                                            |
//!                    later: exchange_refresh_token(refresh) -+
//! ```
//!
//! Callers should persist the refresh token from every successful exchange.
//! Losing it means sending the user through the browser again.

mod authorize;

pub use authorize::authorization_url;

use authorize::with_trailing_slash;

use crate::credentials::CredentialContext;
use crate::error::ApiClientError;
use crate::processor::decoder;
use crate::transport::{
    CONTENT_TYPE_HEADER, FORM_CONTENT_TYPE, HttpMethod, HttpTransport, TransportRequest,
};

use common::RedactedSecret;
use models::{GrantType, OAuth2ResponseType, OAuth2Token};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use tokio_util::sync::CancellationToken;
use url::Url;
use url::form_urlencoded::Serializer as FormSerializer;

const TOKEN_ENDPOINT: &str = "token";

pub struct OAuth2Endpoint {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<CredentialContext>,
    oauth_base_url: Url,
}

impl OAuth2Endpoint {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<CredentialContext>,
        oauth_base_url: Url,
    ) -> Self {
        Self {
            transport,
            credentials,
            oauth_base_url: with_trailing_slash(&oauth_base_url),
        }
    }

    pub fn authorization_url(
        &self,
        response_type: OAuth2ResponseType,
        state: Option<&str>,
    ) -> String {
        authorization_url(
            &self.oauth_base_url,
            self.credentials.identity().id(),
            response_type,
            state,
        )
    }

    /// Exchange the `code` from the redirect URL for a token.
    pub async fn exchange_code(&self, code: &str) -> Result<OAuth2Token, ApiClientError> {
        self.exchange(GrantType::AuthorizationCode, code).await
    }

    /// Exchange the PIN the user typed in for a token.
    pub async fn exchange_pin(&self, pin: &str) -> Result<OAuth2Token, ApiClientError> {
        self.exchange(GrantType::Pin, pin).await
    }

    /// Mint a new access token from a stored refresh token.
    ///
    /// If Imgur does not rotate the refresh token, the returned token keeps
    /// `refresh_token` so it can be refreshed again.
    pub async fn exchange_refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<OAuth2Token, ApiClientError> {
        self.exchange(GrantType::RefreshToken, refresh_token).await
    }

    /// Refresh using the refresh token of the token currently in the context.
    pub async fn refresh(&self) -> Result<OAuth2Token, ApiClientError> {
        let current = self.credentials.token().ok_or_else(|| {
            ApiClientError::authentication_required("No OAuth2 token to refresh")
        })?;
        let refresh_token = current.refresh_token.as_ref().ok_or_else(|| {
            ApiClientError::authentication_required("Current OAuth2 token has no refresh token")
        })?;

        self.exchange_refresh_token(refresh_token.as_str()).await
    }

    /// Run one grant against the token endpoint and store the resulting token.
    ///
    /// # Errors
    /// - [`ApiClientError::InvalidArgument`] if `input` is empty, before any network access
    /// - [`ApiClientError::Api`] if Imgur rejected the grant
    /// - [`ApiClientError::Transport`], [`ApiClientError::MalformedResponse`],
    ///   [`ApiClientError::TypeMismatch`] as for any other call
    pub async fn exchange(
        &self,
        grant: GrantType,
        input: &str,
    ) -> Result<OAuth2Token, ApiClientError> {
        let request = self.token_request(grant, input)?;

        info!("Requesting OAuth2 token (grant_type={grant})");
        let response = self.transport.send(request).await?;

        let token_response = decoder::decode_token(response.body(), response.status())?;
        let mut token = OAuth2Token::from_response(token_response, Utc::now());
        if !token.has_access_token() {
            return Err(ApiClientError::malformed_response(
                "Token endpoint returned an empty access token",
            ));
        }
        if grant == GrantType::RefreshToken && token.refresh_token.is_none() {
            token.refresh_token = Some(RedactedSecret::new(input));
        }

        self.credentials.set_token(token.clone());
        info!(
            "OAuth2 token stored (grant_type={grant}, account={})",
            token.account_username.as_deref().unwrap_or("unknown")
        );

        Ok(token)
    }

    /// [`OAuth2Endpoint::exchange`] that aborts on `cancel`.
    ///
    /// A cancelled exchange never touches the credential context.
    pub async fn exchange_with_cancellation(
        &self,
        grant: GrantType,
        input: &str,
        cancel: &CancellationToken,
    ) -> Result<OAuth2Token, ApiClientError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("OAuth2 exchange cancelled (grant_type={grant})");
                Err(ApiClientError::cancelled())
            }
            result = self.exchange(grant, input) => result,
        }
    }

    fn token_request(
        &self,
        grant: GrantType,
        input: &str,
    ) -> Result<TransportRequest, ApiClientError> {
        if input.trim().is_empty() {
            return Err(ApiClientError::invalid_argument(format!(
                "{} cannot be empty",
                grant.input_field()
            )));
        }

        let identity = self.credentials.identity();
        let body = FormSerializer::new(String::new())
            .append_pair("client_id", identity.id())
            .append_pair("client_secret", identity.secret().as_str())
            .append_pair("grant_type", grant.as_str())
            .append_pair(grant.input_field(), input)
            .finish();

        let url = self.oauth_base_url.join(TOKEN_ENDPOINT)?;

        Ok(TransportRequest::new(HttpMethod::Post, url)
            .with_header(CONTENT_TYPE_HEADER, FORM_CONTENT_TYPE)
            .with_body(body.into_bytes()))
    }
}
