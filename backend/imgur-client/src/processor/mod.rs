//! The shared pipeline behind every endpoint call.

pub mod decoder;
pub mod rate_limit;

use crate::credentials::CredentialContext;
use crate::error::ApiClientError;
use crate::transport::{
    AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, FORM_CONTENT_TYPE, HttpMethod, HttpTransport,
    TransportRequest,
};

use models::RateLimitInfo;

use std::sync::Arc;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;
use url::form_urlencoded::Serializer as FormSerializer;

/// An endpoint call before credentials are attached.
///
/// Path segments are percent-encoded individually, so ids and usernames can
/// be passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub method: HttpMethod,
    pub path: Vec<String>,
    pub query: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
    pub requires_auth: bool,
}

impl OutgoingRequest {
    pub fn new<S: Into<String>>(method: HttpMethod, path: impl IntoIterator<Item = S>) -> Self {
        Self {
            method,
            path: path.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            form: Vec::new(),
            requires_auth: false,
        }
    }

    pub fn get<S: Into<String>>(path: impl IntoIterator<Item = S>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post<S: Into<String>>(path: impl IntoIterator<Item = S>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn delete<S: Into<String>>(path: impl IntoIterator<Item = S>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn with_form(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((name.into(), value.into()));
        self
    }

    /// Mark the call as needing account access.
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn with_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }
}

/// Decoded payload plus the rate-limit side channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub success: bool,
    pub status: u16,
    pub rate_limit: RateLimitInfo,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

pub struct RequestProcessor {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<CredentialContext>,
    api_base_url: Url,
}

impl RequestProcessor {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<CredentialContext>,
        api_base_url: Url,
    ) -> Self {
        Self {
            transport,
            credentials,
            api_base_url,
        }
    }

    pub fn credentials(&self) -> &Arc<CredentialContext> {
        &self.credentials
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Attach credentials, dispatch, and decode the response into `T`.
    ///
    /// # Errors
    /// - [`ApiClientError::AuthenticationRequired`] before any network access if
    ///   the request needs account access and no token is set
    /// - [`ApiClientError::Transport`] if the round-trip itself failed
    /// - any decoder error, see [`decoder::decode`]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: OutgoingRequest,
    ) -> Result<ApiResponse<T>, ApiClientError> {
        let transport_request = self.build_transport_request(&request)?;

        let response = self.transport.send(transport_request).await?;
        let rate_limit = rate_limit::parse_rate_limit(&response);
        if rate_limit.is_exhausted() {
            warn!("Imgur rate limit exhausted: {rate_limit:?}");
        }

        let envelope = decoder::decode::<T>(response.body(), response.status())?;

        Ok(ApiResponse {
            data: envelope.data,
            success: envelope.success,
            status: envelope.status,
            rate_limit,
        })
    }

    /// Like [`RequestProcessor::execute`], but gives up with
    /// [`ApiClientError::Cancelled`] as soon as `cancel` fires.
    pub async fn execute_with_cancellation<T: DeserializeOwned>(
        &self,
        request: OutgoingRequest,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse<T>, ApiClientError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Request cancelled: {} /{}", request.method, request.path.join("/"));
                Err(ApiClientError::cancelled())
            }
            result = self.execute(request.clone()) => result,
        }
    }

    /// Header value for this request, snapshotting the token once.
    pub fn authorization_header(&self, requires_auth: bool) -> Result<String, ApiClientError> {
        if requires_auth {
            let token = self.credentials.require_access_token()?;
            return Ok(format!("Bearer {}", token.access_token.as_str()));
        }

        match self.credentials.token() {
            Some(token) if token.has_access_token() => {
                Ok(format!("Bearer {}", token.access_token.as_str()))
            }
            _ => Ok(format!("Client-ID {}", self.credentials.identity().id())),
        }
    }

    fn build_transport_request(
        &self,
        request: &OutgoingRequest,
    ) -> Result<TransportRequest, ApiClientError> {
        let authorization = self.authorization_header(request.requires_auth)?;
        let url = self.request_url(request)?;

        let mut transport_request = TransportRequest::new(request.method, url)
            .with_header(AUTHORIZATION_HEADER, authorization);

        if !request.form.is_empty() {
            let body = FormSerializer::new(String::new())
                .extend_pairs(request.form.iter())
                .finish();
            transport_request = transport_request
                .with_header(CONTENT_TYPE_HEADER, FORM_CONTENT_TYPE)
                .with_body(body.into_bytes());
        }

        Ok(transport_request)
    }

    fn request_url(&self, request: &OutgoingRequest) -> Result<Url, ApiClientError> {
        let mut url = self.api_base_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                ApiClientError::invalid_argument(format!(
                    "API base URL cannot take path segments: {}",
                    self.api_base_url
                ))
            })?
            .pop_if_empty()
            .extend(request.path.iter());

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }

        Ok(url)
    }
}
