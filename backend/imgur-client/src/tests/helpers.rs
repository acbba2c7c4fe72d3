// Transport doubles and fixtures shared by the unit tests.

use crate::IMGUR_API_BASE_URL;
use crate::IMGUR_OAUTH2_BASE_URL;
use crate::credentials::CredentialContext;
use crate::error::ApiClientError;
use crate::oauth2::OAuth2Endpoint;
use crate::processor::RequestProcessor;
use crate::transport::{HttpTransport, TransportRequest, TransportResponse};

use models::{ClientIdentity, OAuth2Token};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;

/// Replays canned responses in order and records every request it was handed.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, ApiClientError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn replying(status: u16, body: &str) -> Self {
        Self::new().then_reply(status, &[], body)
    }

    pub(crate) fn then_reply(self, status: u16, headers: &[(&str, &str)], body: &str) -> Self {
        let response = TransportResponse::new(status, headers.iter().copied(), body.as_bytes());
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub(crate) fn then_fail(self, error: ApiClientError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ApiClientError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiClientError::transport("no canned response left")))
    }
}

/// Never answers; used to exercise cancellation.
pub(crate) struct PendingTransport;

#[async_trait]
impl HttpTransport for PendingTransport {
    async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, ApiClientError> {
        std::future::pending().await
    }
}

pub(crate) fn identity() -> ClientIdentity {
    ClientIdentity::new("ClientId", "ClientSecret").unwrap()
}

pub(crate) fn token(access: &str) -> OAuth2Token {
    OAuth2Token::new(access, Some("refresh-me".into()), "bearer", 3600)
}

pub(crate) fn context(token: Option<OAuth2Token>) -> Arc<CredentialContext> {
    Arc::new(match token {
        Some(token) => CredentialContext::with_token(identity(), token),
        None => CredentialContext::new(identity()),
    })
}

pub(crate) fn processor(
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<CredentialContext>,
) -> RequestProcessor {
    RequestProcessor::new(
        transport,
        credentials,
        Url::parse(IMGUR_API_BASE_URL).unwrap(),
    )
}

pub(crate) fn oauth2(
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<CredentialContext>,
) -> OAuth2Endpoint {
    OAuth2Endpoint::new(
        transport,
        credentials,
        Url::parse(IMGUR_OAUTH2_BASE_URL).unwrap(),
    )
}

pub(crate) fn body_text(request: &TransportRequest) -> String {
    String::from_utf8(request.body.clone().unwrap_or_default()).unwrap()
}

pub(crate) fn form_pairs(request: &TransportRequest) -> Vec<(String, String)> {
    url::form_urlencoded::parse(request.body.as_deref().unwrap_or_default())
        .into_owned()
        .collect()
}
