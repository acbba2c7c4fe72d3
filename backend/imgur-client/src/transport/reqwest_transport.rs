use super::{HttpMethod, HttpTransport, TransportRequest, TransportResponse};
use crate::error::ApiClientError;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method};

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// [`HttpTransport`] backed by a `reqwest::Client`.
///
/// Timeouts and connection reuse are whatever the wrapped client is
/// configured with.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ApiClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn with_default_timeout() -> Result<Self, ApiClientError> {
        Self::new(DEFAULT_TIMEOUT_DURATION)
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ApiClientError> {
        debug!("{} {}", request.method, request.url.path());

        let mut builder = self.client.request(request.method.into(), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.bytes().await?;

        debug!("HTTP {status} ({} bytes)", body.len());
        Ok(TransportResponse::new(status, headers, body.to_vec()))
    }
}
