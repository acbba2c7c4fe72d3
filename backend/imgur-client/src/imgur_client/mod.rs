use crate::config::ClientConfig;
use crate::credentials::CredentialContext;
use crate::endpoints::{
    AccountEndpoint, AlbumEndpoint, CommentEndpoint, GalleryEndpoint, ImageEndpoint,
};
use crate::error::ApiClientError;
use crate::oauth2::OAuth2Endpoint;
use crate::processor::RequestProcessor;
use crate::transport::{HttpTransport, ReqwestTransport};

use models::OAuth2Token;

use std::sync::Arc;

/// Entry point bundling credentials, the request pipeline and every endpoint.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct ImgurClient {
    credentials: Arc<CredentialContext>,
    processor: RequestProcessor,
    oauth2: OAuth2Endpoint,
}

impl ImgurClient {
    /// Client backed by a reqwest transport configured from `config`.
    pub fn new(config: ClientConfig) -> Result<Self, ApiClientError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Client over a caller-owned transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let credentials = Arc::new(CredentialContext::new(config.identity));
        let processor = RequestProcessor::new(
            Arc::clone(&transport),
            Arc::clone(&credentials),
            config.api_base_url,
        );
        let oauth2 = OAuth2Endpoint::new(transport, Arc::clone(&credentials), config.oauth_base_url);

        Self {
            credentials,
            processor,
            oauth2,
        }
    }

    pub fn with_token(self, token: OAuth2Token) -> Self {
        self.credentials.set_token(token);
        self
    }

    pub fn credentials(&self) -> &Arc<CredentialContext> {
        &self.credentials
    }

    pub fn processor(&self) -> &RequestProcessor {
        &self.processor
    }

    pub fn oauth2(&self) -> &OAuth2Endpoint {
        &self.oauth2
    }

    pub fn account(&self) -> AccountEndpoint<'_> {
        AccountEndpoint::new(&self.processor)
    }

    pub fn album(&self) -> AlbumEndpoint<'_> {
        AlbumEndpoint::new(&self.processor)
    }

    pub fn comment(&self) -> CommentEndpoint<'_> {
        CommentEndpoint::new(&self.processor)
    }

    pub fn gallery(&self) -> GalleryEndpoint<'_> {
        GalleryEndpoint::new(&self.processor)
    }

    pub fn image(&self) -> ImageEndpoint<'_> {
        ImageEndpoint::new(&self.processor)
    }
}
