//! The client and token store one CLI invocation works with.

use crate::error::CliError;

use imgur_client::ImgurClient;
use imgur_client::config::{ClientConfig, TokenStore};

use log::{debug, info};

pub struct Session {
    client: ImgurClient,
    store: TokenStore,
}

impl Session {
    /// Build a reqwest-backed client from `config` and restore any stored token.
    pub fn open(config: ClientConfig, store: TokenStore) -> Result<Self, CliError> {
        let client = ImgurClient::new(config)?;
        Self::from_parts(client, store)
    }

    /// Wrap an existing client, restoring any token found in `store`.
    pub fn from_parts(client: ImgurClient, store: TokenStore) -> Result<Self, CliError> {
        let client = match store.load()? {
            Some(token) => {
                info!(
                    "Restored token for {}",
                    token.account_username.as_deref().unwrap_or("unknown account")
                );
                if token.is_expired() {
                    debug!("Stored access token has expired; run `refresh`");
                }
                client.with_token(token)
            }
            None => {
                debug!("No stored token in {}", store.dir().display());
                client
            }
        };

        Ok(Self { client, store })
    }

    pub fn client(&self) -> &ImgurClient {
        &self.client
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }
}
