//! Client configuration and token persistence.
//!
//! [`ClientConfig`] comes from the environment (optionally seeded from a
//! `.env` file). [`TokenStore`] keeps the OAuth2 token between runs so the
//! refresh token survives restarts.

pub mod token_store;

pub use token_store::TokenStore;

use crate::error::config::ConfigError;
use crate::{IMGUR_API_BASE_URL, IMGUR_OAUTH2_BASE_URL};

use common::ErrorLocation;
use models::ClientIdentity;

use std::env;
use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, warn};
use url::Url;

pub const CLIENT_ID_ENV: &str = "IMGUR_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "IMGUR_CLIENT_SECRET";
pub const API_BASE_URL_ENV: &str = "IMGUR_API_BASE_URL";
pub const OAUTH_BASE_URL_ENV: &str = "IMGUR_OAUTH_BASE_URL";
pub const TIMEOUT_SECS_ENV: &str = "IMGUR_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub identity: ClientIdentity,
    /// Base for resource endpoints, `https://api.imgur.com/3/` by default.
    pub api_base_url: Url,
    /// Base for `authorize` and `token`, `https://api.imgur.com/oauth2/` by default.
    pub oauth_base_url: Url,
    /// Applied to the reqwest client; this crate imposes no timeout of its own.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(identity: ClientIdentity) -> Result<Self, ConfigError> {
        Ok(Self {
            identity,
            api_base_url: parse_base_url(API_BASE_URL_ENV, IMGUR_API_BASE_URL)?,
            oauth_base_url: parse_base_url(OAUTH_BASE_URL_ENV, IMGUR_OAUTH2_BASE_URL)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_api_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = parse_base_url(API_BASE_URL_ENV, url)?;
        Ok(self)
    }

    pub fn with_oauth_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.oauth_base_url = parse_base_url(OAUTH_BASE_URL_ENV, url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load `.env` if present, then read the `IMGUR_*` variables.
    ///
    /// # Errors
    /// - [`ConfigError::MissingEnv`] if the client id or secret is unset
    /// - [`ConfigError::ValidationError`] if any value is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        if try_load_dotenv().is_none() {
            debug!("No .env file found - using existing environment variables");
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; `from_env` is this over `std::env`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let client_id = required(&lookup, CLIENT_ID_ENV)?;
        let client_secret = required(&lookup, CLIENT_SECRET_ENV)?;

        let identity = ClientIdentity::new(client_id, client_secret).map_err(|e| {
            ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: e.to_string(),
            }
        })?;

        let mut config = Self::new(identity)?;

        if let Some(url) = optional(&lookup, API_BASE_URL_ENV) {
            config = config.with_api_base_url(&url)?;
        }
        if let Some(url) = optional(&lookup, OAUTH_BASE_URL_ENV) {
            config = config.with_oauth_base_url(&url)?;
        }
        if let Some(raw) = optional(&lookup, TIMEOUT_SECS_ENV) {
            let seconds: u64 = raw.parse().map_err(|_| ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("{TIMEOUT_SECS_ENV} must be a whole number of seconds, got {raw:?}"),
            })?;
            if seconds == 0 {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("{TIMEOUT_SECS_ENV} must be greater than zero"),
                });
            }
            config = config.with_timeout(Duration::from_secs(seconds));
        }

        info!(
            "Imgur client configured (client_id={}, api={}, timeout={}s)",
            config.identity.id(),
            config.api_base_url,
            config.timeout.as_secs()
        );
        Ok(config)
    }
}

#[track_caller]
fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    optional(lookup, name).ok_or_else(|| ConfigError::MissingEnv {
        location: ErrorLocation::from(Location::caller()),
        name,
    })
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|value| !value.trim().is_empty())
}

/// Parse a base URL, forcing a trailing slash so relative joins keep the path.
#[track_caller]
fn parse_base_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: format!("{name}: invalid URL {raw:?}: {e}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("{name}: expected an http(s) URL, got {raw:?}"),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Attempts to load .env from the working directory, then next to the executable.
fn try_load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return Some(path);
    }

    let exe_dir = env::current_exe().ok()?.parent()?.to_path_buf();
    let env_path = exe_dir.join(".env");
    if !env_path.exists() {
        return None;
    }

    match dotenvy::from_path(&env_path) {
        Ok(()) => {
            info!("Loaded .env from: {:?}", env_path);
            Some(env_path)
        }
        Err(e) => {
            warn!("Failed to parse .env at {:?}: {}", env_path, e);
            None
        }
    }
}
