//! On-disk OAuth2 token cache.

use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedSecret};
use models::OAuth2Token;

use std::panic::Location;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

const TOKEN_FILE_NAME: &str = "token.json";
const STORE_DIR_NAME: &str = "imgur-client";

/// Persists one OAuth2 token as `{dir}/token.json`.
#[derive(Debug, Clone)]
pub struct TokenStore {
    dir: PathBuf,
}

/// Serializable mirror of [`OAuth2Token`]; the only place secrets are written out.
#[derive(Serialize, Deserialize)]
struct StoredToken {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    token_type: String,
    expires_in: u64,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    account_id: Option<i64>,
    #[serde(default)]
    account_username: Option<String>,
    expires_at: DateTime<Utc>,
}

impl From<&OAuth2Token> for StoredToken {
    fn from(token: &OAuth2Token) -> Self {
        Self {
            access_token: token.access_token.as_str().to_string(),
            refresh_token: token
                .refresh_token
                .as_ref()
                .map(|secret| secret.as_str().to_string()),
            token_type: token.token_type.clone(),
            expires_in: token.expires_in,
            scope: token.scope.clone(),
            account_id: token.account_id,
            account_username: token.account_username.clone(),
            expires_at: token.expires_at,
        }
    }
}

impl From<StoredToken> for OAuth2Token {
    fn from(stored: StoredToken) -> Self {
        OAuth2Token {
            access_token: RedactedSecret::new(stored.access_token),
            refresh_token: stored.refresh_token.map(RedactedSecret::new),
            token_type: stored.token_type,
            expires_in: stored.expires_in,
            scope: stored.scope,
            account_id: stored.account_id,
            account_username: stored.account_username,
            expires_at: stored.expires_at,
        }
    }
}

impl TokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `{config_dir}/imgur-client`, e.g. `~/.config/imgur-client` on Linux.
    #[track_caller]
    pub fn default_location() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(Self::new(config_dir.join(STORE_DIR_NAME)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE_NAME)
    }

    /// Load the stored token.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    /// Returns `Err(ConfigError)` if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<OAuth2Token>, ConfigError> {
        let path = self.path();

        if !path.exists() {
            debug!("No stored token at {}", path.display());
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.clone(),
            source: e,
        })?;

        let stored: StoredToken =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.clone(),
                reason: e.to_string(),
            })?;

        info!("Loaded stored token from {}", path.display());
        Ok(Some(stored.into()))
    }

    /// Save the token using temp file + rename so a crash never leaves a torn file.
    pub fn save(&self, token: &OAuth2Token) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: self.dir.clone(),
            source: e,
        })?;

        let path = self.path();
        let temp_path = self.dir.join(format!("{TOKEN_FILE_NAME}.tmp"));

        let json = serde_json::to_string_pretty(&StoredToken::from(token)).map_err(|e| {
            ConfigError::SerializeError {
                location: ErrorLocation::from(Location::caller()),
                reason: e.to_string(),
            }
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        restrict_permissions(&temp_path)?;

        std::fs::rename(&temp_path, &path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: path.clone(),
            source: e,
        })?;

        info!("Token saved to {}", path.display());
        Ok(())
    }

    /// Remove the stored token. Returns whether a file was deleted.
    pub fn clear(&self) -> Result<bool, ConfigError> {
        let path = self.path();
        match std::fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed stored token {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ConfigError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path,
                source: e,
            }),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).map_err(|e| {
        ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        }
    })
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}
