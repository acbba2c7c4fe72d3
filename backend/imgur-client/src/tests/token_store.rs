// Unit tests for the on-disk token cache.

use crate::config::TokenStore;
use crate::error::config::ConfigError;

use common::RedactedSecret;
use models::OAuth2Token;

use tempfile::TempDir;

fn sample_token() -> OAuth2Token {
    let mut token = OAuth2Token::new(
        "20649dae013aiuiui87878788787975ae2",
        Some(RedactedSecret::new("2132d34234jkljj84ce0c16fjkljfsdfdc70")),
        "bearer",
        3600,
    );
    token.account_id = Some(45344);
    token.account_username = Some("Bob".to_string());
    token
}

#[test]
fn given_empty_directory_when_loading_then_none() {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path());

    assert!(store.load().unwrap().is_none());
}

/// **VALUE**: Verifies a saved token loads back identical, expiry included.
///
/// **WHY THIS MATTERS**: The CLI refreshes on the next run from whatever was
/// saved; losing the refresh token forces the user through the browser again.
///
/// **BUG THIS CATCHES**: Would catch the redacted wrapper being serialized
/// instead of the secret value.
#[test]
fn given_saved_token_when_loading_then_matches_original() {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path().join("nested"));
    let token = sample_token();

    store.save(&token).unwrap();
    let loaded = store.load().unwrap().unwrap();

    assert_eq!(loaded, token);
    assert!(!store.dir().join("token.json.tmp").exists());
}

#[test]
fn given_second_save_when_loading_then_latest_token_wins() {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path());
    store.save(&sample_token()).unwrap();

    let replacement = OAuth2Token::new("newer", None, "bearer", 60);
    store.save(&replacement).unwrap();

    assert_eq!(store.load().unwrap().unwrap(), replacement);
}

#[test]
fn given_corrupt_file_when_loading_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path());
    std::fs::write(store.path(), "{ not json").unwrap();

    assert!(matches!(
        store.load().unwrap_err(),
        ConfigError::ParseError { .. }
    ));
}

#[test]
fn given_stored_token_when_clearing_then_file_removed_once() {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path());
    store.save(&sample_token()).unwrap();

    assert!(store.clear().unwrap());
    assert!(!store.clear().unwrap());
    assert!(store.load().unwrap().is_none());
}

#[cfg(unix)]
#[test]
fn given_saved_token_when_inspecting_permissions_then_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path());
    store.save(&sample_token()).unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
