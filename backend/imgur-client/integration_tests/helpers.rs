//! Test helpers for integration tests against a local wiremock server.

use imgur_client::ImgurClient;
use imgur_client::config::ClientConfig;

use models::ClientIdentity;

use std::time::Duration;

use wiremock::MockServer;

pub const CLIENT_ID: &str = "ClientId";
pub const CLIENT_SECRET: &str = "ClientSecret";

pub const TOKEN_BODY: &str = r#"{"data":{"access_token":"tok123","expires_in":3600,"token_type":"bearer","scope":null,"refresh_token":"ref456","account_id":77,"account_username":"alice"},"success":true,"status":200}"#;
pub const ACCOUNT_BODY: &str = r#"{"data":{"id":12456,"url":"Bob","bio":null,"reputation":4343,"created":1229591601},"success":true,"status":200}"#;

/// Config whose API and OAuth bases both point at `server`.
pub fn config_for(server: &MockServer) -> ClientConfig {
    config_for_uri(&server.uri())
}

/// Config whose API and OAuth bases both live under `uri` (`http://host:port`).
pub fn config_for_uri(uri: &str) -> ClientConfig {
    let identity = ClientIdentity::new(CLIENT_ID, CLIENT_SECRET).expect("valid identity");
    ClientConfig::new(identity)
        .expect("default config")
        .with_api_base_url(&format!("{uri}/3/"))
        .expect("valid api base")
        .with_oauth_base_url(&format!("{uri}/oauth2/"))
        .expect("valid oauth base")
        .with_timeout(Duration::from_secs(5))
}

/// Reqwest-backed client talking to `server`.
pub fn client_for(server: &MockServer) -> ImgurClient {
    ImgurClient::new(config_for(server)).expect("reqwest client")
}
