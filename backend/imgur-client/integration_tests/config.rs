use imgur_client::config::{
    API_BASE_URL_ENV, CLIENT_ID_ENV, CLIENT_SECRET_ENV, ClientConfig, OAUTH_BASE_URL_ENV,
    TIMEOUT_SECS_ENV,
};
use imgur_client::error::ConfigError;

use std::env;
use std::time::Duration;

use serial_test::serial;

const ALL_VARS: [&str; 5] = [
    CLIENT_ID_ENV,
    CLIENT_SECRET_ENV,
    API_BASE_URL_ENV,
    OAUTH_BASE_URL_ENV,
    TIMEOUT_SECS_ENV,
];

/// Sets the given variables for the duration of `test`, clearing the rest.
fn with_env(vars: &[(&str, &str)], test: impl FnOnce()) {
    // SAFETY: every test touching the process environment is #[serial].
    unsafe {
        for name in ALL_VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }
    }

    test();

    unsafe {
        for name in ALL_VARS {
            env::remove_var(name);
        }
    }
}

#[test]
#[serial]
fn given_environment_variables_when_loading_from_env_then_config_reflects_them() {
    with_env(
        &[
            (CLIENT_ID_ENV, "env-client"),
            (CLIENT_SECRET_ENV, "env-secret"),
            (API_BASE_URL_ENV, "http://localhost:4010/3"),
            (TIMEOUT_SECS_ENV, "7"),
        ],
        || {
            let config = ClientConfig::from_env().unwrap();

            assert_eq!(config.identity.id(), "env-client");
            assert_eq!(config.api_base_url.as_str(), "http://localhost:4010/3/");
            assert_eq!(config.oauth_base_url.as_str(), "https://api.imgur.com/oauth2/");
            assert_eq!(config.timeout, Duration::from_secs(7));
        },
    );
}

#[test]
#[serial]
fn given_no_client_secret_when_loading_from_env_then_missing_env_error() {
    with_env(&[(CLIENT_ID_ENV, "env-client")], || {
        let error = ClientConfig::from_env().unwrap_err();

        assert!(matches!(
            error,
            ConfigError::MissingEnv {
                name: CLIENT_SECRET_ENV,
                ..
            }
        ));
        assert!(error.to_string().contains("IMGUR_CLIENT_SECRET"));
    });
}
