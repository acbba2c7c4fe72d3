use crate::error::CliError;
use crate::session::Session;

use models::{GrantType, OAuth2ResponseType, OAuth2Token};

use log::{error, info};

pub fn authorize_url(
    session: &Session,
    response_type: OAuth2ResponseType,
    state: Option<&str>,
) -> String {
    session
        .client()
        .oauth2()
        .authorization_url(response_type, state)
}

/// Run `grant` and persist the resulting token.
///
/// # Errors
///
/// * `CliError::Core` - the exchange failed or the token could not be saved
pub async fn login(
    session: &Session,
    grant: GrantType,
    input: &str,
) -> Result<OAuth2Token, CliError> {
    let token = session
        .client()
        .oauth2()
        .exchange(grant, input)
        .await
        .inspect_err(|e| error!("Login failed (grant_type={grant}): {e}"))?;

    session.store().save(&token)?;
    Ok(token)
}

/// Refresh the restored token and persist the replacement.
pub async fn refresh(session: &Session) -> Result<OAuth2Token, CliError> {
    if session.client().credentials().token().is_none() {
        return Err(CliError::not_logged_in(
            "No stored token; run login-pin or login-code",
        ));
    }

    let token = session.client().oauth2().refresh().await?;

    session.store().save(&token)?;
    info!("Token refreshed, expires at {}", token.expires_at);
    Ok(token)
}

/// Forget the token both in memory and on disk.
pub fn logout(session: &Session) -> Result<bool, CliError> {
    session.client().credentials().clear_token();
    Ok(session.store().clear()?)
}

pub fn describe_login(session: &Session, token: &OAuth2Token) -> String {
    let account = match (&token.account_username, token.account_id) {
        (Some(username), Some(id)) => format!("{username} (account {id})"),
        (Some(username), None) => username.clone(),
        _ => "unknown account".to_string(),
    };

    format!(
        "Logged in as {account}; token expires at {expires} and was saved to {path}",
        expires = token.expires_at.format("%Y-%m-%d %H:%M:%S UTC"),
        path = session.store().path().display(),
    )
}
