//! One function per subcommand. Each returns the text printed on stdout.

pub mod account;
pub mod auth;

use crate::cli::Command;
use crate::error::CliError;
use crate::session::Session;

use models::GrantType;

pub async fn run(session: &Session, command: &Command) -> Result<String, CliError> {
    match command {
        Command::AuthorizeUrl {
            response_type,
            state,
        } => Ok(auth::authorize_url(
            session,
            (*response_type).into(),
            state.as_deref(),
        )),
        Command::LoginPin { pin } => {
            let token = auth::login(session, GrantType::Pin, pin).await?;
            Ok(auth::describe_login(session, &token))
        }
        Command::LoginCode { code } => {
            let token = auth::login(session, GrantType::AuthorizationCode, code).await?;
            Ok(auth::describe_login(session, &token))
        }
        Command::Refresh => {
            let token = auth::refresh(session).await?;
            Ok(auth::describe_login(session, &token))
        }
        Command::Whoami => {
            let account = account::whoami(session).await?;
            Ok(account::describe_account(&account))
        }
        Command::Logout => Ok(if auth::logout(session)? {
            "Stored token removed".to_string()
        } else {
            "No stored token".to_string()
        }),
    }
}
