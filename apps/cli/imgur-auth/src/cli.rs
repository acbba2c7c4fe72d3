//! Command-line interface for `imgur-auth`.

use models::OAuth2ResponseType;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Log in to Imgur and manage the stored OAuth2 token.
///
/// Client credentials come from `IMGUR_CLIENT_ID` and `IMGUR_CLIENT_SECRET`,
/// optionally loaded from a `.env` file.
#[derive(Parser, Debug, Clone)]
#[command(name = "imgur-auth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding token.json
    #[arg(long, env = "IMGUR_TOKEN_DIR")]
    pub token_dir: Option<PathBuf>,

    /// Directory for imgur-auth.log
    #[arg(long, env = "IMGUR_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Echo debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the URL to open in a browser to grant access
    AuthorizeUrl {
        #[arg(long, value_enum, default_value_t = ResponseTypeArg::Pin)]
        response_type: ResponseTypeArg,

        /// Opaque value Imgur echoes back on redirect
        #[arg(long)]
        state: Option<String>,
    },

    /// Exchange the PIN shown by Imgur for a token
    LoginPin { pin: String },

    /// Exchange the `code` from the redirect URL for a token
    LoginCode { code: String },

    /// Mint a new access token from the stored refresh token
    Refresh,

    /// Show the account behind the stored token
    Whoami,

    /// Delete the stored token
    Logout,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTypeArg {
    Code,
    Pin,
    Token,
}

impl From<ResponseTypeArg> for OAuth2ResponseType {
    fn from(arg: ResponseTypeArg) -> Self {
        match arg {
            ResponseTypeArg::Code => OAuth2ResponseType::Code,
            ResponseTypeArg::Pin => OAuth2ResponseType::Pin,
            ResponseTypeArg::Token => OAuth2ResponseType::Token,
        }
    }
}
