use imgur_auth::cli::Cli;
use imgur_auth::commands;
use imgur_auth::error::CliError;
use imgur_auth::logger::initialize as LoggerInitialize;
use imgur_auth::session::Session;

use imgur_client::config::{ClientConfig, TokenStore};

use std::fs::create_dir_all;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, error, info};

const LOG_DIR_NAME: &str = "imgur-auth";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let log_dir = match cli.log_dir {
        Some(dir) => dir,
        None => default_log_dir()?,
    };
    create_dir_all(&log_dir).map_err(|e| {
        CliError::imgur_auth(format!(
            "Failed to create log directory {}: {e}",
            log_dir.display()
        ))
    })?;

    let console_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    LoggerInitialize(&log_dir, console_level)?;

    info!("imgur-auth starting");
    info!("Log directory: {}", log_dir.display());

    let store = match cli.token_dir {
        Some(dir) => TokenStore::new(dir),
        None => TokenStore::default_location()?,
    };
    let config = ClientConfig::from_env()?;
    let session = Session::open(config, store)?;

    commands::run(&session, &cli.command).await
}

fn default_log_dir() -> Result<PathBuf, CliError> {
    dirs::cache_dir()
        .map(|dir| dir.join(LOG_DIR_NAME))
        .ok_or_else(|| CliError::imgur_auth("Could not determine a cache directory for logs"))
}
