//! chat - local account store CLI
//!
//! # Examples
//!
//! ```bash
//! chat signup --first-name Ada --last-name Lovelace --email ada@example.com \
//!     --password secret --birthdate 1815-12-10 --calling-code 44 --phone 7700900123
//! chat login --email ada@example.com --password secret
//! chat profile --pretty
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use chat_cli::{CliResult, Response, SignUpForm, list_accounts, logger, login, profile, sign_up};
use chat_config::Config;
use chat_store::{AccountStore, FileStorage};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let storage_dir = match cli.data_dir {
        Some(dir) => dir,
        None => match config.storage_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    info!("Account storage: {}", storage_dir.display());
    let store = AccountStore::new(FileStorage::new(storage_dir));

    match store.backup_if_corrupted().await {
        Ok(Some(backup)) => eprintln!(
            "Warning: stored accounts could not be read and were moved to {}",
            backup.display()
        ),
        Ok(None) => {}
        Err(e) => warn!("Could not check stored accounts: {e}"),
    }
    let default_avatar_uri = config.accounts.default_avatar_uri.as_str();

    let response: Response = match cli.command {
        Commands::Signup {
            first_name,
            last_name,
            email,
            password,
            birthdate,
            calling_code,
            phone,
            avatar_uri,
        } => {
            let form = SignUpForm {
                first_name,
                last_name,
                email,
                password,
                birthdate,
                calling_code,
                phone,
                avatar_uri,
            };
            sign_up(&store, form, default_avatar_uri).await
        }
        Commands::Login { email, password } => login(&store, &email, &password).await,
        Commands::Profile => profile(&store, default_avatar_uri).await,
        Commands::List => list_accounts(&store, default_avatar_uri).await,
    };

    println!("{}", response.render(cli.pretty));

    if response.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Load, validate and apply logging configuration.
fn load_config() -> CliResult<Config> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.logging.file.as_ref().map(PathBuf::from);
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    Ok(config)
}
