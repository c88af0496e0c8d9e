//! datawizard - DataWizard data client CLI
//!
//! Every command prints JSON on stdout and exits non-zero on failure.
//! Lookups print `{"value": .., "defaulted": bool}` plus `"error"` when the
//! value is a fallback for a failed call.
//!
//! # Examples
//!
//! ```bash
//! # Register and sign in
//! datawizard auth sign-up --username alice --password pw1 --email a@x.com
//! datawizard auth sign-in --username alice --password pw1 --pretty
//!
//! # Recent output files
//! datawizard files recent --user-id <uuid> --count 4
//!
//! # Start a run and record its outcome
//! datawizard history create --user-id <uuid> --file-type CSV --prompt "sum by region" --process-type transform
//! datawizard history status --id 42 --success true --ms 850
//! ```

mod auth_commands;
mod cli;
mod commands;
mod error;
mod file_commands;
mod folder_commands;
mod history_commands;
mod logger;
mod lookup_commands;
mod output;
mod output_file_commands;
mod pref_commands;
mod stats_commands;


use crate::{
    auth_commands::AuthCommands,
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliResult},
    file_commands::FileCommands,
    folder_commands::FolderCommands,
    history_commands::HistoryCommands,
    lookup_commands::LookupCommands,
    output::{outcome_json, render},
    output_file_commands::OutputFileCommands,
    pref_commands::PrefCommands,
    stats_commands::StatsCommands,
};

use dw_auth::{Authenticator, NewAccount};
use dw_client::{DataService, Gateway};
use dw_config::Config;
use dw_core::{NewHistoryRecord, NewOutputFile};

use std::process::ExitCode;

use clap::Parser;
use log::warn;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Warning: could not read .env: {}", e);
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    let config = Config::load_from_dir(&config_dir)?;
    config.validate()?;

    logger::initialize(&config.logging, &config_dir)?;
    config.log_summary();

    let gateway = Gateway::from_config(&config)?;
    let service = DataService::new(gateway.clone(), config.defaults.clone());
    let auth = Authenticator::new(gateway);

    let value = dispatch(cli.command, &service, &auth).await?;
    println!("{}", render(&value, cli.pretty)?);

    Ok(())
}

async fn dispatch(
    command: Commands,
    service: &DataService,
    auth: &Authenticator,
) -> CliResult<Value> {
    let recent_limit = service.defaults().recent_limit;

    let value = match command {
        // Auth commands
        Commands::Auth { action } => match action {
            AuthCommands::SignIn { username, password } => {
                let user = auth.sign_in(&username, &password).await?;
                serde_json::to_value(user)?
            }
            AuthCommands::SignUp {
                username,
                password,
                email,
                full_name,
            } => {
                let mut account = NewAccount::new(username, password, email);
                if let Some(full_name) = full_name {
                    account = account.with_full_name(full_name);
                }
                let id = auth.sign_up(&account).await?;
                json!({ "id": id })
            }
        },

        // Lookups
        Commands::Files { action } => match action {
            FileCommands::Recent { user_id, count } => {
                outcome_json(
                    service
                        .recent_files(user_id, count.unwrap_or(recent_limit))
                        .await,
                )?
            }
        },
        Commands::Folders { action } => match action {
            FolderCommands::List { user_id, count } => {
                outcome_json(
                    service
                        .user_folders(user_id, count.unwrap_or(recent_limit))
                        .await,
                )?
            }
        },
        Commands::Stats { action } => match action {
            StatsCommands::FileTypes { user_id } => {
                outcome_json(service.file_type_stats(user_id).await)?
            }
        },
        Commands::Prefs { action } => match action {
            PrefCommands::Get { user_id } => outcome_json(service.preferred_format(user_id).await)?,
            PrefCommands::Set { user_id, format } => {
                service.save_preferred_format(user_id, &format).await?;
                json!({ "saved": true })
            }
        },

        // History
        Commands::History { action } => match action {
            HistoryCommands::Recent { user_id, count } => {
                outcome_json(
                    service
                        .recent_history(user_id, count.unwrap_or(recent_limit))
                        .await,
                )?
            }
            HistoryCommands::Create {
                user_id,
                file_type,
                output_format,
                prompt,
                process_type,
            } => {
                let input_file_type_id = service.file_type_id(&file_type).await?;
                let format_name = match output_format {
                    Some(name) => name,
                    None => service.preferred_format(user_id).await.into_value(),
                };

                let format = service.output_format_id(&format_name).await;
                if let Some(e) = format.error() {
                    warn!("Using default output format id for '{}': {}", format_name, e);
                }

                let record = NewHistoryRecord::new(
                    user_id,
                    input_file_type_id,
                    format.into_value(),
                    prompt,
                    process_type,
                );
                let id = service.create_history(&record).await?;
                json!({ "id": id })
            }
            HistoryCommands::Timing { id, ms } => {
                service.update_history_timing(id, ms).await?;
                json!({ "updated": true })
            }
            HistoryCommands::Status { id, success, ms } => {
                service.update_history_status(id, success, ms).await?;
                json!({ "updated": true })
            }
        },

        Commands::OutputFile { action } => match action {
            OutputFileCommands::Log {
                history_id,
                name,
                path,
                size,
            } => {
                let file = NewOutputFile::new(history_id, name, path, size);
                service.log_output_file(&file).await?;
                json!({ "logged": true })
            }
        },

        Commands::Lookup { action } => match action {
            LookupCommands::FileType { name } => {
                let id = service.file_type_id(&name).await?;
                json!({ "name": name, "id": id })
            }
            LookupCommands::OutputFormat { name } => {
                outcome_json(service.output_format_id(&name).await)?
            }
        },
    };

    Ok(value)
}
