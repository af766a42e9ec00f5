//! Settings commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use ferry_core::error::AppError;
use ferry_entity::FileLifetime;
use ferry_service::SettingsService;
use ferry_service::settings::SettingsForm;

/// Arguments for settings commands
#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Settings subcommand
    #[command(subcommand)]
    pub command: SettingsCommand,
}

/// Settings subcommands
#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show the current settings
    Show,
    /// Set the default lifetime of owner uploads
    SetLifetime {
        /// Lifetime in days
        #[arg(long, conflicts_with = "never", required_unless_present = "never")]
        days: Option<u32>,
        /// Uploads never expire by default
        #[arg(long)]
        never: bool,
    },
}

/// Execute settings commands
pub async fn execute(
    args: &SettingsArgs,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::open_store(env).await?;
    let service = SettingsService::new(store);

    let settings = match &args.command {
        SettingsCommand::Show => service.settings().await?,
        SettingsCommand::SetLifetime { days, never } => {
            let lifetime = match (days, never) {
                (_, true) => FileLifetime::Infinite,
                (Some(days), false) => FileLifetime::from_days(*days),
                (None, false) => {
                    return Err(AppError::validation("Pass --days or --never"));
                }
            };
            let settings = service.set_default_lifetime(lifetime).await?;
            output::print_success("Default file lifetime updated");
            settings
        }
    };

    match format {
        OutputFormat::Json => output::print_json(&SettingsForm::from_settings(&settings)),
        OutputFormat::Table => {
            output::print_kv(
                "Default file lifetime",
                &settings.default_file_lifetime.friendly_name(),
            );
        }
    }

    Ok(())
}
