//! CLI command definitions and dispatch.

pub mod downloads;
pub mod guest_link;
pub mod migrate;
pub mod serve;
pub mod settings;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::output::OutputFormat;
use ferry_core::config::AppConfig;
use ferry_core::error::AppError;
use ferry_database::PgStore;

/// Ferry: self-hosted file sharing with guest upload links
#[derive(Debug, Parser)]
#[command(name = "ferry", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Ferry server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Guest link management
    GuestLink(guest_link::GuestLinkArgs),
    /// Settings management
    Settings(settings::SettingsArgs),
    /// Show an entry's download history
    Downloads(downloads::DownloadsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::GuestLink(args) => guest_link::execute(args, &self.env, self.format).await,
            Commands::Settings(args) => settings::execute(args, &self.env, self.format).await,
            Commands::Downloads(args) => downloads::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for an environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: connect the PostgreSQL store described by `config`
pub async fn connect_store(config: &AppConfig) -> Result<PgStore, AppError> {
    debug!(max_connections = config.database.max_connections, "Connecting store");
    PgStore::connect(&config.database).await
}

/// Helper: open the PostgreSQL store for an environment
pub async fn open_store(env: &str) -> Result<Arc<PgStore>, AppError> {
    let config = load_config(env)?;
    Ok(Arc::new(connect_store(&config).await?))
}
