//! Ferry Server: self-hosted file sharing with guest upload links.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use ferry_core::config::AppConfig;
use ferry_core::error::AppError;
use ferry_database::PgStore;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `FERRY_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FERRY_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Ferry v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let store = PgStore::connect(&config.database).await?;
    store.migrate().await?;

    let store = Arc::new(store);
    ferry_api::run_server(config, store).await?;

    tracing::info!("Ferry server shut down gracefully");
    Ok(())
}
