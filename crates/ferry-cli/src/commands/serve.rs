//! Start the Ferry server.

use std::sync::Arc;

use clap::Args;

use ferry_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip database migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, env: &str) -> Result<(), AppError> {
    let mut config = super::load_config(env)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting Ferry server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    let store = super::connect_store(&config).await?;

    if !args.no_migrate {
        println!("Running database migrations...");
        store.migrate().await?;
        println!("  Migrations applied successfully.");
    }

    ferry_api::run_server(config, Arc::new(store)).await
}
