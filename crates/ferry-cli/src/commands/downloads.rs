//! Download history command.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use ferry_core::error::AppError;
use ferry_core::types::EntryId;
use ferry_service::DownloadService;
use ferry_service::download::WootheeParser;

/// Arguments for the downloads command
#[derive(Debug, Args)]
pub struct DownloadsArgs {
    /// Entry ID
    pub entry_id: String,

    /// Show only the first download per client address
    #[arg(long)]
    pub unique: bool,
}

/// Download display row
#[derive(Debug, Serialize, Tabled)]
struct DownloadRow {
    /// Display number
    #[tabled(rename = "#")]
    number: usize,
    /// Download time
    time: String,
    /// Client IP
    client_ip: String,
    /// Browser
    browser: String,
    /// Platform
    platform: String,
}

/// Execute the downloads command
pub async fn execute(
    args: &DownloadsArgs,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let entry_id = EntryId::parse(&args.entry_id)?;
    let store = super::open_store(env).await?;
    let service = DownloadService::new(store, Arc::new(WootheeParser));

    let view = service.history(&entry_id, args.unique).await?;

    let rows: Vec<DownloadRow> = view
        .downloads
        .iter()
        .map(|d| DownloadRow {
            number: d.number,
            time: d.time.format("%Y-%m-%d %H:%M:%S").to_string(),
            client_ip: d.client_ip.clone(),
            browser: d.browser.clone(),
            platform: d.platform.clone(),
        })
        .collect();

    if format == OutputFormat::Table {
        output::print_kv("File", &view.entry.filename);
        output::print_kv("Total downloads", &view.total_downloads.to_string());
    }
    output::print_list(&rows, format);

    Ok(())
}
