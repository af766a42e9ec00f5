//! Guest link management commands.

use chrono::Utc;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use ferry_core::error::AppError;
use ferry_entity::FileLifetime;
use ferry_service::GuestLinkService;
use ferry_service::format::{format_count_limit, format_expiration, format_size_limit};
use ferry_service::guest::CreateGuestLinkRequest;

/// Arguments for guest link commands
#[derive(Debug, Args)]
pub struct GuestLinkArgs {
    /// Guest link subcommand
    #[command(subcommand)]
    pub command: GuestLinkCommand,
}

/// Guest link subcommands
#[derive(Debug, Subcommand)]
pub enum GuestLinkCommand {
    /// List guest links, newest first
    List,
    /// Create a guest link
    Create {
        /// Label shown to the owner
        #[arg(long)]
        label: Option<String>,
        /// Days until the link stops working (omit for never)
        #[arg(long)]
        expires_in_days: Option<u32>,
        /// Longest lifetime uploaders may pick, in days (omit for infinite)
        #[arg(long)]
        max_lifetime_days: Option<u32>,
        /// Per-file size limit in bytes (omit for unlimited)
        #[arg(long)]
        max_file_bytes: Option<u64>,
        /// Maximum number of uploads (omit for unlimited)
        #[arg(long)]
        max_uploads: Option<u32>,
    },
}

/// Guest link display row
#[derive(Debug, Serialize, Tabled)]
struct GuestLinkRow {
    /// Guest link ID
    id: String,
    /// Label
    label: String,
    /// State
    state: String,
    /// Link expiration
    expires: String,
    /// Max file lifetime
    max_lifetime: String,
    /// Max file size
    max_size: String,
    /// Uploads used
    uploads: String,
}

/// Execute guest link commands
pub async fn execute(
    args: &GuestLinkArgs,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::open_store(env).await?;
    let service = GuestLinkService::new(store);
    let now = Utc::now();

    match &args.command {
        GuestLinkCommand::List => {
            let links = service.list(now).await?;

            let rows: Vec<GuestLinkRow> = links
                .iter()
                .map(|s| {
                    let link = &s.guest_link;
                    GuestLinkRow {
                        id: link.id.to_string(),
                        label: link.label.clone().unwrap_or_default(),
                        state: format!("{:?}", s.state).to_lowercase(),
                        expires: format_expiration(link.url_expires, now),
                        max_lifetime: link.max_file_lifetime.friendly_name(),
                        max_size: format_size_limit(link.max_file_bytes),
                        uploads: format!(
                            "{} / {}",
                            link.files_uploaded,
                            format_count_limit(link.max_file_uploads)
                        ),
                    }
                })
                .collect();

            output::print_list(&rows, format);
        }
        GuestLinkCommand::Create {
            label,
            expires_in_days,
            max_lifetime_days,
            max_file_bytes,
            max_uploads,
        } => {
            let url_expires = expires_in_days
                .map(FileLifetime::from_days)
                .unwrap_or(FileLifetime::Infinite)
                .expiration_from(now);

            let req = CreateGuestLinkRequest {
                label: label.clone(),
                url_expires,
                max_file_lifetime: max_lifetime_days
                    .map(FileLifetime::from_days)
                    .unwrap_or(FileLifetime::Infinite),
                max_file_bytes: *max_file_bytes,
                max_file_uploads: *max_uploads,
            };

            let link = service.create(req, now).await?;

            match format {
                OutputFormat::Json => output::print_json(&link),
                OutputFormat::Table => {
                    output::print_success(&format!("Guest link {} created", link.id));
                    output::print_kv("Expires", &format_expiration(link.url_expires, now));
                    output::print_kv("Max file lifetime", &link.max_file_lifetime.friendly_name());
                    output::print_kv("Max file size", &format_size_limit(link.max_file_bytes));
                    output::print_kv("Max uploads", &format_count_limit(link.max_file_uploads));
                }
            }
        }
    }

    Ok(())
}
