//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use ferry_core::config::AppConfig;
use ferry_core::traits::Clock;
use ferry_database::ShareStore;
use ferry_service::download::{UserAgentParser, WootheeParser};
use ferry_service::{DownloadService, EntryService, GuestLinkService, SettingsService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Storage surface.
    pub store: Arc<dyn ShareStore>,
    /// The single time source; handlers read it once per request.
    pub clock: Arc<dyn Clock>,

    /// Entry pages.
    pub entry_service: Arc<EntryService>,
    /// Guest link pages and management.
    pub guest_link_service: Arc<GuestLinkService>,
    /// Download history views.
    pub download_service: Arc<DownloadService>,
    /// Settings form.
    pub settings_service: Arc<SettingsService>,
}

impl AppState {
    /// Wire services on top of a store and clock.
    pub fn new(config: AppConfig, store: Arc<dyn ShareStore>, clock: Arc<dyn Clock>) -> Self {
        let parser: Arc<dyn UserAgentParser> = Arc::new(WootheeParser);

        Self {
            config: Arc::new(config),
            entry_service: Arc::new(EntryService::new(Arc::clone(&store))),
            guest_link_service: Arc::new(GuestLinkService::new(Arc::clone(&store))),
            download_service: Arc::new(DownloadService::new(Arc::clone(&store), parser)),
            settings_service: Arc::new(SettingsService::new(Arc::clone(&store))),
            store,
            clock,
        }
    }
}
