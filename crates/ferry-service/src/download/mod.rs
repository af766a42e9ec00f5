//! Download history: de-duplication, user-agent projection and views.

pub mod agent;
pub mod dedupe;
pub mod service;

pub use agent::{ClientInfo, UserAgentParser, WootheeParser};
pub use dedupe::{SeenClients, dedupe};
pub use service::{DownloadDisplay, DownloadService, DownloadsView, project};
