//! Download log records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One append-only entry in an upload's download history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DownloadRecord {
    /// When the download happened.
    pub time: DateTime<Utc>,
    /// Network address of the downloading client.
    pub client_ip: String,
    /// Raw `User-Agent` header value.
    pub user_agent: String,
}

impl DownloadRecord {
    /// Create a new download record.
    pub fn new(
        time: DateTime<Utc>,
        client_ip: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            time,
            client_ip: client_ip.into(),
            user_agent: user_agent.into(),
        }
    }
}
