//! Administrator settings.

use serde::{Deserialize, Serialize};

use crate::lifetime::FileLifetime;

/// Lifetime applied to owner uploads when no settings row exists yet.
pub const DEFAULT_FILE_LIFETIME: FileLifetime = FileLifetime::from_days(30);

/// Singleton, persisted server settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Lifetime that non-guest uploads default to.
    pub default_file_lifetime: FileLifetime,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_file_lifetime: DEFAULT_FILE_LIFETIME,
        }
    }
}
