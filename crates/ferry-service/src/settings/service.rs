//! Settings service and the default-lifetime form.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use ferry_core::error::AppError;
use ferry_core::result::AppResult;
use ferry_database::ShareStore;
use ferry_entity::{DAYS_PER_YEAR, FileLifetime, Settings};

/// Value shown when the default lifetime is infinite.
const NEVER_PLACEHOLDER_DAYS: u32 = 30;

/// Unit of the default-lifetime form value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifetimeUnit {
    /// Value is in days.
    Days,
    /// Value is in 365-day years.
    Years,
}

/// The default-lifetime form, used both to display and to submit settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsForm {
    /// Uploads default to never expiring.
    #[serde(default)]
    pub never_expire: bool,
    /// Lifetime amount in `unit`s.
    pub value: u32,
    /// Unit of `value`.
    pub unit: LifetimeUnit,
}

impl SettingsForm {
    /// Present stored settings, preferring years on an exact year boundary.
    pub fn from_settings(settings: &Settings) -> Self {
        let lifetime = settings.default_file_lifetime;
        match (lifetime.days(), lifetime.years()) {
            (None, _) => Self {
                never_expire: true,
                value: NEVER_PLACEHOLDER_DAYS,
                unit: LifetimeUnit::Days,
            },
            (Some(_), Some(years)) => Self {
                never_expire: false,
                value: years,
                unit: LifetimeUnit::Years,
            },
            (Some(days), None) => Self {
                never_expire: false,
                value: days,
                unit: LifetimeUnit::Days,
            },
        }
    }

    /// Convert a submitted form into a lifetime.
    pub fn to_lifetime(&self) -> AppResult<FileLifetime> {
        if self.never_expire {
            return Ok(FileLifetime::Infinite);
        }
        if self.value == 0 {
            return Err(AppError::validation(
                "Default file lifetime must be at least one day",
            ));
        }
        let lifetime = match self.unit {
            LifetimeUnit::Days => FileLifetime::from_days(self.value),
            LifetimeUnit::Years => self
                .value
                .checked_mul(DAYS_PER_YEAR)
                .map(FileLifetime::from_days)
                .ok_or_else(|| AppError::validation("Default file lifetime is too large"))?,
        };
        lifetime
            .check_configurable()
            .map_err(|reason| AppError::validation(format!("Default file {reason}")))?;
        Ok(lifetime)
    }
}

/// Reads and updates administrator settings.
#[derive(Debug, Clone)]
pub struct SettingsService {
    /// Storage surface.
    store: Arc<dyn ShareStore>,
}

impl SettingsService {
    /// Creates a new settings service.
    pub fn new(store: Arc<dyn ShareStore>) -> Self {
        Self { store }
    }

    /// Reads the current settings.
    pub async fn settings(&self) -> AppResult<Settings> {
        self.store.read_settings().await
    }

    /// Builds the settings form from the current settings.
    pub async fn form(&self) -> AppResult<SettingsForm> {
        Ok(SettingsForm::from_settings(&self.settings().await?))
    }

    /// Applies a submitted settings form.
    pub async fn update(&self, form: SettingsForm) -> AppResult<Settings> {
        let lifetime = form.to_lifetime()?;
        self.set_default_lifetime(lifetime).await
    }

    /// Stores a new default lifetime for owner uploads.
    pub async fn set_default_lifetime(&self, lifetime: FileLifetime) -> AppResult<Settings> {
        lifetime
            .check_configurable()
            .map_err(|reason| AppError::validation(format!("Default file {reason}")))?;

        let settings = Settings {
            default_file_lifetime: lifetime,
        };
        self.store.update_settings(&settings).await?;

        info!(default_file_lifetime = %lifetime, "Default file lifetime changed");
        Ok(settings)
    }
}
