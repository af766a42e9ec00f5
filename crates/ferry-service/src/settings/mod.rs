//! Administrator settings.

pub mod service;

pub use service::{LifetimeUnit, SettingsForm, SettingsService};
