//! # ferry-service
//!
//! The policy engine behind Ferry's pages: the lifetime catalog and
//! expiration option resolver, the guest link gate, download
//! de-duplication, and the services that assemble view models from the
//! storage surface.
//!
//! Every time-dependent function takes `now` explicitly.

pub mod download;
pub mod entry;
pub mod expiration;
pub mod format;
pub mod guest;
pub mod settings;

pub use download::DownloadService;
pub use entry::EntryService;
pub use guest::GuestLinkService;
pub use settings::SettingsService;
