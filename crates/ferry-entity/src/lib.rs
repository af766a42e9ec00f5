//! # ferry-entity
//!
//! Domain value types and records for Ferry. Lifetimes and expiration
//! times are modelled as tagged variants so the "infinite" and "never"
//! sentinels take part in ordering and arithmetic without null checks.

pub mod download;
pub mod entry;
pub mod guest_link;
pub mod lifetime;
pub mod settings;

pub use download::DownloadRecord;
pub use entry::{FileSize, UploadMetadata};
pub use guest_link::{
    CreateGuestLink, GuestLink, GuestLinkState, UploadCountLimit, UploadSizeLimit,
};
pub use lifetime::{DAYS_PER_YEAR, ExpirationTime, FileLifetime, MAX_LIFETIME_DAYS};
pub use settings::Settings;
