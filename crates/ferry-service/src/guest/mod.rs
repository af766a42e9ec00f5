//! Guest links: activity gating, upload checks, creation and listing.

pub mod form;
pub mod gate;
pub mod service;

pub use form::{GuestLinkForm, LifetimeOption};
pub use gate::{GuestUploadPage, check_upload_expiration, check_upload_size, ensure_active, evaluate};
pub use service::{CreateGuestLinkRequest, GuestLinkService, GuestLinkSummary};
