//! Custom Axum extractors.

pub mod auth;
pub mod path;

pub use auth::OwnerAuth;
pub use path::{parse_entry_id, parse_guest_link_id};
