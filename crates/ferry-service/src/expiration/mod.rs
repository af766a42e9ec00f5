//! Lifetime presets and the expiration option resolver.

pub mod catalog;
pub mod resolver;

pub use catalog::LIFETIME_CATALOG;
pub use resolver::{ExpirationOption, guest_options, owner_options, resolve_options};
