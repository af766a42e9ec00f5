//! HTTP request handlers.

pub mod file;
pub mod guest;
pub mod guest_link;
pub mod health;
pub mod settings;
pub mod upload;
