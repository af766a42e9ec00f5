//! # ferry-database
//!
//! PostgreSQL connection management, per-entity repositories, and the
//! [`ShareStore`] storage surface consumed by the service layer. An
//! in-memory implementation backs tests and local experiments.

mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

pub use memory::MemoryStore;
pub use store::{PgStore, ShareStore};
