//! # ferry-api
//!
//! HTTP API layer for Ferry built on Axum.
//!
//! Exposes the upload, guest link, file and settings views as JSON, with
//! owner authentication, request logging and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
