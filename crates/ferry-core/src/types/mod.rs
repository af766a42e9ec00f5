//! Core type definitions used across the Ferry workspace.

pub mod id;

pub use id::*;
