//! Entry pages: the file index, file information and the owner upload form.

pub mod service;

pub use service::{EntryInfo, EntryService, UploadPage};
