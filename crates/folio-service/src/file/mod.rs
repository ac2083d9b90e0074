//! Object listing, upload, deletion, and signed downloads.

pub mod download;
pub mod service;

pub use download::{DownloadResult, DownloadService};
pub use service::{FileItem, FileService};
