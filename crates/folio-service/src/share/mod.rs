//! Share-link minting for authenticated clients.

pub mod service;

pub use service::{RefreshedUrl, ShareService};
