//! Route handlers organized by domain.

pub mod auth;
pub mod clipboard;
pub mod cron;
pub mod download;
pub mod file;
pub mod health;
pub mod share;
