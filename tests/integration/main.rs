//! HTTP-level integration tests for the Folio server.
//!
//! Every test builds the full router over a temporary local object store and
//! an in-memory key-value store, then drives it with `tower::ServiceExt::oneshot`.

mod helpers;

mod auth_test;
mod clipboard_test;
mod cron_test;
mod file_test;
mod share_test;
