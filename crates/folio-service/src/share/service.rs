//! Share-link service.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use folio_auth::link::{ShareDuration, ShareLink, ShareLinkSigner};
use folio_core::error::AppError;

/// Lifetime of the links attached to file listings (24 hours).
pub const LISTING_LINK_SECONDS: u64 = 86_400;

/// A fresh link for one key.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshedUrl {
    /// Object key.
    pub key: String,
    /// Download path.
    pub url: String,
    /// Always `true`; signing cannot fail.
    pub success: bool,
}

/// Mints share links for object keys.
#[derive(Debug, Clone)]
pub struct ShareService {
    signer: Arc<ShareLinkSigner>,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(signer: Arc<ShareLinkSigner>) -> Self {
        Self { signer }
    }

    /// Mint a link to `key` for a duration chosen from the menu.
    pub fn create_link(&self, key: &str, duration: &str) -> Result<ShareLink, AppError> {
        if key.is_empty() || duration.is_empty() {
            return Err(AppError::validation("Missing key or duration"));
        }
        let duration: ShareDuration = duration.parse()?;
        let link = self.signer.generate_link(key, duration.as_secs());

        info!(key, %duration, expires = link.expires, "Created share link");
        Ok(link)
    }

    /// Path of a 24-hour link, as attached to listings and uploads.
    pub fn listing_url(&self, key: &str) -> String {
        self.signer.generate_link(key, LISTING_LINK_SECONDS).path()
    }

    /// Mint a fresh 24-hour link for each key.
    pub fn refresh_urls(&self, keys: &[String]) -> Vec<RefreshedUrl> {
        keys.iter()
            .map(|key| RefreshedUrl {
                key: key.clone(),
                url: self.listing_url(key),
                success: true,
            })
            .collect()
    }
}
