//! Signing and verification of share links.
//!
//! A link grants bearer access to one object key until an absolute expiry:
//! `/d/<b64url(key)>?e=<unix seconds>&s=<signature>`, where the signature is
//! the first 16 hex characters of HMAC-SHA256 over `key=<b64url(key)>&e=<e>`.
//! Links are never stored, so any number may coexist and none can be revoked
//! before expiry.

use std::sync::Arc;

use chrono::Utc;

use super::error::LinkError;
use crate::secrets::SecretProvider;
use crate::signing::{b64url_decode, b64url_encode, constant_time_eq, hmac_sha256};

/// Number of hex characters kept from the MAC (64 bits).
pub const SIGNATURE_HEX_LEN: usize = 16;

/// A signed link to one object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// URL-safe base64 of the object key, without padding.
    pub encoded_key: String,
    /// Expiry as Unix seconds.
    pub expires: i64,
    /// Truncated hex signature.
    pub signature: String,
}

impl ShareLink {
    /// Server-relative path of the download endpoint.
    pub fn path(&self) -> String {
        format!(
            "/d/{}?e={}&s={}",
            self.encoded_key, self.expires, self.signature
        )
    }

    /// Absolute URL under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Raw parts of a link as they appear in a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts<'a> {
    /// Still-encoded key segment.
    pub encoded_key: &'a str,
    /// Raw `e` parameter.
    pub expires: &'a str,
    /// Raw `s` parameter.
    pub signature: &'a str,
}

impl<'a> LinkParts<'a> {
    /// Split an absolute URL or a `/d/...` path into its parts.
    pub fn parse(link: &'a str) -> Option<Self> {
        let start = link.find("/d/")? + 3;
        let rest = &link[start..];
        let (encoded_key, query) = rest.split_once('?')?;

        let mut expires = None;
        let mut signature = None;
        for pair in query.split('&') {
            match pair.split_once('=') {
                Some(("e", value)) => expires = Some(value),
                Some(("s", value)) => signature = Some(value),
                _ => {}
            }
        }

        Some(Self {
            encoded_key,
            expires: expires?,
            signature: signature?,
        })
    }
}

/// Issues and verifies share links with the share signing secret.
#[derive(Debug, Clone)]
pub struct ShareLinkSigner {
    secrets: Arc<SecretProvider>,
}

impl ShareLinkSigner {
    /// Create a signer.
    pub fn new(secrets: Arc<SecretProvider>) -> Self {
        Self { secrets }
    }

    /// Sign a link to `key` valid for `expires_in_seconds` from now.
    pub fn generate_link(&self, key: &str, expires_in_seconds: u64) -> ShareLink {
        self.generate_link_at(key, expires_in_seconds, Utc::now().timestamp())
    }

    /// Sign a link as if the current time were `now_s` Unix seconds.
    pub fn generate_link_at(&self, key: &str, expires_in_seconds: u64, now_s: i64) -> ShareLink {
        let ttl = i64::try_from(expires_in_seconds).unwrap_or(i64::MAX);
        let expires = now_s.saturating_add(ttl);
        let encoded_key = b64url_encode(key);
        let signature = self.sign(&encoded_key, &expires.to_string());

        ShareLink {
            encoded_key,
            expires,
            signature,
        }
    }

    /// Verify a link against the current time and return the object key.
    pub fn verify_link(
        &self,
        encoded_key: &str,
        expires: &str,
        signature: &str,
    ) -> Result<String, LinkError> {
        self.verify_link_at(encoded_key, expires, signature, Utc::now().timestamp())
    }

    /// Verify a link as if the current time were `now_s` Unix seconds.
    ///
    /// The signature is checked first, over the raw still-encoded parameters,
    /// then the expiry, then the key encoding.
    pub fn verify_link_at(
        &self,
        encoded_key: &str,
        expires: &str,
        signature: &str,
        now_s: i64,
    ) -> Result<String, LinkError> {
        let expected = self.sign(encoded_key, expires);
        if !constant_time_eq(signature.as_bytes(), expected.as_bytes()) {
            return Err(LinkError::InvalidSignature);
        }

        let expires: i64 = expires.parse().map_err(|_| LinkError::Expired)?;
        if now_s > expires {
            return Err(LinkError::Expired);
        }

        let bytes = b64url_decode(encoded_key).ok_or(LinkError::InvalidKeyEncoding)?;
        String::from_utf8(bytes).map_err(|_| LinkError::InvalidKeyEncoding)
    }

    fn sign(&self, encoded_key: &str, expires: &str) -> String {
        let canonical = format!("key={encoded_key}&e={expires}");
        let mac = hmac_sha256(self.secrets.share_secret(), canonical.as_bytes());
        let mut digest = hex::encode(mac);
        digest.truncate(SIGNATURE_HEX_LEN);
        digest
    }
}
