//! Share-link verification failures.

use thiserror::Error;

use folio_core::error::AppError;

/// Why a share link was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The signature does not match the key and expiry.
    #[error("Invalid signature")]
    InvalidSignature,
    /// The expiry is not a number or has passed.
    #[error("Link expired")]
    Expired,
    /// The signed key is not valid URL-safe base64 of UTF-8 text.
    #[error("Invalid key encoding")]
    InvalidKeyEncoding,
}

impl From<LinkError> for AppError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::Expired => AppError::gone(err.to_string()),
            LinkError::InvalidSignature | LinkError::InvalidKeyEncoding => {
                AppError::forbidden(err.to_string())
            }
        }
    }
}
