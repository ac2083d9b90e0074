//! Time-limited signed download links.

pub mod duration;
pub mod error;
pub mod signer;

pub use duration::ShareDuration;
pub use error::LinkError;
pub use signer::{LinkParts, SIGNATURE_HEX_LEN, ShareLink, ShareLinkSigner};
