//! # folio-auth
//!
//! Stateless capability primitives for Folio.
//!
//! ## Modules
//!
//! - `scope`: the closed set of password-protected areas
//! - `secrets`: signing secrets and scope passwords injected from configuration
//! - `signing`: HMAC-SHA256 and URL-safe base64 helpers shared by both primitives
//! - `token`: scope session tokens, login, and the auth cookie
//! - `link`: time-limited signed download links

pub mod link;
pub mod scope;
pub mod secrets;
pub mod signing;
pub mod token;

pub use link::{LinkError, LinkParts, ShareDuration, ShareLink, ShareLinkSigner};
pub use scope::AuthScope;
pub use secrets::SecretProvider;
pub use token::{AuthCookie, AuthResult, ScopeAuthenticator, TokenPayload};
