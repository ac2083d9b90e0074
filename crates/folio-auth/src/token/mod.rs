//! Scope session tokens: issuing, verification, login, and the auth cookie.

pub mod authenticator;
pub mod cookie;
pub mod payload;

pub use authenticator::{AuthResult, ScopeAuthenticator, TOKEN_TTL_MS};
pub use cookie::AuthCookie;
pub use payload::TokenPayload;
