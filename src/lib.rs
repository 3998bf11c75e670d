//! Signed upload tokens from structured payloads and a shared secret
//!
//! Produces a compact, URL-safe `<payload>.<signature>` token that
//! authorizes a single client-initiated action (such as an upload) without
//! server-side session state. The payload is canonically serialized to
//! compact JSON in insertion order, base64url-encoded without padding, and
//! signed with HMAC-SHA256 over the encoded payload segment.

pub mod canonical;
pub mod error;
pub mod token;
pub mod value;

pub use canonical::*;
pub use error::*;
pub use token::*;
pub use value::*;

/// Result type alias for upsig operations
pub type Result<T> = std::result::Result<T, UpsigError>;
