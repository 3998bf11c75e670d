//! Token signing
//!
//! Composes canonical serialization, URL-safe base64, and HMAC-SHA256 into
//! the two-part `<payload>.<signature>` token format. The signature covers
//! the encoded payload segment, not the raw JSON bytes, so a verifying
//! counterpart can recompute the MAC directly over the first segment.

use crate::{canonical_json, Payload, Result, UpsigError};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// A signed, URL-safe action token
///
/// Contains only characters from `[A-Za-z0-9_.-]` with a single `.`
/// separating the payload segment from the signature segment, so it can be
/// embedded in URLs and query strings without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token(String);

impl Token {
    /// Get the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token into its string form
    pub fn into_string(self) -> String {
        self.0
    }

    /// The base64url payload segment (everything before the final `.`)
    pub fn encoded_payload(&self) -> &str {
        self.0.rsplit_once('.').map(|(p, _)| p).unwrap_or(&self.0)
    }

    /// The base64url signature segment (everything after the final `.`)
    pub fn encoded_signature(&self) -> &str {
        self.0.rsplit_once('.').map(|(_, s)| s).unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reusable token signer holding the keyed MAC state
///
/// Performs the HMAC key schedule once and can sign any number of payloads.
/// Produces exactly the same tokens as the free [`sign`] function.
#[derive(Clone)]
pub struct TokenSigner {
    mac: HmacSha256,
}

impl TokenSigner {
    /// Create a signer from a shared secret
    pub fn new(secret_key: &str) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(secret_key.as_bytes())
            .map_err(|e| UpsigError::KeyEncoding(e.to_string()))?;
        Ok(TokenSigner { mac })
    }

    /// Sign a payload into a token
    pub fn sign(&self, payload: &Payload) -> Result<Token> {
        let encoded_payload = URL_SAFE_NO_PAD.encode(canonical_json(payload)?);

        let mut mac = self.mac.clone();
        mac.update(encoded_payload.as_bytes());
        let signature = mac.finalize().into_bytes();
        let encoded_signature = URL_SAFE_NO_PAD.encode(signature);

        Ok(Token(format!("{}.{}", encoded_payload, encoded_signature)))
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // key material stays out of debug output
        f.debug_struct("TokenSigner").finish_non_exhaustive()
    }
}

/// Sign a payload with a shared secret
///
/// Token format:
/// `BASE64URL_NOPAD(canonicalJSON(payload)) + "." + BASE64URL_NOPAD(HMAC_SHA256(secretKey, encodedPayload))`
pub fn sign(payload: &Payload, secret_key: &str) -> Result<Token> {
    TokenSigner::new(secret_key)?.sign(payload)
}
