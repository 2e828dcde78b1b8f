//! Opaque session-token generation and hashing.
//!
//! Session tokens are random strings handed to the client at login; only
//! their SHA-256 hex digest is stored server-side so a database leak does
//! not compromise active sessions.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the client; only the hash should be persisted server-side.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming bearer token against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
