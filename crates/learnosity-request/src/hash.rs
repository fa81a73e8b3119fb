//! Signature hashing.
//!
//! Every Learnosity signature is a SHA-256 digest over an ordered list of
//! string parts joined with a single underscore, rendered as lowercase hex.

use sha2::{Digest, Sha256};

/// Compute the hex-encoded SHA-256 digest over the given parts.
///
/// Parts are joined with `_` before hashing. The part order is significant:
/// the remote API computes the same digest over the same order, so callers
/// must not reorder or filter parts beyond the documented signing rules.
///
/// An empty slice hashes the empty string; in practice callers always append
/// at least the secret.
pub fn hash_values(parts: &[&str]) -> String {
    let joined = parts.join("_");
    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hex::encode(hasher.finalize())
}
