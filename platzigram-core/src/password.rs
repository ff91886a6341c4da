//! Password hashing for stored user records.

use sha2::{Digest, Sha256};

/// Hash a plaintext password for storage.
///
/// Deterministic and one-way: login checks recompute the hash and compare,
/// nothing ever decodes it. Output is the SHA-256 digest in lowercase hex.
pub fn hash(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}
