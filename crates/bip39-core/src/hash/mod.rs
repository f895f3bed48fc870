//! Hash function primitives for the mnemonic codec.
//!
//! Only SHA-256 is needed: it produces the checksum bits appended to a
//! payload and the demonstration seed derived from a passphrase string.

use sha2::{Digest, Sha256};

/// Length in bytes of a SHA-256 digest.
pub const SHA256_DIGEST_LEN: usize = 32;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; SHA256_DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
