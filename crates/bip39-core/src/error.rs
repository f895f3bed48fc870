/// Unified error type for all mnemonic codec operations.
///
/// Covers word table lookups, 11-bit buffer access, length policy,
/// caller capacity limits, and checksum verification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Bip39Error {
    #[error("index {index} out of range (limit {limit})")]
    OutOfRange { index: usize, limit: usize },

    #[error("mnemonic not found: {0}")]
    NotFound(String),

    #[error("invalid length: {0}")]
    LengthInvalid(String),

    #[error("capacity exceeded: need {needed}, capacity {capacity}")]
    CapacityExceeded { needed: usize, capacity: usize },

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for Bip39Error {
    fn from(e: hex::FromHexError) -> Self {
        Bip39Error::InvalidHex(e.to_string())
    }
}
