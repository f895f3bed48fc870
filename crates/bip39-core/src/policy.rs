//! Buffer and length policy for the mnemonic codec.
//!
//! Fixed sizes of the working buffer and the word stream, the accepted
//! secret lengths, and the caller-side output limits a [`Codec`](crate::codec::Codec)
//! enforces before handing back a result.

use crate::Bip39Error;

/// Capacity of the payload + checksum working buffer, in bytes.
pub const BUFFER_CAPACITY: usize = 40;

/// Bits per mnemonic word.
pub const WORD_BITS: usize = 11;

/// Mask selecting the low 11 bits of a word value.
pub const WORD_MASK: u16 = 0x7FF;

/// Number of words in the table.
pub const WORD_COUNT: usize = 2048;

/// Longest mnemonic in the English table.
pub const MAX_WORD_LEN: usize = 8;

/// Whole 11-bit words that fit in the working buffer (320 bits).
pub const MAX_BUFFER_WORDS: usize = BUFFER_CAPACITY * 8 / WORD_BITS;

/// Bytes reserved after the payload for the checksum.
pub const CHECKSUM_BYTES: usize = 2;

/// Upper bound on checksum bits (two checksum bytes).
pub const MAX_CHECKSUM_BITS: usize = CHECKSUM_BYTES * 8;

/// Shortest accepted secret, in bytes.
pub const MIN_SECRET_LEN: usize = 8;
/// Longest accepted secret, in bytes.
pub const MAX_SECRET_LEN: usize = 32;
/// Accepted secret lengths are multiples of this many bytes.
pub const SECRET_LEN_STEP: usize = 4;

/// Check that a secret length is encodable: within `[8, 32]` and a multiple of 4.
///
/// # Arguments
/// * `len` - Secret length in bytes.
///
/// # Returns
/// `Ok(())` for an accepted length, `LengthInvalid` otherwise.
pub fn validate_secret_len(len: usize) -> Result<(), Bip39Error> {
    if len % SECRET_LEN_STEP != 0 {
        return Err(Bip39Error::LengthInvalid(format!(
            "secret length {} is not a multiple of {}",
            len, SECRET_LEN_STEP
        )));
    }
    if !(MIN_SECRET_LEN..=MAX_SECRET_LEN).contains(&len) {
        return Err(Bip39Error::LengthInvalid(format!(
            "secret length {} outside [{}, {}]",
            len, MIN_SECRET_LEN, MAX_SECRET_LEN
        )));
    }
    Ok(())
}

/// Check that a payload plus its checksum bytes fits in the working buffer.
pub fn validate_payload_len(len: usize) -> Result<(), Bip39Error> {
    check_capacity(len + CHECKSUM_BYTES, BUFFER_CAPACITY)
}

/// Word count for a payload byte count.
///
/// Legacy ratio kept for encoding compatibility. Exact for the accepted
/// secret lengths, not a general inverse of [`bytes_for_words`].
pub fn words_for_bytes(bytes: usize) -> usize {
    (bytes * 3 + 2) / 4
}

/// Payload byte count for a word count (legacy ratio, see [`words_for_bytes`]).
pub fn bytes_for_words(words: usize) -> usize {
    (words * WORD_BITS).saturating_sub(1) / 8
}

/// Number of checksum bits that pad `payload_bytes` to a multiple of 11 bits.
///
/// Always in `1..=11`; clamped to [`MAX_CHECKSUM_BITS`].
pub fn checksum_bits(payload_bytes: usize) -> usize {
    (WORD_BITS - (payload_bytes * 8) % WORD_BITS).min(MAX_CHECKSUM_BITS)
}

/// Fail with `CapacityExceeded` when `needed` does not fit in `capacity`.
pub fn check_capacity(needed: usize, capacity: usize) -> Result<(), Bip39Error> {
    if needed > capacity {
        return Err(Bip39Error::CapacityExceeded { needed, capacity });
    }
    Ok(())
}

/// Output limits standing in for caller-provided buffers.
///
/// Every codec result is checked against these before it is returned;
/// a result that would not fit is an error, never a truncated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of word indices in a word sequence.
    pub max_words: usize,
    /// Maximum length in bytes of a space-joined mnemonic string.
    pub max_mnemonic_len: usize,
    /// Maximum length in bytes of a decoded secret.
    pub max_secret_len: usize,
}

impl Limits {
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn with_max_mnemonic_len(mut self, max_mnemonic_len: usize) -> Self {
        self.max_mnemonic_len = max_mnemonic_len;
        self
    }

    pub fn with_max_secret_len(mut self, max_secret_len: usize) -> Self {
        self.max_secret_len = max_secret_len;
        self
    }
}

impl Default for Limits {
    /// Limits derived from the working buffer: anything the buffer can hold fits.
    fn default() -> Self {
        Limits {
            max_words: MAX_BUFFER_WORDS,
            max_mnemonic_len: MAX_BUFFER_WORDS * (MAX_WORD_LEN + 1) - 1,
            max_secret_len: BUFFER_CAPACITY,
        }
    }
}
