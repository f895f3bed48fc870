#![deny(missing_docs)]

//! BIP-39 English mnemonics - complete SDK.
//!
//! Re-exports the codec crate and provides one-call conversions between
//! secrets, word indices, and mnemonic phrases. Every call works on its own
//! short-lived context; nothing is shared between calls or threads.

pub use bip39_core as core;
pub use bip39_core::{Bip39Error, Codec, English, Limits, Mnemonic, MnemonicContext, WordTable};

use bip39_core::hash::sha256;
use bip39_core::wordlist;

/// The mnemonic for a word index.
///
/// # Returns
/// The lowercase word, or `None` if `word > 2047`.
pub fn mnemonic_from_word(word: u16) -> Option<String> {
    wordlist::mnemonic(&English, word)
}

/// The word index of a mnemonic.
///
/// # Returns
/// The index, or `None` if `text` is not an English BIP-39 word.
pub fn word_from_mnemonic(text: &str) -> Option<u16> {
    wordlist::word_index(&English, text).ok()
}

/// Encode a secret as word indices.
///
/// # Arguments
/// * `secret` - 8 to 32 bytes, a multiple of 4.
pub fn words_from_secret(secret: &[u8]) -> Result<Vec<u16>, Bip39Error> {
    Codec::new().words_from_secret(secret)
}

/// Encode a secret as a space-separated lowercase phrase.
///
/// # Arguments
/// * `secret` - 8 to 32 bytes, a multiple of 4.
pub fn mnemonics_from_secret(secret: &[u8]) -> Result<String, Bip39Error> {
    Codec::new().mnemonics_from_secret(secret)
}

/// Resolve every word of a phrase to its index.
///
/// Fails as a whole if any token is not a word.
pub fn words_from_mnemonics(text: &str) -> Result<Vec<u16>, Bip39Error> {
    Codec::new().words_from_mnemonics(text)
}

/// Decode a phrase back to its secret, verifying the checksum.
pub fn secret_from_mnemonics(text: &str) -> Result<Vec<u8>, Bip39Error> {
    Codec::new().secret_from_mnemonics(text)
}

/// SHA-256 of the literal bytes of `text`.
///
/// A demonstration seed only; this is not a password-hardening KDF.
pub fn seed_from_string(text: &str) -> [u8; 32] {
    tracing::trace!(len = text.len(), "deriving demonstration seed");
    sha256(text.as_bytes())
}
