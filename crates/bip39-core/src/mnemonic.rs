//! Checksummed English mnemonic phrase.
//!
//! A `Mnemonic` can only be built from entropy or from a phrase whose
//! checksum verifies, so every value converts back to its entropy.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use crate::codec::Codec;
use crate::policy::{bytes_for_words, validate_secret_len, MAX_SECRET_LEN};
use crate::wordlist::{self, English};
use crate::Bip39Error;

/// A validated sequence of English word indices.
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic {
    words: Vec<u16>,
}

impl Mnemonic {
    /// Encode entropy as a mnemonic.
    ///
    /// # Arguments
    /// * `entropy` - 8 to 32 bytes, a multiple of 4.
    ///
    /// # Returns
    /// The mnemonic, or `LengthInvalid` for a rejected length.
    pub fn from_entropy(entropy: &[u8]) -> Result<Self, Bip39Error> {
        let words = Codec::new().words_from_secret(entropy)?;
        Ok(Mnemonic { words })
    }

    /// Encode hex-encoded entropy as a mnemonic.
    ///
    /// # Arguments
    /// * `hex_str` - 16 to 64 hex characters, a multiple of 8.
    ///
    /// # Returns
    /// The mnemonic, `InvalidHex` if the string does not decode, or
    /// `LengthInvalid` for a rejected length.
    pub fn from_hex(hex_str: &str) -> Result<Self, Bip39Error> {
        let entropy = Zeroizing::new(hex::decode(hex_str)?);
        Self::from_entropy(&entropy)
    }

    /// Generate a mnemonic from `len` bytes of OS randomness.
    pub fn generate(len: usize) -> Result<Self, Bip39Error> {
        validate_secret_len(len)?;
        let mut entropy = Zeroizing::new([0u8; MAX_SECRET_LEN]);
        OsRng.fill_bytes(&mut entropy[..len]);
        Self::from_entropy(&entropy[..len])
    }

    /// Parse a phrase, verifying every word and the checksum.
    ///
    /// Only phrases encoding 8 to 32 bytes (a multiple of 4) are accepted,
    /// the same lengths as [`from_entropy`](Self::from_entropy). Separators
    /// between words are not validated; see [`Codec::words_from_mnemonics`].
    pub fn parse(phrase: &str) -> Result<Self, Bip39Error> {
        let codec = Codec::new();
        let words = codec.words_from_mnemonics(phrase)?;
        validate_secret_len(bytes_for_words(words.len()))?;
        // Decoding verifies the checksum; the entropy itself is not kept.
        let _entropy = Zeroizing::new(codec.secret_from_words(&words)?);
        Ok(Mnemonic { words })
    }

    /// Recover the entropy.
    pub fn to_entropy(&self) -> Result<Vec<u8>, Bip39Error> {
        Codec::new().secret_from_words(&self.words)
    }

    pub fn words(&self) -> &[u16] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The mnemonic strings, in order.
    pub fn word_strings(&self) -> impl Iterator<Item = String> + '_ {
        self.words.iter().filter_map(|w| wordlist::mnemonic(&English, *w))
    }
}

/// Display as the space-separated lowercase phrase.
impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.word_strings().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            f.write_str(&word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Mnemonic {
    // The phrase is the secret.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic").field("word_count", &self.words.len()).finish_non_exhaustive()
    }
}

/// Parse a phrase into a Mnemonic.
///
/// Equivalent to `Mnemonic::parse`.
impl FromStr for Mnemonic {
    type Err = Bip39Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mnemonic::parse(s)
    }
}

/// Serialize as the phrase string.
impl Serialize for Mnemonic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserialize from a phrase string, verifying the checksum.
impl<'de> Deserialize<'de> for Mnemonic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = Zeroizing::new(String::deserialize(deserializer)?);
        Mnemonic::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "legal winner thank year wave sausage worth useful legal winner thank yellow";

    #[test]
    fn test_from_entropy_display() {
        let m = Mnemonic::from_entropy(&[0x7f; 16]).unwrap();
        assert_eq!(m.word_count(), 12);
        assert_eq!(m.to_string(), PHRASE);
        assert_eq!(m.to_entropy().unwrap(), vec![0x7f; 16]);
    }

    #[test]
    fn test_parse() {
        let m: Mnemonic = PHRASE.parse().unwrap();
        assert_eq!(m.words()[0], 1019);
        assert_eq!(m, Mnemonic::from_entropy(&[0x7f; 16]).unwrap());
        assert_eq!(
            Mnemonic::parse("legal winner thank year wave sausage worth useful legal winner thank zoo"),
            Err(Bip39Error::ChecksumMismatch)
        );
    }

    #[test]
    fn test_from_hex() {
        let m = Mnemonic::from_hex("7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f").unwrap();
        assert_eq!(m.to_string(), PHRASE);
        assert!(matches!(Mnemonic::from_hex("7f7g"), Err(Bip39Error::InvalidHex(_))));
        assert!(matches!(Mnemonic::from_hex("7f7f7f7"), Err(Bip39Error::InvalidHex(_))));
        assert!(matches!(Mnemonic::from_hex("7f7f7f7f7f"), Err(Bip39Error::LengthInvalid(_))));
    }

    #[test]
    fn test_generate() {
        for len in [8, 16, 32] {
            let m = Mnemonic::generate(len).unwrap();
            assert_eq!(m.word_count(), (len * 3 + 2) / 4);
            assert_eq!(m.to_entropy().unwrap().len(), len);
            assert_eq!(Mnemonic::parse(&m.to_string()).unwrap(), m);
        }
        assert!(Mnemonic::generate(17).is_err());
    }

    #[test]
    fn test_debug_hides_phrase() {
        let m = Mnemonic::from_entropy(&[0x7f; 16]).unwrap();
        let debug = format!("{:?}", m);
        assert!(!debug.contains("legal"));
        assert!(debug.contains("12"));
    }

    #[test]
    fn test_parse_rejects_unsupported_lengths() {
        // Valid words with a valid 3-bit checksum, but only one secret byte.
        assert!(Codec::new().secret_from_mnemonics("about").is_ok());
        assert!(matches!(Mnemonic::parse("about"), Err(Bip39Error::LengthInvalid(_))));
        assert!(matches!("about".parse::<Mnemonic>(), Err(Bip39Error::LengthInvalid(_))));
        assert!(serde_json::from_str::<Mnemonic>("\"about\"").is_err());

        // 13 words decode to 17 bytes.
        let thirteen = vec!["abandon"; 13].join(" ");
        assert!(matches!(Mnemonic::parse(&thirteen), Err(Bip39Error::LengthInvalid(_))));
    }

    #[test]
    fn test_parse_accepts_every_entropy_length() {
        for len in (8..=32).step_by(4) {
            let m = Mnemonic::from_entropy(&vec![0x5a; len]).unwrap();
            let parsed = Mnemonic::parse(&m.to_string()).unwrap();
            assert_eq!(Mnemonic::from_entropy(&parsed.to_entropy().unwrap()).unwrap(), m);
        }
    }

    #[test]
    fn test_serde_json() {
        let m = Mnemonic::from_entropy(&[0x7f; 16]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, format!("\"{}\"", PHRASE));
        let back: Mnemonic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<Mnemonic>("\"zzz yyy\"").is_err());
    }
}
