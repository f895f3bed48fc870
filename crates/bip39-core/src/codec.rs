//! Secret ⇄ word sequence ⇄ mnemonic string conversions.
//!
//! Each operation builds a fresh [`MnemonicContext`], runs the pipeline, and
//! drops the context (zeroizing it) on every return path. Failures are whole:
//! either the complete artifact is produced or an error is returned.

use tracing::debug;

use crate::context::MnemonicContext;
use crate::policy::{check_capacity, validate_secret_len, Limits, MAX_BUFFER_WORDS};
use crate::wordlist::{self, English, WordTable};
use crate::Bip39Error;

/// Mnemonic encoder/decoder over a word table, bounded by output [`Limits`].
#[derive(Debug, Clone, Default)]
pub struct Codec<T: WordTable + Clone = English> {
    table: T,
    limits: Limits,
}

impl Codec<English> {
    /// English table with buffer-derived limits.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: WordTable + Clone> Codec<T> {
    pub fn with_table(table: T) -> Self {
        Codec { table, limits: Limits::default() }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Encode a secret as 11-bit word indices, checksum included.
    ///
    /// # Arguments
    /// * `secret` - 8 to 32 bytes, a multiple of 4.
    ///
    /// # Returns
    /// `(len * 3 + 2) / 4` word indices, `LengthInvalid` for a rejected
    /// length, or `CapacityExceeded` if the words exceed `max_words`.
    pub fn words_from_secret(&self, secret: &[u8]) -> Result<Vec<u16>, Bip39Error> {
        validate_secret_len(secret.len()).inspect_err(|_| {
            debug!(secret_len = secret.len(), "rejected secret length");
        })?;

        let mut ctx = MnemonicContext::with_table(self.table.clone());
        ctx.set_payload(secret)?;
        check_capacity(ctx.word_count(), self.limits.max_words)?;
        ctx.words()
    }

    /// Encode a secret as a space-separated mnemonic string.
    ///
    /// # Returns
    /// The lowercase phrase, or an error if the secret is rejected or the
    /// phrase exceeds `max_mnemonic_len`.
    pub fn mnemonics_from_secret(&self, secret: &[u8]) -> Result<String, Bip39Error> {
        let words = self.words_from_secret(secret)?;
        let phrase = self.join_words(&words)?;
        check_capacity(phrase.len(), self.limits.max_mnemonic_len).inspect_err(|_| {
            debug!(
                phrase_len = phrase.len(),
                max = self.limits.max_mnemonic_len,
                "mnemonic exceeds output limit"
            );
        })?;
        Ok(phrase)
    }

    /// Resolve every mnemonic in `text` to its word index.
    ///
    /// Tokens are runs of `a`-`z`; anything else only separates tokens.
    ///
    /// # Returns
    /// The indices in input order, `NotFound` if any token is not a word,
    /// `LengthInvalid` if there are no tokens, or `CapacityExceeded` past
    /// `max_words`.
    pub fn words_from_mnemonics(&self, text: &str) -> Result<Vec<u16>, Bip39Error> {
        let mut words = Vec::new();
        for token in tokens(text) {
            if words.len() == self.limits.max_words {
                debug!(max = self.limits.max_words, "mnemonic exceeds word limit");
                return Err(Bip39Error::CapacityExceeded {
                    needed: words.len() + 1,
                    capacity: self.limits.max_words,
                });
            }
            let word = wordlist::word_index(&self.table, token).inspect_err(|_| {
                debug!(position = words.len(), token_len = token.len(), "unknown mnemonic token");
            })?;
            words.push(word);
        }
        if words.is_empty() {
            return Err(Bip39Error::LengthInvalid("no mnemonic words".to_string()));
        }
        Ok(words)
    }

    /// Decode a mnemonic string back to the secret, verifying its checksum.
    ///
    /// # Returns
    /// The secret bytes; `ChecksumMismatch` if verification fails,
    /// `CapacityExceeded` if the words or the secret do not fit, or any
    /// error from [`words_from_mnemonics`](Self::words_from_mnemonics).
    pub fn secret_from_mnemonics(&self, text: &str) -> Result<Vec<u8>, Bip39Error> {
        let words = self.words_from_mnemonics(text)?;
        self.secret_from_words(&words)
    }

    /// Decode word indices back to the secret, verifying the checksum.
    pub fn secret_from_words(&self, words: &[u16]) -> Result<Vec<u8>, Bip39Error> {
        if words.is_empty() {
            return Err(Bip39Error::LengthInvalid("no mnemonic words".to_string()));
        }
        check_capacity(words.len(), MAX_BUFFER_WORDS)?;

        let mut ctx = MnemonicContext::with_table(self.table.clone());
        ctx.set_word_count(words.len());
        for (n, word) in words.iter().enumerate() {
            ctx.set_word(n, *word)?;
        }

        let secret_len = ctx.byte_count();
        check_capacity(secret_len, self.limits.max_secret_len)?;
        if !ctx.verify_checksum() {
            debug!(word_count = words.len(), secret_len, "mnemonic checksum mismatch");
            return Err(Bip39Error::ChecksumMismatch);
        }
        Ok(ctx.payload().to_vec())
    }

    /// Join word indices into a space-separated phrase.
    pub fn join_words(&self, words: &[u16]) -> Result<String, Bip39Error> {
        let mut phrase = String::with_capacity(words.len() * 9);
        let mut word = String::new();
        for (i, index) in words.iter().enumerate() {
            wordlist::load_mnemonic(&self.table, *index, &mut word)?;
            if i != 0 {
                phrase.push(' ');
            }
            phrase.push_str(&word);
        }
        Ok(phrase)
    }
}

/// Maximal runs of lowercase ASCII letters.
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_lowercase()).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> Codec {
        Codec::new()
    }

    #[test]
    fn test_words_from_secret_vector() {
        let secret = hex::decode("baadf00dbaadf00d").unwrap();
        assert_eq!(codec().words_from_secret(&secret).unwrap(), vec![1493, 892, 27, 938, 1784, 55]);
    }

    #[test]
    fn test_mnemonics_from_secret_vectors() {
        let cases = [
            ("baadf00dbaadf00d", "rival hurdle address inspire tenant alone"),
            (
                "baadf00dbaadf00dbaadf00dbaadf00d",
                "rival hurdle address inspire tenant almost turkey safe asset step lab boy",
            ),
            (
                "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
                "legal winner thank year wave sausage worth useful legal winner thank yellow",
            ),
            (
                "00000000000000000000000000000000",
                "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
            ),
        ];
        for (secret, phrase) in cases {
            let secret = hex::decode(secret).unwrap();
            assert_eq!(codec().mnemonics_from_secret(&secret).unwrap(), phrase);
            assert_eq!(codec().secret_from_mnemonics(phrase).unwrap(), secret);
        }
    }

    #[test]
    fn test_rejected_secret_lengths() {
        for len in [0, 4, 7, 17, 36] {
            assert!(matches!(
                codec().words_from_secret(&vec![0u8; len]),
                Err(Bip39Error::LengthInvalid(_))
            ));
            assert!(codec().mnemonics_from_secret(&vec![0u8; len]).is_err());
        }
    }

    #[test]
    fn test_word_limit() {
        let codec = Codec::new().with_limits(Limits::default().with_max_words(11));
        assert_eq!(
            codec.words_from_secret(&[0u8; 16]),
            Err(Bip39Error::CapacityExceeded { needed: 12, capacity: 11 })
        );
        assert!(codec.words_from_secret(&[0u8; 12]).is_ok());
    }

    #[test]
    fn test_word_limit_stops_before_resolving_extra_tokens() {
        let codec = Codec::new().with_limits(Limits::default().with_max_words(3));
        assert_eq!(codec.words_from_mnemonics("abandon ability able").unwrap(), vec![0, 1, 2]);
        // The fourth token is never looked up, so an unknown word there is
        // reported as the limit, not as NotFound.
        assert_eq!(
            codec.words_from_mnemonics("abandon ability able zzz zzz"),
            Err(Bip39Error::CapacityExceeded { needed: 4, capacity: 3 })
        );
        let long = vec!["abandon"; 10_000].join(" ");
        assert_eq!(
            codec.words_from_mnemonics(&long),
            Err(Bip39Error::CapacityExceeded { needed: 4, capacity: 3 })
        );
    }

    #[test]
    fn test_mnemonic_length_limit() {
        let secret = hex::decode("baadf00dbaadf00d").unwrap();
        // "rival hurdle address inspire tenant alone" is 41 bytes.
        let exact = Codec::new().with_limits(Limits::default().with_max_mnemonic_len(41));
        assert!(exact.mnemonics_from_secret(&secret).is_ok());
        let short = Codec::new().with_limits(Limits::default().with_max_mnemonic_len(40));
        assert_eq!(
            short.mnemonics_from_secret(&secret),
            Err(Bip39Error::CapacityExceeded { needed: 41, capacity: 40 })
        );
    }

    #[test]
    fn test_secret_length_limit() {
        let codec = Codec::new().with_limits(Limits::default().with_max_secret_len(7));
        assert_eq!(
            codec.secret_from_mnemonics("rival hurdle address inspire tenant alone"),
            Err(Bip39Error::CapacityExceeded { needed: 8, capacity: 7 })
        );
    }

    #[test]
    fn test_words_from_mnemonics_separators() {
        let expected = vec![1493, 892, 27];
        for text in [
            "rival hurdle address",
            "  rival\thurdle\n\naddress  ",
            "rival,hurdle;address.",
            "rival1hurdle-address",
        ] {
            assert_eq!(codec().words_from_mnemonics(text).unwrap(), expected, "{:?}", text);
        }
    }

    #[test]
    fn test_words_from_mnemonics_unknown_token() {
        assert!(matches!(
            codec().words_from_mnemonics("rival hurdle adress"),
            Err(Bip39Error::NotFound(_))
        ));
        // Uppercase letters separate tokens, so "Rival" leaves "ival".
        assert!(codec().words_from_mnemonics("Rival hurdle").is_err());
    }

    #[test]
    fn test_words_from_mnemonics_empty() {
        for text in ["", "   ", "123 456"] {
            assert!(matches!(
                codec().words_from_mnemonics(text),
                Err(Bip39Error::LengthInvalid(_))
            ));
        }
    }

    #[test]
    fn test_secret_from_mnemonics_checksum_mismatch() {
        // Last word changed from "alone" to "also".
        assert_eq!(
            codec().secret_from_mnemonics("rival hurdle address inspire tenant also"),
            Err(Bip39Error::ChecksumMismatch)
        );
    }

    #[test]
    fn test_flipping_checksum_bits_of_last_word() {
        let phrase = "legal winner thank year wave sausage worth useful legal winner thank yellow";
        let mut words = codec().words_from_mnemonics(phrase).unwrap();
        let last = words.len() - 1;
        // The low 4 bits of the 12th word are the checksum.
        for bit in 0..4 {
            words[last] ^= 1 << bit;
            assert_eq!(codec().secret_from_words(&words), Err(Bip39Error::ChecksumMismatch));
            words[last] ^= 1 << bit;
        }
        assert_eq!(codec().secret_from_words(&words).unwrap(), vec![0x7f; 16]);
    }

    #[test]
    fn test_too_many_words() {
        let phrase = vec!["abandon"; 30].join(" ");
        assert_eq!(
            codec().secret_from_mnemonics(&phrase),
            Err(Bip39Error::CapacityExceeded { needed: 30, capacity: 29 })
        );
    }

    #[test]
    fn test_join_words_out_of_range() {
        assert_eq!(codec().join_words(&[0, 2047]).unwrap(), "abandon zoo");
        assert!(matches!(codec().join_words(&[2048]), Err(Bip39Error::OutOfRange { .. })));
    }
}
