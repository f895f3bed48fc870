//! Working state for a single encode, decode, or word search.
//!
//! A context owns the payload + checksum buffer, the payload byte and word
//! counts, and the search cursor with its two scratch mnemonics. Contexts
//! share nothing; create one per operation and let it drop. Secret material
//! is zeroized on [`clear`](MnemonicContext::clear) and on drop.

use zeroize::Zeroize;

use crate::bits::WordBuffer;
use crate::checksum;
use crate::hash::SHA256_DIGEST_LEN;
use crate::policy::{bytes_for_words, validate_payload_len, words_for_bytes, MAX_WORD_LEN};
use crate::search::SearchCursor;
use crate::wordlist::{self, English, WordTable};
use crate::Bip39Error;

const DEFAULT_PAYLOAD_BYTES: usize = 32;

/// Mutable codec state over a word table `T`.
pub struct MnemonicContext<T: WordTable = English> {
    table: T,
    buffer: WordBuffer,
    payload_bytes: usize,
    payload_words: usize,
    cursor: SearchCursor,
    low_word: String,
    high_word: String,
}

impl MnemonicContext<English> {
    /// A context over the English table, configured for a 32-byte payload.
    pub fn new() -> Self {
        Self::with_table(English)
    }
}

impl Default for MnemonicContext<English> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WordTable> MnemonicContext<T> {
    pub fn with_table(table: T) -> Self {
        MnemonicContext {
            table,
            buffer: WordBuffer::new(),
            payload_bytes: DEFAULT_PAYLOAD_BYTES,
            payload_words: words_for_bytes(DEFAULT_PAYLOAD_BYTES),
            cursor: SearchCursor::default(),
            low_word: String::with_capacity(MAX_WORD_LEN),
            high_word: String::with_capacity(MAX_WORD_LEN),
        }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    // ---- payload geometry ----

    /// Set the payload byte count; the word count follows.
    pub fn set_byte_count(&mut self, bytes: usize) {
        self.payload_bytes = bytes;
        self.payload_words = words_for_bytes(bytes);
    }

    /// Set the payload word count; the byte count follows.
    pub fn set_word_count(&mut self, words: usize) {
        self.payload_words = words;
        self.payload_bytes = bytes_for_words(words);
    }

    pub fn byte_count(&self) -> usize {
        self.payload_bytes
    }

    pub fn word_count(&self) -> usize {
        self.payload_words
    }

    // ---- buffer access ----

    /// Read the `n`th 11-bit word of the buffer.
    pub fn get_word(&self, n: usize) -> Result<u16, Bip39Error> {
        self.buffer.get_word(n)
    }

    /// Write the `n`th 11-bit word of the buffer.
    pub fn set_word(&mut self, n: usize, word: u16) -> Result<(), Bip39Error> {
        self.buffer.set_word(n, word)
    }

    /// The first `word_count()` words of the buffer.
    pub fn words(&self) -> Result<Vec<u16>, Bip39Error> {
        (0..self.payload_words).map(|n| self.buffer.get_word(n)).collect()
    }

    /// Copy raw bytes into the start of the buffer.
    pub fn set_bytes(&mut self, bytes: &[u8]) -> Result<(), Bip39Error> {
        self.buffer.set_bytes(bytes)
    }

    /// The whole buffer, payload and checksum included.
    pub fn bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// The first `byte_count()` bytes of the buffer.
    pub fn payload(&self) -> &[u8] {
        let bytes = self.buffer.as_bytes();
        &bytes[..self.payload_bytes.min(bytes.len())]
    }

    /// Load a payload and append its checksum.
    ///
    /// Clears the context, sets the byte count to `payload.len()`, copies
    /// the payload and writes the checksum after it.
    pub fn set_payload(&mut self, payload: &[u8]) -> Result<(), Bip39Error> {
        validate_payload_len(payload.len())?;
        self.clear();
        self.set_byte_count(payload.len());
        self.buffer.set_bytes(payload)?;
        checksum::append_checksum(&mut self.buffer, self.payload_bytes)
    }

    // ---- checksum ----

    pub fn compute_checksum(&self) -> Result<[u8; SHA256_DIGEST_LEN], Bip39Error> {
        checksum::compute_checksum(&self.buffer, self.payload_bytes)
    }

    pub fn append_checksum(&mut self) -> Result<(), Bip39Error> {
        checksum::append_checksum(&mut self.buffer, self.payload_bytes)
    }

    pub fn verify_checksum(&self) -> bool {
        checksum::verify_checksum(&self.buffer, self.payload_bytes)
    }

    /// Zero the buffer and both scratch mnemonics.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.low_word.zeroize();
        self.high_word.zeroize();
    }

    // ---- word table ----

    /// The mnemonic for word index `i`, or `None` if `i > 2047`.
    pub fn mnemonic(&self, i: u16) -> Option<String> {
        wordlist::mnemonic(&self.table, i)
    }

    // ---- interactive search ----

    /// Begin a search over all 2048 words.
    pub fn start_search(&mut self) -> Result<(), Bip39Error> {
        self.cursor = SearchCursor::start();
        wordlist::load_mnemonic(&self.table, self.cursor.lo(), &mut self.low_word)?;
        wordlist::load_mnemonic(&self.table, self.cursor.mid(), &mut self.high_word)
    }

    /// The target sorts before [`high_word`](Self::high_word).
    pub fn choose_low(&mut self) -> Result<(), Bip39Error> {
        self.cursor.choose_low();
        wordlist::load_mnemonic(&self.table, self.cursor.mid(), &mut self.high_word)
    }

    /// The target is [`high_word`](Self::high_word) or sorts after it.
    pub fn choose_high(&mut self) -> Result<(), Bip39Error> {
        self.cursor.choose_high();
        wordlist::load_mnemonic(&self.table, self.cursor.lo(), &mut self.low_word)?;
        wordlist::load_mnemonic(&self.table, self.cursor.mid(), &mut self.high_word)
    }

    /// Mnemonic at the low end of the remaining range.
    pub fn low_word(&self) -> &str {
        &self.low_word
    }

    /// Mnemonic at the split point of the remaining range.
    pub fn high_word(&self) -> &str {
        &self.high_word
    }

    pub fn done_search(&self) -> bool {
        self.cursor.is_done()
    }

    pub fn selected_word(&self) -> u16 {
        self.cursor.selected()
    }

    pub fn cursor(&self) -> &SearchCursor {
        &self.cursor
    }
}

impl<T: WordTable> Drop for MnemonicContext<T> {
    fn drop(&mut self) {
        self.low_word.zeroize();
        self.high_word.zeroize();
    }
}

impl<T: WordTable> std::fmt::Debug for MnemonicContext<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MnemonicContext")
            .field("payload_bytes", &self.payload_bytes)
            .field("payload_words", &self.payload_words)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
