//! Word table: maps word indices to mnemonics and back.
//!
//! Words are stored split in three parts. The first and second letters live
//! in sparse prefix tables that record `(index, letter)` only where the letter
//! changes; the rest of each word is kept in a dense suffix table. Encoding a
//! word is two greatest-lower-bound searches plus a suffix copy. Decoding
//! narrows the candidate range with the prefix tables and then scans suffixes.
//!
//! Table storage is abstracted by [`WordTable`] so the codec has a single code
//! path no matter where the tables live (RAM, flash, or a generated static).

pub mod tables;

use crate::policy::{MAX_WORD_LEN, WORD_COUNT};
use crate::Bip39Error;

/// A prefix table entry: `ch` starts at word index `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChar {
    pub index: u16,
    pub ch: u8,
}

impl IndexChar {
    pub const fn new(index: u16, ch: u8) -> Self {
        IndexChar { index, ch }
    }
}

/// Read-only access to the three tables that make up a 2048-word list.
///
/// Prefix entries must be ordered by non-decreasing `index`, and the first
/// entry of each first-letter block in `prefix1` must also start an entry in
/// `prefix2`.
pub trait WordTable {
    /// First-letter boundaries.
    fn prefix1(&self) -> &[IndexChar];

    /// Second-letter boundaries.
    fn prefix2(&self) -> &[IndexChar];

    /// Letters from position 2 onward of word `index`.
    fn suffix(&self, index: usize) -> Option<&str>;
}

/// The English BIP-39 word list, backed by static arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct English;

impl WordTable for English {
    fn prefix1(&self) -> &[IndexChar] {
        &tables::PREFIX1
    }

    fn prefix2(&self) -> &[IndexChar] {
        &tables::PREFIX2
    }

    fn suffix(&self, index: usize) -> Option<&str> {
        tables::SUFFIXES.get(index).copied()
    }
}

/// Position of the last entry whose index is `<= n`.
///
/// Stops early on an exact match. Returns 0 when every entry is past `n`.
fn floor_entry(table: &[IndexChar], n: u16) -> usize {
    let mut lo = 0;
    let mut hi = table.len();

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        let m = table[mid];
        if m.index < n {
            lo = mid;
        } else if m.index > n {
            hi = mid;
        } else {
            lo = mid;
            break;
        }
    }
    lo
}

fn lookup_char(table: &[IndexChar], n: u16) -> Option<char> {
    table.get(floor_entry(table, n)).map(|e| e.ch as char)
}

/// Write the mnemonic for `index` into `out`, replacing its contents.
///
/// # Returns
/// `Ok(())`, or `OutOfRange` if `index > 2047`.
pub fn load_mnemonic<T: WordTable + ?Sized>(
    table: &T,
    index: u16,
    out: &mut String,
) -> Result<(), Bip39Error> {
    let out_of_range = || Bip39Error::OutOfRange { index: index as usize, limit: WORD_COUNT };
    if index as usize >= WORD_COUNT {
        return Err(out_of_range());
    }
    let first = lookup_char(table.prefix1(), index).ok_or_else(out_of_range)?;
    let second = lookup_char(table.prefix2(), index).ok_or_else(out_of_range)?;
    let suffix = table.suffix(index as usize).ok_or_else(out_of_range)?;

    out.clear();
    out.push(first);
    out.push(second);
    out.push_str(suffix);
    Ok(())
}

/// Look up the mnemonic for a word index.
///
/// # Returns
/// The mnemonic, or `None` if `index > 2047`.
pub fn mnemonic<T: WordTable + ?Sized>(table: &T, index: u16) -> Option<String> {
    let mut out = String::with_capacity(MAX_WORD_LEN);
    load_mnemonic(table, index, &mut out).ok()?;
    Some(out)
}

/// Resolve a mnemonic to its word index.
///
/// Matching is exact and case sensitive; only lowercase words resolve.
///
/// # Returns
/// The word index, or `NotFound` if `text` is not in the table.
pub fn word_index<T: WordTable + ?Sized>(table: &T, text: &str) -> Result<u16, Bip39Error> {
    let not_found = || Bip39Error::NotFound(text.to_string());
    let bytes = text.as_bytes();
    if bytes.len() < 3 {
        return Err(not_found());
    }

    let prefix1 = table.prefix1();
    let block = prefix1.iter().position(|e| e.ch == bytes[0]).ok_or_else(not_found)?;
    let start = prefix1[block].index;
    let block_end = prefix1.get(block + 1).map_or(WORD_COUNT as u16, |e| e.index);

    let (i1, i2) = second_letter_range(table.prefix2(), bytes[1], start, block_end)
        .ok_or_else(not_found)?;

    let rest = &bytes[2..];
    (i1..i2)
        .find(|&i| table.suffix(i as usize).map(str::as_bytes) == Some(rest))
        .ok_or_else(not_found)
}

/// Word range `[i1, i2)` of the words in the block starting at `start`
/// whose second letter is `c`.
fn second_letter_range(
    prefix2: &[IndexChar],
    c: u8,
    start: u16,
    block_end: u16,
) -> Option<(u16, u16)> {
    let mut pos = floor_entry(prefix2, start);
    let mut entry = *prefix2.get(pos)?;

    while entry.ch < c {
        pos += 1;
        entry = *prefix2.get(pos)?;
        if entry.index >= block_end {
            return None;
        }
    }
    if entry.ch != c {
        return None;
    }
    let end = prefix2.get(pos + 1).map_or(WORD_COUNT as u16, |e| e.index);
    Some((entry.index, end))
}
