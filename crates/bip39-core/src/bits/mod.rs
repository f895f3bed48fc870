//! Fixed-capacity buffer addressed as a stream of 11-bit words.
//!
//! Word `n` occupies bits `11*n .. 11*n + 11` of the buffer, most
//! significant bit first. Because 11 does not divide 8, a word straddles
//! two or three bytes and every write is a partial read/modify/write of
//! the first and last byte it touches.

use zeroize::Zeroize;

use crate::policy::{BUFFER_CAPACITY, MAX_BUFFER_WORDS, WORD_BITS, WORD_MASK};
use crate::Bip39Error;

/// Payload + checksum bytes, readable and writable as 11-bit words.
#[derive(Clone, PartialEq, Eq)]
pub struct WordBuffer {
    bytes: [u8; BUFFER_CAPACITY],
}

impl WordBuffer {
    /// Create a zero-filled buffer.
    pub fn new() -> Self {
        WordBuffer { bytes: [0u8; BUFFER_CAPACITY] }
    }

    /// Read the `n`th 11-bit word.
    ///
    /// # Arguments
    /// * `n` - Word position; the whole field must lie inside the buffer.
    ///
    /// # Returns
    /// The word value in `0..=0x7FF`, or `OutOfRange` if word `n` does not fit.
    pub fn get_word(&self, n: usize) -> Result<u16, Bip39Error> {
        check_word_position(n)?;

        let bit_index = WORD_BITS * n;
        let mut byte_index = bit_index / 8;
        // Bits of the word still to place after the first byte.
        let mut up = WORD_BITS - (8 - bit_index % 8);

        let mut word = ((self.bytes[byte_index] as u32) << up) & WORD_MASK as u32;
        byte_index += 1;

        while byte_index < BUFFER_CAPACITY {
            let byte = self.bytes[byte_index] as u32;
            if up > 8 {
                up -= 8;
                word |= byte << up;
            } else {
                word |= byte >> (8 - up);
                break;
            }
            byte_index += 1;
        }
        Ok(word as u16)
    }

    /// Write the `n`th 11-bit word, leaving every other bit untouched.
    ///
    /// `word` is masked to 11 bits before it is written.
    ///
    /// # Arguments
    /// * `n` - Word position; the whole field must lie inside the buffer.
    /// * `word` - The value to store.
    ///
    /// # Returns
    /// `Ok(())`, or `OutOfRange` if word `n` does not fit.
    pub fn set_word(&mut self, n: usize, word: u16) -> Result<(), Bip39Error> {
        check_word_position(n)?;

        let w = (word & WORD_MASK) as u32;
        let bit_index = WORD_BITS * n;
        let mut byte_index = bit_index / 8;
        let mut down = WORD_BITS - (8 - bit_index % 8);

        // First byte may be shared with the previous word.
        self.bytes[byte_index] &= !((WORD_MASK as u32 >> down) as u8);
        self.bytes[byte_index] |= (w >> down) as u8;
        byte_index += 1;

        while byte_index < BUFFER_CAPACITY {
            if down > 8 {
                down -= 8;
                self.bytes[byte_index] = (w >> down) as u8;
                byte_index += 1;
            } else {
                // Last byte may be shared with the next word.
                self.bytes[byte_index] &= !((WORD_MASK as u32) << (8 - down)) as u8;
                self.bytes[byte_index] |= (w << (8 - down)) as u8;
                break;
            }
        }
        Ok(())
    }

    /// Copy `data` into the start of the buffer.
    ///
    /// Bytes past `data.len()` are left as they are.
    pub fn set_bytes(&mut self, data: &[u8]) -> Result<(), Bip39Error> {
        if data.len() > BUFFER_CAPACITY {
            return Err(Bip39Error::CapacityExceeded {
                needed: data.len(),
                capacity: BUFFER_CAPACITY,
            });
        }
        self.bytes[..data.len()].copy_from_slice(data);
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8; BUFFER_CAPACITY] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; BUFFER_CAPACITY] {
        &mut self.bytes
    }

    /// Zero every byte.
    pub fn clear(&mut self) {
        self.bytes.zeroize();
    }
}

impl Default for WordBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WordBuffer {
    // Buffer contents are secret material.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordBuffer").field("capacity", &BUFFER_CAPACITY).finish_non_exhaustive()
    }
}

impl Drop for WordBuffer {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

fn check_word_position(n: usize) -> Result<(), Bip39Error> {
    if n >= MAX_BUFFER_WORDS {
        return Err(Bip39Error::OutOfRange { index: n, limit: MAX_BUFFER_WORDS });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_word_from_known_bytes() {
        // 0xbaadf00dbaadf00d packs to words 1493, 892, 27, 938, 1784 ...
        let mut buf = WordBuffer::new();
        buf.set_bytes(&hex::decode("baadf00dbaadf00d").unwrap()).unwrap();
        assert_eq!(buf.get_word(0).unwrap(), 1493);
        assert_eq!(buf.get_word(1).unwrap(), 892);
        assert_eq!(buf.get_word(2).unwrap(), 27);
        assert_eq!(buf.get_word(3).unwrap(), 938);
        assert_eq!(buf.get_word(4).unwrap(), 1784);
    }

    #[test]
    fn test_set_word_packs_msb_first() {
        let mut buf = WordBuffer::new();
        buf.set_word(0, 0x7FF).unwrap();
        assert_eq!(&buf.as_bytes()[..3], &[0xFF, 0xE0, 0x00]);

        let mut buf = WordBuffer::new();
        buf.set_word(1, 0x7FF).unwrap();
        assert_eq!(&buf.as_bytes()[..4], &[0x00, 0x1F, 0xFC, 0x00]);
    }

    #[test]
    fn test_set_word_preserves_neighbors() {
        let mut buf = WordBuffer::new();
        buf.as_bytes_mut().fill(0xFF);
        buf.set_word(5, 0).unwrap();

        for n in 0..MAX_BUFFER_WORDS {
            let expected = if n == 5 { 0 } else { 0x7FF };
            assert_eq!(buf.get_word(n).unwrap(), expected, "word {}", n);
        }
        // The 320th bit is outside every word.
        assert_eq!(buf.as_bytes()[BUFFER_CAPACITY - 1] & 0x01, 0x01);
    }

    #[test]
    fn test_set_then_get_every_offset() {
        let mut buf = WordBuffer::new();
        let values: Vec<u16> = (0..MAX_BUFFER_WORDS as u16).map(|i| (i * 617 + 5) & 0x7FF).collect();
        for (n, v) in values.iter().enumerate() {
            buf.set_word(n, *v).unwrap();
        }
        for (n, v) in values.iter().enumerate() {
            assert_eq!(buf.get_word(n).unwrap(), *v, "word {}", n);
        }
    }

    #[test]
    fn test_set_word_masks_to_eleven_bits() {
        let mut buf = WordBuffer::new();
        buf.set_word(1, 0xFFFF).unwrap();
        assert_eq!(buf.get_word(0).unwrap(), 0);
        assert_eq!(buf.get_word(1).unwrap(), 0x7FF);
        assert_eq!(buf.get_word(2).unwrap(), 0);
    }

    #[test]
    fn test_word_position_out_of_range() {
        let mut buf = WordBuffer::new();
        assert!(buf.get_word(28).is_ok());
        assert_eq!(
            buf.get_word(29),
            Err(Bip39Error::OutOfRange { index: 29, limit: 29 })
        );
        assert!(buf.set_word(29, 1).is_err());
        assert!(buf.set_word(1000, 1).is_err());
        assert_eq!(buf, WordBuffer::new());
    }

    #[test]
    fn test_set_bytes_capacity() {
        let mut buf = WordBuffer::new();
        assert!(buf.set_bytes(&[0xAA; 40]).is_ok());
        assert!(matches!(
            buf.set_bytes(&[0xAA; 41]),
            Err(Bip39Error::CapacityExceeded { needed: 41, capacity: 40 })
        ));
        buf.clear();
        assert_eq!(buf.as_bytes(), &[0u8; 40]);
    }
}
