//! Payload checksum: the leading bits of SHA-256 over the payload bytes.
//!
//! The two leading digest bytes are stored right after the payload. Only the
//! top [`checksum_bits`] of them are significant; the rest are overwritten by
//! the word stream's padding or ignored on verification.

use crate::bits::WordBuffer;
use crate::hash::{sha256, SHA256_DIGEST_LEN};
use crate::policy::{
    check_capacity, checksum_bits, validate_payload_len, BUFFER_CAPACITY, CHECKSUM_BYTES,
};
use crate::Bip39Error;

/// Hash the first `payload_bytes` bytes of the buffer.
///
/// # Returns
/// The 32-byte digest, or `CapacityExceeded` if `payload_bytes` is larger
/// than the buffer.
pub fn compute_checksum(
    buffer: &WordBuffer,
    payload_bytes: usize,
) -> Result<[u8; SHA256_DIGEST_LEN], Bip39Error> {
    check_capacity(payload_bytes, BUFFER_CAPACITY)?;
    Ok(sha256(&buffer.as_bytes()[..payload_bytes]))
}

/// Write the first two digest bytes immediately after the payload.
pub fn append_checksum(buffer: &mut WordBuffer, payload_bytes: usize) -> Result<(), Bip39Error> {
    validate_payload_len(payload_bytes)?;
    let digest = compute_checksum(buffer, payload_bytes)?;
    let bytes = buffer.as_bytes_mut();
    bytes[payload_bytes..payload_bytes + CHECKSUM_BYTES].copy_from_slice(&digest[..CHECKSUM_BYTES]);
    Ok(())
}

/// Recompute the digest and compare its top `checksum_bits(payload_bytes)` bits
/// with the stored checksum.
///
/// A mismatch, or a checksum that would lie past the end of the buffer,
/// is reported as `false`.
pub fn verify_checksum(buffer: &WordBuffer, payload_bytes: usize) -> bool {
    let bits = checksum_bits(payload_bytes);
    let stored_len = (bits + 7) / 8;
    if payload_bytes + stored_len > BUFFER_CAPACITY {
        return false;
    }
    let digest = sha256(&buffer.as_bytes()[..payload_bytes]);
    let stored = &buffer.as_bytes()[payload_bytes..payload_bytes + stored_len];

    if bits <= 8 {
        let mask = 0xFFu8 << (8 - bits);
        (stored[0] & mask) == (digest[0] & mask)
    } else {
        let mask = 0xFFu8 << (16 - bits);
        stored[0] == digest[0] && (stored[1] & mask) == (digest[1] & mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(payload: &[u8]) -> WordBuffer {
        let mut buf = WordBuffer::new();
        buf.set_bytes(payload).unwrap();
        buf
    }

    #[test]
    fn test_append_checksum_writes_digest_prefix() {
        let payload = hex::decode("baadf00dbaadf00d").unwrap();
        let mut buf = buffer_with(&payload);
        append_checksum(&mut buf, payload.len()).unwrap();

        let digest = sha256(&payload);
        assert_eq!(&buf.as_bytes()[8..10], &digest[..2]);
        assert_eq!(&buf.as_bytes()[..8], payload.as_slice());
        assert!(verify_checksum(&buf, payload.len()));
    }

    #[test]
    fn test_verify_ignores_bits_below_checksum() {
        // 16-byte payload: 4 checksum bits, the low nibble and second byte are padding.
        let payload = [0x7fu8; 16];
        let mut buf = buffer_with(&payload);
        append_checksum(&mut buf, 16).unwrap();
        buf.as_bytes_mut()[16] ^= 0x0F;
        buf.as_bytes_mut()[17] ^= 0xFF;
        assert!(verify_checksum(&buf, 16));

        buf.as_bytes_mut()[16] ^= 0x10;
        assert!(!verify_checksum(&buf, 16));
    }

    #[test]
    fn test_verify_two_byte_checksum() {
        // 11-byte payload: 88 bits need a full 11-bit checksum.
        let payload = [0x01u8; 11];
        let mut buf = buffer_with(&payload);
        append_checksum(&mut buf, 11).unwrap();
        buf.as_bytes_mut()[12] ^= 0x1F;
        assert!(verify_checksum(&buf, 11));

        buf.as_bytes_mut()[12] ^= 0x20;
        assert!(!verify_checksum(&buf, 11));
    }

    #[test]
    fn test_verify_detects_checksum_change() {
        let payload = hex::decode("baadf00dbaadf00dbaadf00dbaadf00d").unwrap();
        let mut buf = buffer_with(&payload);
        append_checksum(&mut buf, payload.len()).unwrap();
        for bit in 4..8 {
            let mut tampered = buf.clone();
            tampered.as_bytes_mut()[16] ^= 1 << bit;
            assert!(!verify_checksum(&tampered, 16), "bit {}", bit);
        }
    }

    #[test]
    fn test_verify_single_byte_at_buffer_end() {
        // 39-byte payload (29 words) keeps its 7 checksum bits in the last byte.
        let mut buf = buffer_with(&[0x42u8; 39]);
        let digest = sha256(&[0x42u8; 39]);
        buf.as_bytes_mut()[39] = digest[0] & 0xFE;
        assert!(verify_checksum(&buf, 39));
        buf.as_bytes_mut()[39] ^= 0x80;
        assert!(!verify_checksum(&buf, 39));
    }

    #[test]
    fn test_payload_too_large() {
        let mut buf = WordBuffer::new();
        assert!(matches!(
            append_checksum(&mut buf, 39),
            Err(Bip39Error::CapacityExceeded { needed: 41, capacity: 40 })
        ));
        assert!(!verify_checksum(&buf, 40));
        assert!(compute_checksum(&buf, 41).is_err());
    }
}
