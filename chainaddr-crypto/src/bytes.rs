//! Byte-level transforms shared by the address schemes.
//!
//! All functions are pure: inputs are borrowed, results are fresh buffers.

use std::fmt;

use tracing::warn;

use chainaddr_core::constants::{CHECKSUM_SIZE, WORD_SIZE};
use chainaddr_core::error::{ChainAddrError, Result};

// ═══════════════════════════════════════════════════════════════════════════════
// WORD SWAP
// ═══════════════════════════════════════════════════════════════════════════════

/// Reverses the byte order of one 32-bit word.
pub fn swap_word(word: [u8; WORD_SIZE]) -> [u8; WORD_SIZE] {
    [word[3], word[2], word[1], word[0]]
}

/// Reverses the byte order of every 32-bit word in `buf`.
///
/// Fails with `UnalignedBuffer` when `buf.len()` is not a multiple of 4.
pub fn swap_u32_words(buf: &[u8]) -> Result<Vec<u8>> {
    if buf.len() % WORD_SIZE != 0 {
        return Err(ChainAddrError::UnalignedBuffer { len: buf.len() });
    }

    let mut out = vec![0u8; buf.len()];
    for start in (0..buf.len()).step_by(WORD_SIZE) {
        for offset in 0..WORD_SIZE {
            out[start + offset] = buf[start + WORD_SIZE - 1 - offset];
        }
    }
    Ok(out)
}

// ═══════════════════════════════════════════════════════════════════════════════
// XOR MERGE
// ═══════════════════════════════════════════════════════════════════════════════

/// Lengths of two buffers that were XOR-merged despite differing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthMismatch {
    /// Length of the first operand
    pub left: usize,
    /// Length of the second operand
    pub right: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "xor operands differ in length ({} vs {}), longer tail copied through",
            self.left, self.right
        )
    }
}

/// Result of [`xor_merge`]: the merged bytes and any length warning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorMerge {
    /// XOR over the common prefix followed by the longer operand's tail
    pub bytes: Vec<u8>,
    /// Set when the operands had different lengths
    pub mismatch: Option<LengthMismatch>,
}

/// XORs `a` and `b` byte-wise over the shorter length, then appends the
/// remaining tail of the longer buffer unchanged.
///
/// A length mismatch is reported in the result, never as an error.
pub fn xor_merge(a: &[u8], b: &[u8]) -> XorMerge {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut bytes: Vec<u8> = shorter
        .iter()
        .zip(longer.iter())
        .map(|(x, y)| x ^ y)
        .collect();
    bytes.extend_from_slice(&longer[shorter.len()..]);

    let mismatch = (a.len() != b.len()).then_some(LengthMismatch {
        left: a.len(),
        right: b.len(),
    });

    XorMerge { bytes, mismatch }
}

/// [`xor_merge`] that emits a `warn!` event on length mismatch and returns
/// only the bytes.
pub fn xor_merge_logged(a: &[u8], b: &[u8]) -> Vec<u8> {
    let merged = xor_merge(a, b);
    if let Some(mismatch) = merged.mismatch {
        warn!(left = mismatch.left, right = mismatch.right, "{}", mismatch);
    }
    merged.bytes
}

// ═══════════════════════════════════════════════════════════════════════════════
// CHECKSUM TRUNCATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Keeps the first 4 bytes of a digest as an address checksum.
pub fn truncate_checksum<const N: usize>(digest: &[u8; N]) -> [u8; CHECKSUM_SIZE] {
    let mut checksum = [0u8; CHECKSUM_SIZE];
    let n = N.min(CHECKSUM_SIZE);
    checksum[..n].copy_from_slice(&digest[..n]);
    checksum
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_swap_word() {
        assert_eq!(swap_word([1, 2, 3, 4]), [4, 3, 2, 1]);
    }

    #[test]
    fn test_swap_u32_words_per_word() {
        let swapped = swap_u32_words(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(swapped, vec![4, 3, 2, 1, 8, 7, 6, 5]);
    }

    #[test]
    fn test_swap_u32_words_empty() {
        assert_eq!(swap_u32_words(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_swap_u32_words_rejects_partial_word() {
        assert!(matches!(
            swap_u32_words(&[1, 2, 3, 4, 5]),
            Err(ChainAddrError::UnalignedBuffer { len: 5 })
        ));
    }

    #[test]
    fn test_swap_matches_u32_endianness() {
        let word = 0x1234_5678u32;
        let swapped = swap_u32_words(&word.to_be_bytes()).unwrap();
        assert_eq!(swapped, word.to_le_bytes());
    }

    #[test]
    fn test_xor_merge_equal_lengths() {
        let merged = xor_merge(&[0xff, 0x0f], &[0x0f, 0x0f]);
        assert_eq!(merged.bytes, vec![0xf0, 0x00]);
        assert!(merged.mismatch.is_none());
    }

    #[test]
    fn test_xor_merge_copies_longer_tail() {
        let merged = xor_merge(&[0x01], &[0x03, 0xaa, 0xbb]);
        assert_eq!(merged.bytes, vec![0x02, 0xaa, 0xbb]);
        assert_eq!(merged.mismatch, Some(LengthMismatch { left: 1, right: 3 }));

        let flipped = xor_merge(&[0x03, 0xaa, 0xbb], &[0x01]);
        assert_eq!(flipped.bytes, merged.bytes);
        assert_eq!(flipped.mismatch, Some(LengthMismatch { left: 3, right: 1 }));
    }

    #[test]
    fn test_xor_merge_with_empty() {
        let merged = xor_merge(&[], &[9, 8]);
        assert_eq!(merged.bytes, vec![9, 8]);
        assert!(merged.mismatch.is_some());
    }

    #[test]
    #[traced_test]
    fn test_xor_merge_logged_warns_on_mismatch() {
        assert_eq!(xor_merge_logged(&[1, 2, 3], &[1]), vec![0, 2, 3]);
        assert!(logs_contain("differ in length (3 vs 1)"));
    }

    #[test]
    #[traced_test]
    fn test_xor_merge_logged_quiet_on_equal_lengths() {
        assert_eq!(xor_merge_logged(&[1, 2], &[3, 2]), vec![2, 0]);
        assert!(!logs_contain("differ in length"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let msg = LengthMismatch { left: 4, right: 2 }.to_string();
        assert!(msg.contains('4') && msg.contains('2'));
    }

    #[test]
    fn test_truncate_checksum() {
        let digest: [u8; 32] = std::array::from_fn(|i| i as u8);
        assert_eq!(truncate_checksum(&digest), [0, 1, 2, 3]);
    }
}
