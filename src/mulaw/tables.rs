//! μ-law Lookup Tables
//!
//! Pre-computed lookup tables for μ-law encoding and decoding.
//!
//! ## Performance
//!
//! Using lookup tables provides O(1) conversion time compared to the
//! algorithmic approach, significantly improving performance for real-time
//! applications.
//!
//! ## Memory Usage
//!
//! - encode table: 65536 bytes (64KB)
//! - decode table: 512 bytes (256 samples × 2 bytes)
//!
//! Both tables are generated from the reference implementation, so table
//! lookups are byte-identical to it by construction.

use crate::mulaw::reference;
use std::sync::LazyLock;

/// Pre-computed μ-law encoding table (16-bit linear → 8-bit μ-law)
///
/// This table covers the full 16-bit signed input range (-32768 to 32767).
static MULAW_ENCODE_TABLE: LazyLock<[u8; 65536]> = LazyLock::new(|| {
    let mut table = [0u8; 65536];

    for (i, entry) in table.iter_mut().enumerate() {
        let sample = (i as u16).wrapping_sub(32768) as i16;
        *entry = reference::compress(sample);
    }

    table
});

/// Pre-computed μ-law decoding table (8-bit μ-law → 16-bit linear)
///
/// This table covers all possible 8-bit μ-law encoded values (0 to 255).
static MULAW_DECODE_TABLE: LazyLock<[i16; 256]> = LazyLock::new(|| {
    let mut table = [0i16; 256];

    for (i, entry) in table.iter_mut().enumerate() {
        *entry = reference::expand(i as u8);
    }

    table
});

/// Force initialization of the lookup tables.
///
/// The tables are lazily built on first use; calling this at startup moves
/// the one-time cost out of the audio path. Safe to call multiple times.
pub fn init_tables() {
    LazyLock::force(&MULAW_ENCODE_TABLE);
    LazyLock::force(&MULAW_DECODE_TABLE);
}

/// Fast μ-law compression using the lookup table.
///
/// # Arguments
///
/// * `sample` - 16-bit signed linear PCM sample
///
/// # Returns
///
/// 8-bit μ-law encoded value
pub fn compress_table(sample: i16) -> u8 {
    let index = (sample as u16).wrapping_add(32768) as usize;
    MULAW_ENCODE_TABLE[index]
}

/// Fast μ-law expansion using the lookup table.
///
/// # Arguments
///
/// * `code` - 8-bit μ-law encoded value
///
/// # Returns
///
/// 16-bit signed linear PCM sample
pub fn expand_table(code: u8) -> i16 {
    MULAW_DECODE_TABLE[usize::from(code)]
}

/// Encode a slice of linear PCM samples to μ-law bytes via table lookup.
pub fn encode(samples: &[i16]) -> Vec<u8> {
    samples.iter().map(|&sample| compress_table(sample)).collect()
}

/// Decode a slice of μ-law bytes to linear PCM samples via table lookup.
pub fn decode(data: &[u8]) -> Vec<i16> {
    data.iter().map(|&code| expand_table(code)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_initialization() {
        init_tables();
        assert_eq!(MULAW_ENCODE_TABLE.len(), 65536);
        assert_eq!(MULAW_DECODE_TABLE.len(), 256);
    }

    #[test]
    fn test_encode_table_vs_reference_exhaustive() {
        // The encode table must match the reference implementation for
        // every representable input sample.
        for sample in i16::MIN..=i16::MAX {
            assert_eq!(
                compress_table(sample),
                reference::compress(sample),
                "encode mismatch for sample {}",
                sample
            );
        }
    }

    #[test]
    fn test_decode_table_vs_reference_exhaustive() {
        for code in 0u8..=255 {
            assert_eq!(
                expand_table(code),
                reference::expand(code),
                "decode mismatch for code {}",
                code
            );
        }
    }

    #[test]
    fn test_sequence_ops_match_reference() {
        let samples = vec![0i16, 100, -100, 1000, -1000, 10000, -10000, 32767, -32768];
        assert_eq!(encode(&samples), reference::encode(&samples));

        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&data), reference::decode(&data));
    }
}
