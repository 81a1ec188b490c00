//! PCM16 payload helpers for the transport boundary.
//!
//! The network layer hands the codec a raw binary message per frame. The
//! helpers here are the only framing knowledge the core carries: a
//! little-endian PCM16 payload is two bytes per sample, must have even
//! length, and must respect the per-message size ceiling. They perform no
//! I/O and produce no partial results.

use crate::error::{CodecError, Result};

/// Maximum accepted payload size in bytes (1 MiB), matching the
/// transport's per-message ceiling.
pub const MAX_FRAME_SIZE: usize = 1_048_576;

/// Interpret a raw little-endian payload as PCM16 samples.
///
/// # Errors
///
/// Returns [`CodecError::PayloadTooLarge`] if the payload exceeds
/// [`MAX_FRAME_SIZE`], or [`CodecError::InvalidPayload`] if its length is
/// odd. No samples are produced on error.
pub fn pcm16_bytes_to_samples(payload: &[u8]) -> Result<Vec<i16>> {
    if payload.len() > MAX_FRAME_SIZE {
        return Err(CodecError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_FRAME_SIZE,
        });
    }

    if payload.len() % 2 != 0 {
        return Err(CodecError::invalid_payload(format!(
            "length {} is not a whole number of samples",
            payload.len()
        )));
    }

    Ok(payload
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Serialize PCM16 samples as a little-endian byte payload.
pub fn samples_to_pcm16_bytes(samples: &[i16]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        payload.extend_from_slice(&sample.to_le_bytes());
    }
    payload
}
