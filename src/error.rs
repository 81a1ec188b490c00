//! Error handling for the codec library
//!
//! The companding operations themselves are total and never fail; errors
//! here come from the boundary the transport layer calls into (malformed
//! raw payloads) and from strict backend lookup.

#![allow(missing_docs)]

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error type for codec boundary operations
#[derive(Error, Debug)]
pub enum CodecError {
    /// Raw payload cannot be interpreted as PCM16 samples
    #[error("invalid PCM16 payload: {details}")]
    InvalidPayload { details: String },

    /// Raw payload exceeds the per-message ceiling
    #[error("PCM16 payload too large: {size} bytes (max: {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// Strict lookup of a codec backend that is unknown or not usable in
    /// this environment
    #[error("codec backend unavailable: {name}")]
    BackendUnavailable { name: String },
}

impl CodecError {
    /// Create a new invalid payload error
    pub fn invalid_payload(details: impl Into<String>) -> Self {
        Self::InvalidPayload {
            details: details.into(),
        }
    }

    /// Create a new backend unavailable error
    pub fn backend_unavailable(name: impl Into<String>) -> Self {
        Self::BackendUnavailable { name: name.into() }
    }
}
