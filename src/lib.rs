//! # Audio-Codec-Core: μ-law Companding with Selectable Backends
//!
//! This library converts between linear 16-bit signed PCM samples and the
//! 8-bit logarithmic G.711 μ-law format used in telephony, and lets the
//! surrounding system pick among interchangeable implementations of that
//! conversion at runtime.
//!
//! ## Features
//!
//! - **Bit-exact μ-law**: one canonical algorithm; every backend is
//!   byte-identical to it for every input
//! - **Backend selection**: runtime capability discovery with an ordered
//!   preference list and deterministic fallback, so naming an unavailable
//!   implementation degrades instead of failing
//! - **Transport-friendly boundary**: PCM16 payload helpers that validate
//!   raw frames before any sample is produced
//!
//! ## Usage
//!
//! ```rust
//! use audio_codec_core::BackendSelector;
//!
//! let selector = BackendSelector::from_env();
//! let codec = selector.resolve(Some("simd"));
//!
//! let samples = vec![0i16; 160]; // 20ms at 8kHz
//! let encoded = (codec.encode)(&samples);
//! let decoded = (codec.decode)(&encoded);
//!
//! assert_eq!(encoded.len(), samples.len());
//! assert_eq!(decoded.len(), encoded.len());
//! ```
//!
//! The free functions [`encode`] and [`decode`] are the canonical
//! operations for callers that do not care about backend choice.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod error;
pub mod frame;
pub mod mulaw;

// Re-export commonly used types and operations
pub use backend::{available_backends, Backend, BackendSelector, CodecPair, DecodeFn, EncodeFn};
pub use error::{CodecError, Result};
pub use mulaw::{decode, encode};

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the codec library
///
/// This function should be called once at program startup. It installs a
/// default tracing subscriber if none is set, probes CPU capabilities,
/// builds the lookup tables and logs the discovered backends. It is safe
/// to call multiple times and from multiple threads.
pub fn init() {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt::try_init();

    // Probe capabilities and force the one-time table construction
    mulaw::simd::init_runtime_support();
    mulaw::tables::init_tables();

    let backends = backend::available_backends();

    tracing::info!("audio-codec-core v{} initialized", VERSION);
    tracing::debug!(?backends, "available codec backends");
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        backends: backend::available_backends()
            .iter()
            .map(|backend| backend.name())
            .collect(),
        simd_support: mulaw::simd::runtime_support(),
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// Discovered backend tags, most preferred first
    pub backends: Vec<&'static str>,
    /// SIMD support information
    pub simd_support: mulaw::simd::SimdSupport,
}
