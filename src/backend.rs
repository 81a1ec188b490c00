//! Codec backend discovery and selection.
//!
//! Several implementations of the μ-law conversion ship with this crate
//! (see [`crate::mulaw`]); which ones are usable depends on the runtime
//! environment. This module probes availability once per process, keeps an
//! ordered preference list (most accelerated first, reference last), and
//! resolves a caller-supplied backend name to a concrete encode/decode
//! pair, falling back deterministically instead of failing.
//!
//! Selection only ever decides *which* implementation runs. All backends
//! are required to produce byte-identical output, so resolution can never
//! change observable results.

use crate::error::{CodecError, Result};
use crate::mulaw::{reference, simd, tables};
use std::sync::OnceLock;

/// Encode half of a resolved codec pair.
pub type EncodeFn = fn(&[i16]) -> Vec<u8>;

/// Decode half of a resolved codec pair.
pub type DecodeFn = fn(&[u8]) -> Vec<i16>;

/// Identity of one codec backend implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Chunked, vectorization-friendly implementation; requires runtime
    /// CPU support.
    Simd,
    /// Lookup-table implementation; always available.
    Table,
    /// Canonical algorithm; always available and the guaranteed fallback.
    Reference,
}

impl Backend {
    /// Canonical tag for this backend.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simd => "simd",
            Self::Table => "table",
            Self::Reference => "reference",
        }
    }

    /// Map a requested name to a backend through the alias table.
    ///
    /// Matching is case-insensitive; unknown names yield `None`.
    pub fn from_alias(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "reference" | "ref" | "scalar" | "pure" => Some(Self::Reference),
            "table" | "tables" | "lut" | "accelerated" => Some(Self::Table),
            "simd" | "vectorized" | "vector" | "sse2" | "neon" => Some(Self::Simd),
            _ => None,
        }
    }

    /// Whether this backend is usable in the current environment.
    pub fn is_available(self) -> bool {
        match self {
            Self::Simd => simd::is_available(),
            Self::Table | Self::Reference => true,
        }
    }
}

/// Resolved pair of codec operations.
///
/// The two function pointers always come from the same backend and are
/// interchangeable with any other backend's pair in observable behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecPair {
    /// Backend the pair belongs to.
    pub backend: Backend,
    /// Sequence encode operation.
    pub encode: EncodeFn,
    /// Sequence decode operation.
    pub decode: DecodeFn,
}

impl CodecPair {
    /// The encode/decode pair of a specific backend.
    pub fn for_backend(backend: Backend) -> Self {
        match backend {
            Backend::Simd => Self {
                backend,
                encode: simd::encode,
                decode: simd::decode,
            },
            Backend::Table => Self {
                backend,
                encode: tables::encode,
                decode: tables::decode,
            },
            Backend::Reference => Self {
                backend,
                encode: reference::encode,
                decode: reference::decode,
            },
        }
    }
}

/// Process-wide discovery result
static AVAILABLE_BACKENDS: OnceLock<Vec<Backend>> = OnceLock::new();

/// Backends usable in this process, most accelerated first.
///
/// Probed once and cached; [`Backend::Reference`] is always present and
/// always last.
pub fn available_backends() -> &'static [Backend] {
    AVAILABLE_BACKENDS.get_or_init(detect_backends)
}

fn detect_backends() -> Vec<Backend> {
    let mut discovered = Vec::new();

    if Backend::Simd.is_available() {
        discovered.push(Backend::Simd);
    }
    discovered.push(Backend::Table);
    discovered.push(Backend::Reference);

    tracing::debug!(?discovered, "probed codec backends");

    discovered
}

/// Maps backend requests to concrete codec pairs.
///
/// Holds an immutable preference list computed at construction. The
/// process-wide list from [`available_backends`] is the usual source;
/// tests inject their own list through [`BackendSelector::with_backends`].
#[derive(Debug, Clone)]
pub struct BackendSelector {
    preference: Vec<Backend>,
}

impl BackendSelector {
    /// Selector over the backends discovered in this process.
    pub fn from_env() -> Self {
        Self {
            preference: available_backends().to_vec(),
        }
    }

    /// Selector over an explicit preference list, for tests and embedding.
    ///
    /// The reference backend is appended if absent so the guaranteed
    /// fallback invariant holds for any input list.
    pub fn with_backends(backends: Vec<Backend>) -> Self {
        let mut preference = backends;
        if !preference.contains(&Backend::Reference) {
            preference.push(Backend::Reference);
        }
        Self { preference }
    }

    /// The preference list, most preferred first.
    pub fn backends(&self) -> &[Backend] {
        &self.preference
    }

    /// The backend used when no explicit request is made.
    pub fn default_backend(&self) -> Backend {
        self.preference[0]
    }

    /// Resolve a requested backend name to a codec pair.
    ///
    /// An absent or empty request yields the most preferred backend. A
    /// request naming an unknown or unavailable backend falls back to the
    /// most preferred backend and records the fallback; it is never an
    /// error, since availability is an environment fact rather than a
    /// caller mistake.
    pub fn resolve(&self, requested: Option<&str>) -> CodecPair {
        let requested = requested.map(str::trim).filter(|name| !name.is_empty());

        let Some(name) = requested else {
            let backend = self.default_backend();
            tracing::debug!(backend = backend.name(), "using default codec backend");
            return CodecPair::for_backend(backend);
        };

        match self.resolve_strict(name) {
            Ok(pair) => {
                tracing::debug!(backend = pair.backend.name(), "resolved requested codec backend");
                pair
            }
            Err(_) => {
                let backend = self.default_backend();
                tracing::warn!(
                    requested = name,
                    fallback = backend.name(),
                    "requested codec backend not available, falling back"
                );
                CodecPair::for_backend(backend)
            }
        }
    }

    /// Resolve a backend name without fallback.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BackendUnavailable`] if the name is unknown
    /// or the backend is not in this selector's preference list.
    pub fn resolve_strict(&self, name: &str) -> Result<CodecPair> {
        let backend =
            Backend::from_alias(name).ok_or_else(|| CodecError::backend_unavailable(name))?;

        if self.preference.contains(&backend) {
            Ok(CodecPair::for_backend(backend))
        } else {
            Err(CodecError::backend_unavailable(name))
        }
    }
}

impl Default for BackendSelector {
    fn default() -> Self {
        Self::from_env()
    }
}
