//! μ-law codec unit tests
//!
//! Split by direction, following the codec test layout used across the
//! project: encoder behavior (quantization, clipping, code layout) and
//! decoder behavior (totality, reconstruction, inverse properties).
