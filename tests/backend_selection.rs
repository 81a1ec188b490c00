//! Backend discovery, resolution and fallback at the public API level.

use audio_codec_core::{available_backends, Backend, BackendSelector};
use proptest::prelude::*;

#[test]
fn reference_backend_is_always_discovered_last() {
    let backends = available_backends();

    assert!(!backends.is_empty());
    assert_eq!(*backends.last().unwrap(), Backend::Reference);
}

#[test]
fn unknown_name_resolves_like_no_name_at_all() {
    let selector = BackendSelector::from_env();

    let default = selector.resolve(None);
    let fallback = selector.resolve(Some("DOES-NOT-EXIST"));

    assert_eq!(fallback, default);
    assert_eq!(fallback.backend, selector.default_backend());
}

#[test]
fn resolution_is_case_insensitive() {
    let selector = BackendSelector::from_env();

    for name in ["reference", "Reference", "REFERENCE", "ReFeReNcE"] {
        assert_eq!(selector.resolve(Some(name)).backend, Backend::Reference);
    }
    for name in ["table", "TABLE", "Lut", "ACCELERATED"] {
        assert_eq!(selector.resolve(Some(name)).backend, Backend::Table);
    }
}

#[test]
fn aliases_map_to_canonical_backends() {
    let selector = BackendSelector::from_env();

    assert_eq!(selector.resolve(Some("ref")).backend, Backend::Reference);
    assert_eq!(selector.resolve(Some("scalar")).backend, Backend::Reference);
    assert_eq!(selector.resolve(Some("pure")).backend, Backend::Reference);
    assert_eq!(selector.resolve(Some("lut")).backend, Backend::Table);

    // A vectorized request resolves to simd when present, otherwise it
    // falls back to the selector's default.
    let resolved = selector.resolve(Some("vectorized")).backend;
    if available_backends().contains(&Backend::Simd) {
        assert_eq!(resolved, Backend::Simd);
    } else {
        assert_eq!(resolved, selector.default_backend());
    }
}

#[test]
fn unavailable_backend_falls_back_without_error() {
    let selector = BackendSelector::with_backends(vec![Backend::Table]);

    // Valid tag, not in this environment's list: degrade, don't fail.
    let pair = selector.resolve(Some("simd"));
    assert_eq!(pair.backend, Backend::Table);
}

#[test]
fn every_discovered_backend_matches_the_reference() {
    let selector = BackendSelector::from_env();
    let reference = selector.resolve(Some("reference"));

    // A signal sweep plus the full byte domain on the decode side.
    let samples: Vec<i16> = (-16384i32..16384)
        .step_by(17)
        .map(|i| (i * 2) as i16)
        .chain([i16::MIN, i16::MAX, 0])
        .collect();
    let data: Vec<u8> = (0u8..=255).collect();

    for &backend in selector.backends() {
        let pair = selector.resolve(Some(backend.name()));
        assert_eq!(pair.backend, backend);
        assert_eq!(
            (pair.encode)(&samples),
            (reference.encode)(&samples),
            "encode diverges on {}",
            backend.name()
        );
        assert_eq!(
            (pair.decode)(&data),
            (reference.decode)(&data),
            "decode diverges on {}",
            backend.name()
        );
    }
}

proptest! {
    #[test]
    fn backends_are_observationally_identical(
        samples in prop::collection::vec(any::<i16>(), 0..512),
        data in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let selector = BackendSelector::from_env();
        let reference = selector.resolve(Some("reference"));

        for &backend in selector.backends() {
            let pair = selector.resolve(Some(backend.name()));
            prop_assert_eq!((pair.encode)(&samples), (reference.encode)(&samples));
            prop_assert_eq!((pair.decode)(&data), (reference.decode)(&data));
        }
    }
}

#[test]
fn resolved_pairs_preserve_sequence_length() {
    let selector = BackendSelector::from_env();
    let codec = selector.resolve(None);

    let samples = vec![0i16; 160];
    let encoded = (codec.encode)(&samples);
    assert_eq!(encoded.len(), samples.len());

    let decoded = (codec.decode)(&encoded);
    assert_eq!(decoded.len(), encoded.len());

    assert_eq!((codec.encode)(&[]), Vec::<u8>::new());
    assert_eq!((codec.decode)(&[]), Vec::<i16>::new());
}
