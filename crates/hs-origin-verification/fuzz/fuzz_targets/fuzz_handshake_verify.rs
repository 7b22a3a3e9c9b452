//! Fuzz target for handshake field verification.
//!
//! Feeds arbitrary handshake fields through the full pipeline against the
//! embedded trust anchor.
//!
//! ## Running
//!
//! ```bash
//! cd crates/hs-origin-verification
//! cargo +nightly fuzz run fuzz_handshake_verify
//! ```

#![no_main]

use hs_origin_verification::{
    parse, FixedClock, OriginVerificationApi, OriginVerificationService, TrustAnchor,
};
use libfuzzer_sys::fuzz_target;

/// Fuzz input structure for handshake verification.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    /// Raw handshake hostname field
    field: String,
    /// Wall clock seen by the verifier
    now: u64,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(anchor) = TrustAnchor::embedded() else {
        return;
    };
    let service = OriginVerificationService::new(anchor).with_clock(FixedClock(input.now));

    // Must never panic, regardless of input
    let result = service.verify(&input.field);

    // 1. Deterministic
    assert_eq!(result, service.verify(&input.field));

    // 2. Parse failures surface unchanged through the service
    if let Err(parse_error) = parse(&input.field) {
        assert_eq!(result, Err(parse_error));
    }

    // 3. Nobody holds the embedded private key here
    if let Ok(address) = result {
        panic!("forged claim accepted: {address}");
    }
});
