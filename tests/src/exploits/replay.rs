//! # Replay Attack Tests
//!
//! An attacker who captures a genuine handshake field from the wire tries to
//! present it again, or pre-dates/post-dates a claim, to impersonate the
//! original client.
//!
//! ## Defense
//!
//! Every claim carries a signed timestamp. Claims older than the freshness
//! window, or dated in the future, are rejected before signature work.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use hs_origin_verification::{
        FixedClock, OriginVerificationApi, OriginVerificationService, SignatureVerifier,
        VerificationError, FRESHNESS_WINDOW,
    };

    use crate::fixtures::Intermediary;

    const CAPTURED_AT: u64 = 1_700_000_000;

    fn service_at(
        intermediary: &Intermediary,
        now: u64,
    ) -> OriginVerificationService<SignatureVerifier, FixedClock> {
        OriginVerificationService::with_parts(
            SignatureVerifier::new(intermediary.anchor()),
            FixedClock(now),
            FRESHNESS_WINDOW,
        )
    }

    #[test]
    fn test_captured_field_accepted_inside_window() {
        let intermediary = Intermediary::new();
        let field = intermediary.handshake_field("example.com", "203.0.113.5", 54321, CAPTURED_AT);

        for elapsed in 0..3 {
            let service = service_at(&intermediary, CAPTURED_AT + elapsed);
            assert!(service.verify(&field).is_ok(), "elapsed {elapsed}s");
        }
    }

    #[test]
    fn test_captured_field_rejected_after_window() {
        let intermediary = Intermediary::new();
        let field = intermediary.handshake_field("example.com", "203.0.113.5", 54321, CAPTURED_AT);

        for elapsed in [3, 4, 60, 86_400] {
            let service = service_at(&intermediary, CAPTURED_AT + elapsed);
            assert_eq!(
                service.verify(&field),
                Err(VerificationError::StaleOrInvalidTimestamp),
                "elapsed {elapsed}s"
            );
        }
    }

    #[test]
    fn test_future_dated_claim_rejected() {
        let intermediary = Intermediary::new();
        let field =
            intermediary.handshake_field("example.com", "203.0.113.5", 54321, CAPTURED_AT + 1);

        assert_eq!(
            service_at(&intermediary, CAPTURED_AT).verify(&field),
            Err(VerificationError::StaleOrInvalidTimestamp)
        );
    }

    #[test]
    fn test_far_future_claim_cannot_wrap_around() {
        let intermediary = Intermediary::new();
        let field = intermediary.handshake_field("example.com", "203.0.113.5", 54321, u64::MAX);

        assert_eq!(
            service_at(&intermediary, CAPTURED_AT).verify(&field),
            Err(VerificationError::StaleOrInvalidTimestamp)
        );
    }

    #[test]
    fn test_epoch_claim_rejected() {
        let intermediary = Intermediary::new();
        let field = intermediary.handshake_field("example.com", "203.0.113.5", 54321, 0);

        assert_eq!(
            service_at(&intermediary, CAPTURED_AT).verify(&field),
            Err(VerificationError::StaleOrInvalidTimestamp)
        );
    }

    #[test]
    fn test_wider_window_extends_replay_exposure() {
        let intermediary = Intermediary::new();
        let field = intermediary.handshake_field("example.com", "203.0.113.5", 54321, CAPTURED_AT);
        let service = OriginVerificationService::with_parts(
            SignatureVerifier::new(intermediary.anchor()),
            FixedClock(CAPTURED_AT + 29),
            Duration::from_secs(30),
        );

        assert!(service.verify(&field).is_ok());
    }

    #[test]
    fn test_re_signed_timestamp_edit_breaks_signature() {
        let intermediary = Intermediary::new();
        let field = intermediary.handshake_field("example.com", "203.0.113.5", 54321, CAPTURED_AT);

        // Refresh the timestamp without the intermediary's key.
        let stale = CAPTURED_AT.to_string();
        let refreshed = field.replacen(&stale, &(CAPTURED_AT + 60).to_string(), 1);

        assert_eq!(
            service_at(&intermediary, CAPTURED_AT + 60).verify(&refreshed),
            Err(VerificationError::SignatureVerificationFailed)
        );
    }
}
