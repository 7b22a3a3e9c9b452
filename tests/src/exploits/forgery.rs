//! # Address Forgery Tests
//!
//! A client connects directly (bypassing the intermediary) or alters a genuine
//! claim in transit to spoof its source address.
//!
//! ## Defense
//!
//! Only a signature by the pinned intermediary key over the canonical
//! `hostname///ip:port///timestamp` message is accepted. The message is rebuilt
//! from parsed fields, so edits to any segment or its rendering break it.

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use hs_origin_verification::{
        message_digest, FixedClock, OriginVerificationApi, OriginVerificationService,
        SignatureVerifier, TrustAnchor, VerificationError, FRESHNESS_WINDOW,
    };
    use p256::ecdsa::signature::hazmat::PrehashSigner;

    use crate::fixtures::{tamper_signature_char, Intermediary};

    const NOW: u64 = 1_700_000_000;

    fn service_for(anchor: TrustAnchor) -> OriginVerificationService<SignatureVerifier, FixedClock> {
        OriginVerificationService::with_parts(
            SignatureVerifier::new(anchor),
            FixedClock(NOW),
            FRESHNESS_WINDOW,
        )
    }

    #[test]
    fn test_single_character_tamper_rejected() {
        let intermediary = Intermediary::new();
        let service = service_for(intermediary.anchor());
        let field = intermediary.handshake_field("example.com", "203.0.113.5", 54321, NOW);

        assert_eq!(
            service.verify(&tamper_signature_char(&field)),
            Err(VerificationError::SignatureVerificationFailed)
        );
    }

    #[test]
    fn test_self_signed_claim_rejected() {
        let intermediary = Intermediary::new();
        let attacker = Intermediary::new();
        let service = service_for(intermediary.anchor());
        let field = attacker.handshake_field("example.com", "203.0.113.5", 54321, NOW);

        assert_eq!(
            service.verify(&field),
            Err(VerificationError::SignatureVerificationFailed)
        );
    }

    #[test]
    fn test_signature_transplanted_to_other_ip_rejected() {
        let intermediary = Intermediary::new();
        let service = service_for(intermediary.anchor());
        let field = intermediary.handshake_field("example.com", "203.0.113.5", 54321, NOW);
        let (_, signature) = field.rsplit_once("///").unwrap();

        let forged = format!("example.com///198.51.100.66:54321///{NOW}///{signature}");

        assert_eq!(
            service.verify(&forged),
            Err(VerificationError::SignatureVerificationFailed)
        );
    }

    #[test]
    fn test_signature_transplanted_to_other_hostname_rejected() {
        let intermediary = Intermediary::new();
        let service = service_for(intermediary.anchor());
        let field = intermediary.handshake_field("example.com", "203.0.113.5", 54321, NOW);
        let (_, signature) = field.rsplit_once("///").unwrap();

        let forged = format!("other.example.com///203.0.113.5:54321///{NOW}///{signature}");

        assert_eq!(
            service.verify(&forged),
            Err(VerificationError::SignatureVerificationFailed)
        );
    }

    #[test]
    fn test_delimiter_in_hostname_rejected() {
        let intermediary = Intermediary::new();
        let service = service_for(intermediary.anchor());
        let field = intermediary.handshake_field("evil///example.com", "203.0.113.5", 54321, NOW);

        assert_eq!(
            service.verify(&field),
            Err(VerificationError::MalformedPayload)
        );
    }

    #[test]
    fn test_non_canonical_port_rendering_rejected() {
        let intermediary = Intermediary::new();
        let service = service_for(intermediary.anchor());
        let message = format!("example.com///203.0.113.5:+54321///{NOW}");
        let field = format!("{message}///{}", intermediary.sign_message(&message));

        assert_eq!(service.verify(&field), Err(VerificationError::InvalidPort));
    }

    #[test]
    fn test_zero_padded_timestamp_rejected() {
        let intermediary = Intermediary::new();
        let service = service_for(intermediary.anchor());
        let message = format!("example.com///203.0.113.5:54321///0{NOW}");
        let field = format!("{message}///{}", intermediary.sign_message(&message));

        assert_eq!(
            service.verify(&field),
            Err(VerificationError::SignatureVerificationFailed)
        );
    }

    #[test]
    fn test_garbage_signature_segments() {
        let intermediary = Intermediary::new();
        let service = service_for(intermediary.anchor());
        let claim = format!("example.com///203.0.113.5:54321///{NOW}");

        assert_eq!(
            service.verify(&format!("{claim}///!!not-base64!!")),
            Err(VerificationError::InvalidSignatureEncoding)
        );
        assert_eq!(
            service.verify(&format!("{claim}///{}", BASE64.encode(b"not a der sequence"))),
            Err(VerificationError::InvalidSignatureStructure)
        );
    }

    #[test]
    fn test_other_curve_signature_rejected() {
        let intermediary = Intermediary::new();
        let service = service_for(intermediary.anchor());
        let claim = format!("example.com///203.0.113.5:54321///{NOW}");

        let p256_key = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());
        let signature: p256::ecdsa::Signature = p256_key
            .sign_prehash(&message_digest(claim.as_bytes()))
            .unwrap();
        let field = format!("{claim}///{}", BASE64.encode(signature.to_der().as_bytes()));

        assert_eq!(
            service.verify(&field),
            Err(VerificationError::SignatureVerificationFailed)
        );
    }

    #[test]
    fn test_embedded_anchor_rejects_test_intermediary() {
        let intermediary = Intermediary::new();
        let service = service_for(TrustAnchor::embedded().unwrap());
        let field = intermediary.handshake_field("example.com", "203.0.113.5", 54321, NOW);

        assert_eq!(
            service.verify(&field),
            Err(VerificationError::SignatureVerificationFailed)
        );
    }
}
