//! # Signature Verifier
//!
//! Pure domain logic for checking the intermediary's ECDSA signature over a
//! handshake claim.
//!
//! ## Pipeline
//!
//! 1. Base64-decode the signature segment (standard alphabet, padded)
//! 2. Decode DER `SEQUENCE { r INTEGER, s INTEGER }` for the anchor's curve
//! 3. SHA-512 the canonical message `hostname///ip:port///timestamp`
//! 4. ECDSA-verify the digest against the trust anchor
//!
//! The canonical message is rebuilt from parsed fields, never sliced out of the
//! raw input, so any non-canonical rendering (a zero-padded port, say) fails
//! step 4 even for a legitimate signer.

use super::entities::{canonical_message, HandshakePayload};
use super::errors::VerificationError;
use super::trust_anchor::TrustAnchor;
use crate::ports::outbound::ClaimVerifier;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sha2::{Digest, Sha512};

/// Output size of SHA-512.
pub type MessageDigest = [u8; 64];

/// ECDSA verifier bound to one trust anchor.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    anchor: TrustAnchor,
}

impl SignatureVerifier {
    pub fn new(anchor: TrustAnchor) -> Self {
        Self { anchor }
    }

    /// The anchor signatures are checked against.
    pub fn anchor(&self) -> &TrustAnchor {
        &self.anchor
    }

    /// Verify `signature` (base64 DER) over the claim made of the other fields.
    pub fn verify(
        &self,
        hostname: &str,
        client_ip: &str,
        client_port: u16,
        timestamp: u64,
        signature: &str,
    ) -> Result<(), VerificationError> {
        let message = canonical_message(hostname, client_ip, client_port, timestamp);
        self.verify_message(message.as_bytes(), signature)
    }

    fn verify_message(&self, message: &[u8], signature: &str) -> Result<(), VerificationError> {
        let der = BASE64
            .decode(signature)
            .map_err(|_| VerificationError::InvalidSignatureEncoding)?;
        let signature = self.anchor.parse_signature(&der)?;

        let digest = message_digest(message);
        self.anchor.verify_digest(&digest, &signature)
    }
}

impl ClaimVerifier for SignatureVerifier {
    fn verify_claim(&self, payload: &HandshakePayload) -> Result<(), VerificationError> {
        self.verify(
            &payload.hostname,
            &payload.client_ip,
            payload.client_port,
            payload.timestamp,
            &payload.signature,
        )
    }
}

/// SHA-512 of `message`.
pub fn message_digest(message: &[u8]) -> MessageDigest {
    let mut hasher = Sha512::new();
    hasher.update(message);
    let mut digest = [0u8; 64];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// UNIT TESTS
// =============================================================================
