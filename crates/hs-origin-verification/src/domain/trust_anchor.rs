//! # Trust Anchor
//!
//! The intermediary's ECDSA public key. Loaded once at startup from a base64
//! X.509 SubjectPublicKeyInfo, immutable afterwards and shared read-only by
//! every verification call.
//!
//! ## Supported Curves
//!
//! - secp384r1 (P-384), the curve of the embedded production key
//! - secp256r1 (P-256)
//!
//! Digests longer than the curve order are truncated to its bit length, as
//! ECDSA prescribes, so a SHA-512 digest is valid input for both curves.

use super::errors::{TrustAnchorError, VerificationError};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use p384::ecdsa::signature::hazmat::PrehashVerifier;
use p384::pkcs8::DecodePublicKey;

/// Production intermediary key: SPKI, id-ecPublicKey on secp384r1.
pub const EMBEDDED_TRUST_ANCHOR: &str = "MHYwEAYHKoZIzj0CAQYFK4EEACIDYgAEEvy/Eh9v5QMkdzeTw1tPMCEljzKgw0zWwt926zRZJT9sv/OLEwkE/rB1JrH3XXMTsv8w7gPzV4k9BjUAcZ1xH1yNG/AhNA23DQiFSXye/WFB+KlSr4hkx68niNJdvoPs";

/// Public key used to verify every origin claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrustAnchor {
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
}

/// A DER signature decoded for the anchor's curve.
#[derive(Clone, Debug)]
pub enum AnchorSignature {
    P256(p256::ecdsa::Signature),
    P384(p384::ecdsa::Signature),
}

impl TrustAnchor {
    /// Load the compiled-in production key.
    pub fn embedded() -> Result<Self, TrustAnchorError> {
        Self::from_base64_spki(EMBEDDED_TRUST_ANCHOR)
    }

    /// Load a key from base64 (standard alphabet, padded) SPKI DER.
    pub fn from_base64_spki(encoded: &str) -> Result<Self, TrustAnchorError> {
        let der = BASE64
            .decode(encoded.trim())
            .map_err(|e| TrustAnchorError::InvalidEncoding(e.to_string()))?;
        Self::from_spki_der(&der)
    }

    /// Load a key from SPKI DER. The curve is taken from the SPKI parameters.
    pub fn from_spki_der(der: &[u8]) -> Result<Self, TrustAnchorError> {
        if let Ok(key) = p384::ecdsa::VerifyingKey::from_public_key_der(der) {
            return Ok(Self::P384(key));
        }
        p256::ecdsa::VerifyingKey::from_public_key_der(der)
            .map(Self::P256)
            .map_err(|_| TrustAnchorError::UnsupportedKey)
    }

    /// Curve name, for diagnostics.
    pub fn curve(&self) -> &'static str {
        match self {
            Self::P256(_) => "P-256",
            Self::P384(_) => "P-384",
        }
    }

    /// Decode a DER `SEQUENCE { r INTEGER, s INTEGER }` for this anchor's curve.
    pub fn parse_signature(&self, der: &[u8]) -> Result<AnchorSignature, VerificationError> {
        match self {
            Self::P256(_) => p256::ecdsa::Signature::from_der(der).map(AnchorSignature::P256),
            Self::P384(_) => p384::ecdsa::Signature::from_der(der).map(AnchorSignature::P384),
        }
        .map_err(|_| VerificationError::InvalidSignatureStructure)
    }

    /// Verify `signature` over an already computed message digest.
    pub fn verify_digest(
        &self,
        digest: &[u8],
        signature: &AnchorSignature,
    ) -> Result<(), VerificationError> {
        let verified = match (self, signature) {
            (Self::P256(key), AnchorSignature::P256(sig)) => key.verify_prehash(digest, sig),
            (Self::P384(key), AnchorSignature::P384(sig)) => key.verify_prehash(digest, sig),
            _ => return Err(VerificationError::InvalidSignatureStructure),
        };
        verified.map_err(|_| VerificationError::SignatureVerificationFailed)
    }
}

impl From<p256::ecdsa::VerifyingKey> for TrustAnchor {
    fn from(key: p256::ecdsa::VerifyingKey) -> Self {
        Self::P256(key)
    }
}

impl From<p384::ecdsa::VerifyingKey> for TrustAnchor {
    fn from(key: p384::ecdsa::VerifyingKey) -> Self {
        Self::P384(key)
    }
}
